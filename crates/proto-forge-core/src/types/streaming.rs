use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Which sides of an RPC are streamed. The two bits are independent.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Streaming: u8 {
        /// The client sends a stream of requests.
        const INPUT = 1;
        /// The server sends a stream of responses.
        const OUTPUT = 1 << 1;
    }
}

impl Streaming {
    pub const UNARY: Self = Self::empty();
    pub const BIDIRECTIONAL: Self = Self::INPUT.union(Self::OUTPUT);

    pub fn streams_input(self) -> bool {
        self.contains(Self::INPUT)
    }

    pub fn streams_output(self) -> bool {
        self.contains(Self::OUTPUT)
    }
}

impl Default for Streaming {
    fn default() -> Self {
        Self::UNARY
    }
}
