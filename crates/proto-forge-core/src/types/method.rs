use serde::{Deserialize, Serialize};

use super::streaming::Streaming;

/// An RPC method inside a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub input_type: String,
    pub output_type: String,
    #[serde(default, skip_serializing_if = "Streaming::is_empty")]
    pub streaming: Streaming,
}

impl Method {
    /// Creates a unary method.
    pub fn new(
        name: impl Into<String>,
        input_type: impl Into<String>,
        output_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            input_type: input_type.into(),
            output_type: output_type.into(),
            streaming: Streaming::UNARY,
        }
    }

    pub fn streaming(mut self, streaming: Streaming) -> Self {
        self.streaming = streaming;
        self
    }
}
