use std::path::PathBuf;

/// Exit codes for the CLI process.
///
/// - 0: success
/// - 1: general error (I/O, stale output, cancelled)
/// - 2: invalid arguments / configuration
/// - 3: a tree document could not be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidArguments = 2,
    DecodeError = 3,
}

/// Errors returned by CLI command handlers.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A tree document is not valid JSON or does not match the tree model.
    #[error("failed to decode {file}: {error}")]
    Decode {
        file: PathBuf,
        source_text: String,
        #[source]
        error: serde_json::Error,
    },

    /// IO errors (file not found, permission denied).
    #[error("IO error for {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// User declined an overwrite prompt.
    #[error("operation cancelled")]
    Cancelled,

    /// No tree documents under the given path.
    #[error("no tree files found in {path}")]
    NoTreeFiles { path: PathBuf },

    /// Overwriting requires --force when stdin is not a terminal.
    #[error("'{path}' already exists with different content (use --force to overwrite)")]
    RequiresForce { path: PathBuf },

    /// `emit --check` found generated files that are missing or out of date.
    #[error("{count} generated file(s) are out of date")]
    Stale { count: usize },

    /// Two inputs would be written to the same output file.
    #[error("'{first}' and '{second}' would both be written to '{output}'")]
    OutputCollision {
        output: PathBuf,
        first: PathBuf,
        second: PathBuf,
    },

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl CliError {
    /// Maps this error to the appropriate exit code.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Decode { .. } => ExitCode::DecodeError,
            Self::Config { .. } | Self::NoTreeFiles { .. } | Self::OutputCollision { .. } => {
                ExitCode::InvalidArguments
            }
            Self::Io { .. }
            | Self::Cancelled
            | Self::RequiresForce { .. }
            | Self::Stale { .. }
            | Self::Other(_) => ExitCode::GeneralError,
        }
    }

    /// Serializes this error as a JSON value for `--format json` output.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Decode { file, error, .. } => serde_json::json!({
                "error": "decode_error",
                "file": file.display().to_string(),
                "line": error.line(),
                "column": error.column(),
                "message": error.to_string(),
            }),
            Self::Io { path, source } => serde_json::json!({
                "error": "io_error",
                "path": path.display().to_string(),
                "message": source.to_string(),
            }),
            Self::Config { message } => serde_json::json!({
                "error": "config_error",
                "message": message,
            }),
            Self::OutputCollision {
                output,
                first,
                second,
            } => serde_json::json!({
                "error": "output_collision",
                "output": output.display().to_string(),
                "inputs": [first.display().to_string(), second.display().to_string()],
            }),
            Self::Stale { count } => serde_json::json!({
                "error": "stale_output",
                "count": count,
            }),
            other => serde_json::json!({
                "error": "error",
                "message": other.to_string(),
            }),
        }
    }
}
