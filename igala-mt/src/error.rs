/// Error types for the translation engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Error reading a corpus file from disk
    CorpusIo(String),
    /// Error parsing corpus content
    CorpusParse(String),
    /// A structurally invalid argument supplied by the caller
    InvalidArgument(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::CorpusIo(msg) => write!(f, "Corpus I/O error: {}", msg),
            EngineError::CorpusParse(msg) => write!(f, "Corpus parse error: {}", msg),
            EngineError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
