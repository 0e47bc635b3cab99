use thiserror::Error;

/// Engine-level error type.
///
/// Per-document failures in a batch are captured into that document's
/// `BatchEntry` and never abort sibling processing; only the vocabulary
/// loader and the analytics aggregator surface errors directly.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The document could not be opened or parsed. Fatal for the single
    /// item, non-fatal for a batch.
    #[error("failed to read document: {0}")]
    DocumentRead(String),

    /// The skill vocabulary resource could not be loaded.
    #[error("failed to load skill vocabulary: {0}")]
    Vocabulary(#[from] csv::Error),

    /// Analytics were requested over zero scores.
    #[error("analytics requested on an empty score batch")]
    EmptyAnalyticsInput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
