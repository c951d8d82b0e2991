/// Errors raised at the pipeline edges (embedding, generation, config).
///
/// Chunking and index retrieval are infallible and never produce these.
#[derive(Debug, thiserror::Error)]
pub enum RagError {
    #[error("embedding failed for fragment {index}: {reason}")]
    Embedding { index: usize, reason: String },

    #[error("embedder returned an empty vector for fragment {index}")]
    EmptyEmbedding { index: usize },

    #[error("query embedding failed: {reason}")]
    QueryEmbedding { reason: String },

    #[error("answer generation failed: {reason}")]
    Generation { reason: String },

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type RagResult<T> = Result<T, RagError>;
