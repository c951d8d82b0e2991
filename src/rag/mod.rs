//! RAG Core - chunking and exact cosine retrieval
//!
//! # Architecture
//! ```text
//! Text → Chunker (word-boundary fragments) → Embedder → VectorIndex
//!                                                          ↓
//! Query → Embedder → cosine top-K scan → prompt → AnswerGenerator
//! ```

mod chunker;
mod config;
mod error;
mod index;
mod pipeline;
mod similarity;
pub mod wasm;

pub use chunker::{chunk_text, text_len, Chunker, DEFAULT_MAX_LEN};
pub use config::{RagConfig, DEFAULT_TOP_K};
pub use error::{RagError, RagResult};
pub use index::{Fragment, SearchResult, VectorIndex};
pub use pipeline::{build_prompt, AnswerGenerator, Answer, Embedder, RagPipeline};
pub use similarity::{compare_scores, cosine_similarity, dot_product, magnitude, ScoredItem};

#[cfg(test)]
mod tests;
