// ragcore/src/rag/config.rs
//
// Configuration for the retrieval pipeline

use serde::{Deserialize, Serialize};

use super::chunker::DEFAULT_MAX_LEN;
use super::error::RagResult;

/// Default number of fragments fed to the answer prompt
pub const DEFAULT_TOP_K: usize = 3;

/// Retrieval pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RagConfig {
    /// Maximum fragment length in characters (0 = one word per fragment)
    pub chunk_size: usize,

    /// Fragments retrieved per question
    pub top_k: usize,

    /// Caesar shift undone on each extracted text run (None = plain text)
    pub cipher_shift: Option<u8>,
}

impl Default for RagConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_MAX_LEN,
            top_k: DEFAULT_TOP_K,
            cipher_shift: None,
        }
    }
}

impl RagConfig {
    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> RagResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builder: set chunk size
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Builder: set top-k
    pub fn with_top_k(mut self, k: usize) -> Self {
        self.top_k = k;
        self
    }

    /// Builder: set cipher shift
    pub fn with_cipher_shift(mut self, shift: u8) -> Self {
        self.cipher_shift = Some(shift);
        self
    }
}
