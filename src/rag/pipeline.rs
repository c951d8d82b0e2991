//! RAG Pipeline Orchestrator
//!
//! Coordinates chunking, embedding, and indexing, then turns retrieved
//! fragments into an answer prompt. The embedding service and the answer
//! model are supplied by the caller through [`Embedder`] and
//! [`AnswerGenerator`].

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::chunker::Chunker;
use super::config::RagConfig;
use super::error::{RagError, RagResult};
use super::index::{Fragment, VectorIndex};
use crate::text::assemble_pages;

/// Turns text into an embedding vector (e.g. a remote embeddings endpoint)
pub trait Embedder {
    type Error: Display;

    fn embed(&self, text: &str) -> Result<Vec<f32>, Self::Error>;
}

/// Produces an answer from a fully built prompt (e.g. a chat model)
pub trait AnswerGenerator {
    type Error: Display;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}

/// Answer plus the fragments it was grounded on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    pub context: Vec<String>,
}

/// Build the answer prompt from retrieved fragment texts.
pub fn build_prompt<'a, I>(query: &str, context: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut context_block = String::new();
    for text in context {
        context_block.push_str(text);
        context_block.push('\n');
    }

    format!(
        "Use the context below to answer the question.\n\nContext:\n{}\n\nQuestion: {}",
        context_block, query
    )
}

/// RAG Pipeline - owns the index built from one corpus
///
/// # Example
/// ```ignore
/// let pipeline = RagPipeline::new(&corpus, RagConfig::default(), embedder)?;
/// let answer = pipeline.answer("What is the story about?", &generator)?;
/// ```
pub struct RagPipeline<E> {
    config: RagConfig,
    chunker: Chunker,
    embedder: E,
    index: VectorIndex,
}

impl<E: Embedder> RagPipeline<E> {
    /// Build a pipeline over an already-extracted corpus.
    pub fn new(corpus: &str, config: RagConfig, embedder: E) -> RagResult<Self> {
        let mut pipeline = Self {
            chunker: Chunker::new(config.chunk_size),
            config,
            embedder,
            index: VectorIndex::new(),
        };
        pipeline.index_text(corpus)?;
        Ok(pipeline)
    }

    /// Build a pipeline from per-page text runs.
    ///
    /// Runs are cleaned and, when `config.cipher_shift` is set, decoded
    /// before chunking.
    pub fn from_pages<P, R>(pages: P, config: RagConfig, embedder: E) -> RagResult<Self>
    where
        P: IntoIterator,
        P::Item: IntoIterator<Item = R>,
        R: AsRef<str>,
    {
        let corpus = assemble_pages(pages, config.cipher_shift);
        debug!(chars = corpus.len(), "assembled corpus from pages");
        Self::new(&corpus, config, embedder)
    }

    /// Chunk, embed and index `text`. Returns the number of fragments added.
    ///
    /// Stops at the first embedding failure; fragments embedded before it
    /// stay in the index.
    pub fn index_text(&mut self, text: &str) -> RagResult<usize> {
        let chunks = self.chunker.chunk(text);
        let total = chunks.len();
        info!(fragments = total, max_len = self.chunker.max_len(), "chunked corpus");

        for (i, chunk) in chunks.into_iter().enumerate() {
            debug!("embedding fragment {}/{}", i + 1, total);

            let embedding = self
                .embedder
                .embed(&chunk)
                .map_err(|e| RagError::Embedding {
                    index: i,
                    reason: e.to_string(),
                })?;
            if embedding.is_empty() {
                return Err(RagError::EmptyEmbedding { index: i });
            }

            self.index.add(Fragment::new(chunk, embedding));
        }

        Ok(total)
    }

    /// Embed `query` and return the `k` most similar fragments.
    pub fn retrieve(&self, query: &str, k: usize) -> RagResult<Vec<&Fragment>> {
        let query_vec = self
            .embedder
            .embed(query)
            .map_err(|e| RagError::QueryEmbedding {
                reason: e.to_string(),
            })?;

        let top = self.index.retrieve_top_k(&query_vec, k);
        debug!(requested = k, returned = top.len(), "retrieved fragments");
        Ok(top)
    }

    /// Retrieve `config.top_k` fragments and ask `generator` to answer.
    pub fn answer<G: AnswerGenerator>(&self, query: &str, generator: &G) -> RagResult<Answer> {
        let retrieved = self.retrieve(query, self.config.top_k)?;
        let prompt = build_prompt(query, retrieved.iter().map(|f| f.text.as_str()));

        let answer = generator
            .generate(&prompt)
            .map_err(|e| RagError::Generation {
                reason: e.to_string(),
            })?;
        info!(context = retrieved.len(), "generated answer");

        Ok(Answer {
            answer,
            context: retrieved.into_iter().map(|f| f.text.clone()).collect(),
        })
    }

    pub fn index(&self) -> &VectorIndex {
        &self.index
    }

    pub fn config(&self) -> &RagConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_layout() {
        let prompt = build_prompt("Who?", ["first", "second"]);
        assert_eq!(
            prompt,
            "Use the context below to answer the question.\n\nContext:\nfirst\nsecond\n\n\nQuestion: Who?"
        );
    }

    #[test]
    fn test_build_prompt_empty_context() {
        let prompt = build_prompt("Why?", std::iter::empty());
        assert!(prompt.contains("Context:\n\n\nQuestion: Why?"));
    }
}
