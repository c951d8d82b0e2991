//! RagCore: Word-boundary Chunker + Cosine Vector Index
//!
//! A Rust/WASM implementation of the retrieval half of a small RAG pipeline.
//!
//! # Architecture
//!
//! ## Retrieval Components (`rag`)
//! - `chunker.rs` - Chunker: greedy word-boundary fragments of bounded length
//! - `index.rs` - VectorIndex: exact top-K cosine retrieval over fragments
//! - `similarity.rs` - Cosine scoring and ranking order
//! - `pipeline.rs` - RagPipeline: corpus → fragments → embeddings → answer prompt
//! - `config.rs` - RagConfig
//! - `wasm.rs` - JS bindings
//!
//! ## Text Preparation (`text`)
//! - `clean.rs` - Extraction-noise cleanup and page assembly
//! - `cipher.rs` - Caesar-shift decoding
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { RagIndex, chunkText } from 'ragcore';
//!
//! await init();
//!
//! const fragments = chunkText(documentText, 300);
//! const index = new RagIndex();
//! for (const text of fragments) {
//!   index.add(text, await embed(text));
//! }
//!
//! const hits = index.retrieveTopK(await embed("What is the story about?"), 3);
//! console.log(hits.map(h => h.text));
//! ```

pub mod rag;
pub mod text;

pub use rag::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("ragcore v{}", env!("CARGO_PKG_VERSION"))
}
