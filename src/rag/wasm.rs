use wasm_bindgen::prelude::*;

use super::chunker::chunk_text;
use super::index::{Fragment, VectorIndex};
use crate::text::decode_caesar;

/// JS counts may be negative; anything below zero behaves like zero.
fn clamp_count(n: i32) -> usize {
    usize::try_from(n).unwrap_or(0)
}

/// WASM-exposed vector index
///
/// # Example (TypeScript)
/// ```typescript
/// const index = new RagIndex();
/// index.add("chunk text", new Float32Array(embedding));
/// const hits = index.retrieveTopK(queryEmbedding, 3); // [{ text, score }]
/// ```
#[wasm_bindgen]
pub struct RagIndex {
    inner: VectorIndex,
}

#[wasm_bindgen]
impl RagIndex {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        RagIndex {
            inner: VectorIndex::new(),
        }
    }

    #[wasm_bindgen]
    pub fn add(&mut self, text: String, embedding: Vec<f32>) {
        self.inner.add(Fragment::new(text, embedding));
    }

    /// Top-k fragments as `[{ text, score }]`, best first
    #[wasm_bindgen(js_name = retrieveTopK)]
    pub fn retrieve_top_k(&self, query: Vec<f32>, k: i32) -> Result<JsValue, JsValue> {
        let results = self.inner.search(&query, clamp_count(k));

        web_sys::console::debug_1(&format!(
            "[RagIndex] retrieved {}/{} fragments",
            results.len(),
            self.inner.len()
        ).into());

        serde_wasm_bindgen::to_value(&results)
            .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
    }

    #[wasm_bindgen]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl Default for RagIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Split text into word-boundary fragments (`maxLen <= 0`: one word each)
#[wasm_bindgen(js_name = chunkText)]
pub fn chunk_text_js(text: &str, max_len: i32) -> js_sys::Array {
    chunk_text(text, clamp_count(max_len))
        .into_iter()
        .map(JsValue::from)
        .collect()
}

#[wasm_bindgen(js_name = decodeCaesar)]
pub fn decode_caesar_js(text: &str, shift: u8) -> String {
    decode_caesar(text, shift)
}
