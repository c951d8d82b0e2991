//! Text preparation
//!
//! Cleanup applied to extracted page text before it reaches the chunker:
//! - `clean.rs` - run cleaning, line-ending normalisation, page assembly
//! - `cipher.rs` - Caesar-shift decoding of obfuscated source text

mod cipher;
mod clean;

pub use cipher::decode_caesar;
pub use clean::{assemble_pages, clean_run, normalize_line_endings};
