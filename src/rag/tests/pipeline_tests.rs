use std::cell::{Cell, RefCell};

use crate::rag::{AnswerGenerator, Embedder, RagConfig, RagError, RagPipeline};

const STORY: &str = "You died on your way home. The universe is an egg. \
                     You are every human who ever lived. Each life lets you grow.";

/// Counts vocabulary hits; texts without any hit embed to a zero vector
struct KeywordEmbedder {
    vocab: Vec<&'static str>,
}

impl KeywordEmbedder {
    fn new() -> Self {
        Self {
            vocab: vec!["egg", "universe", "life", "home"],
        }
    }
}

impl Embedder for KeywordEmbedder {
    type Error = String;

    fn embed(&self, text: &str) -> Result<Vec<f32>, String> {
        let lower = text.to_lowercase();
        Ok(self.vocab.iter().map(|w| lower.matches(w).count() as f32).collect())
    }
}

/// Fails on the call with the given (zero-based) number
struct FlakyEmbedder {
    fail_on: usize,
    calls: Cell<usize>,
}

impl Embedder for FlakyEmbedder {
    type Error = &'static str;

    fn embed(&self, _text: &str) -> Result<Vec<f32>, &'static str> {
        let call = self.calls.get();
        self.calls.set(call + 1);
        if call == self.fail_on {
            Err("service unavailable")
        } else {
            Ok(vec![1.0, 0.0])
        }
    }
}

struct EmptyEmbedder;

impl Embedder for EmptyEmbedder {
    type Error = String;

    fn embed(&self, _text: &str) -> Result<Vec<f32>, String> {
        Ok(Vec::new())
    }
}

#[derive(Default)]
struct RecordingGenerator {
    prompts: RefCell<Vec<String>>,
}

impl AnswerGenerator for RecordingGenerator {
    type Error = String;

    fn generate(&self, prompt: &str) -> Result<String, String> {
        self.prompts.borrow_mut().push(prompt.to_string());
        Ok("It is about you.".to_string())
    }
}

struct FailingGenerator;

impl AnswerGenerator for FailingGenerator {
    type Error = String;

    fn generate(&self, _prompt: &str) -> Result<String, String> {
        Err("rate limited".to_string())
    }
}

fn story_pipeline(config: RagConfig) -> RagPipeline<KeywordEmbedder> {
    RagPipeline::new(STORY, config, KeywordEmbedder::new()).unwrap()
}

// ============================================================================
// Indexing
// ============================================================================

#[test]
fn test_corpus_is_chunked_and_indexed() {
    let pipeline = story_pipeline(RagConfig::default().with_chunk_size(40));

    let stored: Vec<&str> = pipeline.index().iter().map(|f| f.text.as_str()).collect();
    assert_eq!(
        stored,
        vec![
            "You died on your way home. The universe",
            "is an egg. You are every human who ever",
            "lived. Each life lets you grow.",
        ]
    );
    assert!(pipeline.index().iter().all(|f| f.embedding.len() == 4));
}

#[test]
fn test_empty_corpus_builds_empty_index() {
    let pipeline = RagPipeline::new("  \n ", RagConfig::default(), KeywordEmbedder::new()).unwrap();
    assert!(pipeline.index().is_empty());
    assert!(pipeline.retrieve("egg", 3).unwrap().is_empty());
}

#[test]
fn test_index_text_appends() {
    let mut pipeline = story_pipeline(RagConfig::default());
    let before = pipeline.index().len();

    let added = pipeline.index_text("An egg is a home.").unwrap();
    assert_eq!(added, 1);
    assert_eq!(pipeline.index().len(), before + 1);
}

#[test]
fn test_from_pages_decodes_cipher() {
    let pages = vec![vec!["Wkh hjj\0", "lv wkh xqlyhuvh"]];
    let config = RagConfig::default().with_cipher_shift(3);

    let pipeline = RagPipeline::from_pages(pages, config, KeywordEmbedder::new()).unwrap();

    let stored: Vec<&str> = pipeline.index().iter().map(|f| f.text.as_str()).collect();
    assert_eq!(stored, vec!["The egg is the universe"]);
}

#[test]
fn test_embedding_failure_reports_fragment() {
    let embedder = FlakyEmbedder {
        fail_on: 1,
        calls: Cell::new(0),
    };
    let result = RagPipeline::new(STORY, RagConfig::default().with_chunk_size(40), embedder);

    match result {
        Err(RagError::Embedding { index, reason }) => {
            assert_eq!(index, 1);
            assert_eq!(reason, "service unavailable");
        }
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("expected embedding failure"),
    }
}

#[test]
fn test_empty_embedding_rejected() {
    let result = RagPipeline::new(STORY, RagConfig::default(), EmptyEmbedder);
    assert!(matches!(result, Err(RagError::EmptyEmbedding { index: 0 })));
}

// ============================================================================
// Retrieval
// ============================================================================

#[test]
fn test_retrieve_best_fragment() {
    let pipeline = story_pipeline(RagConfig::default().with_chunk_size(40));

    let top = pipeline.retrieve("What is the egg?", 1).unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].text, "is an egg. You are every human who ever");

    let top = pipeline.retrieve("a life", 1).unwrap();
    assert_eq!(top[0].text, "lived. Each life lets you grow.");
}

#[test]
fn test_retrieve_zero_k() {
    let pipeline = story_pipeline(RagConfig::default().with_chunk_size(40));
    assert!(pipeline.retrieve("egg", 0).unwrap().is_empty());
}

#[test]
fn test_query_embedding_failure() {
    let embedder = FlakyEmbedder {
        fail_on: 1,
        calls: Cell::new(0),
    };
    // One fragment at the default size, so call 1 is the query
    let pipeline = RagPipeline::new("short corpus", RagConfig::default(), embedder).unwrap();

    let result = pipeline.retrieve("anything", 1);
    assert!(matches!(result, Err(RagError::QueryEmbedding { .. })));
}

// ============================================================================
// Answering
// ============================================================================

#[test]
fn test_answer_uses_top_k_context() {
    let config = RagConfig::default().with_chunk_size(40).with_top_k(2);
    let pipeline = story_pipeline(config);
    let generator = RecordingGenerator::default();

    let answer = pipeline.answer("the egg and the universe", &generator).unwrap();

    assert_eq!(answer.answer, "It is about you.");
    assert_eq!(
        answer.context,
        vec![
            "is an egg. You are every human who ever",
            "You died on your way home. The universe",
        ]
    );

    let prompts = generator.prompts.borrow();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].starts_with("Use the context below to answer the question."));
    assert!(prompts[0].contains("is an egg. You are every human who ever\n"));
    assert!(prompts[0].ends_with("Question: the egg and the universe"));
}

#[test]
fn test_answer_generation_failure() {
    let pipeline = story_pipeline(RagConfig::default());
    let result = pipeline.answer("egg", &FailingGenerator);

    match result {
        Err(err @ RagError::Generation { .. }) => {
            assert_eq!(err.to_string(), "answer generation failed: rate limited");
        }
        _ => panic!("expected generation failure"),
    }
}
