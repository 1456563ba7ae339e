use crate::chunking::{chunk_text, MAX_CONTEXT_CHARS};
use crate::error::{QaError, Result};
use crate::gemini::{GeminiClient, GeminiConfig, TextGenerator};
use crate::prompt::{build_merge_prompt, build_prompt};
use log::{debug, info, warn};

/// Answers questions about a document by asking a model about each chunk
pub struct Answerer<G> {
    generator: G,
    model: String,
    max_chunk_chars: usize,
}

impl<G: TextGenerator> Answerer<G> {
    /// Create an answerer using the default chunk size
    pub fn new(generator: G, model: impl Into<String>) -> Self {
        Answerer {
            generator,
            model: model.into(),
            max_chunk_chars: MAX_CONTEXT_CHARS,
        }
    }

    /// Override the number of characters sent per chunk
    pub fn with_max_chunk_chars(mut self, max_chunk_chars: usize) -> Self {
        self.max_chunk_chars = max_chunk_chars;
        self
    }

    /// Ask `question` against every chunk of `text` and combine the answers
    ///
    /// Chunks are asked one at a time, in order. Blank responses are dropped.
    /// When more than one chunk answered, the model is asked once more to
    /// merge the partial answers; if that comes back blank the partial
    /// answers are joined with blank lines instead. Any request failure
    /// aborts the whole call.
    pub async fn answer(&self, text: &str, question: &str) -> Result<String> {
        let mut partials = Vec::new();

        for (index, chunk) in chunk_text(text, self.max_chunk_chars).enumerate() {
            debug!(
                "Asking {} about chunk {} ({} characters)",
                self.model,
                index + 1,
                chunk.chars().count()
            );
            let prompt = build_prompt(chunk, question);
            let response = self.generator.generate(&self.model, &prompt).await?;

            let response = response.trim();
            if response.is_empty() {
                debug!("Chunk {} produced an empty answer", index + 1);
            } else {
                partials.push(response.to_string());
            }
        }

        info!("Collected {} partial answers", partials.len());

        match partials.len() {
            0 => Err(QaError::EmptyResponse),
            1 => Ok(partials.remove(0)),
            _ => self.merge(partials).await,
        }
    }

    async fn merge(&self, partials: Vec<String>) -> Result<String> {
        info!("Merging {} partial answers", partials.len());
        let prompt = build_merge_prompt(&partials);
        let merged = self.generator.generate(&self.model, &prompt).await?;

        let merged = merged.trim();
        if merged.is_empty() {
            warn!("Merge returned nothing, concatenating partial answers");
            Ok(partials.join("\n\n"))
        } else {
            Ok(merged.to_string())
        }
    }
}

/// Answer `question` about `text` with Gemini, configured from the environment
///
/// Fails with [`QaError::MissingCredential`] before any request is made if
/// the API key is not set.
pub async fn ask_gemini(text: &str, question: &str, model: &str) -> Result<String> {
    let config = GeminiConfig::from_env()?;
    let answerer = Answerer::new(GeminiClient::new(config), model);
    answerer.answer(text, question).await
}
