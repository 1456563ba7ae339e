pub mod answer;
pub mod chunking;
pub mod document;
pub mod error;
pub mod gemini;
pub mod prompt;
