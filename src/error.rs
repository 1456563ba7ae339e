use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while extracting a document or asking the model about it
#[derive(Error, Debug)]
pub enum QaError {
    /// The document path is missing or is not a regular file
    #[error("PDF file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The document could not be parsed or decrypted
    #[error("Failed to read PDF {}: {message}", path.display())]
    Pdf { path: PathBuf, message: String },

    /// Every page of the document was blank
    #[error("Could not extract any text from the PDF: {}", .0.display())]
    EmptyContent(PathBuf),

    /// The API key variable is unset or empty
    #[error("{0} is not set. Configure it in env or .env.")]
    MissingCredential(&'static str),

    /// No chunk produced a usable answer
    #[error("Gemini returned an empty response.")]
    EmptyResponse,

    #[error("Gemini API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Gemini API request failed: {status} {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, QaError>;
