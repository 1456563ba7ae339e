use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use gemini_pdf_qa::answer::ask_gemini;
use gemini_pdf_qa::document::extract_pdf_text;
use gemini_pdf_qa::gemini::DEFAULT_MODEL;

/// Read a PDF and answer a question about it using Google Gemini
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the PDF file
    #[arg(long)]
    pdf: PathBuf,

    /// Question to answer from the PDF
    #[arg(long)]
    question: String,

    /// Gemini model name
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Optional path to save the answer as a text file
    #[arg(long)]
    save_answer: Option<PathBuf>,

    /// Optional .env file path
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,
}

/// Load variables from an env file if it exists; returns whether anything was loaded
fn load_env_file(path: &Path) -> bool {
    dotenv::from_path(path).is_ok()
}

async fn run(args: &Args) -> Result<()> {
    let pdf_text = extract_pdf_text(&args.pdf)?;
    let answer = ask_gemini(&pdf_text, &args.question, &args.model).await?;

    println!("\n=== Question ===");
    println!("{}", args.question);
    println!("\n=== Answer ===");
    println!("{}", answer);

    if let Some(out) = &args.save_answer {
        fs::write(out, format!("{}\n", answer))
            .with_context(|| format!("Failed to save answer to {}", out.display()))?;
        println!("\nSaved answer to: {}", out.display());
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Load the env file first so it can set RUST_LOG too
    let env_loaded = load_env_file(&args.env_file);
    env_logger::init();

    if env_loaded {
        debug!("Loaded environment from {}", args.env_file.display());
    } else {
        debug!("No environment file loaded from {}", args.env_file.display());
    }
    info!("Answering with model {}", args.model);

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["gemini-pdf-qa", "--pdf", "doc.pdf", "--question", "Why?"])
            .unwrap();
        assert_eq!(args.pdf, PathBuf::from("doc.pdf"));
        assert_eq!(args.question, "Why?");
        assert_eq!(args.model, "gemini-1.5-flash");
        assert_eq!(args.save_answer, None);
        assert_eq!(args.env_file, PathBuf::from(".env"));
    }

    #[test]
    fn test_args_all_flags() {
        let args = Args::try_parse_from([
            "gemini-pdf-qa",
            "--pdf",
            "doc.pdf",
            "--question",
            "Why?",
            "--model",
            "gemini-1.5-pro",
            "--save-answer",
            "out.txt",
            "--env-file",
            "conf/.env",
        ])
        .unwrap();
        assert_eq!(args.model, "gemini-1.5-pro");
        assert_eq!(args.save_answer, Some(PathBuf::from("out.txt")));
        assert_eq!(args.env_file, PathBuf::from("conf/.env"));
    }

    #[test]
    fn test_pdf_and_question_are_required() {
        assert!(Args::try_parse_from(["gemini-pdf-qa", "--pdf", "doc.pdf"]).is_err());
        assert!(Args::try_parse_from(["gemini-pdf-qa", "--question", "Why?"]).is_err());
    }

    #[test]
    fn test_missing_env_file_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(!load_env_file(&dir.path().join("absent.env")));
    }

    #[test]
    fn test_env_file_is_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.env");
        fs::write(&path, "PDF_QA_TEST_ENV_FILE_VAR=loaded\n").unwrap();

        assert!(load_env_file(&path));
        assert_eq!(
            std::env::var("PDF_QA_TEST_ENV_FILE_VAR").as_deref(),
            Ok("loaded")
        );
    }

    #[tokio::test]
    async fn test_run_fails_on_missing_pdf() {
        let dir = TempDir::new().unwrap();
        let args = Args::try_parse_from([
            "gemini-pdf-qa",
            "--pdf",
            dir.path().join("nope.pdf").to_str().unwrap(),
            "--question",
            "Why?",
        ])
        .unwrap();

        let err = run(&args).await.unwrap_err();
        assert!(format!("{:#}", err).starts_with("PDF file not found"));
    }
}
