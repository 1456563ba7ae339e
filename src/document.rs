use crate::error::{QaError, Result};
use log::{debug, info, warn};
use lopdf::Document;
use mime_guess::from_path;
use std::path::Path;

/// Extract the text of every non-blank page of a PDF file
///
/// Each kept page is prefixed with a `--- Page N ---` marker and pages are
/// separated by a blank line.
pub fn extract_pdf_text<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let path = file_path.as_ref();

    if !path.is_file() {
        return Err(QaError::NotFound(path.to_path_buf()));
    }

    let mime = from_path(path).first_or_octet_stream();
    if mime.essence_str() != "application/pdf" {
        warn!(
            "{} does not look like a PDF (detected {}), trying anyway",
            path.display(),
            mime
        );
    }

    info!("Processing PDF document: {}", path.display());
    let doc = load_document(path)?;

    let pages = doc.get_pages();
    debug!("Loaded PDF with {} pages", pages.len());

    // get_pages is keyed by page number, so this walks pages in order
    let page_texts = pages.keys().map(|&page_number| {
        let text = doc.extract_text(&[page_number]).unwrap_or_else(|e| {
            warn!("Could not extract text from page {}: {}", page_number, e);
            String::new()
        });
        (page_number, text)
    });

    let combined = join_pages(page_texts).ok_or_else(|| {
        warn!("Extracted PDF content is empty or contains only whitespace");
        QaError::EmptyContent(path.to_path_buf())
    })?;

    info!(
        "Extracted {} characters from {}",
        combined.chars().count(),
        path.display()
    );
    Ok(combined)
}

/// Join per-page texts, skipping pages that are blank after trimming
///
/// Returns `None` when no page has any text.
pub fn join_pages<I, S>(pages: I) -> Option<String>
where
    I: IntoIterator<Item = (u32, S)>,
    S: AsRef<str>,
{
    let sections: Vec<String> = pages
        .into_iter()
        .filter_map(|(page_number, text)| {
            let text = text.as_ref().trim();
            if text.is_empty() {
                debug!("Skipping blank page {}", page_number);
                None
            } else {
                Some(format!("--- Page {} ---\n{}", page_number, text))
            }
        })
        .collect();

    if sections.is_empty() {
        None
    } else {
        Some(sections.join("\n\n"))
    }
}

fn load_document(path: &Path) -> Result<Document> {
    let pdf_error = |message: String| QaError::Pdf {
        path: path.to_path_buf(),
        message,
    };

    let mut doc = Document::load(path).map_err(|e| pdf_error(e.to_string()))?;

    // Documents protected only by an owner password open with an empty user password
    if doc.is_encrypted() {
        doc.decrypt("")
            .map_err(|e| pdf_error(format!("encrypted and could not be decrypted: {}", e)))?;
        debug!("Decrypted PDF with empty password");
    }

    Ok(doc)
}
