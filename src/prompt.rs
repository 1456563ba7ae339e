/// Phrase the model is told to use when the context has no answer
pub const NOT_FOUND_PHRASE: &str = "I could not find that in the PDF.";

/// Build the question-answering prompt for one chunk of the document
pub fn build_prompt(context: &str, question: &str) -> String {
    format!(
        "You are a careful assistant. Use ONLY the provided PDF context to answer. \
         If the answer is not present, explicitly say: '{}'\n\n\
         PDF CONTEXT:\n{}\n\n\
         QUESTION: {}\n\
         ANSWER:",
        NOT_FOUND_PHRASE, context, question
    )
}

/// Build the prompt that asks the model to merge answers from several chunks
pub fn build_merge_prompt<S: AsRef<str>>(partials: &[S]) -> String {
    let numbered = partials
        .iter()
        .enumerate()
        .map(|(i, partial)| format!("Partial answer {}:\n{}", i + 1, partial.as_ref()))
        .collect::<Vec<String>>()
        .join("\n\n");

    format!(
        "You are given multiple partial answers extracted from different PDF chunks. \
         Merge them into one concise final answer. If conflicting, prefer overlap across chunks.\n\n{}",
        numbered
    )
}
