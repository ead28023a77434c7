//! Reduce a completion to a verdict

use super::error::OpenRouterError;
use super::models::ChatCompletionResponse;
use crate::core::types::Verdict;

/// Map free text to a verdict.
///
/// Looks for the exact words VALID / INVALID (case-insensitive, punctuation
/// stripped). VALID wins when both appear; no match counts as INVALID.
pub fn verdict_from_text(text: &str) -> Verdict {
    let upper = text.to_uppercase();
    let words: Vec<&str> = upper
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .collect();

    if words.contains(&"VALID") {
        Verdict::Valid
    } else {
        Verdict::Invalid
    }
}

/// Parse a chat completion into VALID or INVALID.
///
/// An empty `content` falls back to `reasoning`; a response without choices
/// is an error.
pub fn parse_verdict(response: &ChatCompletionResponse) -> Result<Verdict, OpenRouterError> {
    let choice = response
        .choices
        .first()
        .ok_or_else(|| OpenRouterError::EmptyResponse("No choices in response".to_string()))?;

    let content = choice.message.content.as_deref().unwrap_or("").trim();
    if !content.is_empty() {
        return Ok(verdict_from_text(content));
    }

    match choice.message.reasoning.as_deref().map(str::trim) {
        Some(reasoning) if !reasoning.is_empty() => Ok(verdict_from_text(reasoning)),
        _ => Ok(Verdict::Invalid),
    }
}
