//! Classification prompt

use std::borrow::Cow;

/// Appended to content that was cut short
pub const TRUNCATION_MARKER: &str = "... [truncated]";

/// Prompt used by the connection check
pub const CONNECTION_CHECK_PROMPT: &str = "Respond with 'OK' if you can see this message.";

/// Cut `content` to at most `max_chars` characters (not bytes).
pub fn truncate_content(content: &str, max_chars: usize) -> Cow<'_, str> {
    match content.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}{}", &content[..cut], TRUNCATION_MARKER)),
        None => Cow::Borrowed(content),
    }
}

/// Build the fixed instruction prompt for one business/content pair
pub fn build_classification_prompt(business_name: &str, content: &str, max_chars: usize) -> String {
    let content = truncate_content(content, max_chars);

    format!(
        "You are a business classification expert. Your task is to determine if the scraped content from a website is associated with the given business name.

Example A
Business Name: \"Acme Widgets, Inc.\"
Scraped Content: \"Acme Widgets has been crafting innovative widgets since 1920...\"
→ VALID

Example B
Business Name: \"Acme Widgets, Inc.\"
Scraped Content: \"Learn how to repair your car's alternator, no mention of widgets or Acme.\"
→ INVALID

Consider:
- Does the content mention the business name or variations of it?
- Is this the business's official website or a legitimate page about them?
- Are there clear indicators this is the correct business?

Respond with ONLY one word: VALID or INVALID.

VALID = You are at least 50% certain that the content is associated with the business
INVALID = You are less than 50% certain that the content is associated with the business

Your Task:
Business Name: {business_name}
Scraped Content: {content}

Response:"
    )
}
