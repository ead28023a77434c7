//! Row-level records flowing through the pipeline

use super::verdict::Verdict;
use serde::{Deserialize, Serialize};

/// One line of the input file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputRow {
    pub business_name: String,
    /// Always starts with `http://` or `https://`
    pub url: String,
}

impl InputRow {
    pub fn new(business_name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            business_name: business_name.into(),
            url: url.into(),
        }
    }
}

/// Outcome of retrieving one URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievalResult {
    pub url: String,
    /// Present only when `working`
    pub content: Option<String>,
    pub working: bool,
    /// Failure reason, kept for logs only
    pub error: Option<String>,
}

impl RetrievalResult {
    pub fn success(url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content: Some(content.into()),
            working: true,
            error: None,
        }
    }

    pub fn failure(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content: None,
            working: false,
            error: Some(reason.into()),
        }
    }
}

/// Outcome of classifying one retrieved page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    pub url: String,
    pub verdict: Verdict,
}

/// One line of the output file.
///
/// `website_working == false` implies `result == None`: no classification is
/// attempted for a page that could not be retrieved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    pub business_name: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(default)]
    pub scraped_content: Option<String>,
    #[serde(with = "working_flag")]
    pub website_working: bool,
    #[serde(default)]
    pub result: Option<Verdict>,
}

impl ResultRow {
    /// Join an input row with its retrieval and (optional) classification.
    pub fn from_parts(
        input: &InputRow,
        retrieval: RetrievalResult,
        classification: Option<ClassificationResult>,
    ) -> Self {
        if !retrieval.working {
            return Self::not_working(input);
        }
        Self {
            business_name: input.business_name.clone(),
            url: input.url.clone(),
            scraped_content: retrieval.content,
            website_working: true,
            result: classification.map(|c| c.verdict),
        }
    }

    /// Row for a page that could not be retrieved
    pub fn not_working(input: &InputRow) -> Self {
        Self {
            business_name: input.business_name.clone(),
            url: input.url.clone(),
            scraped_content: None,
            website_working: false,
            result: None,
        }
    }

    /// Rows a user would re-run: unreachable pages and failed classifications
    pub fn needs_reprocessing(&self) -> bool {
        !self.website_working || !matches!(self.result, Some(Verdict::Valid | Verdict::Invalid))
    }

    pub fn input(&self) -> InputRow {
        InputRow::new(self.business_name.clone(), self.url.clone())
    }
}

/// `TRUE` / `FALSE` on the wire
mod working_flag {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "TRUE" } else { "FALSE" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.trim().to_ascii_uppercase().as_str() {
            "TRUE" | "1" | "YES" => Ok(true),
            "FALSE" | "0" | "NO" | "" => Ok(false),
            other => Err(D::Error::custom(format!(
                "website_working must be TRUE or FALSE, got '{}'",
                other
            ))),
        }
    }
}
