//! Deterministic stand-ins for the external services

use async_trait::async_trait;
use link_checker::core::traits::{Classifier, ContentRetriever};
use link_checker::core::types::Verdict;
use link_checker::utils::error::{LinkCheckError, Result};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns `content for <url>` except for URLs marked as failing
#[derive(Debug, Default)]
pub struct StubRetriever {
    failing: HashSet<String>,
    pages: HashMap<String, String>,
    calls: AtomicUsize,
    seen: Mutex<Vec<String>>,
}

impl StubRetriever {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }

    pub fn page(mut self, url: &str, content: &str) -> Self {
        self.pages.insert(url.to_string(), content.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().expect("seen lock").clone()
    }
}

#[async_trait]
impl ContentRetriever for StubRetriever {
    async fn retrieve(&self, url: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().expect("seen lock").push(url.to_string());

        if self.failing.contains(url) {
            return Err(LinkCheckError::Network(format!("{} unreachable", url)));
        }
        Ok(self
            .pages
            .get(url)
            .cloned()
            .unwrap_or_else(|| format!("content for {}", url)))
    }
}

/// VALID when the content mentions the business name, INVALID otherwise
#[derive(Debug, Default)]
pub struct StubClassifier {
    failing: HashSet<String>,
    calls: AtomicUsize,
    seen: Mutex<Vec<String>>,
}

impl StubClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classification of `business_name` fails
    pub fn failing(mut self, business_name: &str) -> Self {
        self.failing.insert(business_name.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().expect("seen lock").clone()
    }
}

#[async_trait]
impl Classifier for StubClassifier {
    async fn classify(&self, business_name: &str, content: &str) -> Result<Verdict> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().expect("seen lock").push(business_name.to_string());

        if self.failing.contains(business_name) {
            return Err(LinkCheckError::Parsing("malformed completion".to_string()));
        }
        let first_word = business_name.split_whitespace().next().unwrap_or(business_name);
        if content.to_lowercase().contains(&first_word.to_lowercase()) {
            Ok(Verdict::Valid)
        } else {
            Ok(Verdict::Invalid)
        }
    }
}
