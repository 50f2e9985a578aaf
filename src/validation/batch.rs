//! Batch validation.
//!
//! Validates many questions at once. The validator is stateless, so requests
//! are spread over rayon's thread pool without any locking.

use crate::core::error::{BloomResult, ValidationResult};
use crate::validation::pipeline::{QuestionValidator, ValidationRequest};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Result for one request of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchItem {
    /// Position in the input.
    pub index: usize,
    /// The request that was validated.
    pub request: ValidationRequest,
    /// Its outcome.
    pub result: ValidationResult,
    /// User-facing message for rejections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Outcome of a batch, in input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// Per-request results.
    pub items: Vec<BatchItem>,
    /// Number of accepted questions.
    pub accepted: usize,
    /// Number of rejected questions.
    pub rejected: usize,
    /// Rejections grouped by kind.
    pub rejections_by_kind: BTreeMap<String, usize>,
    /// Time taken in milliseconds.
    pub duration_ms: u64,
}

impl BatchReport {
    /// Total number of requests.
    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// Whether every question was accepted.
    pub fn all_accepted(&self) -> bool {
        self.rejected == 0
    }

    /// Get a human-readable summary.
    pub fn summary(&self) -> String {
        if self.all_accepted() {
            format!("✓ All {} question(s) accepted", self.total())
        } else {
            format!(
                "✗ {} of {} question(s) rejected",
                self.rejected,
                self.total()
            )
        }
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Validate every request in parallel.
pub fn validate_batch(validator: &QuestionValidator, requests: &[ValidationRequest]) -> BatchReport {
    let start = Instant::now();

    let items: Vec<BatchItem> = requests
        .par_iter()
        .enumerate()
        .map(|(index, request)| {
            let result = validator.validate(request);
            let message = result.rejection().map(|r| r.to_string());
            BatchItem {
                index,
                request: request.clone(),
                result,
                message,
            }
        })
        .collect();

    let mut rejections_by_kind: BTreeMap<String, usize> = BTreeMap::new();
    for kind in items.iter().filter_map(|item| item.result.rejection_kind()) {
        *rejections_by_kind.entry(kind.to_string()).or_insert(0) += 1;
    }
    let rejected: usize = rejections_by_kind.values().sum();

    let report = BatchReport {
        accepted: items.len() - rejected,
        rejected,
        rejections_by_kind,
        items,
        duration_ms: start.elapsed().as_millis() as u64,
    };
    log::debug!("Batch validated: {}", report.summary());
    report
}

/// Read a JSON array of requests.
pub fn load_requests(path: impl AsRef<Path>) -> BloomResult<Vec<ValidationRequest>> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
