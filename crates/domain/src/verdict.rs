use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Risk classification for a single email address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Ok,
    Suspect,
    Disposable,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Ok => "ok",
            Classification::Suspect => "suspect",
            Classification::Disposable => "disposable",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one email address.
///
/// Built fresh per call and never mutated or persisted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub email: String,
    pub domain: String,
    pub classification: Classification,
    pub score: f64,
    pub reasons: Vec<String>,
    pub ttl_seconds: u64,
    pub checked_at: DateTime<Utc>,
    pub version: String,
}

/// Per-classification counts over a bulk request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchMetrics {
    pub total: usize,
    pub ok: usize,
    pub suspect: usize,
    pub disposable: usize,
}

impl BatchMetrics {
    pub fn record(&mut self, classification: Classification) {
        self.total += 1;
        match classification {
            Classification::Ok => self.ok += 1,
            Classification::Suspect => self.suspect += 1,
            Classification::Disposable => self.disposable += 1,
        }
    }
}
