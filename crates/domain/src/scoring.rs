//! Fixed-weight linear scoring over the four detection signals.
//!
//! Each signal contributes an additive weight and a reason tag; the final
//! score is the clamped, 2-decimal-rounded sum. MX presence deliberately
//! carries zero weight: absence is penalized, presence is neutral but still
//! recorded as `mx_ok` so callers can see the signal was evaluated.

use crate::verdict::Classification;

pub const WEIGHT_BLOCKLIST: f64 = 0.9;
pub const WEIGHT_MX_MISSING: f64 = 0.6;
pub const WEIGHT_KEYWORD: f64 = 0.4;
pub const WEIGHT_HIGH_ENTROPY: f64 = 0.2;

pub const REASON_BLOCKLIST: &str = "domain_blocklist";
pub const REASON_MX_MISSING: &str = "mx_missing";
pub const REASON_MX_OK: &str = "mx_ok";
pub const REASON_KEYWORD: &str = "keyword_match";
pub const REASON_HIGH_ENTROPY: &str = "high_entropy";
pub const REASON_NONE: &str = "no_issue_detected";

/// Minimum local-part length before the entropy signal is considered.
pub const ENTROPY_MIN_LEN: usize = 10;
/// Shannon entropy threshold (bits) for the high-entropy signal.
pub const ENTROPY_THRESHOLD: f64 = 3.5;

/// Outcome of the four independent signal evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalSet {
    pub blocklisted: bool,
    pub has_mx: bool,
    pub keyword_match: bool,
    pub high_entropy: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredVerdict {
    pub classification: Classification,
    pub score: f64,
    pub reasons: Vec<String>,
}

/// Combine the signals into a score, classification and ordered reason list.
///
/// Reason order is fixed: blocklist, mx, keyword, entropy. Thresholds are
/// passed in from configuration so the function stays pure.
pub fn score_signals(
    signals: SignalSet,
    soft_threshold: f64,
    disposable_threshold: f64,
) -> ScoredVerdict {
    let mut score = 0.0;
    let mut reasons: Vec<String> = Vec::with_capacity(4);

    if signals.blocklisted {
        score += WEIGHT_BLOCKLIST;
        reasons.push(REASON_BLOCKLIST.to_string());
    }

    if signals.has_mx {
        reasons.push(REASON_MX_OK.to_string());
    } else {
        score += WEIGHT_MX_MISSING;
        reasons.push(REASON_MX_MISSING.to_string());
    }

    if signals.keyword_match {
        score += WEIGHT_KEYWORD;
        reasons.push(REASON_KEYWORD.to_string());
    }

    if signals.high_entropy {
        score += WEIGHT_HIGH_ENTROPY;
        reasons.push(REASON_HIGH_ENTROPY.to_string());
    }

    if reasons.is_empty() {
        reasons.push(REASON_NONE.to_string());
    }

    let score = round2(score.min(1.0));

    let classification = if score >= disposable_threshold {
        Classification::Disposable
    } else if score >= soft_threshold {
        Classification::Suspect
    } else {
        Classification::Ok
    };

    ScoredVerdict {
        classification,
        score,
        reasons,
    }
}

/// Whether a local part is long and random enough to look machine-generated.
pub fn is_high_entropy(local_part: &str) -> bool {
    if local_part.chars().count() < ENTROPY_MIN_LEN {
        return false;
    }
    shannon_entropy(local_part) >= ENTROPY_THRESHOLD
}

/// Base-2 Shannon entropy of the character distribution of `text`.
pub fn shannon_entropy(text: &str) -> f64 {
    let mut counts: std::collections::HashMap<char, usize> = std::collections::HashMap::new();
    let mut len = 0usize;
    for c in text.chars() {
        *counts.entry(c).or_insert(0) += 1;
        len += 1;
    }
    if len == 0 {
        return 0.0;
    }
    let n = len as f64;
    counts
        .values()
        .map(|&count| {
            let p = count as f64 / n;
            -p * p.log2()
        })
        .sum()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
