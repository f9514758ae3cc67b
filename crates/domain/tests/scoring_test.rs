use mailguard_domain::scoring::{
    is_high_entropy, score_signals, shannon_entropy, SignalSet, REASON_BLOCKLIST,
    REASON_HIGH_ENTROPY, REASON_KEYWORD, REASON_MX_MISSING, REASON_MX_OK,
};
use mailguard_domain::Classification;

const SOFT: f64 = 0.4;
const DISPOSABLE: f64 = 0.8;

fn signals(blocklisted: bool, has_mx: bool, keyword_match: bool, high_entropy: bool) -> SignalSet {
    SignalSet {
        blocklisted,
        has_mx,
        keyword_match,
        high_entropy,
    }
}

#[test]
fn test_clean_address_scores_zero() {
    let verdict = score_signals(signals(false, true, false, false), SOFT, DISPOSABLE);

    assert_eq!(verdict.score, 0.0);
    assert_eq!(verdict.classification, Classification::Ok);
    assert_eq!(verdict.reasons, vec![REASON_MX_OK]);
}

#[test]
fn test_blocklisted_with_missing_mx_clamps_to_one() {
    let verdict = score_signals(signals(true, false, false, false), SOFT, DISPOSABLE);

    // 0.9 + 0.6 clamped to 1.0
    assert_eq!(verdict.score, 1.0);
    assert_eq!(verdict.classification, Classification::Disposable);
    assert_eq!(verdict.reasons, vec![REASON_BLOCKLIST, REASON_MX_MISSING]);
}

#[test]
fn test_mx_missing_alone_is_suspect() {
    let verdict = score_signals(signals(false, false, false, false), SOFT, DISPOSABLE);

    assert_eq!(verdict.score, 0.6);
    assert_eq!(verdict.classification, Classification::Suspect);
    assert_eq!(verdict.reasons, vec![REASON_MX_MISSING]);
}

#[test]
fn test_keyword_with_mx_present_is_suspect() {
    let verdict = score_signals(signals(false, true, true, false), SOFT, DISPOSABLE);

    assert_eq!(verdict.score, 0.4);
    assert_eq!(verdict.classification, Classification::Suspect);
    assert_eq!(verdict.reasons, vec![REASON_MX_OK, REASON_KEYWORD]);
}

#[test]
fn test_entropy_alone_stays_ok() {
    let verdict = score_signals(signals(false, true, false, true), SOFT, DISPOSABLE);

    assert_eq!(verdict.score, 0.2);
    assert_eq!(verdict.classification, Classification::Ok);
    assert_eq!(verdict.reasons, vec![REASON_MX_OK, REASON_HIGH_ENTROPY]);
}

#[test]
fn test_reason_order_is_blocklist_mx_keyword_entropy() {
    let verdict = score_signals(signals(true, false, true, true), SOFT, DISPOSABLE);

    assert_eq!(
        verdict.reasons,
        vec![
            REASON_BLOCKLIST,
            REASON_MX_MISSING,
            REASON_KEYWORD,
            REASON_HIGH_ENTROPY
        ]
    );
    assert_eq!(verdict.score, 1.0);
}

#[test]
fn test_score_always_within_unit_interval_and_two_decimals() {
    for blocklisted in [false, true] {
        for has_mx in [false, true] {
            for keyword in [false, true] {
                for entropy in [false, true] {
                    let verdict = score_signals(
                        signals(blocklisted, has_mx, keyword, entropy),
                        SOFT,
                        DISPOSABLE,
                    );
                    assert!(
                        (0.0..=1.0).contains(&verdict.score),
                        "score out of range: {}",
                        verdict.score
                    );
                    let scaled = verdict.score * 100.0;
                    assert!(
                        (scaled - scaled.round()).abs() < 1e-9,
                        "score not rounded to 2 decimals: {}",
                        verdict.score
                    );
                    assert!(!verdict.reasons.is_empty());
                }
            }
        }
    }
}

#[test]
fn test_scoring_is_deterministic() {
    let a = score_signals(signals(false, false, true, false), SOFT, DISPOSABLE);
    let b = score_signals(signals(false, false, true, false), SOFT, DISPOSABLE);

    assert_eq!(a.classification, b.classification);
    assert_eq!(a.score, b.score);
    assert_eq!(a.reasons, b.reasons);
}

#[test]
fn test_entropy_of_uniform_string_is_zero() {
    assert_eq!(shannon_entropy("aaaaaaaaaa"), 0.0);
}

#[test]
fn test_entropy_of_two_symbol_string() {
    // Equal halves of two symbols carry exactly one bit per character.
    let entropy = shannon_entropy("ababababab");
    assert!((entropy - 1.0).abs() < 1e-9);
}

#[test]
fn test_short_local_part_never_triggers_entropy() {
    // Nine distinct characters is maximally random for its length but
    // still below the length gate.
    assert!(!is_high_entropy("a1b2c3d4e"));
    assert!(!is_high_entropy(""));
}

#[test]
fn test_long_random_local_part_triggers_entropy() {
    assert!(is_high_entropy("x7k9q2mz4p8w"));
}

#[test]
fn test_long_repetitive_local_part_does_not_trigger() {
    assert!(!is_high_entropy("aaaaaaaaaaaaaaa"));
}
