use super::*;
use pretty_assertions::assert_eq;

fn key(a: &str, b: &str) -> (CompatibilityLabel, u8) {
    let result = key_compatibility(a, b);
    (result.label, result.score)
}

fn tempo(a: &str, b: &str) -> Compatibility {
    tempo_compatibility(a, b)
}

#[test]
fn test_key_same() {
    let result = key_compatibility("C Major", "C Major");
    assert_eq!(result.label, CompatibilityLabel::Perfect);
    assert_eq!(result.score, 100);
    assert_eq!(result.reason, "Same key");
}

#[test]
fn test_key_same_across_spellings() {
    assert_eq!(key("Db", "C# major"), (CompatibilityLabel::Perfect, 100));
    assert_eq!(key("Ebm", "D# Minor"), (CompatibilityLabel::Perfect, 100));
    assert_eq!(key("A minor", "Am"), (CompatibilityLabel::Perfect, 100));
}

#[test]
fn test_key_relative() {
    let result = key_compatibility("C Major", "Am");
    assert_eq!(result.label, CompatibilityLabel::Excellent);
    assert_eq!(result.score, 95);
    assert_eq!(result.reason, "Relative major/minor keys");

    assert_eq!(key("Cm", "Eb"), (CompatibilityLabel::Excellent, 95));
    assert_eq!(key("Gb", "Ebm"), (CompatibilityLabel::Excellent, 95));
    assert_eq!(key("F#m", "A"), (CompatibilityLabel::Excellent, 95));
}

#[test]
fn test_key_parallel() {
    let result = key_compatibility("C Major", "Cm");
    assert_eq!(result.label, CompatibilityLabel::VeryGood);
    assert_eq!(result.score, 85);
    assert_eq!(result.reason, "Parallel major/minor keys");
}

#[test]
fn test_key_circle_distance() {
    assert_eq!(key("C Major", "G Major"), (CompatibilityLabel::Good, 80));
    assert_eq!(key("C", "F"), (CompatibilityLabel::Good, 80));
    assert_eq!(key("C", "Em"), (CompatibilityLabel::Good, 80));
    assert_eq!(key("C", "Dm"), (CompatibilityLabel::Good, 80));
    assert_eq!(key("C", "D"), (CompatibilityLabel::Fair, 60));
    assert_eq!(key("C", "Bb"), (CompatibilityLabel::Fair, 60));
    assert_eq!(key("C", "A"), (CompatibilityLabel::Acceptable, 40));
    assert_eq!(key("C", "Eb"), (CompatibilityLabel::Acceptable, 40));
    assert_eq!(key("C", "E"), (CompatibilityLabel::Poor, 20));
    assert_eq!(key("C", "F#"), (CompatibilityLabel::Poor, 20));
}

#[test]
fn test_key_distance_reasons() {
    assert_eq!(key_compatibility("C", "G").reason, "Adjacent keys in circle of fifths");
    assert_eq!(key_compatibility("C", "D").reason, "Two steps apart in circle of fifths");
    assert_eq!(key_compatibility("C", "A").reason, "Three steps apart in circle of fifths");
    assert_eq!(key_compatibility("C", "F#").reason, "Keys are not harmonically related");
}

#[test]
fn test_key_invalid() {
    for (a, b) in [("Unknown", "C"), ("C", ""), ("H", "C"), ("", "")] {
        let result = key_compatibility(a, b);
        assert_eq!(result, Compatibility::unknown("Invalid key data"));
    }
}

#[test]
fn test_tempo_exact() {
    let result = tempo("128", "128");
    assert_eq!(result.label, CompatibilityLabel::Perfect);
    assert_eq!(result.score, 100);
    assert_eq!(result.reason, "Exact BPM match");
}

#[test]
fn test_tempo_half_double() {
    let result = tempo("120", "60");
    assert_eq!(result.label, CompatibilityLabel::Excellent);
    assert_eq!(result.score, 90);
    assert!(result.reason.contains("Half/double"));

    // Close to 2:1 but not exact still counts
    assert_eq!(tempo("120", "235").score, 90);
    assert_eq!(tempo("70", "140").score, 90);
}

#[test]
fn test_tempo_three_halves() {
    let result = tempo("120", "80");
    assert_eq!(result.label, CompatibilityLabel::Good);
    assert_eq!(result.score, 75);
    assert_eq!(result.reason, "3/2 BPM relationship");
}

#[test]
fn test_tempo_difference_tiers() {
    let within_5 = tempo("120", "123");
    assert_eq!(within_5.score, 95);
    assert!(within_5.reason.contains("Within 5 BPM"));
    assert!(within_5.reason.contains("3 BPM difference"));

    assert_eq!(
        tempo("120", "128"),
        Compatibility::new(CompatibilityLabel::Good, 80, "Within 10 BPM (8 BPM difference)")
    );
    assert_eq!(
        tempo("120", "135"),
        Compatibility::new(CompatibilityLabel::Fair, 60, "Within 20 BPM (15 BPM difference)")
    );
    assert_eq!(
        tempo("120", "150"),
        Compatibility::new(CompatibilityLabel::Acceptable, 40, "30 BPM difference")
    );
    assert_eq!(
        tempo("100", "170"),
        Compatibility::new(CompatibilityLabel::Poor, 20, "Large BPM difference (70 BPM)")
    );
}

#[test]
fn test_tempo_tier_boundaries() {
    assert_eq!(tempo("120", "125").score, 95);
    assert_eq!(tempo("120", "126").score, 80);
    assert_eq!(tempo("120", "130").score, 80);
    assert_eq!(tempo("120", "131").score, 60);
    assert_eq!(tempo("120", "140").score, 60);
    assert_eq!(tempo("120", "141").score, 40);
    assert_eq!(tempo("130", "170").score, 40);
    assert_eq!(tempo("130", "171").score, 20);
}

#[test]
fn test_tempo_invalid() {
    for (a, b) in [("fast", "120"), ("120", ""), ("Unknown", "Unknown"), ("abc", "120")] {
        assert_eq!(tempo(a, b), Compatibility::unknown("Invalid BPM data"));
    }
}

#[test]
fn test_tempo_zero_and_negative_match_themselves() {
    let exact = Compatibility::new(CompatibilityLabel::Perfect, 100, "Exact BPM match");
    for (a, b) in [("0", "0"), ("-120", "-120"), ("+120", "120"), ("-0", "0")] {
        assert_eq!(tempo(a, b), exact, "{} vs {}", a, b);
    }
}

#[test]
fn test_tempo_non_positive_skips_ratio_rules() {
    assert_eq!(
        tempo("0", "120"),
        Compatibility::new(CompatibilityLabel::Poor, 20, "Large BPM difference (120 BPM)")
    );
    assert_eq!(
        tempo("0", "3"),
        Compatibility::new(CompatibilityLabel::Excellent, 95, "Within 5 BPM (3 BPM difference)")
    );
    // -60 vs -120 would be 2:1 by magnitude; only the difference counts
    assert_eq!(tempo("-60", "-120").score, 20);
    assert_eq!(tempo("-10", "10").reason, "Within 20 BPM (20 BPM difference)");
}

#[test]
fn test_overall_score_weighting() {
    assert_eq!(overall_score(100, 100), 100);
    assert_eq!(overall_score(0, 0), 0);
    assert_eq!(overall_score(80, 95), 86);
    assert_eq!(overall_score(95, 20), 65);
    assert_eq!(overall_score(0, 100), 40);
    assert_eq!(overall_score(100, 0), 60);
}

#[test]
fn test_overall_label_thresholds() {
    let cases = [
        (100, CompatibilityLabel::Excellent),
        (90, CompatibilityLabel::Excellent),
        (89, CompatibilityLabel::VeryGood),
        (75, CompatibilityLabel::VeryGood),
        (74, CompatibilityLabel::Good),
        (60, CompatibilityLabel::Good),
        (59, CompatibilityLabel::Fair),
        (40, CompatibilityLabel::Fair),
        (39, CompatibilityLabel::Acceptable),
        (25, CompatibilityLabel::Acceptable),
        (24, CompatibilityLabel::Poor),
        (0, CompatibilityLabel::Poor),
    ];
    for (score, label) in cases {
        assert_eq!(overall_label(score), label, "score {}", score);
    }
}

#[test]
fn test_invalid_axis_does_not_block_the_other() {
    let verdict = compatibility_verdict("nonsense", "120", "C", "120");
    assert_eq!(verdict.key.label, CompatibilityLabel::Unknown);
    assert_eq!(verdict.tempo.label, CompatibilityLabel::Perfect);
    assert_eq!(verdict.overall_score, 40);
    assert_eq!(verdict.overall_label, CompatibilityLabel::Fair);
}

#[test]
fn test_both_axes_invalid() {
    let verdict = compatibility_verdict("Unknown", "n/a", "Unknown", "n/a");
    assert_eq!(verdict.overall_score, 0);
    assert_eq!(verdict.overall_label, CompatibilityLabel::Poor);
    assert_eq!(verdict.advice.len(), 2);
}

#[test]
fn test_advice_key_tips() {
    let perfect_tempo = Compatibility::new(CompatibilityLabel::Perfect, 100, "Exact BPM match");
    let tip = |score| advisory_text(&Compatibility::new(CompatibilityLabel::Good, score, ""), &perfect_tempo)[0].clone();

    assert!(tip(80).contains("mix naturally"));
    assert!(tip(60).contains("key lock"));
    assert!(tip(60).contains("related"));
    assert!(tip(40).contains("Camelot wheel"));
}

#[test]
fn test_advice_tempo_tips() {
    let same_key = Compatibility::new(CompatibilityLabel::Perfect, 100, "Same key");
    let tip = |score, reason: &str| {
        advisory_text(&same_key, &Compatibility::new(CompatibilityLabel::Good, score, reason))[1].clone()
    };

    assert_eq!(tip(90, "Half/double BPM relationship"), "Tempos are perfectly matched");
    assert!(tip(75, "3/2 BPM relationship").contains("minimal adjustment"));
    assert!(tip(50, "Half/double BPM relationship").contains("creative transition"));
    assert!(tip(40, "30 BPM difference").contains("beatmatching"));
}

#[test]
fn test_describe_tier() {
    assert_eq!(describe_tier("excellent"), CompatibilityLabel::Excellent.description());
    assert!(describe_tier("very-good").starts_with("Very good"));
    assert!(describe_tier("poor").starts_with("Poor"));
    assert_eq!(describe_tier("perfect"), "Unknown compatibility");
    assert_eq!(describe_tier("stellar"), "Unknown compatibility");
}

#[test]
fn test_verdict_serializes_camel_case() {
    let verdict = compatibility_verdict("C Major", "120", "G Major", "122");
    let json = serde_json::to_value(&verdict).unwrap();

    assert_eq!(json["overallScore"], 86);
    assert_eq!(json["overallLabel"], "very-good");
    assert_eq!(json["key"]["label"], "good");
    assert_eq!(json["tempo"]["reason"], "Within 5 BPM (2 BPM difference)");
    assert_eq!(json["advice"].as_array().map(Vec::len), Some(2));
}
