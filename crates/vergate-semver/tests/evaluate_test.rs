/// End-to-end checks through the public `evaluate` entry point
use std::cmp::Ordering;

use vergate_semver::{
    evaluate, Comparator, EvaluationError, ReasonCode, Verdict, VersionParser, VersionTriple,
};

#[test]
fn test_exact_match() {
    assert_eq!(evaluate("1.2.3", "1.2.3"), Verdict::Satisfied(ReasonCode::EqualRequiredMet));
}

#[test]
fn test_greater_than_passes() {
    assert_eq!(evaluate("1.3.0", ">1.2.0"), Verdict::Satisfied(ReasonCode::GreaterRequiredMet));
}

#[test]
fn test_caret_rejects_next_major() {
    // floor 1.9.0 gives upper bound 2.0.0, and 2.5.0 is above it
    assert_eq!(evaluate("2.5.0", "^1.9.0"), Verdict::Unsatisfied(ReasonCode::InRangeFailed));
}

#[test]
fn test_caret_accepts_below_next_major() {
    assert_eq!(evaluate("1.9.9", "^1.0.0"), Verdict::Satisfied(ReasonCode::InRangeMet));
}

#[test]
fn test_caret_rejects_major_escape_from_zero_major() {
    // raw comparison says greater, but 1.0.0 is past the 0.5.0 bound
    assert_eq!(evaluate("1.0.0", "^0.4.0"), Verdict::Unsatisfied(ReasonCode::InRangeFailed));
}

#[test]
fn test_caret_patch_only_floor_has_no_range() {
    assert_eq!(evaluate("0.0.5", "^0.0.3"), Verdict::Unsatisfied(ReasonCode::InRangeFailed));
    assert_eq!(evaluate("0.0.3", "^0.0.3"), Verdict::Satisfied(ReasonCode::EqualRequiredMet));
}

#[test]
fn test_tilde_allows_patch_changes_only() {
    assert_eq!(evaluate("1.2.0", "~1.2.0"), Verdict::Satisfied(ReasonCode::EqualRequiredMet));
    assert_eq!(evaluate("1.2.9", "~1.2.0"), Verdict::Satisfied(ReasonCode::InRangeMet));
    assert_eq!(evaluate("1.3.0", "~1.2.0"), Verdict::Unsatisfied(ReasonCode::InRangeFailed));
    assert_eq!(evaluate("1.1.0", "~1.2.0"), Verdict::Unsatisfied(ReasonCode::GreaterRequiredFailed));
}

#[test]
fn test_malformed_required_names_segment() {
    match evaluate("1.2.3", "1.2.x") {
        Verdict::Invalid(EvaluationError::MalformedVersion(e)) => {
            assert_eq!(e.segment(), "x");
            assert_eq!(e.version(), "1.2.x");
        }
        other => panic!("expected malformed version, got {:?}", other),
    }
}

#[test]
fn test_malformed_current() {
    let verdict = evaluate("1..2", ">=1.0.0");
    assert_eq!(verdict.reason(), ReasonCode::MalformedVersion);
    assert!(!verdict.is_success());
}

#[test]
fn test_unrecognized_operator_names_prefix() {
    match evaluate("1.2.3", "=1.2.3") {
        Verdict::Invalid(EvaluationError::UnrecognizedOperator(e)) => assert_eq!(e.0, "="),
        other => panic!("expected unrecognized operator, got {:?}", other),
    }
    assert_eq!(evaluate("1.2.3", "!=1.2.3").reason(), ReasonCode::UnrecognizedOperator);
    assert_eq!(evaluate("1.2.3", "v1.2.3").reason(), ReasonCode::UnrecognizedOperator);
}

#[test]
fn test_boundaries() {
    assert_eq!(evaluate("1.2.3", ">=1.2.3").reason(), ReasonCode::GreaterRequiredMet);
    assert_eq!(evaluate("1.2.3", "<=1.2.3").reason(), ReasonCode::LowerRequiredMet);
    assert_eq!(evaluate("1.2.3", ">1.2.3").reason(), ReasonCode::GreaterRequiredFailed);
    assert_eq!(evaluate("1.2.3", "<1.2.3").reason(), ReasonCode::LowerRequiredFailed);
    assert_eq!(evaluate("2.0.0", "^1.0.0").reason(), ReasonCode::InRangeFailed);
}

#[test]
fn test_range_below_floor_reads_as_lower() {
    assert_eq!(evaluate("0.9.9", "^1.0.0"), Verdict::Unsatisfied(ReasonCode::GreaterRequiredFailed));
    assert_eq!(evaluate("0.3.9", "^0.4.0"), Verdict::Unsatisfied(ReasonCode::GreaterRequiredFailed));
    assert_eq!(evaluate("1.2.2", "~1.2.3"), Verdict::Unsatisfied(ReasonCode::GreaterRequiredFailed));
}

#[test]
fn test_zero_padding_is_transparent() {
    assert_eq!(
        VersionParser::to_triple("1.2").unwrap(),
        VersionParser::to_triple("1.2.0").unwrap()
    );
    assert!(evaluate("1.2", "1.2.0").is_success());
    assert!(evaluate("1", "^1").is_success());
    assert!(evaluate("1.2.3.9", "1.2.3").is_success());
}

#[test]
fn test_compare_total_order() {
    let versions = ["0.0.0", "0.0.1", "0.1.0", "0.1.1", "1.0.0", "1.0.1", "2.3.4", "10.0.0"];
    let triples: Vec<VersionTriple> = versions
        .iter()
        .map(|v| VersionParser::to_triple(v).unwrap())
        .collect();

    for (i, a) in triples.iter().enumerate() {
        for (j, b) in triples.iter().enumerate() {
            let cmp = Comparator::compare(a, b);
            assert_eq!(cmp, i.cmp(&j), "{} vs {}", a, b);
            assert_eq!(cmp == Ordering::Greater, Comparator::compare(b, a) == Ordering::Less);
        }
    }
}

#[test]
fn test_split_prefix_reassembles() {
    for raw in ["1.2.3", ">=1.2.3", "^0.4", "~1", "==7", "abc1", " <2"] {
        let (prefix, remainder) = VersionParser::split_prefix(raw);
        assert_eq!(format!("{}{}", prefix, remainder), raw);
    }
}
