//! Renders verdicts into the human-readable messages shown to users.

use vergate_semver::{Operator, ReasonCode, Verdict, VersionParser};

/// Build the message for a verdict.
///
/// The operator is recovered from `required` so that strict and inclusive
/// comparisons read differently (`greater than` vs `greater or equal`).
pub fn render(current: &str, required: &str, verdict: &Verdict) -> String {
    let (prefix, _) = VersionParser::split_prefix(required);
    let operator = Operator::from_prefix(prefix).ok();

    let outcome = match verdict.reason() {
        ReasonCode::EqualRequiredMet => "Current version is equal to required. Check succeeded",
        ReasonCode::EqualRequiredFailed => "Current version is NOT equal to required. Check failed",
        ReasonCode::GreaterRequiredMet if operator == Some(Operator::GreaterThan) => {
            "Current version is greater than required. Check succeeded"
        }
        ReasonCode::GreaterRequiredMet => "Current version is greater than or equal to required. Check succeeded",
        ReasonCode::GreaterRequiredFailed => "Current version is lower than required. Check failed",
        ReasonCode::LowerRequiredMet if operator == Some(Operator::LessThan) => {
            "Current version is lower than required. Check succeeded"
        }
        ReasonCode::LowerRequiredMet => "Current version is lower than or equal to required. Check succeeded",
        ReasonCode::LowerRequiredFailed => "Current version is greater than required. Check failed",
        ReasonCode::InRangeMet => "Current version IS in required range. Check succeeded",
        ReasonCode::InRangeFailed => "Current version NOT in required range. Check failed",
        ReasonCode::UnrecognizedOperator => {
            return format!(
                "required_version: {}\nWrong symbols in `required_version` (expected one of: >, <, >=, <=, ^, ~)",
                required
            );
        }
        ReasonCode::MalformedVersion => {
            let detail = verdict
                .error()
                .map(|e| e.to_string())
                .unwrap_or_default();
            return format!("{}{}", header(current, required), detail);
        }
    };

    format!("{}{}", header(current, required), outcome)
}

fn header(current: &str, required: &str) -> String {
    format!("current_version: {}\nrequired_version: {}\n", current, required)
}
