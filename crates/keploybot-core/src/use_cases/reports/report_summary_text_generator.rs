use std::fmt::Write;

use keploybot_models::{TestSetOutcome, TestSetStatus};

pub struct ReportSummaryTextGenerator;

impl ReportSummaryTextGenerator {
    /// Renders the Markdown summary comment for a set of test outcomes.
    ///
    /// Output only depends on the inputs, rendering the same outcomes
    /// twice yields the same text.
    pub fn generate(outcomes: &[TestSetOutcome], malformed_entries: u64) -> String {
        let mut output = String::new();

        output.push_str("## 🐰 Keploy Test Results\n\n");
        output.push_str("| Test Set | Status | Passed | Failed | Total |\n");
        output.push_str("| --- | --- | --- | --- | --- |\n");

        for outcome in outcomes {
            let status = match outcome.status {
                TestSetStatus::Passed => "✅ PASSED",
                TestSetStatus::Failed => "❌ FAILED",
            };

            // Ignored, writing to a String cannot fail.
            let _ = writeln!(
                output,
                "| `{}` | {} | {} | {} | {} |",
                outcome.test_set,
                status,
                Self::count(outcome.passed),
                Self::count(outcome.failed),
                outcome.total
            );
        }

        if malformed_entries > 0 {
            let _ = write!(
                output,
                "\n⚠️ {malformed_entries} report file(s) could not be read and were skipped.\n"
            );
        }

        output.push_str("\n_Reported by keploybot._");
        output
    }

    fn count(value: u64) -> String {
        if value > 0 {
            format!("**{value}**")
        } else {
            value.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_outcomes() -> Vec<TestSetOutcome> {
        vec![
            TestSetOutcome {
                test_set: "test-set-1".into(),
                status: TestSetStatus::Passed,
                passed: 4,
                failed: 0,
                total: 4,
            },
            TestSetOutcome {
                test_set: "test-set-2".into(),
                status: TestSetStatus::Failed,
                passed: 2,
                failed: 1,
                total: 3,
            },
        ]
    }

    #[test]
    fn generate_two_test_sets() {
        assert_eq!(
            ReportSummaryTextGenerator::generate(&sample_outcomes(), 0),
            "## 🐰 Keploy Test Results\n\
             \n\
             | Test Set | Status | Passed | Failed | Total |\n\
             | --- | --- | --- | --- | --- |\n\
             | `test-set-1` | ✅ PASSED | **4** | 0 | 4 |\n\
             | `test-set-2` | ❌ FAILED | **2** | **1** | 3 |\n\
             \n\
             _Reported by keploybot._"
        );
    }

    #[test]
    fn generate_with_malformed_entries() {
        let output = ReportSummaryTextGenerator::generate(&sample_outcomes(), 2);
        assert!(output.contains("⚠️ 2 report file(s) could not be read and were skipped."));
    }

    #[test]
    fn generate_is_deterministic() {
        let outcomes = sample_outcomes();
        assert_eq!(
            ReportSummaryTextGenerator::generate(&outcomes, 1),
            ReportSummaryTextGenerator::generate(&outcomes, 1)
        );
    }
}
