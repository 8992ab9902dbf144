use serde::{Deserialize, Serialize};

use crate::TestSetStatus;

/// Outcome of one test set, derived from a single report entry.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct TestSetOutcome {
    /// Test set name.
    pub test_set: String,
    /// Declared status.
    pub status: TestSetStatus,
    /// Passed test count.
    pub passed: u64,
    /// Failed test count.
    pub failed: u64,
    /// Total test count.
    pub total: u64,
}
