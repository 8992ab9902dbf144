use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TestSetStatusError {
    /// Unknown test set status.
    #[error("Unknown test set status: {}", status)]
    UnknownTestSetStatus { status: String },
}

/// Test set status, as declared by a report entry.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Copy, Clone, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestSetStatus {
    /// Passed.
    Passed,
    /// Failed.
    #[default]
    Failed,
}

impl TestSetStatus {
    /// Convert test set status to static str.
    pub fn to_str(self) -> &'static str {
        self.into()
    }
}

impl Display for TestSetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for TestSetStatus {
    type Err = TestSetStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl TryFrom<&str> for TestSetStatus {
    type Error = TestSetStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "PASSED" => Ok(Self::Passed),
            "FAILED" => Ok(Self::Failed),
            e => Err(TestSetStatusError::UnknownTestSetStatus {
                status: e.to_string(),
            }),
        }
    }
}

impl From<TestSetStatus> for &'static str {
    fn from(status: TestSetStatus) -> Self {
        match status {
            TestSetStatus::Passed => "PASSED",
            TestSetStatus::Failed => "FAILED",
        }
    }
}
