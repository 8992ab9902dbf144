use std::io::{Cursor, Read};

use keploybot_models::{TestSetOutcome, TestSetStatus};
use serde::Deserialize;
use zip::ZipArchive;

use crate::Result;

const REPORT_SUFFIX: &str = "-report.yaml";

/// Outcomes extracted from a report archive, plus the number of entries
/// that could not be decoded.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DecodedReportArchive {
    pub outcomes: Vec<TestSetOutcome>,
    pub malformed_entries: u64,
}

#[derive(Deserialize)]
struct ReportDocument {
    name: String,
    status: TestSetStatus,
    success: u64,
    failure: u64,
    total: u64,
}

pub struct ReportArchiveDecoder;

impl ReportArchiveDecoder {
    /// Decodes every `*-report.yaml` entry found in the archive.
    ///
    /// A malformed entry is counted and skipped, it never aborts the
    /// remaining entries. An unreadable archive is an error.
    pub fn decode(data: &[u8]) -> Result<DecodedReportArchive> {
        let mut archive = ZipArchive::new(Cursor::new(data))?;
        let mut decoded = DecodedReportArchive::default();

        for index in 0..archive.len() {
            let mut entry = match archive.by_index(index) {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(
                        index,
                        error = %e,
                        message = "Could not open report archive entry"
                    );
                    decoded.malformed_entries += 1;
                    continue;
                }
            };

            if !entry.name().ends_with(REPORT_SUFFIX) {
                continue;
            }

            let entry_name = entry.name().to_owned();
            let mut contents = String::new();
            if let Err(e) = entry.read_to_string(&mut contents) {
                tracing::warn!(
                    entry_name,
                    error = %e,
                    message = "Could not read report archive entry"
                );
                decoded.malformed_entries += 1;
                continue;
            }

            match serde_yaml::from_str::<ReportDocument>(&contents) {
                Ok(document) => decoded.outcomes.push(TestSetOutcome {
                    test_set: document.name,
                    status: document.status,
                    passed: document.success,
                    failed: document.failure,
                    total: document.total,
                }),
                Err(e) => {
                    tracing::warn!(
                        entry_name,
                        error = %e,
                        message = "Could not parse report archive entry"
                    );
                    decoded.malformed_entries += 1;
                }
            }
        }

        Ok(decoded)
    }
}
