pub(crate) mod report_archive_decoder;
pub(crate) mod report_summary_text_generator;

pub use report_archive_decoder::{DecodedReportArchive, ReportArchiveDecoder};
pub use report_summary_text_generator::ReportSummaryTextGenerator;
