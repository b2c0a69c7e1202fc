pub mod info_extractor;
pub mod record;
pub mod report;

pub use info_extractor::{InfoExtractor, ScanOutcome, ScanStatistics};
pub use record::{FieldValue, StudentRecord};
pub use report::CheckReport;
