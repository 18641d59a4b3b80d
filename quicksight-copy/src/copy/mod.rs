mod analysis;
mod data_set;
mod refresh;

pub use analysis::{copy_analysis, AnalysisCopy};
pub use data_set::{copy_data_set, DataSetCopy};
pub use refresh::RefreshOutcome;

/// Which object to copy, and where to.
///
/// The destination id doubles as the new object's display name. No field
/// is checked for emptiness; the service validates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    pub account_id: String,
    pub source_id: String,
    pub destination_id: String,
}

impl CopyRequest {
    pub fn new(
        account_id: impl Into<String>,
        source_id: impl Into<String>,
        destination_id: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            source_id: source_id.into(),
            destination_id: destination_id.into(),
        }
    }
}
