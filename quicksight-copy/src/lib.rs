pub(crate) mod base;
pub(crate) mod copy;
pub(crate) mod error;
pub(crate) mod http;
pub(crate) mod quicksight;
pub(crate) mod utils;

pub use base::config::EnvironmentConfig;
pub use copy::{
    copy_analysis, copy_data_set, AnalysisCopy, CopyRequest, DataSetCopy,
    RefreshOutcome,
};
pub use error::{CopyError, Operation};

// meant for external use by third-party apps or libraries
pub mod external {
    pub use crate::http::{
        HttpClient, HttpClientError, HttpClientErrorHandler,
        HttpClientResponse, HttpClientResult,
    };
    pub use crate::quicksight::types::*;
    pub use crate::quicksight::{
        validate_config, AWSCredentials, AWSRequestBuilder, ApiError,
        ErrorKind, QuickSightApi, QuickSightClient, QuickSightClientConfig,
        ENDPOINT_URL_KEY,
    };
}
pub use external::*;

#[cfg(feature = "cli")]
pub mod cli;
