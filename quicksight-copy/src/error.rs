use std::error::Error;
use std::fmt;

use crate::quicksight::ApiError;

/// Remote operation a copier step performs, used to label failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    DescribeAnalysis,
    DescribeAnalysisPermissions,
    DescribeAnalysisDefinition,
    CreateAnalysis,
    DescribeDataSet,
    DescribeDataSetPermissions,
    DescribeDataSetRefreshProperties,
    CreateDataSet,
    PutDataSetRefreshProperties,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operation::DescribeAnalysis => "describe analysis",
            Operation::DescribeAnalysisPermissions => {
                "describe analysis permissions"
            }
            Operation::DescribeAnalysisDefinition => {
                "describe analysis definition"
            }
            Operation::CreateAnalysis => "create analysis",
            Operation::DescribeDataSet => "describe data set",
            Operation::DescribeDataSetPermissions => {
                "describe data set permissions"
            }
            Operation::DescribeDataSetRefreshProperties => {
                "describe data set refresh properties"
            }
            Operation::CreateDataSet => "create data set",
            Operation::PutDataSetRefreshProperties => {
                "put data set refresh properties"
            }
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug)]
pub enum CopyError {
    /// The execution context (region, credentials, endpoint) could not be
    /// established. No remote call was made.
    ConfigError(String),
    NotFound(Operation, ApiError),
    Remote(Operation, ApiError),
    /// The destination data set exists, but a follow-up call failed.
    PartiallyApplied {
        data_set_id: String,
        operation: Operation,
        error: ApiError,
    },
}

impl CopyError {
    /// Classifies a failed remote call by its structured kind.
    pub fn from_api(operation: Operation, error: ApiError) -> Self {
        if error.is_not_found() {
            CopyError::NotFound(operation, error)
        } else {
            CopyError::Remote(operation, error)
        }
    }

    pub fn operation(&self) -> Option<Operation> {
        match self {
            CopyError::ConfigError(_) => None,
            CopyError::NotFound(operation, _)
            | CopyError::Remote(operation, _)
            | CopyError::PartiallyApplied { operation, .. } => Some(*operation),
        }
    }

    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            CopyError::ConfigError(_) => None,
            CopyError::NotFound(_, error)
            | CopyError::Remote(_, error)
            | CopyError::PartiallyApplied { error, .. } => Some(error),
        }
    }
}

impl fmt::Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CopyError::ConfigError(s) => {
                write!(f, "unable to load SDK config: {}", s)
            }
            CopyError::NotFound(operation, e) => {
                write!(f, "unable to {}: not found: {}", operation, e)
            }
            CopyError::Remote(operation, e) => {
                write!(f, "unable to {}: {}", operation, e)
            }
            CopyError::PartiallyApplied {
                data_set_id,
                operation,
                error,
            } => write!(
                f,
                "data set {} was created, but unable to {}: {}",
                data_set_id, operation, error
            ),
        }
    }
}

impl Error for CopyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.api_error().map(|e| e as &(dyn Error + 'static))
    }
}
