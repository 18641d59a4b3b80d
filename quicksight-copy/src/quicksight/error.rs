use std::fmt;

use serde::Deserialize;

use crate::http::{HttpClientError, HttpClientErrorHandler, HttpClientResponse};

const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";

/// Discriminated kind of a failed QuickSight call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    ResourceNotFound,
    ResourceExists,
    AccessDenied,
    InvalidParameterValue,
    Throttling,
    LimitExceeded,
    Conflict,
    PreconditionNotMet,
    UnsupportedUserEdition,
    InternalFailure,
    /// No response was received (connection failure, timeout).
    Transport,
    /// A response was received but could not be decoded.
    InvalidResponse,
    Unknown(String),
}

impl ErrorKind {
    /// Maps a service error code to its kind. Accepts the bare shape
    /// (`ResourceNotFoundException`) as well as the namespaced
    /// (`com.amazonaws.quicksight#...`) and header (`...:http://...`)
    /// shapes.
    pub fn from_code(code: &str) -> ErrorKind {
        let code = code.split(':').next().unwrap_or(code);
        let code = code.rsplit('#').next().unwrap_or(code).trim();
        match code {
            "ResourceNotFoundException" => ErrorKind::ResourceNotFound,
            "ResourceExistsException" => ErrorKind::ResourceExists,
            "AccessDeniedException" => ErrorKind::AccessDenied,
            "InvalidParameterValueException" | "InvalidRequestException" => {
                ErrorKind::InvalidParameterValue
            }
            "ThrottlingException" => ErrorKind::Throttling,
            "LimitExceededException" => ErrorKind::LimitExceeded,
            "ConflictException" => ErrorKind::Conflict,
            "PreconditionNotMetException" => ErrorKind::PreconditionNotMet,
            "UnsupportedUserEditionException" => {
                ErrorKind::UnsupportedUserEdition
            }
            "InternalFailureException" => ErrorKind::InternalFailure,
            other => ErrorKind::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ResourceNotFound => write!(f, "ResourceNotFoundException"),
            ErrorKind::ResourceExists => write!(f, "ResourceExistsException"),
            ErrorKind::AccessDenied => write!(f, "AccessDeniedException"),
            ErrorKind::InvalidParameterValue => {
                write!(f, "InvalidParameterValueException")
            }
            ErrorKind::Throttling => write!(f, "ThrottlingException"),
            ErrorKind::LimitExceeded => write!(f, "LimitExceededException"),
            ErrorKind::Conflict => write!(f, "ConflictException"),
            ErrorKind::PreconditionNotMet => {
                write!(f, "PreconditionNotMetException")
            }
            ErrorKind::UnsupportedUserEdition => {
                write!(f, "UnsupportedUserEditionException")
            }
            ErrorKind::InternalFailure => write!(f, "InternalFailureException"),
            ErrorKind::Transport => write!(f, "TransportError"),
            ErrorKind::InvalidResponse => write!(f, "InvalidResponse"),
            ErrorKind::Unknown(code) if code.is_empty() => {
                write!(f, "UnknownError")
            }
            ErrorKind::Unknown(code) => write!(f, "{}", code),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
    status_code: Option<u16>,
}

impl ApiError {
    pub fn new(
        kind: ErrorKind,
        message: impl Into<String>,
        status_code: Option<u16>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ResourceNotFound, message, Some(404))
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidResponse, message, None)
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::ResourceNotFound
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        if let Some(status_code) = self.status_code {
            write!(f, " (status {})", status_code)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl From<HttpClientError> for ApiError {
    fn from(err: HttpClientError) -> Self {
        match err {
            HttpClientError::ServiceError(status_code, code, message) => {
                ApiError::new(
                    ErrorKind::from_code(&code),
                    message,
                    Some(status_code),
                )
            }
            HttpClientError::HttpError(status_code, reason) => ApiError::new(
                ErrorKind::Unknown(String::new()),
                reason,
                Some(status_code),
            ),
            HttpClientError::ConnectionError(e) => {
                ApiError::new(ErrorKind::Transport, e, None)
            }
            HttpClientError::Timeout => ApiError::new(
                ErrorKind::Transport,
                "request timed out",
                None,
            ),
            HttpClientError::Other(e) => {
                ApiError::new(ErrorKind::Transport, e, None)
            }
        }
    }
}

// a body may carry several spellings of the same member
#[derive(Debug, Default, Deserialize)]
struct ErrorDocument {
    #[serde(rename = "__type")]
    type_name: Option<String>,
    #[serde(rename = "Code")]
    code_upper: Option<String>,
    #[serde(rename = "code")]
    code_lower: Option<String>,
    #[serde(rename = "Message")]
    message_upper: Option<String>,
    #[serde(rename = "message")]
    message_lower: Option<String>,
    #[serde(rename = "RequestId")]
    request_id: Option<String>,
}

impl ErrorDocument {
    fn code(&mut self) -> Option<String> {
        self.type_name
            .take()
            .or_else(|| self.code_upper.take())
            .or_else(|| self.code_lower.take())
    }

    fn message(&mut self) -> Option<String> {
        self.message_upper.take().or_else(|| self.message_lower.take())
    }
}

/// Decodes QuickSight's REST-JSON error responses into
/// `HttpClientError::ServiceError`.
pub struct QuickSightErrorHandler;

impl HttpClientErrorHandler for QuickSightErrorHandler {
    fn handle_error(
        &self,
        response: HttpClientResponse,
        canonical_reason: String,
    ) -> HttpClientError {
        let mut document: ErrorDocument = response.json().unwrap_or_default();

        // header takes precedence, the body is not guaranteed to carry a code
        let code = response
            .header(ERROR_TYPE_HEADER)
            .map(str::to_string)
            .or_else(|| document.code());
        let Some(code) = code else {
            return HttpClientError::HttpError(
                response.status_code(),
                document.message().unwrap_or(canonical_reason),
            );
        };

        let mut message = document.message().unwrap_or(canonical_reason);
        if let Some(request_id) = document.request_id {
            message = format!("{} [request id: {}]", message, request_id);
        }
        HttpClientError::ServiceError(response.status_code(), code, message)
    }
}
