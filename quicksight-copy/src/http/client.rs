use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Error as AnyhowError, Result};
use bytes::{Bytes, BytesMut};
use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Empty, Full};
use hyper::body::Incoming;
use hyper::header::{HeaderName, HeaderValue};
use hyper::{HeaderMap, Request, Response, Uri};
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use percent_encoding::{percent_encode, utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use tokio::time::timeout;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug)]
pub struct HttpClientResponse {
    body: Option<Bytes>,
    status_code: u16,
    headers: HeaderMap,
}

impl HttpClientResponse {
    pub fn new(
        body: Option<Bytes>,
        status_code: u16,
        headers: HeaderMap,
    ) -> Self {
        Self {
            body,
            status_code,
            headers,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        match &self.body {
            Some(body) if !body.is_empty() => {
                serde_json::from_slice(body).map_err(|e| anyhow!(e))
            }
            _ => Err(anyhow!("No body")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HttpClientError {
    ConnectionError(String),
    Timeout,
    HttpError(u16, String), // Status code, status text
    // Status code, service error code, service message
    ServiceError(u16, String, String),
    Other(String),
}

impl fmt::Display for HttpClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpClientError::ConnectionError(e) => {
                write!(f, "ConnectionError: {}", e)
            }
            HttpClientError::Timeout => write!(f, "Timeout"),
            HttpClientError::HttpError(code, message) => {
                write!(f, "HTTPError: {} {}", code, message)
            }
            HttpClientError::ServiceError(code, error_code, message) => {
                write!(f, "{}: {} (status {})", error_code, message, code)
            }
            HttpClientError::Other(e) => write!(f, "Other: {}", e),
        }
    }
}

impl std::error::Error for HttpClientError {}

/// Turns a non-2xx response into an error. The response passed in
/// carries the full body so that service error documents can be decoded.
pub trait HttpClientErrorHandler {
    fn handle_error(
        &self,
        response: HttpClientResponse,
        canonical_reason: String,
    ) -> HttpClientError;
}

impl From<hyper::http::Error> for HttpClientError {
    fn from(err: hyper::http::Error) -> Self {
        HttpClientError::Other(err.to_string())
    }
}

impl From<AnyhowError> for HttpClientError {
    fn from(err: AnyhowError) -> Self {
        HttpClientError::Other(err.to_string())
    }
}

pub type HttpClientResult = Result<HttpClientResponse, HttpClientError>;

#[derive(Clone)]
pub struct HttpClient {
    client: Client<
        HttpsConnector<HttpConnector>,
        BoxBody<bytes::Bytes, Infallible>,
    >,
    timeout: Duration,
    error_handler: Option<Arc<dyn HttpClientErrorHandler + Send + Sync>>,
}

impl HttpClient {
    pub fn new() -> Self {
        let https = HttpsConnector::new();

        let client: Client<
            HttpsConnector<HttpConnector>,
            BoxBody<Bytes, Infallible>,
        > = Client::builder(TokioExecutor::new())
            .build::<_, BoxBody<Bytes, Infallible>>(https);

        HttpClient {
            client,
            timeout: DEFAULT_TIMEOUT,
            error_handler: None,
        }
    }

    pub fn with_error_handler(
        mut self,
        error_handler: Arc<dyn HttpClientErrorHandler + Send + Sync>,
    ) -> Self {
        self.error_handler = Some(error_handler);
        self
    }

    async fn request(
        &self,
        method: &str,
        url: &str,
        headers: Option<&HashMap<String, String>>,
        body: Option<&Bytes>,
    ) -> HttpClientResult {
        log::debug!("{} {}", method, url);
        let uri = Uri::from_str(url)
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        let mut req_builder = Request::builder().method(method).uri(uri);

        if let Some(headers_map) = headers {
            for (key, value) in headers_map.iter() {
                let header_name = HeaderName::from_str(key)
                    .map_err(|e| HttpClientError::Other(e.to_string()))?;
                let header_value = HeaderValue::from_str(value)
                    .map_err(|e| HttpClientError::Other(e.to_string()))?;
                req_builder = req_builder.header(header_name, header_value);
            }
        }
        let request = req_builder.body(create_request_body(body))?;

        let response = match timeout(self.timeout, self.client.request(request))
            .await
        {
            Ok(result) => result.map_err(|e| {
                HttpClientError::ConnectionError(format!("{}: {}", url, e))
            })?,
            Err(_) => return Err(HttpClientError::Timeout),
        };

        let status = response.status();
        let status_code = status.as_u16();
        let headers = response.headers().clone();
        let body = match timeout(self.timeout, collect_body(response)).await {
            Ok(body) => body?,
            Err(_) => return Err(HttpClientError::Timeout),
        };
        log::debug!("{} {} -> {}", method, url, status_code);

        let http_client_response =
            HttpClientResponse::new(Some(body), status_code, headers);

        if !status.is_success() {
            let canonical_reason =
                status.canonical_reason().unwrap_or("").to_string();
            if let Some(error_handler) = &self.error_handler {
                return Err(error_handler
                    .handle_error(http_client_response, canonical_reason));
            }
            return Err(HttpClientError::HttpError(
                status_code,
                canonical_reason,
            ));
        }
        Ok(http_client_response)
    }

    pub async fn get(
        &self,
        url: &str,
        headers: Option<&HashMap<String, String>>,
    ) -> HttpClientResult {
        self.request("GET", url, headers, None).await
    }

    pub async fn post(
        &self,
        url: &str,
        headers: Option<&HashMap<String, String>>,
        body: Option<&Bytes>,
    ) -> HttpClientResult {
        self.request("POST", url, headers, body).await
    }

    pub async fn put(
        &self,
        url: &str,
        headers: Option<&HashMap<String, String>>,
        body: Option<&Bytes>,
    ) -> HttpClientResult {
        self.request("PUT", url, headers, body).await
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

// additional non associated helper functions
impl HttpClient {
    pub fn percent_encode_with_exclusion(
        input: &str,
        exclude: Option<&[u8]>,
    ) -> String {
        let mut result = String::new();
        let set = NON_ALPHANUMERIC;

        if let Some(exclusions) = exclude {
            // percent-encode each byte while skipping excluded characters
            for byte in input.bytes() {
                if exclusions.contains(&byte) {
                    result.push(byte as char);
                } else {
                    result.push_str(
                        &percent_encode(&[byte][..], set).to_string(),
                    );
                }
            }
        } else {
            // use the standard percent encoding for the entire input
            result.push_str(&utf8_percent_encode(input, set).to_string());
        }
        result
    }
}

async fn collect_body(
    mut response: Response<Incoming>,
) -> Result<Bytes, HttpClientError> {
    let mut body_bytes = BytesMut::new();
    while let Some(next) = response.frame().await {
        let frame = next.map_err(|e| anyhow!(e))?;
        if let Some(chunk) = frame.data_ref() {
            body_bytes.extend_from_slice(chunk);
        }
    }
    Ok(body_bytes.into())
}

fn create_request_body(
    body_content: Option<&Bytes>,
) -> BoxBody<Bytes, Infallible> {
    match body_content {
        Some(content) => {
            let full_body: Full<Bytes> = Full::new(content.clone());
            BoxBody::new(full_body)
        }
        None => {
            let empty_body: Empty<Bytes> = Empty::new();
            BoxBody::new(empty_body)
        }
    }
}
