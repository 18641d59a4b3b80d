use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::api::QuickSightApi;
use super::aws_request_builder::AWSRequestBuilder;
use super::config::QuickSightClientConfig;
use super::error::{ApiError, ErrorKind, QuickSightErrorHandler};
use super::types::*;
use crate::http::{HttpClient, HttpClientResponse};

const SERVICE: &str = "quicksight";

// RFC 3986 unreserved characters stay as-is in path segments
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Clone, Copy, Debug, PartialEq)]
enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

/// QuickSight REST-JSON client signing every request with SigV4.
#[derive(Clone)]
pub struct QuickSightClient {
    config: QuickSightClientConfig,
    http_client: HttpClient,
}

impl QuickSightClient {
    pub fn new(config: QuickSightClientConfig) -> Self {
        let http_client = HttpClient::new()
            .with_error_handler(Arc::new(QuickSightErrorHandler));
        Self {
            config,
            http_client,
        }
    }

    fn url(&self, segments: &[&str]) -> String {
        let path = segments
            .iter()
            .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT).to_string())
            .collect::<Vec<_>>()
            .join("/");
        format!("{}/{}", self.config.endpoint_url(), path)
    }

    async fn send_raw(
        &self,
        method: Method,
        url: &str,
        body: Option<Bytes>,
    ) -> Result<HttpClientResponse, ApiError> {
        let headers = AWSRequestBuilder::new(url.to_string())
            .generate_headers(
                method.as_str(),
                SERVICE,
                self.config.region(),
                self.config.credentials(),
                body.as_deref(),
            )
            .map_err(|e| {
                ApiError::new(
                    ErrorKind::Transport,
                    format!("unable to sign request for {}: {}", url, e),
                    None,
                )
            })?;

        let response = match method {
            Method::Get => self.http_client.get(url, Some(&headers)).await,
            Method::Post => {
                self.http_client
                    .post(url, Some(&headers), body.as_ref())
                    .await
            }
            Method::Put => {
                self.http_client.put(url, Some(&headers), body.as_ref()).await
            }
        }?;
        Ok(response)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<Bytes>,
    ) -> Result<T, ApiError> {
        let url = self.url(segments);
        let response = self.send_raw(method, &url, body).await?;
        response.json::<T>().map_err(|e| {
            ApiError::invalid_response(format!(
                "unable to decode response of {} {}: {}",
                method.as_str(),
                url,
                e
            ))
        })
    }

    async fn send_json<I: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        input: &I,
    ) -> Result<T, ApiError> {
        self.send(method, segments, Some(encode_body(input)?)).await
    }
}

#[async_trait(?Send)]
impl QuickSightApi for QuickSightClient {
    async fn describe_analysis(
        &self,
        account_id: &str,
        analysis_id: &str,
    ) -> Result<DescribeAnalysisOutput, ApiError> {
        self.send(
            Method::Get,
            &["accounts", account_id, "analyses", analysis_id],
            None,
        )
        .await
    }

    async fn describe_analysis_permissions(
        &self,
        account_id: &str,
        analysis_id: &str,
    ) -> Result<DescribeAnalysisPermissionsOutput, ApiError> {
        self.send(
            Method::Get,
            &["accounts", account_id, "analyses", analysis_id, "permissions"],
            None,
        )
        .await
    }

    async fn describe_analysis_definition(
        &self,
        account_id: &str,
        analysis_id: &str,
    ) -> Result<DescribeAnalysisDefinitionOutput, ApiError> {
        self.send(
            Method::Get,
            &["accounts", account_id, "analyses", analysis_id, "definition"],
            None,
        )
        .await
    }

    async fn create_analysis(
        &self,
        account_id: &str,
        input: &CreateAnalysisInput,
    ) -> Result<CreateAnalysisOutput, ApiError> {
        self.send_json(
            Method::Post,
            &["accounts", account_id, "analyses", &input.analysis_id],
            input,
        )
        .await
    }

    async fn describe_data_set(
        &self,
        account_id: &str,
        data_set_id: &str,
    ) -> Result<DescribeDataSetOutput, ApiError> {
        self.send(
            Method::Get,
            &["accounts", account_id, "data-sets", data_set_id],
            None,
        )
        .await
    }

    async fn describe_data_set_permissions(
        &self,
        account_id: &str,
        data_set_id: &str,
    ) -> Result<DescribeDataSetPermissionsOutput, ApiError> {
        self.send(
            Method::Get,
            &["accounts", account_id, "data-sets", data_set_id, "permissions"],
            None,
        )
        .await
    }

    async fn describe_data_set_refresh_properties(
        &self,
        account_id: &str,
        data_set_id: &str,
    ) -> Result<DescribeDataSetRefreshPropertiesOutput, ApiError> {
        self.send(
            Method::Get,
            &[
                "accounts",
                account_id,
                "data-sets",
                data_set_id,
                "refresh-properties",
            ],
            None,
        )
        .await
    }

    async fn create_data_set(
        &self,
        account_id: &str,
        input: &CreateDataSetInput,
    ) -> Result<CreateDataSetOutput, ApiError> {
        self.send_json(Method::Post, &["accounts", account_id, "data-sets"], input)
            .await
    }

    async fn put_data_set_refresh_properties(
        &self,
        account_id: &str,
        data_set_id: &str,
        refresh_properties: &Value,
    ) -> Result<(), ApiError> {
        let input = PutDataSetRefreshPropertiesInput {
            data_set_refresh_properties: refresh_properties.clone(),
        };
        let url = self.url(&[
            "accounts",
            account_id,
            "data-sets",
            data_set_id,
            "refresh-properties",
        ]);
        // the response only carries a request id and status
        self.send_raw(Method::Put, &url, Some(encode_body(&input)?))
            .await?;
        Ok(())
    }
}

fn encode_body<I: Serialize>(input: &I) -> Result<Bytes, ApiError> {
    serde_json::to_vec(input).map(Bytes::from).map_err(|e| {
        ApiError::new(
            ErrorKind::InvalidParameterValue,
            format!("unable to encode request body: {}", e),
            None,
        )
    })
}
