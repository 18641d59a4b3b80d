mod api;
mod aws_credentials;
mod aws_profile;
mod aws_request_builder;
mod client;
mod config;
mod error;
pub mod types;

pub use api::QuickSightApi;
pub use aws_credentials::AWSCredentials;
pub use aws_request_builder::AWSRequestBuilder;
pub use client::QuickSightClient;
pub use config::{validate_config, QuickSightClientConfig, ENDPOINT_URL_KEY};
pub use error::{ApiError, ErrorKind};
