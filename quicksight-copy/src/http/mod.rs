mod client;

pub use client::{
    HttpClient, HttpClientError, HttpClientErrorHandler, HttpClientResponse,
    HttpClientResult,
};
