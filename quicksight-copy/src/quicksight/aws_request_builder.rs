use std::collections::HashMap;

use hmac::{Hmac, Mac, NewMac};
use sha2::{Digest, Sha256};
use url::Url;

use super::aws_credentials::AWSCredentials;
use crate::http::HttpClient;
use crate::utils::time::UtcTimeNow;

/// Signs requests against a single URL with AWS Signature Version 4.
pub struct AWSRequestBuilder {
    url: String,
}

impl AWSRequestBuilder {
    pub fn new(url: String) -> Self {
        Self { url }
    }

    pub fn generate_headers(
        &self,
        method: &str,
        service: &str,
        region: &str,
        credentials: &AWSCredentials,
        payload: Option<&[u8]>,
    ) -> Result<HashMap<String, String>, url::ParseError> {
        self.generate_headers_at(
            &UtcTimeNow::new(),
            method,
            service,
            region,
            credentials,
            payload,
        )
    }

    fn generate_headers_at(
        &self,
        utc_now: &UtcTimeNow,
        method: &str,
        service: &str,
        region: &str,
        credentials: &AWSCredentials,
        payload: Option<&[u8]>,
    ) -> Result<HashMap<String, String>, url::ParseError> {
        let date_stamp = utc_now.date_stamp();
        let x_amz_date = utc_now.x_amz_date();

        let credential_scope =
            format!("{}/{}/{}/aws4_request", date_stamp, region, service);
        let payload_hash = hex::encode(Sha256::digest(payload.unwrap_or(b"")));

        let url = Url::parse(&self.url)?;
        let host = url.host_str().ok_or(url::ParseError::EmptyHost)?;
        let host = match url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_owned(),
        };

        let mut headers = HashMap::new();
        headers.insert("x-amz-date".to_string(), x_amz_date.clone());
        headers.insert("host".to_string(), host);
        if let Some(session_token) = credentials.session_token() {
            headers.insert(
                "x-amz-security-token".to_string(),
                session_token.to_string(),
            );
        }
        if payload.is_some() {
            headers.insert(
                "content-type".to_string(),
                "application/json".to_string(),
            );
        }

        let canonical_uri = self.get_canonical_uri(&url);
        let (canonical_headers, signed_headers) =
            self.get_canonical_headers(&headers);
        let canonical_query_string =
            self.get_canonical_query_string(url.query());

        let canonical_request = format!(
            "{}\n/{}\n{}\n{}\n{}\n{}",
            method,
            canonical_uri,
            canonical_query_string,
            canonical_headers,
            signed_headers,
            payload_hash
        );
        log::trace!("canonical request:\n{}", canonical_request);

        let string_to_sign = format!(
            "AWS4-HMAC-SHA256\n{}\n{}\n{}",
            x_amz_date,
            credential_scope,
            hex::encode(Sha256::digest(canonical_request.as_bytes()))
        );
        let signing_key = self.generate_signing_key(
            &date_stamp,
            credentials.secret_key(),
            region,
            service,
        );
        let signature = sign(&signing_key, string_to_sign.as_bytes());

        let authorization_header = format!(
            "AWS4-HMAC-SHA256 Credential={}/{}, SignedHeaders={}, Signature={}",
            credentials.access_key(),
            credential_scope,
            signed_headers,
            hex::encode(signature)
        );
        headers.insert("authorization".to_string(), authorization_header);
        Ok(headers)
    }

    // returns (canonical headers, signed headers)
    fn get_canonical_headers(
        &self,
        headers: &HashMap<String, String>,
    ) -> (String, String) {
        let mut headers_vec: Vec<(String, &str)> = headers
            .iter()
            .map(|(name, value)| (name.trim().to_lowercase(), value.trim()))
            .collect();
        headers_vec.sort_by(|a, b| a.0.cmp(&b.0));

        let canonical_headers = headers_vec
            .iter()
            .map(|(name, value)| format!("{}:{}\n", name, value))
            .collect::<String>();
        let signed_headers = headers_vec
            .iter()
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>()
            .join(";");
        (canonical_headers, signed_headers)
    }

    fn generate_signing_key(
        &self,
        date_stamp: &str,
        secret_key: &str,
        region: &str,
        service: &str,
    ) -> Vec<u8> {
        let k_date = sign(
            format!("AWS4{}", secret_key).as_bytes(),
            date_stamp.as_bytes(),
        );
        let k_region = sign(&k_date, region.as_bytes());
        let k_service = sign(&k_region, service.as_bytes());
        sign(&k_service, b"aws4_request")
    }

    // the path from `Url` is already percent-encoded once, encoding it
    // again gives the double encoding non-S3 services expect
    fn get_canonical_uri(&self, url: &Url) -> String {
        HttpClient::percent_encode_with_exclusion(
            url.path().trim_start_matches('/').trim_end_matches('/'),
            Some(&[b'/', b'.', b'-', b'_', b'~']),
        )
    }

    fn get_canonical_query_string(&self, query_string: Option<&str>) -> String {
        let Some(query) = query_string.filter(|s| !s.is_empty()) else {
            return String::new();
        };
        let mut parts: Vec<(&str, &str)> = query
            .split('&')
            .map(|p| p.split_once('=').unwrap_or((p, "")))
            .collect();
        parts.sort();

        parts
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<String>>()
            .join("&")
    }
}

fn sign(key: &[u8], msg: &[u8]) -> Vec<u8> {
    let mut hmac = Hmac::<Sha256>::new_from_slice(key)
        .expect("HMAC can take key of any size");
    hmac.update(msg);
    let result = hmac.finalize();
    result.into_bytes().to_vec()
}
