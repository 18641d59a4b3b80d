use std::env;

use url::Url;

use super::aws_credentials::AWSCredentials;
use super::aws_profile::{shared_file_path, ProfileFile, DEFAULT_PROFILE};
use crate::{CopyError, EnvironmentConfig};

/// Environment override for the service endpoint, e.g. a VPC endpoint.
pub const ENDPOINT_URL_KEY: &str = "QUICKSIGHT_ENDPOINT_URL";

/// Completes `config` with region, credentials and endpoint settings from
/// the process environment and the AWS shared config/credentials files.
///
/// Keys already present in `config` win. The `region` key (as set from the
/// command line) is consulted first when non-empty.
pub fn validate_config(
    config: &mut EnvironmentConfig,
) -> Result<(), CopyError> {
    validate_config_with(config, &|key| env::var(key).ok())
}

pub(crate) fn validate_config_with(
    config: &mut EnvironmentConfig,
    env_var: &dyn Fn(&str) -> Option<String>,
) -> Result<(), CopyError> {
    let env_var = |key: &str| env_var(key).filter(|value| !value.is_empty());

    let profile = config
        .get_non_empty("AWS_PROFILE")
        .map(str::to_string)
        .or_else(|| env_var("AWS_PROFILE"))
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string());

    // Set AWS_REGION
    if config.get_non_empty("AWS_REGION").is_none() {
        let region = match config.get_non_empty("region") {
            Some(region) => Some(region.to_string()),
            None => match env_var("AWS_REGION")
                .or_else(|| env_var("AWS_DEFAULT_REGION"))
            {
                Some(region) => Some(region),
                None => load_shared_file(&env_var, "AWS_CONFIG_FILE", "config")
                    .transpose()?
                    .and_then(|file| {
                        file.get(&profile, "region").map(str::to_string)
                    }),
            },
        };
        let Some(region) = region else {
            return Err(CopyError::ConfigError(
                "no region given on the command line, in AWS_REGION or in \
                 the shared config file"
                    .to_string(),
            ));
        };
        config.insert("AWS_REGION".to_string(), region);
    }

    // Set AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, AWS_SESSION_TOKEN
    if !config.contains_key("AWS_ACCESS_KEY_ID") {
        match (env_var("AWS_ACCESS_KEY_ID"), env_var("AWS_SECRET_ACCESS_KEY"))
        {
            (Some(access_key), Some(secret_key)) => {
                config.insert("AWS_ACCESS_KEY_ID".to_string(), access_key);
                config.insert("AWS_SECRET_ACCESS_KEY".to_string(), secret_key);
                if let Some(session_token) = env_var("AWS_SESSION_TOKEN") {
                    config.insert(
                        "AWS_SESSION_TOKEN".to_string(),
                        session_token,
                    );
                }
            }
            _ => {
                let profiles = load_shared_file(
                    &env_var,
                    "AWS_SHARED_CREDENTIALS_FILE",
                    "credentials",
                )
                .transpose()?
                .unwrap_or_default();
                let credentials =
                    AWSCredentials::from_profile(&profiles, &profile)
                        .map_err(|_| {
                            CopyError::ConfigError(format!(
                                "AWS_ACCESS_KEY_ID not found in the \
                                 environment or in profile '{}' of the \
                                 shared credentials file",
                                profile
                            ))
                        })?;
                log::debug!("using credentials of profile '{}'", profile);
                config.insert(
                    "AWS_ACCESS_KEY_ID".to_string(),
                    credentials.access_key().to_string(),
                );
                config.insert(
                    "AWS_SECRET_ACCESS_KEY".to_string(),
                    credentials.secret_key().to_string(),
                );
                if let Some(session_token) = credentials.session_token() {
                    config.insert(
                        "AWS_SESSION_TOKEN".to_string(),
                        session_token.to_string(),
                    );
                }
            }
        }
    }

    // Set QUICKSIGHT_ENDPOINT_URL (optional)
    if !config.contains_key(ENDPOINT_URL_KEY) {
        if let Some(endpoint_url) = env_var(ENDPOINT_URL_KEY) {
            config.insert(ENDPOINT_URL_KEY.to_string(), endpoint_url);
        }
    }

    Ok(())
}

fn load_shared_file(
    env_var: &dyn Fn(&str) -> Option<String>,
    override_key: &str,
    file_name: &str,
) -> Option<Result<ProfileFile, CopyError>> {
    let path = shared_file_path(env_var(override_key).as_deref(), file_name)?;
    Some(ProfileFile::load(&path).map_err(|e| {
        CopyError::ConfigError(format!(
            "unable to read {}: {}",
            path.display(),
            e
        ))
    }))
}

/// Resolved execution context of a QuickSight client.
#[derive(Debug, Clone)]
pub struct QuickSightClientConfig {
    region: String,
    endpoint_url: String,
    credentials: AWSCredentials,
}

impl QuickSightClientConfig {
    pub fn new(
        region: &str,
        endpoint_url: Option<&str>,
        credentials: AWSCredentials,
    ) -> Result<Self, CopyError> {
        if region.is_empty()
            || !region
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(CopyError::ConfigError(format!(
                "invalid region '{}'",
                region
            )));
        }
        let endpoint_url = match endpoint_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://quicksight.{}.amazonaws.com", region),
        };
        let parsed = Url::parse(&endpoint_url).map_err(|e| {
            CopyError::ConfigError(format!(
                "invalid endpoint url '{}': {}",
                endpoint_url, e
            ))
        })?;
        if parsed.host_str().is_none() {
            return Err(CopyError::ConfigError(format!(
                "endpoint url '{}' has no host",
                endpoint_url
            )));
        }

        Ok(Self {
            region: region.to_string(),
            endpoint_url,
            credentials,
        })
    }

    /// Builds the client configuration from a config completed by
    /// `validate_config`.
    pub fn from_config(config: &EnvironmentConfig) -> Result<Self, CopyError> {
        let missing = |key: &str| {
            CopyError::ConfigError(format!("{} is not set", key))
        };
        let region = config
            .get_non_empty("AWS_REGION")
            .ok_or_else(|| missing("AWS_REGION"))?;
        let access_key = config
            .get_non_empty("AWS_ACCESS_KEY_ID")
            .ok_or_else(|| missing("AWS_ACCESS_KEY_ID"))?;
        let secret_key = config
            .get_non_empty("AWS_SECRET_ACCESS_KEY")
            .ok_or_else(|| missing("AWS_SECRET_ACCESS_KEY"))?;
        let credentials = AWSCredentials::new(
            access_key.to_string(),
            secret_key.to_string(),
            config.get_non_empty("AWS_SESSION_TOKEN").map(str::to_string),
        );
        Self::new(region, config.get_non_empty(ENDPOINT_URL_KEY), credentials)
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    pub fn credentials(&self) -> &AWSCredentials {
        &self.credentials
    }
}
