use super::aws_profile::ProfileFile;
use crate::CopyError;

#[derive(Clone)]
pub struct AWSCredentials {
    access_key: String,
    secret_key: String,
    session_token: Option<String>,
}

impl std::fmt::Debug for AWSCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AWSCredentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("session_token", &self.session_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl AWSCredentials {
    pub fn new(
        access_key: String,
        secret_key: String,
        session_token: Option<String>,
    ) -> AWSCredentials {
        AWSCredentials {
            access_key,
            secret_key,
            session_token,
        }
    }

    /// Static keys from a named profile of the shared credentials file.
    pub fn from_profile(
        profiles: &ProfileFile,
        profile: &str,
    ) -> Result<AWSCredentials, CopyError> {
        let access_key =
            profiles.get(profile, "aws_access_key_id").ok_or_else(|| {
                CopyError::ConfigError(format!(
                    "aws_access_key_id not found in profile '{}'",
                    profile
                ))
            })?;
        let secret_key =
            profiles.get(profile, "aws_secret_access_key").ok_or_else(|| {
                CopyError::ConfigError(format!(
                    "aws_secret_access_key not found in profile '{}'",
                    profile
                ))
            })?;
        Ok(AWSCredentials {
            access_key: access_key.to_string(),
            secret_key: secret_key.to_string(),
            session_token: profiles
                .get(profile, "aws_session_token")
                .map(str::to_string),
        })
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }
}
