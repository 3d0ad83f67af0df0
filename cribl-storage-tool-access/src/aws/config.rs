//! AWS SDK configuration loading with optional profile and region overrides.

use crate::aws::{AwsError, AwsResult};
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_iam::error::DisplayErrorContext;
use log::{debug, info};

/// Profile/region overrides; `None` (or empty) defers to the environment and
/// shared config files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwsSettings {
    pub profile: Option<String>,
    pub region: Option<String>,
}

impl AwsSettings {
    pub fn new(profile: Option<String>, region: Option<String>) -> Self {
        Self {
            profile: profile.filter(|p| !p.is_empty()),
            region: region.filter(|r| !r.is_empty()),
        }
    }
}

/// Load the SDK configuration using the standard credential provider chain.
///
/// Fails when no region can be resolved or when the credential chain yields
/// no credentials (for example an unknown profile), so that setup problems
/// surface before any IAM or S3 call.
pub async fn load_sdk_config(settings: &AwsSettings) -> AwsResult<SdkConfig> {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    match settings.profile.as_deref() {
        Some(profile) => {
            debug!("Using AWS profile '{}'", profile);
            loader = loader.profile_name(profile);
        }
        None => debug!("Using default AWS profile"),
    }

    match settings.region.as_deref() {
        Some(region) => {
            debug!("Using AWS region '{}'", region);
            loader = loader.region(Region::new(region.to_string()));
        }
        None => debug!("Region not specified, will use AWS profile or environment"),
    }

    let config = loader.load().await;

    let region = config.region().ok_or_else(|| {
        AwsError::ConfigError(
            "no AWS region resolved; pass --region or configure one in the profile".to_string(),
        )
    })?;
    if settings.region.is_some() {
        info!("AWS config loaded with specified region '{}'", region);
    } else {
        info!("Using region '{}' from AWS profile or environment", region);
    }

    resolve_credentials(&config).await?;

    Ok(config)
}

/// Ask the configured provider chain for credentials once.
async fn resolve_credentials(config: &SdkConfig) -> AwsResult<()> {
    let provider = config.credentials_provider().ok_or_else(|| {
        AwsError::ConfigError("no AWS credentials provider configured".to_string())
    })?;

    provider.provide_credentials().await.map_err(|e| {
        AwsError::ConfigError(format!(
            "unable to resolve AWS credentials: {}",
            DisplayErrorContext(&e)
        ))
    })?;
    debug!("AWS credentials resolved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_credential_types::credential_fn::provide_credentials_fn;
    use aws_credential_types::provider::error::CredentialsError;
    use aws_credential_types::provider::SharedCredentialsProvider;
    use aws_credential_types::Credentials;

    #[test]
    fn test_settings_treat_empty_as_unset() {
        let settings = AwsSettings::new(Some(String::new()), Some(String::new()));
        assert_eq!(settings, AwsSettings::default());

        let settings = AwsSettings::new(Some("dev".into()), Some("us-west-2".into()));
        assert_eq!(settings.profile.as_deref(), Some("dev"));
        assert_eq!(settings.region.as_deref(), Some("us-west-2"));
    }

    #[tokio::test]
    async fn test_missing_credentials_provider_is_config_error() {
        let config = SdkConfig::builder().build();
        let err = resolve_credentials(&config).await.unwrap_err();
        assert!(matches!(err, AwsError::ConfigError(_)), "{err}");
    }

    #[tokio::test]
    async fn test_unresolvable_credentials_are_config_error() {
        let provider = provide_credentials_fn(|| async {
            Err(CredentialsError::not_loaded(
                "profile 'does-not-exist' not found",
            ))
        });
        let config = SdkConfig::builder()
            .credentials_provider(SharedCredentialsProvider::new(provider))
            .build();

        match resolve_credentials(&config).await {
            Err(AwsError::ConfigError(message)) => {
                assert!(
                    message.contains("unable to resolve AWS credentials"),
                    "{message}"
                );
            }
            other => panic!("Expected ConfigError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_static_credentials_resolve() {
        let credentials = Credentials::new("AKIDEXAMPLE", "example-secret", None, None, "test");
        let config = SdkConfig::builder()
            .credentials_provider(SharedCredentialsProvider::new(credentials))
            .build();

        assert!(resolve_credentials(&config).await.is_ok());
    }
}
