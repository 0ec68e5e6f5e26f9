use anyhow::{Context, Result};
use aws_config::BehaviorVersion;
use aws_credential_types::provider::ProvideCredentials;
use tracing::debug;

use super::BaseCredentials;

/// Load the host's credentials for `profile` through the standard AWS chain
/// (environment, shared config/credentials files, SSO, instance metadata)
pub async fn load_base_credentials(profile: &str) -> Result<BaseCredentials> {
    let config = aws_config::defaults(BehaviorVersion::latest())
        .profile_name(profile)
        .load()
        .await;

    let provider = config
        .credentials_provider()
        .context("No AWS credentials provider available")?;

    let credentials = provider
        .provide_credentials()
        .await
        .with_context(|| format!("Failed to load AWS credentials for profile '{profile}'"))?;

    debug!(
        "Loaded base credentials {} for profile {}",
        credentials.access_key_id(),
        profile
    );

    BaseCredentials::new(
        credentials.access_key_id(),
        credentials.secret_access_key(),
        credentials.session_token().map(String::from),
    )
    .context("AWS credential chain returned incomplete credentials")
}
