use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_sts::{
    Client as StsClient,
    config::{BehaviorVersion, Config as StsConfig, Region},
    types::Credentials as StsCredentials,
};
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use super::{ClientSettings, DelegatedCredentials};
use crate::constants::{MAX_SESSION_NAME_LENGTH, SESSION_NAME_PREFIX};

/// One AssumeRole call: which role, under which session name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssumptionRequest {
    pub role_arn: String,
    pub session_name: String,
}

impl RoleAssumptionRequest {
    /// Build a request with a freshly generated session name
    pub fn new(role_arn: impl Into<String>) -> Self {
        Self {
            role_arn: role_arn.into(),
            session_name: generate_session_name(),
        }
    }
}

/// Client performing the role assumption exchange
#[async_trait]
pub trait DelegationClient: Send + Sync {
    async fn assume_role(&self, request: &RoleAssumptionRequest) -> Result<DelegatedCredentials>;
}

/// Builds delegation clients from constructor settings
pub trait DelegationConnector: Send + Sync {
    fn connect(&self, settings: &ClientSettings) -> Box<dyn DelegationClient>;
}

/// Delegation through AWS STS
#[derive(Debug, Clone, Default)]
pub struct StsConnector;

impl DelegationConnector for StsConnector {
    fn connect(&self, settings: &ClientSettings) -> Box<dyn DelegationClient> {
        let mut builder = StsConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()))
            .credentials_provider(settings.credentials.to_sdk_credentials());

        if let Some(endpoint) = &settings.endpoint {
            debug!("STS endpoint override: {}", endpoint);
            builder = builder.endpoint_url(endpoint);
        }

        Box::new(StsDelegationClient {
            client: StsClient::from_conf(builder.build()),
        })
    }
}

#[derive(Debug, Clone)]
pub struct StsDelegationClient {
    client: StsClient,
}

#[async_trait]
impl DelegationClient for StsDelegationClient {
    async fn assume_role(&self, request: &RoleAssumptionRequest) -> Result<DelegatedCredentials> {
        info!("Calling AWS STS AssumeRole");
        debug!("Role ARN: {}", request.role_arn);
        debug!("Session name: {}", request.session_name);

        let response = self
            .client
            .assume_role()
            .role_arn(&request.role_arn)
            .role_session_name(&request.session_name)
            .send()
            .await
            .context("STS AssumeRole request failed")?;

        Ok(delegated_from_sts(response.credentials()))
    }
}

/// Map the STS credential block, treating empty strings as missing
fn delegated_from_sts(credentials: Option<&StsCredentials>) -> DelegatedCredentials {
    let Some(creds) = credentials else {
        return DelegatedCredentials::default();
    };

    let non_empty = |value: &str| (!value.is_empty()).then(|| value.to_string());

    DelegatedCredentials {
        access_key_id: non_empty(creds.access_key_id()),
        secret_access_key: non_empty(creds.secret_access_key()),
        session_token: non_empty(creds.session_token()),
        expiration: Some(*creds.expiration()),
    }
}

/// Session name of the form `aws-blocks-20261018T120000123Z-1a2b3c4d`,
/// unique per call.
pub fn generate_session_name() -> String {
    let timestamp = Utc::now().format("%Y%m%dT%H%M%S%3fZ");
    let suffix = Uuid::new_v4().simple().to_string();
    let mut name = format!("{SESSION_NAME_PREFIX}-{timestamp}-{}", &suffix[..8]);
    name.truncate(MAX_SESSION_NAME_LENGTH);
    name
}
