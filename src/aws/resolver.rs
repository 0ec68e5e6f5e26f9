use tracing::{debug, info};

use super::{
    BaseCredentials, ClientSettings, DelegationConnector, EffectiveCredentials,
    RoleAssumptionRequest, TemporaryCredentials,
};
use crate::error::{Error, Result};

/// Produce the credentials for exactly one outgoing API call.
///
/// Without a role ARN the base credentials are returned unchanged and no
/// delegation client is built. With one, a delegation client scoped to
/// `region` (and `endpoint`, when given) exchanges the base credentials for
/// temporary ones. Nothing is cached: every call with a role ARN performs its
/// own exchange.
pub async fn resolve_credentials(
    connector: &dyn DelegationConnector,
    base: &BaseCredentials,
    role_arn: Option<&str>,
    region: &str,
    endpoint: Option<&str>,
) -> Result<EffectiveCredentials> {
    let Some(role_arn) = role_arn else {
        debug!("No role to assume, using base credentials");
        return Ok(EffectiveCredentials::Base(base.clone()));
    };

    info!("Assuming role: {}", role_arn);
    debug!("Delegation region: {}", region);

    let settings = ClientSettings {
        region: region.to_string(),
        credentials: EffectiveCredentials::Base(base.clone()),
        endpoint: endpoint.map(String::from),
    };
    let client = connector.connect(&settings);

    let request = RoleAssumptionRequest::new(role_arn);
    let delegated = client
        .assume_role(&request)
        .await
        .map_err(|e| Error::CredentialResolution {
            role_arn: role_arn.to_string(),
            reason: format!("{e:#}"),
        })?;

    let temporary = TemporaryCredentials::try_from(delegated).map_err(|missing| {
        Error::CredentialResolution {
            role_arn: role_arn.to_string(),
            reason: format!("delegation response is missing {missing}"),
        }
    })?;

    info!("Obtained temporary credentials for role: {}", role_arn);
    Ok(EffectiveCredentials::Temporary(temporary))
}
