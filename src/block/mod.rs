//! A block runs exactly one catalog operation.
//!
//! [`Invoker::invoke`] validates the block configuration, resolves the
//! credentials (assuming a role when one is configured), builds a client for
//! the operation's service and republishes the response as one [`OutputEvent`].

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::aws::{
    BaseCredentials, ClientSettings, DelegationConnector, ServiceConnector, resolve_credentials,
};
use crate::catalog;
use crate::error::{Error, Result};

mod input;

pub use input::InvocationConfig;

/// Raw structured response of one operation call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OutputEvent(pub Value);

impl OutputEvent {
    pub fn into_value(self) -> Value {
        self.0
    }
}

/// Generic operation invoker. Holds no per-invocation state.
#[derive(Clone)]
pub struct Invoker {
    delegation: Arc<dyn DelegationConnector>,
    services: Arc<dyn ServiceConnector>,
    /// Host-level endpoint override, used when the block config sets none
    endpoint: Option<String>,
}

impl Invoker {
    pub fn new(
        delegation: Arc<dyn DelegationConnector>,
        services: Arc<dyn ServiceConnector>,
    ) -> Self {
        Self {
            delegation,
            services,
            endpoint: None,
        }
    }

    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub async fn invoke(
        &self,
        operation_id: &str,
        base: &BaseCredentials,
        config: &Value,
    ) -> Result<OutputEvent> {
        let operation = catalog::find(operation_id)
            .ok_or_else(|| Error::configuration(format!("unknown operation '{operation_id}'")))?;
        let config = InvocationConfig::parse(operation, config)?;

        info!("Invoking {} in {}", operation_id, config.region);

        let endpoint = config.endpoint.clone().or_else(|| self.endpoint.clone());
        if let Some(endpoint) = &endpoint {
            debug!("Endpoint override: {}", endpoint);
        }

        let credentials = resolve_credentials(
            self.delegation.as_ref(),
            base,
            config.assume_role_arn.as_deref(),
            &config.region,
            endpoint.as_deref(),
        )
        .await?;

        let client = self.services.connect(
            operation.service,
            ClientSettings {
                region: config.region.clone(),
                credentials,
                endpoint,
            },
        );

        let response = client.call(operation, &config.params).await?;
        debug!("{} completed", operation_id);

        Ok(OutputEvent(match response {
            Value::Null => Value::Object(Map::new()),
            other => other,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aws::{EffectiveCredentials, TemporaryCredentials};
    use crate::error::OperationError;
    use crate::testing::{MockDelegation, MockService, base_credentials, delegated};
    use serde_json::json;

    const ROLE_ARN: &str = "arn:aws:iam::111122223333:role/Example";

    fn invoker(delegation: &MockDelegation, services: &MockService) -> Invoker {
        Invoker::new(Arc::new(delegation.clone()), Arc::new(services.clone()))
    }

    fn temporary() -> EffectiveCredentials {
        EffectiveCredentials::Temporary(
            TemporaryCredentials::try_from(delegated("ASIATEMP", "secretTemp", "tokTemp"))
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn test_base_credentials_without_role() {
        let delegation = MockDelegation::new();
        let services = MockService::new();
        services.push_response(Ok(json!({"AccountLimits": [{"Name": "StackLimit", "Value": "2000"}]})));

        let event = invoker(&delegation, &services)
            .invoke(
                "cloudformation.DescribeAccountLimits",
                &base_credentials(),
                &json!({"region": "us-east-1"}),
            )
            .await
            .unwrap();

        assert_eq!(
            event.into_value(),
            json!({"AccountLimits": [{"Name": "StackLimit", "Value": "2000"}]})
        );
        assert_eq!(delegation.connection_count(), 0);

        let connections = services.connections();
        assert_eq!(connections.len(), 1);
        assert_eq!(connections[0].0, "cloudformation");
        assert_eq!(
            connections[0].1,
            ClientSettings {
                region: "us-east-1".to_string(),
                credentials: EffectiveCredentials::Base(base_credentials()),
                endpoint: None,
            }
        );

        let calls = services.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].operation, "cloudformation.DescribeAccountLimits");
        assert!(calls[0].params.is_empty());
    }

    #[tokio::test]
    async fn test_assumed_role_credentials_reach_target_client() {
        let delegation = MockDelegation::new();
        delegation.push_response(Ok(delegated("ASIATEMP", "secretTemp", "tokTemp")));
        let services = MockService::new();
        services.push_response(Ok(json!({"AccessKey": {"AccessKeyId": "AKIANEW"}})));

        let event = invoker(&delegation, &services)
            .invoke(
                "iam.CreateAccessKey",
                &base_credentials(),
                &json!({"region": "us-east-1", "assumeRoleArn": ROLE_ARN, "UserName": "alice"}),
            )
            .await
            .unwrap();

        assert_eq!(event.0, json!({"AccessKey": {"AccessKeyId": "AKIANEW"}}));

        let delegation_connections = delegation.connections();
        assert_eq!(delegation_connections.len(), 1);
        assert_eq!(
            delegation_connections[0].credentials,
            EffectiveCredentials::Base(base_credentials())
        );
        assert_eq!(delegation.requests()[0].role_arn, ROLE_ARN);

        let connections = services.connections();
        assert_eq!(connections.len(), 1);
        assert_eq!(connections[0].1.credentials, temporary());
        assert_eq!(services.calls()[0].params, *json!({"UserName": "alice"}).as_object().unwrap());
    }

    #[tokio::test]
    async fn test_incomplete_delegation_builds_no_target_client() {
        let delegation = MockDelegation::new();
        let mut incomplete = delegated("ASIATEMP", "secretTemp", "tokTemp");
        incomplete.session_token = None;
        delegation.push_response(Ok(incomplete));
        let services = MockService::new();

        let err = invoker(&delegation, &services)
            .invoke(
                "iam.CreateAccessKey",
                &base_credentials(),
                &json!({"region": "us-east-1", "assumeRoleArn": ROLE_ARN}),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, Error::CredentialResolution { .. }));
        assert!(err.to_string().contains("SessionToken"));
        assert!(services.connections().is_empty());
        assert!(services.calls().is_empty());
    }

    #[tokio::test]
    async fn test_delegation_rejection_builds_no_target_client() {
        let delegation = MockDelegation::new();
        delegation.push_response(Err(anyhow::anyhow!("AccessDenied: not authorized")));
        let services = MockService::new();

        let err = invoker(&delegation, &services)
            .invoke(
                "cloudformation.DescribeStacks",
                &base_credentials(),
                &json!({"region": "eu-west-1", "assumeRoleArn": ROLE_ARN}),
            )
            .await
            .unwrap_err();

        match err {
            Error::CredentialResolution { role_arn, reason } => {
                assert_eq!(role_arn, ROLE_ARN);
                assert!(reason.contains("AccessDenied"));
            }
            other => panic!("expected credential resolution error, got {other:?}"),
        }
        assert!(services.connections().is_empty());
    }

    #[tokio::test]
    async fn test_endpoint_reaches_both_clients() {
        let delegation = MockDelegation::new();
        delegation.push_response(Ok(delegated("ASIATEMP", "secretTemp", "tokTemp")));
        let services = MockService::new();

        invoker(&delegation, &services)
            .invoke(
                "lambda.GetAccountSettings",
                &base_credentials(),
                &json!({
                    "region": "ap-southeast-2",
                    "assumeRoleArn": ROLE_ARN,
                    "endpoint": "http://localhost:4566"
                }),
            )
            .await
            .unwrap();

        let delegation_settings = &delegation.connections()[0];
        assert_eq!(delegation_settings.region, "ap-southeast-2");
        assert_eq!(
            delegation_settings.endpoint.as_deref(),
            Some("http://localhost:4566")
        );

        let (service, settings) = &services.connections()[0];
        assert_eq!(*service, "lambda");
        assert_eq!(settings.region, "ap-southeast-2");
        assert_eq!(settings.endpoint.as_deref(), Some("http://localhost:4566"));
    }

    #[tokio::test]
    async fn test_block_endpoint_overrides_host_endpoint() {
        let delegation = MockDelegation::new();
        let services = MockService::new();
        let invoker = invoker(&delegation, &services)
            .with_endpoint(Some("http://host-endpoint:4566".to_string()));

        invoker
            .invoke(
                "sts.GetCallerIdentity",
                &base_credentials(),
                &json!({"region": "us-east-1"}),
            )
            .await
            .unwrap();
        invoker
            .invoke(
                "sts.GetCallerIdentity",
                &base_credentials(),
                &json!({"region": "us-east-1", "endpoint": "http://block-endpoint:4566"}),
            )
            .await
            .unwrap();

        let endpoints: Vec<Option<String>> = services
            .connections()
            .into_iter()
            .map(|(_, settings)| settings.endpoint)
            .collect();
        assert_eq!(
            endpoints,
            vec![
                Some("http://host-endpoint:4566".to_string()),
                Some("http://block-endpoint:4566".to_string())
            ]
        );
    }

    #[tokio::test]
    async fn test_each_invocation_assumes_role_again() {
        let delegation = MockDelegation::new();
        delegation.push_response(Ok(delegated("ASIAONE", "secretOne", "tokOne")));
        delegation.push_response(Ok(delegated("ASIATWO", "secretTwo", "tokTwo")));
        let services = MockService::new();
        let invoker = invoker(&delegation, &services);
        let config = json!({"region": "us-east-1", "assumeRoleArn": ROLE_ARN});

        for _ in 0..2 {
            invoker
                .invoke("sts.GetCallerIdentity", &base_credentials(), &config)
                .await
                .unwrap();
        }

        assert_eq!(delegation.request_count(), 2);
        let keys: Vec<String> = services
            .connections()
            .iter()
            .map(|(_, settings)| settings.credentials.access_key_id().to_string())
            .collect();
        assert_eq!(keys, ["ASIAONE", "ASIATWO"]);
    }

    #[tokio::test]
    async fn test_null_response_becomes_empty_object() {
        let delegation = MockDelegation::new();
        let services = MockService::new();
        services.push_response(Ok(Value::Null));

        let event = invoker(&delegation, &services)
            .invoke(
                "iam.DeleteAccessKey",
                &base_credentials(),
                &json!({"region": "us-east-1", "AccessKeyId": "AKIAOLD"}),
            )
            .await
            .unwrap();

        assert_eq!(event.0, json!({}));
    }

    #[tokio::test]
    async fn test_operation_error_propagates_unchanged() {
        let delegation = MockDelegation::new();
        let services = MockService::new();
        let failure = OperationError {
            operation: "cloudformation.DescribeStacks".to_string(),
            status: Some(400),
            code: Some("ValidationError".to_string()),
            message: "Stack with id missing does not exist".to_string(),
        };
        services.push_response(Err(failure.clone()));

        let err = invoker(&delegation, &services)
            .invoke(
                "cloudformation.DescribeStacks",
                &base_credentials(),
                &json!({"region": "us-east-1", "StackName": "missing"}),
            )
            .await
            .unwrap_err();

        match err {
            Error::Operation(op) => assert_eq!(op, failure),
            other => panic!("expected operation error, got {other:?}"),
        }
        assert_eq!(services.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_config_fails_before_any_client() {
        let delegation = MockDelegation::new();
        let services = MockService::new();
        let invoker = invoker(&delegation, &services);

        for (operation, config) in [
            ("cloudformation.Nope", json!({"region": "us-east-1"})),
            ("sts.GetCallerIdentity", json!({"assumeRoleArn": ROLE_ARN})),
            ("iam.DeleteAccessKey", json!({"region": "us-east-1"})),
        ] {
            let err = invoker
                .invoke(operation, &base_credentials(), &config)
                .await
                .unwrap_err();
            assert!(matches!(err, Error::Configuration(_)), "{operation}");
        }

        assert_eq!(delegation.connection_count(), 0);
        assert!(services.connections().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_invocations_are_independent() {
        let delegation = MockDelegation::new();
        let services = MockService::new();
        let invoker = invoker(&delegation, &services);
        let base = base_credentials();

        let regions = ["us-east-1", "eu-west-1", "ap-northeast-1"];
        let configs: Vec<Value> = regions.iter().map(|r| json!({"region": r})).collect();
        let results = invoke_concurrently(&invoker, &base, &configs).await;

        assert!(results.iter().all(|result| result.is_ok()));
        let mut seen: Vec<String> = services
            .connections()
            .into_iter()
            .map(|(_, settings)| settings.region)
            .collect();
        seen.sort();
        assert_eq!(seen, ["ap-northeast-1", "eu-west-1", "us-east-1"]);
    }

    async fn invoke_concurrently(
        invoker: &Invoker,
        base: &BaseCredentials,
        configs: &[Value],
    ) -> Vec<Result<OutputEvent>> {
        let handles: Vec<_> = configs
            .iter()
            .cloned()
            .map(|config| {
                let invoker = invoker.clone();
                let base = base.clone();
                tokio::spawn(async move {
                    invoker
                        .invoke("sts.GetCallerIdentity", &base, &config)
                        .await
                })
            })
            .collect();

        let mut results = Vec::new();
        for handle in handles {
            results.push(handle.await.unwrap());
        }
        results
    }
}
