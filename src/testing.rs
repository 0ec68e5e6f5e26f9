//! Recording doubles for the delegation and service seams.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::aws::{
    BaseCredentials, ClientSettings, DelegatedCredentials, DelegationClient, DelegationConnector,
    RoleAssumptionRequest, ServiceClient, ServiceConnector,
};
use crate::catalog::{Operation, Service};
use crate::error::OperationError;

pub fn base_credentials() -> BaseCredentials {
    BaseCredentials::new("AKIABASE", "secretBase", None).unwrap()
}

pub fn delegated(access_key_id: &str, secret: &str, token: &str) -> DelegatedCredentials {
    DelegatedCredentials {
        access_key_id: Some(access_key_id.to_string()),
        secret_access_key: Some(secret.to_string()),
        session_token: Some(token.to_string()),
        expiration: None,
    }
}

#[derive(Default)]
struct DelegationState {
    connections: Vec<ClientSettings>,
    requests: Vec<RoleAssumptionRequest>,
    responses: VecDeque<anyhow::Result<DelegatedCredentials>>,
}

/// Delegation connector replaying queued responses
#[derive(Clone, Default)]
pub struct MockDelegation {
    state: Arc<Mutex<DelegationState>>,
}

impl MockDelegation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, response: anyhow::Result<DelegatedCredentials>) {
        self.state.lock().unwrap().responses.push_back(response);
    }

    pub fn connections(&self) -> Vec<ClientSettings> {
        self.state.lock().unwrap().connections.clone()
    }

    pub fn connection_count(&self) -> usize {
        self.state.lock().unwrap().connections.len()
    }

    pub fn requests(&self) -> Vec<RoleAssumptionRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }
}

impl DelegationConnector for MockDelegation {
    fn connect(&self, settings: &ClientSettings) -> Box<dyn DelegationClient> {
        self.state.lock().unwrap().connections.push(settings.clone());
        Box::new(self.clone())
    }
}

#[async_trait]
impl DelegationClient for MockDelegation {
    async fn assume_role(
        &self,
        request: &RoleAssumptionRequest,
    ) -> anyhow::Result<DelegatedCredentials> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request.clone());
        state
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(anyhow::anyhow!("no delegation response queued")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub operation: String,
    pub params: Map<String, Value>,
}

#[derive(Default)]
struct ServiceState {
    connections: Vec<(&'static str, ClientSettings)>,
    calls: Vec<RecordedCall>,
    responses: VecDeque<Result<Value, OperationError>>,
}

/// Service connector recording constructor arguments and calls
#[derive(Clone, Default)]
pub struct MockService {
    state: Arc<Mutex<ServiceState>>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, response: Result<Value, OperationError>) {
        self.state.lock().unwrap().responses.push_back(response);
    }

    /// `(service id, settings)` for every client built
    pub fn connections(&self) -> Vec<(&'static str, ClientSettings)> {
        self.state.lock().unwrap().connections.clone()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().unwrap().calls.clone()
    }
}

impl ServiceConnector for MockService {
    fn connect(&self, service: &'static Service, settings: ClientSettings) -> Box<dyn ServiceClient> {
        self.state
            .lock()
            .unwrap()
            .connections
            .push((service.id, settings));
        Box::new(self.clone())
    }
}

#[async_trait]
impl ServiceClient for MockService {
    async fn call(
        &self,
        operation: &Operation,
        params: &Map<String, Value>,
    ) -> Result<Value, OperationError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(RecordedCall {
            operation: operation.id(),
            params: params.clone(),
        });
        state
            .responses
            .pop_front()
            .unwrap_or_else(|| Ok(Value::Object(Map::new())))
    }
}
