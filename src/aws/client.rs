use std::time::SystemTime;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use aws_sigv4::http_request::{SignableBody, SignableRequest, SigningSettings, sign};
use aws_sigv4::sign::v4;
use serde_json::{Map, Value};
use tracing::debug;

use super::ClientSettings;
use super::endpoint::resolve_endpoint;
use crate::catalog::{Operation, Service};
use crate::error::OperationError;
use crate::protocol::{self, HttpRequest, HttpResponse};

/// Client bound to one service, region and credential set
#[async_trait]
pub trait ServiceClient: Send + Sync {
    async fn call(
        &self,
        operation: &Operation,
        params: &Map<String, Value>,
    ) -> Result<Value, OperationError>;
}

/// Builds target service clients from constructor settings
pub trait ServiceConnector: Send + Sync {
    fn connect(&self, service: &'static Service, settings: ClientSettings)
    -> Box<dyn ServiceClient>;
}

/// Connector producing SigV4-signed HTTP clients
#[derive(Debug, Clone)]
pub struct HttpServiceConnector {
    http: reqwest::Client,
}

impl HttpServiceConnector {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { http })
    }
}

impl ServiceConnector for HttpServiceConnector {
    fn connect(
        &self,
        service: &'static Service,
        settings: ClientSettings,
    ) -> Box<dyn ServiceClient> {
        Box::new(SignedServiceClient {
            http: self.http.clone(),
            service,
            settings,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SignedServiceClient {
    http: reqwest::Client,
    service: &'static Service,
    settings: ClientSettings,
}

#[async_trait]
impl ServiceClient for SignedServiceClient {
    async fn call(
        &self,
        operation: &Operation,
        params: &Map<String, Value>,
    ) -> Result<Value, OperationError> {
        let id = operation.id();
        let request = protocol::encode_request(operation, params)?;

        let endpoint = resolve_endpoint(
            self.service,
            &self.settings.region,
            self.settings.endpoint.as_deref(),
        )
        .map_err(|e| OperationError::local(&id, e.to_string()))?;
        let url = format!("{}{}", endpoint.url, request.path);

        debug!("{} {}", request.method, url);

        let headers = sign_request(
            &self.settings,
            self.service.signing_name,
            &endpoint.signing_region,
            &url,
            &request,
        )
        .map_err(|e| OperationError::local(&id, format!("{e:#}")))?;

        let response = self
            .send(&url, request, headers)
            .await
            .map_err(|e| OperationError::local(&id, format!("{e:#}")))?;

        debug!("{} responded with HTTP {}", id, response.status);
        protocol::decode_response(operation, &response)
    }
}

impl SignedServiceClient {
    async fn send(
        &self,
        url: &str,
        request: HttpRequest,
        headers: Vec<(String, String)>,
    ) -> Result<HttpResponse> {
        let method: reqwest::Method = request.method.parse().context("Invalid HTTP method")?;
        let mut builder = self.http.request(method, url);

        for (name, value) in &headers {
            builder = builder.header(name, value);
        }
        if !request.body.is_empty() {
            builder = builder.body(request.body);
        }

        let response = builder.send().await.context("HTTP request failed")?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| (k.as_str().to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response
            .bytes()
            .await
            .context("Failed to read response body")?
            .to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Sign a request with SigV4, returning the full header list to send
fn sign_request(
    settings: &ClientSettings,
    signing_name: &str,
    signing_region: &str,
    url: &str,
    request: &HttpRequest,
) -> Result<Vec<(String, String)>> {
    let parsed_url = url.parse::<url::Url>().context("Failed to parse URL")?;

    let signable_request = SignableRequest::new(
        request.method,
        parsed_url.as_str(),
        request
            .headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str())),
        SignableBody::Bytes(&request.body),
    )
    .map_err(|e| anyhow!("Failed to create signable request: {}", e))?;

    let identity = settings.credentials.to_sdk_credentials().into();

    let signing_params = v4::SigningParams::builder()
        .identity(&identity)
        .region(signing_region)
        .name(signing_name)
        .time(SystemTime::now())
        .settings(SigningSettings::default())
        .build()
        .map_err(|e| anyhow!("Failed to build signing params: {}", e))?
        .into();

    let (instructions, _signature) = sign(signable_request, &signing_params)
        .map_err(|e| anyhow!("Failed to sign request: {}", e))?
        .into_parts();

    let mut headers = request.headers.clone();
    for (name, value) in instructions.headers() {
        headers.push((name.to_string(), value.to_string()));
    }
    Ok(headers)
}
