use url::Url;

use crate::catalog::Service;
use crate::error::{Error, Result};

/// Where to send a request and which region to sign it for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEndpoint {
    /// Base URL without a trailing slash
    pub url: String,
    pub signing_region: String,
}

/// Resolve the endpoint of `service` in `region`, honoring an explicit override
pub fn resolve_endpoint(
    service: &Service,
    region: &str,
    endpoint_override: Option<&str>,
) -> Result<ResolvedEndpoint> {
    validate_region(region)?;

    let (host, signing_region) = if service.global {
        let (host, home) = global_host(service.endpoint_prefix, region);
        (host, home.to_string())
    } else {
        (
            format!(
                "{}.{region}.{}",
                service.endpoint_prefix,
                partition_domain(region)
            ),
            region.to_string(),
        )
    };

    let url = match endpoint_override {
        Some(endpoint) => validate_endpoint(endpoint)?,
        None => format!("https://{host}"),
    };

    Ok(ResolvedEndpoint {
        url,
        signing_region,
    })
}

/// A region becomes part of the host name and the signing scope, so it must
/// be a single DNS label of lowercase letters, digits and hyphens
pub fn validate_region(region: &str) -> Result<()> {
    if region.is_empty() {
        return Err(Error::configuration("region must not be empty"));
    }

    let valid = region
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        && !region.starts_with('-')
        && !region.ends_with('-');

    if valid {
        Ok(())
    } else {
        Err(Error::configuration(format!(
            "region '{region}' is not a valid region name"
        )))
    }
}

/// Check that an endpoint is an absolute http(s) URL and normalize it
pub fn validate_endpoint(endpoint: &str) -> Result<String> {
    let parsed = Url::parse(endpoint)
        .map_err(|e| Error::configuration(format!("invalid endpoint '{endpoint}': {e}")))?;

    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => {
            Ok(endpoint.trim_end_matches('/').to_string())
        }
        _ => Err(Error::configuration(format!(
            "endpoint '{endpoint}' must be an http or https URL"
        ))),
    }
}

fn partition_domain(region: &str) -> &'static str {
    match region {
        r if r.starts_with("cn-") => "amazonaws.com.cn",
        _ => "amazonaws.com",
    }
}

/// Host and signing region of a partition-global service
fn global_host(prefix: &str, region: &str) -> (String, &'static str) {
    match region {
        r if r.starts_with("us-gov-") => (format!("{prefix}.us-gov.amazonaws.com"), "us-gov-west-1"),
        r if r.starts_with("cn-") => (format!("{prefix}.cn-north-1.amazonaws.com.cn"), "cn-north-1"),
        _ => (format!("{prefix}.amazonaws.com"), "us-east-1"),
    }
}
