use std::fmt;

use aws_smithy_types::DateTime;

use crate::error::{Error, Result};

pub mod client;
pub mod credentials;
pub mod endpoint;
pub mod resolver;
pub mod sts;

pub use client::{HttpServiceConnector, ServiceClient, ServiceConnector};
pub use resolver::resolve_credentials;
pub use sts::{DelegationClient, DelegationConnector, RoleAssumptionRequest, StsConnector};

const REDACTED: &str = "** redacted **";

/// Long-lived or session credentials supplied by the host
#[derive(Clone, PartialEq, Eq)]
pub struct BaseCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl BaseCredentials {
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Result<Self> {
        let access_key_id = access_key_id.into();
        let secret_access_key = secret_access_key.into();

        if access_key_id.is_empty() {
            return Err(Error::configuration("access key id must not be empty"));
        }
        if secret_access_key.is_empty() {
            return Err(Error::configuration("secret access key must not be empty"));
        }

        Ok(Self {
            access_key_id,
            secret_access_key,
            // An empty token is the same as no token
            session_token: session_token.filter(|token| !token.is_empty()),
        })
    }
}

impl fmt::Debug for BaseCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &REDACTED)
            .field("session_token", &self.session_token.as_ref().map(|_| REDACTED))
            .finish()
    }
}

/// Credential set as returned by the delegation service, fields possibly missing
#[derive(Clone, Default, PartialEq)]
pub struct DelegatedCredentials {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
    pub expiration: Option<DateTime>,
}

impl fmt::Debug for DelegatedCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegatedCredentials")
            .field("access_key_id", &self.access_key_id)
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(|_| REDACTED),
            )
            .field("session_token", &self.session_token.as_ref().map(|_| REDACTED))
            .field("expiration", &self.expiration)
            .finish()
    }
}

/// Short-lived credentials obtained by assuming a role
#[derive(Clone, PartialEq)]
pub struct TemporaryCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
    pub expiration: Option<DateTime>,
}

impl TryFrom<DelegatedCredentials> for TemporaryCredentials {
    /// Name of the first missing field
    type Error = &'static str;

    fn try_from(delegated: DelegatedCredentials) -> std::result::Result<Self, Self::Error> {
        fn required(
            value: Option<String>,
            name: &'static str,
        ) -> std::result::Result<String, &'static str> {
            value.filter(|v| !v.is_empty()).ok_or(name)
        }

        Ok(Self {
            access_key_id: required(delegated.access_key_id, "AccessKeyId")?,
            secret_access_key: required(delegated.secret_access_key, "SecretAccessKey")?,
            session_token: required(delegated.session_token, "SessionToken")?,
            expiration: delegated.expiration,
        })
    }
}

impl fmt::Debug for TemporaryCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemporaryCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &REDACTED)
            .field("session_token", &REDACTED)
            .field("expiration", &self.expiration)
            .finish()
    }
}

/// The credentials actually used to sign one target operation call
#[derive(Debug, Clone, PartialEq)]
pub enum EffectiveCredentials {
    /// No role was assumed; the host's credentials are used as-is
    Base(BaseCredentials),
    /// Credentials returned by the role assumption
    Temporary(TemporaryCredentials),
}

impl EffectiveCredentials {
    pub fn access_key_id(&self) -> &str {
        match self {
            Self::Base(creds) => &creds.access_key_id,
            Self::Temporary(creds) => &creds.access_key_id,
        }
    }

    pub fn secret_access_key(&self) -> &str {
        match self {
            Self::Base(creds) => &creds.secret_access_key,
            Self::Temporary(creds) => &creds.secret_access_key,
        }
    }

    pub fn session_token(&self) -> Option<&str> {
        match self {
            Self::Base(creds) => creds.session_token.as_deref(),
            Self::Temporary(creds) => Some(&creds.session_token),
        }
    }

    pub fn is_assumed(&self) -> bool {
        matches!(self, Self::Temporary(_))
    }

    /// Convert into the SDK credential type, tagged with where it came from
    pub fn to_sdk_credentials(&self) -> aws_credential_types::Credentials {
        let provider_name = if self.is_assumed() {
            "aws-blocks-assumed-role"
        } else {
            "aws-blocks-base"
        };

        aws_credential_types::Credentials::new(
            self.access_key_id(),
            self.secret_access_key(),
            self.session_token().map(String::from),
            None,
            provider_name,
        )
    }
}

/// Constructor arguments shared by the delegation client and the target client
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    pub region: String,
    pub credentials: EffectiveCredentials,
    pub endpoint: Option<String>,
}
