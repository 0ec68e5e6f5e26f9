use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Args;
use serde_json::{Map, Value};
use tokio::fs;
use tracing::info;

use crate::{
    aws::{HttpServiceConnector, StsConnector, credentials},
    block::Invoker,
    config::{self, HostConfig},
    constants::{ASSUME_ROLE_ARN_KEY, REGION_KEY},
};

#[derive(Debug, Clone, Args)]
pub struct InvokeCommand {
    #[arg(help = "Operation id, e.g. cloudformation.DescribeAccountLimits")]
    pub operation: String,

    #[arg(short = 'r', long, help = "Target region (overrides the input and profile)")]
    pub region: Option<String>,

    #[arg(long, help = "IAM role to assume before calling the operation")]
    pub assume_role_arn: Option<String>,

    #[arg(
        short = 'i',
        long,
        conflicts_with = "input_file",
        help = "Block configuration as a JSON object"
    )]
    pub input: Option<String>,

    #[arg(short = 'f', long, help = "Read the block configuration from a JSON file")]
    pub input_file: Option<PathBuf>,

    #[arg(long, help = "Pretty-print the output event")]
    pub pretty: bool,
}

impl InvokeCommand {
    pub async fn execute(self, profile: &str, endpoint_url: Option<String>) -> Result<()> {
        let host = config::load(profile)
            .await
            .with_context(|| format!("Failed to load configuration for profile '{profile}'"))?;

        let input = self.read_input().await?;
        let block_config = self.merge_config(input, &host)?;
        let endpoint = endpoint_url.or(host.endpoint_url);

        let base = credentials::load_base_credentials(profile).await?;

        let invoker = Invoker::new(
            Arc::new(StsConnector),
            Arc::new(HttpServiceConnector::new()?),
        )
        .with_endpoint(endpoint);

        info!("Running block {}", self.operation);
        let event = invoker
            .invoke(&self.operation, &base, &block_config)
            .await
            .with_context(|| format!("Block {} failed", self.operation))?;

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&event)?
        } else {
            serde_json::to_string(&event)?
        };
        println!("{rendered}");

        Ok(())
    }

    async fn read_input(&self) -> Result<Value> {
        let raw = match (&self.input, &self.input_file) {
            (Some(input), _) => input.clone(),
            (None, Some(path)) => fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read input file: {}", path.display()))?,
            (None, None) => return Ok(Value::Object(Map::new())),
        };

        serde_json::from_str(&raw).context("Block configuration is not valid JSON")
    }

    /// Apply command-line flags and profile defaults on top of the input object
    fn merge_config(&self, input: Value, host: &HostConfig) -> Result<Value> {
        let Value::Object(mut fields) = input else {
            bail!("Block configuration must be a JSON object");
        };

        if let Some(region) = &self.region {
            fields.insert(REGION_KEY.to_string(), Value::String(region.clone()));
        } else if let (None | Some(Value::Null), Some(region)) =
            (fields.get(REGION_KEY), &host.region)
        {
            fields.insert(REGION_KEY.to_string(), Value::String(region.clone()));
        }

        if let Some(arn) = &self.assume_role_arn {
            fields.insert(ASSUME_ROLE_ARN_KEY.to_string(), Value::String(arn.clone()));
        }

        Ok(Value::Object(fields))
    }
}
