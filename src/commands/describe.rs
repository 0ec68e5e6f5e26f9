use anyhow::{Context, Result};
use clap::Args;

use crate::catalog;

#[derive(Debug, Clone, Args)]
pub struct DescribeCommand {
    #[arg(help = "Operation id, e.g. iam.CreateAccessKey")]
    pub operation: String,
}

impl DescribeCommand {
    pub fn execute(self) -> Result<()> {
        let operation = catalog::find(&self.operation).with_context(|| {
            format!(
                "Unknown operation '{}'. Run `aws-blocks list` to see available operations",
                self.operation
            )
        })?;

        println!("{}", serde_json::to_string_pretty(&operation.schema())?);
        Ok(())
    }
}
