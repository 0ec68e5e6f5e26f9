use anyhow::{Result, bail};
use clap::Args;

use crate::catalog;

#[derive(Debug, Clone, Args)]
pub struct ListCommand {
    #[arg(short = 's', long, help = "Only list operations of this service, e.g. iam")]
    pub service: Option<String>,
}

impl ListCommand {
    pub fn execute(self) -> Result<()> {
        for line in self.render()? {
            println!("{line}");
        }
        Ok(())
    }

    fn render(&self) -> Result<Vec<String>> {
        if let Some(service) = &self.service {
            if !catalog::services().any(|s| s.id == service.as_str()) {
                let known: Vec<&str> = catalog::services().map(|s| s.id).collect();
                bail!(
                    "Unknown service '{}'. Known services: {}",
                    service,
                    known.join(", ")
                );
            }
        }

        let operations: Vec<_> = catalog::operations()
            .filter(|op| self.service.as_deref().is_none_or(|id| op.service.id == id))
            .collect();

        let width = operations
            .iter()
            .map(|op| op.id().len())
            .max()
            .unwrap_or_default();

        Ok(operations
            .iter()
            .map(|op| format!("{:width$}  {}", op.id(), op.description))
            .collect())
    }
}
