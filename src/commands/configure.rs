use anyhow::Result;
use clap::Args;

use crate::config;

#[derive(Debug, Clone, Args)]
pub struct ConfigureCommand {
    #[arg(long, help = "Print the stored settings instead of prompting")]
    pub show: bool,
}

impl ConfigureCommand {
    pub async fn execute(self, profile: &str) -> Result<()> {
        if !self.show {
            return config::configure_interactive(profile).await;
        }

        let host = config::load(profile).await?;
        println!("profile:      {profile}");
        println!("region:       {}", host.region.as_deref().unwrap_or("<not set>"));
        println!(
            "endpoint_url: {}",
            host.endpoint_url.as_deref().unwrap_or("<not set>")
        );
        Ok(())
    }
}
