use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::commands::{
    CompletionsCommand, ConfigureCommand, DescribeCommand, InvokeCommand, ListCommand,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "aws-blocks", version, about = "Run single AWS API operations as blocks, optionally under an assumed role", long_about = None, arg_required_else_help = true)]
pub struct Cli {
    #[arg(
        short = 'p',
        long,
        global = true,
        default_value = "default",
        help = "AWS profile name"
    )]
    pub profile: String,

    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Increase verbosity (-v info, -vv debug, -vvv trace)")]
    pub verbose: u8,

    #[arg(
        long,
        global = true,
        value_name = "URL",
        help = "Send every request to this endpoint instead of AWS"
    )]
    pub endpoint_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    #[command(about = "Invoke one operation and print its output event")]
    Invoke(InvokeCommand),
    #[command(about = "List the operations in the catalog")]
    List(ListCommand),
    #[command(about = "Show the input and output schema of an operation")]
    Describe(DescribeCommand),
    #[command(about = "Configure the default region and endpoint of a profile")]
    Configure(ConfigureCommand),
    #[command(about = "Generate shell completion scripts for aws-blocks")]
    Completions(CompletionsCommand),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let profile = self.profile;

        match self.command {
            Commands::Invoke(cmd) => cmd.execute(&profile, self.endpoint_url).await,
            Commands::List(cmd) => cmd.execute(),
            Commands::Describe(cmd) => cmd.execute(),
            Commands::Configure(cmd) => cmd.execute(&profile).await,
            Commands::Completions(cmd) => {
                cmd.execute();
                Ok(())
            }
        }
    }
}
