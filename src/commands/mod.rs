pub mod completions;
pub mod configure;
pub mod describe;
pub mod invoke;
pub mod list;

pub use completions::CompletionsCommand;
pub use configure::ConfigureCommand;
pub use describe::DescribeCommand;
pub use invoke::InvokeCommand;
pub use list::ListCommand;
