//! Blocks that each run exactly one AWS API operation.
//!
//! A block takes a JSON configuration (`region`, optional `assumeRoleArn` and
//! `endpoint`, plus the operation's own parameters), resolves credentials,
//! optionally assuming an IAM role through STS, calls the operation once and
//! returns the raw response as an [`block::OutputEvent`].

pub mod aws;
pub mod block;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod protocol;

#[cfg(test)]
mod testing;

pub use block::{InvocationConfig, Invoker, OutputEvent};
pub use error::{Error, OperationError, Result};
