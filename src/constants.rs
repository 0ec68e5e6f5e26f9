use std::{env, path::PathBuf};

/// AWS configuration directory name
pub const AWS_CONFIG_DIR_NAME: &str = ".aws";

/// AWS configuration file name
pub const AWS_CONFIG_FILE_NAME: &str = "config";

/// Prefix of every STS role session name
pub const SESSION_NAME_PREFIX: &str = "aws-blocks";

/// Upper bound STS places on `RoleSessionName`
pub const MAX_SESSION_NAME_LENGTH: usize = 64;

/// Configuration key selecting the target region
pub const REGION_KEY: &str = "region";

/// Configuration key carrying the optional role to assume
pub const ASSUME_ROLE_ARN_KEY: &str = "assumeRoleArn";

/// Configuration key overriding the service endpoint
pub const ENDPOINT_KEY: &str = "endpoint";

/// AWS config file key holding a profile's default region
pub const INI_REGION_KEY: &str = "region";

/// AWS config file key holding a profile's endpoint override
pub const INI_ENDPOINT_URL_KEY: &str = "endpoint_url";

/// Get the AWS config file path
/// Respects AWS_CONFIG_FILE environment variable if set
pub fn get_aws_config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var("AWS_CONFIG_FILE") {
        return Some(PathBuf::from(path));
    }

    dirs::home_dir().map(|home| home.join(AWS_CONFIG_DIR_NAME).join(AWS_CONFIG_FILE_NAME))
}
