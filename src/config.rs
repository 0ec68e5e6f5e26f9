use crate::aws::endpoint::validate_endpoint;
use crate::constants::{self, INI_ENDPOINT_URL_KEY, INI_REGION_KEY};
use anyhow::{Context, Result};
use dialoguer::{Input, theme::ColorfulTheme};
use ini::{Ini, Properties};
use std::path::PathBuf;
use tokio::fs;

/// Host-level settings read from the shared AWS config file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostConfig {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

impl HostConfig {
    fn from_ini_section(section: &Properties) -> Self {
        let non_empty = |key: &str| {
            section
                .get(key)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        Self {
            region: non_empty(INI_REGION_KEY),
            endpoint_url: non_empty(INI_ENDPOINT_URL_KEY),
        }
    }

    fn save_to_ini(&self, ini: &mut Ini, profile: &str) {
        let section_name = section_name(profile);

        for (key, value) in [
            (INI_REGION_KEY, &self.region),
            (INI_ENDPOINT_URL_KEY, &self.endpoint_url),
        ] {
            match value {
                Some(value) => {
                    ini.with_section(Some(section_name.clone())).set(key, value);
                }
                None => {
                    if let Some(section) = ini.section_mut(Some(section_name.clone())) {
                        section.remove(key);
                    }
                }
            }
        }
    }
}

/// Load the settings of `profile`; a missing file or section yields defaults
pub async fn load(profile: &str) -> Result<HostConfig> {
    let path = get_config_path()?;
    if !fs::try_exists(&path).await.unwrap_or(false) {
        return Ok(HostConfig::default());
    }

    let ini = Ini::load_from_file(&path)
        .with_context(|| format!("Failed to load config file {}", path.display()))?;

    Ok(ini
        .section(Some(section_name(profile)))
        .map(HostConfig::from_ini_section)
        .unwrap_or_default())
}

pub async fn save(profile: &str, config: &HostConfig) -> Result<()> {
    let path = get_config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut ini = if path.exists() {
        Ini::load_from_file(&path).unwrap_or_else(|_| Ini::new())
    } else {
        Ini::new()
    };

    config.save_to_ini(&mut ini, profile);

    ini.write_to_file(&path)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}

pub async fn configure_interactive(profile: &str) -> Result<()> {
    println!("Configuring aws-blocks for profile: {profile}");

    let existing = load(profile).await?;
    if existing != HostConfig::default() {
        println!("Press Enter to keep current values, or type new values.");
    }
    println!();

    let theme = ColorfulTheme::default();

    let region = Input::<String>::with_theme(&theme)
        .with_prompt("Default region")
        .default(existing.region.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()
        .context("Failed to read region")?;

    let endpoint_url = Input::<String>::with_theme(&theme)
        .with_prompt("Endpoint URL (empty for AWS)")
        .default(existing.endpoint_url.clone().unwrap_or_default())
        .allow_empty(true)
        .validate_with(|input: &String| {
            if input.is_empty() {
                return Ok(());
            }
            validate_endpoint(input)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()
        .context("Failed to read endpoint URL")?;

    let config = HostConfig {
        region: Some(region).filter(|r| !r.is_empty()),
        endpoint_url: Some(endpoint_url).filter(|e| !e.is_empty()),
    };

    save(profile, &config).await?;

    println!("\nConfiguration saved successfully.");
    Ok(())
}

fn section_name(profile: &str) -> String {
    if profile == "default" {
        profile.to_string()
    } else {
        format!("profile {profile}")
    }
}

fn get_config_path() -> Result<PathBuf> {
    constants::get_aws_config_path().context("Failed to determine AWS config path")
}
