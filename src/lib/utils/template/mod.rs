pub mod resources;

use crate::utils;
use crate::utils::constants::error_messages;
use color_eyre::eyre::bail;
use color_eyre::Result;
use std::path::{Path, PathBuf};

const DEFAULT_PROJECT_NAME_LINE: &str = "name = \"adcssim\"";

/// Writes the default configuration file at the project root.
///
/// The default configuration describes the whole pipeline: it clears the
/// artifacts, records the status and the manifest, builds the release image,
/// generates the configuration files, the documentation, collects the
/// documentation outputs and runs the static checks.
///
/// When `project_name` is given, it replaces the default project name.
/// An existing configuration file is only overwritten when `force` is set
pub fn create_config_file(
    project_root: &Path,
    project_name: Option<&str>,
    force: bool,
) -> Result<PathBuf> {
    let cfg_path = project_root.join(resources::CONFIG_FILE_NAME);

    if cfg_path.exists() && !force {
        bail!("{}: {cfg_path:?}", error_messages::CONFIG_FILE_ALREADY_EXISTS)
    }

    let content = match project_name {
        Some(name) => resources::CONFIG_FILE.replacen(
            DEFAULT_PROJECT_NAME_LINE,
            &format!("name = {}", toml::Value::String(name.to_string())),
            1,
        ),
        None => resources::CONFIG_FILE.to_string(),
    };

    utils::fs::create_directory(project_root)?;
    utils::fs::create_file(
        project_root,
        resources::CONFIG_FILE_NAME,
        content.as_bytes(),
    )?;

    log::info!("Configuration file created at: {cfg_path:?}");
    Ok(cfg_path)
}
