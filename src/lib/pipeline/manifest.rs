//! The record describing what a pipeline run builds

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use color_eyre::{eyre::Context, Result};
use serde::Serialize;

use crate::cli::output::executors;
use crate::pipeline_model::{
    artifacts::ArtifactCopy, environment::BuildEnvironment, invocation::BuildInvocation,
};
use crate::utils::{self, constants};

#[derive(Debug, Serialize)]
pub struct HostInfo {
    pub os: &'static str,
    pub arch: &'static str,
}

impl Default for HostInfo {
    fn default() -> Self {
        Self {
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
        }
    }
}

/// The build version and status metadata written as `manifest.json`
#[derive(Debug, Serialize)]
pub struct Manifest<'a> {
    pub project: &'a str,
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub host: HostInfo,
    pub waf: String,
    pub invocations: &'a [BuildInvocation<'a>],
    pub artifacts: &'a [ArtifactCopy<'a>],
}

impl<'a> Manifest<'a> {
    pub fn new(env: &BuildEnvironment<'a>, version: String) -> Self {
        let model = env.model;
        Self {
            project: &model.project.name,
            version,
            generated_at: Utc::now(),
            host: HostInfo::default(),
            waf: model.build.waf.to_string(),
            invocations: &model.invocations,
            artifacts: &model.artifacts,
        }
    }
}

/// The configured project version, otherwise the one reported by the
/// `describe` tool. Falls back to [`constants::UNKNOWN_VERSION`] when the
/// tool can't provide one, like outside of a repository
pub fn resolve_version(env: &BuildEnvironment<'_>) -> String {
    if let Some(version) = &env.model.project.version {
        return version.to_string();
    }

    let describe = &env.tools().describe;
    match executors::capture_command(describe, env) {
        Ok(out) if !out.trim().is_empty() => out.trim().to_string(),
        Ok(_) => {
            log::warn!("\"{describe}\" printed nothing, the version is unknown");
            constants::UNKNOWN_VERSION.to_string()
        }
        Err(e) => {
            log::warn!("Could not determine the version: {e:#}");
            constants::UNKNOWN_VERSION.to_string()
        }
    }
}

/// Serializes the [`Manifest`] into the artifacts directory and returns its path
pub fn write(env: &BuildEnvironment<'_>, version: String) -> Result<PathBuf> {
    let manifest = Manifest::new(env, version);
    let json = serde_json::to_string_pretty(&manifest)
        .with_context(|| "Could not serialize the build manifest")?;

    let artifact_dir = env.artifact_dir();
    utils::fs::create_directory(artifact_dir)?;
    utils::fs::create_file(artifact_dir, constants::MANIFEST_FILENAME, json.as_bytes())?;

    Ok(artifact_dir.join(constants::MANIFEST_FILENAME))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use color_eyre::Result;
    use tempfile::tempdir;

    use super::*;
    use crate::config_file;
    use crate::utils::{reader, template::resources::CONFIG_FILE};

    #[test]
    fn test_manifest_content() -> Result<()> {
        let temp = tempdir()?;
        let config = config_file::buildall_cfg_from_file(CONFIG_FILE)?;
        let model = reader::build_model(config, temp.path())?;
        let env = BuildEnvironment::new(&model, false);

        let path = write(&env, "v1.2.3-4-gdeadbee".to_string())?;
        assert_eq!(path, temp.path().join("artifacts").join("manifest.json"));

        let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        assert_eq!(json["project"], "adcssim");
        assert_eq!(json["version"], "v1.2.3-4-gdeadbee");
        assert_eq!(json["waf"], "./waf distclean configure build");
        assert_eq!(json["invocations"][0]["options"][0]["kind"], "flag");
        assert_eq!(json["invocations"][0]["options"][0]["value"], "--adcs-full");
        assert_eq!(json["invocations"][1]["options"][0]["kind"], "target");
        assert_eq!(json["artifacts"][1]["subdir"], "html_getting_started");
        assert!(json["generated_at"].is_string());

        Ok(())
    }

    #[test]
    fn test_configured_version_wins() -> Result<()> {
        let raw = "[project]\nname = 'v'\nversion = '3.0.0'\n";
        let config = config_file::buildall_cfg_from_file(raw)?;
        let model = reader::build_model(config, Path::new("."))?;
        let env = BuildEnvironment::new(&model, false);

        assert_eq!(resolve_version(&env), "3.0.0");

        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_describe_gives_unknown_version() -> Result<()> {
        let temp = tempdir()?;
        let raw = "[project]\nname = 'v'\n\n[tools]\ndescribe = ['false']\n";
        let config = config_file::buildall_cfg_from_file(raw)?;
        let model = reader::build_model(config, temp.path())?;
        let env = BuildEnvironment::new(&model, false);

        assert_eq!(resolve_version(&env), constants::UNKNOWN_VERSION);

        Ok(())
    }
}
