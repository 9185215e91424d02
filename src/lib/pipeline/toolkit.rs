//! The command surface of the external build toolkit

use std::borrow::Cow;

use color_eyre::Result;

use crate::cli::output::executors;
use crate::pipeline_model::{environment::BuildEnvironment, invocation::BuildOption};
use crate::utils::{self, constants};

use super::{artifacts, manifest};

/// The operations the pipeline delegates to. Each one receives the
/// [`BuildEnvironment`] of the current run explicitly, and any error it
/// returns aborts the whole pipeline
pub trait Toolkit {
    /// Removes the outputs of previous runs
    fn clear_artifacts(&mut self, env: &BuildEnvironment<'_>) -> Result<()>;
    /// Records the working tree status
    fn status(&mut self, env: &BuildEnvironment<'_>) -> Result<()>;
    /// Records the build version metadata
    fn manifest(&mut self, env: &BuildEnvironment<'_>) -> Result<()>;
    /// Invokes the wrapped build system with the given options
    fn build(&mut self, env: &BuildEnvironment<'_>, options: &[BuildOption<'_>]) -> Result<()>;
    fn generate_docs(&mut self, env: &BuildEnvironment<'_>) -> Result<()>;
    /// Copies the files matched by `patterns` into the artifacts directory,
    /// or into `subdir` below it
    fn copy_to_artifacts(
        &mut self,
        env: &BuildEnvironment<'_>,
        patterns: &[Cow<'_, str>],
        subdir: Option<&str>,
    ) -> Result<()>;
    fn lint_correctness(&mut self, env: &BuildEnvironment<'_>) -> Result<()>;
    fn lint_style(&mut self, env: &BuildEnvironment<'_>) -> Result<()>;
}

/// The [`Toolkit`] that spawns the configured external tools as child
/// processes of the current one, and performs the filesystem work itself
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessToolkit;

impl Toolkit for ProcessToolkit {
    fn clear_artifacts(&mut self, env: &BuildEnvironment<'_>) -> Result<()> {
        let artifact_dir = env.artifact_dir();
        if env.dry_run {
            log::info!("[dry-run] Would remove and recreate {artifact_dir:?}");
            return Ok(());
        }

        log::debug!("Removing the previous artifacts at {artifact_dir:?}");
        utils::fs::remove_directory(artifact_dir)?;
        utils::fs::create_directory(artifact_dir)
    }

    fn status(&mut self, env: &BuildEnvironment<'_>) -> Result<()> {
        let cmd = &env.tools().status;
        if env.dry_run {
            log::info!("[dry-run] {cmd}");
            return Ok(());
        }

        let output = executors::capture_command(cmd, env)?;
        for line in output.lines() {
            log::info!("{line}");
        }

        utils::fs::create_directory(env.artifact_dir())?;
        utils::fs::create_file(
            env.artifact_dir(),
            constants::STATUS_FILENAME,
            output.as_bytes(),
        )
    }

    fn manifest(&mut self, env: &BuildEnvironment<'_>) -> Result<()> {
        if env.dry_run {
            log::info!(
                "[dry-run] Would write {:?}",
                env.artifact_dir().join(constants::MANIFEST_FILENAME)
            );
            return Ok(());
        }

        let version = manifest::resolve_version(env);
        let path = manifest::write(env, version)?;
        log::info!("Manifest written to {path:?}");
        Ok(())
    }

    fn build(&mut self, env: &BuildEnvironment<'_>, options: &[BuildOption<'_>]) -> Result<()> {
        executors::execute_command(&env.waf_command(options), env)
    }

    fn generate_docs(&mut self, env: &BuildEnvironment<'_>) -> Result<()> {
        executors::execute_command(&env.tools().docs, env)
    }

    fn copy_to_artifacts(
        &mut self,
        env: &BuildEnvironment<'_>,
        patterns: &[Cow<'_, str>],
        subdir: Option<&str>,
    ) -> Result<()> {
        let copied = artifacts::copy_to_artifacts(env, patterns, subdir)?;
        log::info!("{copied} file(s) copied to the artifacts directory");
        Ok(())
    }

    fn lint_correctness(&mut self, env: &BuildEnvironment<'_>) -> Result<()> {
        executors::execute_command(&env.tools().cppcheck, env)
    }

    fn lint_style(&mut self, env: &BuildEnvironment<'_>) -> Result<()> {
        executors::execute_command(&env.tools().stylecheck, env)
    }
}
