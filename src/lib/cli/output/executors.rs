//! Contains helpers to spawn the external tools driven by buildall

use std::process::{Command, ExitStatus, Output};

use color_eyre::{
    eyre::{bail, Context},
    Result,
};

use crate::pipeline_model::environment::BuildEnvironment;

use super::arguments::CommandLine;

/// Executes a new [`std::process::Command`] for the given command line,
/// inheriting the standard streams, from the project root and with the
/// configured environment variables.
///
/// A non zero exit status is an error. On a dry run, the command line is
/// only logged
pub fn execute_command(cmd: &CommandLine<'_>, env: &BuildEnvironment<'_>) -> Result<()> {
    if env.dry_run {
        log::info!("[dry-run] {cmd}");
        return Ok(());
    }

    log::info!("Executing command => {cmd}");
    let status = prepare_command(cmd, env)
        .spawn()
        .with_context(|| format!("Could not run \"{cmd}\""))?
        .wait()
        .with_context(|| format!("An error occurred while waiting for \"{cmd}\" to finish"))?;

    check_exit_status(cmd, status)
}

/// Executes the command line and returns its standard output.
/// The standard error of a failing command is part of the returned error
pub fn capture_command(cmd: &CommandLine<'_>, env: &BuildEnvironment<'_>) -> Result<String> {
    log::debug!("Capturing the output of => {cmd}");
    let Output {
        status,
        stdout,
        stderr,
    } = prepare_command(cmd, env)
        .output()
        .with_context(|| format!("Could not run \"{cmd}\""))?;

    if !status.success() {
        bail!(
            "Process \"{cmd}\" failed with {status}: {}",
            String::from_utf8_lossy(&stderr).trim_end()
        )
    }

    Ok(String::from_utf8_lossy(&stdout).into_owned())
}

fn prepare_command(cmd: &CommandLine<'_>, env: &BuildEnvironment<'_>) -> Command {
    let mut command = Command::new(&cmd.program);
    command
        .args(&cmd.args)
        .current_dir(env.root())
        .envs(env.env_vars().iter().map(|(k, v)| (&**k, &**v)));
    command
}

fn check_exit_status(cmd: &CommandLine<'_>, status: ExitStatus) -> Result<()> {
    match status.code() {
        Some(0) => Ok(()),
        None => bail!("Process \"{cmd}\" was terminated by external signal"),
        Some(error_code) => bail!("Process \"{cmd}\" returned {error_code}"),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::path::Path;

    use color_eyre::Result;

    use super::*;
    use crate::config_file;
    use crate::pipeline_model::PipelineModel;
    use crate::utils::reader;

    fn model_at(root: &Path) -> Result<PipelineModel<'static>> {
        let config = config_file::buildall_cfg_from_file(
            "[project]\nname = 'exec'\n\n[env]\nBUILDALL_TEST_VAR = 'from-config'\n",
        )?;
        reader::build_model(config, root)
    }

    #[test]
    fn test_capture_uses_root_and_env() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let model = model_at(temp.path())?;
        let env = BuildEnvironment::new(&model, false);

        let cmd = CommandLine::from_parts(["sh", "-c", "echo $BUILDALL_TEST_VAR; pwd"]).unwrap();
        let output = capture_command(&cmd, &env)?;
        let mut lines = output.lines();

        assert_eq!(lines.next(), Some("from-config"));
        let pwd = lines.next().expect("the working directory");
        assert_eq!(
            std::fs::canonicalize(pwd)?,
            std::fs::canonicalize(temp.path())?
        );

        Ok(())
    }

    #[test]
    fn test_failing_command_is_an_error() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let model = model_at(temp.path())?;
        let env = BuildEnvironment::new(&model, false);

        let cmd = CommandLine::from_parts(["sh", "-c", "exit 3"]).unwrap();
        let err = execute_command(&cmd, &env).unwrap_err();
        assert!(format!("{err}").contains("returned 3"));

        Ok(())
    }

    #[test]
    fn test_dry_run_spawns_nothing() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let model = model_at(temp.path())?;
        let env = BuildEnvironment::new(&model, true);

        let cmd = CommandLine::from_parts(["buildall-this-program-does-not-exist"]).unwrap();
        execute_command(&cmd, &env)
    }

    #[test]
    fn test_missing_program_is_an_error() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let model = model_at(temp.path())?;
        let env = BuildEnvironment::new(&model, false);

        let cmd = CommandLine::from_parts(["buildall-this-program-does-not-exist"]).unwrap();
        assert!(execute_command(&cmd, &env).is_err());

        Ok(())
    }
}
