pub mod cli;
pub mod config_file;
pub mod pipeline;
pub mod pipeline_model;
pub mod utils;

/// The entry point for the execution of the program.
///
/// This module existence is motivated to let us run
/// integration tests for the whole operations of the program
/// without having to do fancy work about checking the
/// data sent to stdout/stderr
pub mod worker {
    use std::borrow::Cow;
    use std::fs;
    use std::path::{Path, PathBuf};

    use color_eyre::{eyre::Context, Result};

    use crate::{
        cli::input::{CliArgs, Command},
        config_file::{self, BuildallConfigFile},
        pipeline::{self, toolkit::ProcessToolkit},
        pipeline_model::{environment::BuildEnvironment, PipelineModel},
        utils::{
            self,
            constants::error_messages,
            reader::{self, find_config_file},
            template::{create_config_file, resources},
        },
    };

    /// The main work of the project. Runs the tasks
    /// inputted in the CLI
    pub fn run_buildall(cli_args: &CliArgs, base_path: &Path) -> Result<()> {
        let project_root = cli_args
            .root
            .as_deref()
            .map(|root| base_path.join(root))
            .unwrap_or_else(|| base_path.to_path_buf());

        match cli_args.command() {
            Command::New { name, force } => {
                utils::fs::create_directory(&project_root)?;
                let abs_project_root = determine_absolute_path_of_the_project_root(&project_root)?;
                create_config_file(&abs_project_root, name.as_deref(), force)?;
                Ok(())
            }
            Command::Plan => with_pipeline_model(cli_args, &project_root, |model| {
                let env = BuildEnvironment::new(model, false);
                pipeline::print_plan(&pipeline::assemble_steps(model), &env);
                Ok(())
            }),
            Command::Run { dry_run } => with_pipeline_model(cli_args, &project_root, |model| {
                let env = BuildEnvironment::new(model, dry_run);
                let steps = pipeline::assemble_steps(model);
                log::info!(
                    "Running the pipeline of '{}' with {} steps{}",
                    model.project.name,
                    steps.len(),
                    if dry_run { " (dry run)" } else { "" }
                );

                let report = pipeline::execute(&steps, &mut ProcessToolkit, &env)
                    .with_context(|| error_messages::PIPELINE_ABORTED)?;
                report.log_summary();
                Ok(())
            }),
        }
    }

    /// Loads the configuration of the project and maps it into the [`PipelineModel`]
    /// handed to `work`, which only lives as long as the raw configuration does
    fn with_pipeline_model<F>(cli_args: &CliArgs, project_root: &Path, work: F) -> Result<()>
    where
        F: for<'a> FnOnce(&'a PipelineModel<'a>) -> Result<()>,
    {
        let abs_project_root = determine_absolute_path_of_the_project_root(project_root)?;

        let raw_config = load_raw_config(cli_args, &abs_project_root)?;
        let config: BuildallConfigFile<'_> = config_file::buildall_cfg_from_file(&raw_config)
            .with_context(|| error_messages::PARSE_CFG_FILE)?;
        let model: PipelineModel<'_> = reader::build_model(config, &abs_project_root)
            .with_context(|| error_messages::PIPELINE_MODEL_MAPPING)?;

        work(&model)
    }

    /// Reads the configuration file given with `--config`, otherwise the one
    /// found at the project root, otherwise the embedded default
    fn load_raw_config(cli_args: &CliArgs, abs_project_root: &Path) -> Result<Cow<'static, str>> {
        let cfg_path: Option<PathBuf> = match cli_args.config.as_deref() {
            Some(path) => Some(abs_project_root.join(path)),
            None => find_config_file(abs_project_root)?.map(|cfg| cfg.path),
        };

        match cfg_path {
            Some(cfg_path) => {
                log::debug!("Loading the configuration file: {cfg_path:?}");
                let raw = fs::read_to_string(&cfg_path).with_context(|| {
                    format!("{}: {:?}", error_messages::READ_CFG_FILE, cfg_path)
                })?;
                Ok(Cow::Owned(raw))
            }
            None => {
                log::info!("No configuration file found at {abs_project_root:?}, using the default one");
                Ok(Cow::Borrowed(resources::CONFIG_FILE))
            }
        }
    }

    /// Resolves the full path of the location of the project's root on the fs. If the `--root`
    /// [`CliArgs`] arg is present, it's joined to the base path, otherwise, we will
    /// assume that the project root is exactly in the same directory from where the
    /// binary was invoked by the user
    fn determine_absolute_path_of_the_project_root(project_root: &Path) -> Result<PathBuf> {
        utils::fs::get_project_root_absolute_path(project_root)
            .with_context(|| error_messages::FAILURE_GATHERING_PROJECT_ROOT_ABS_PATH)
    }

    #[cfg(test)]
    mod tests {
        use clap::Parser;
        use color_eyre::Result;
        use tempfile::tempdir;

        use super::*;

        #[test]
        fn test_explicit_config_path_wins() -> Result<()> {
            let temp = tempdir()?;
            std::fs::write(temp.path().join("buildall.toml"), "[project]\nname = 'found'\n")?;
            std::fs::create_dir(temp.path().join("ci"))?;
            std::fs::write(
                temp.path().join("ci").join("release.toml"),
                "[project]\nname = 'explicit'\n",
            )?;

            let cli_args = CliArgs::parse_from(["", "--config", "ci/release.toml", "plan"]);
            let raw = load_raw_config(&cli_args, temp.path())?;
            assert!(raw.contains("explicit"));

            let cli_args = CliArgs::parse_from(["", "plan"]);
            let raw = load_raw_config(&cli_args, temp.path())?;
            assert!(raw.contains("found"));

            Ok(())
        }

        #[test]
        fn test_embedded_config_as_fallback() -> Result<()> {
            let temp = tempdir()?;
            let cli_args = CliArgs::parse_from(["", "plan"]);

            let raw = load_raw_config(&cli_args, temp.path())?;
            assert_eq!(raw, resources::CONFIG_FILE);

            Ok(())
        }

        #[test]
        fn test_missing_explicit_config_is_an_error() -> Result<()> {
            let temp = tempdir()?;
            let cli_args = CliArgs::parse_from(["", "--config", "nope.toml"]);

            assert!(load_raw_config(&cli_args, temp.path()).is_err());

            Ok(())
        }

        #[test]
        fn test_invalid_config_aborts_before_any_step() -> Result<()> {
            let temp = tempdir()?;
            std::fs::write(temp.path().join("buildall.toml"), "[project]\n")?;
            let root = temp.path().to_string_lossy().to_string();

            let cli_args = CliArgs::parse_from(["", "--root", &root, "run"]);
            assert!(run_buildall(&cli_args, Path::new(".")).is_err());
            assert!(!temp.path().join("artifacts").exists());

            Ok(())
        }
    }
}
