use crate::{
    cli::output::arguments::{Argument, CommandLine},
    config_file::{
        artifacts::ArtifactsAttribute, build::BuildAttribute, invocation::InvocationAttribute,
        project::ProjectAttribute, tools::ToolsAttribute, BuildallConfigFile,
    },
    pipeline_model::{
        artifacts::ArtifactCopy,
        build::BuildModel,
        invocation::{BuildInvocation, BuildOption},
        project::ProjectModel,
        tools::ToolsModel,
        PipelineModel,
    },
    utils::constants::{default_tools, dir_names, error_messages, CONFIG_FILE_EXT, CONFIG_FILE_NAME},
};
use color_eyre::{
    eyre::{bail, eyre, Context},
    Result,
};
use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Details about a found configuration file on the project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub path: PathBuf,
}

/// Checks for the existence of a `buildall<any>.toml` configuration file
/// present at the project root and returns the first one found, in file
/// name order.
///
/// Returns [`None`] when the project doesn't declare its own configuration,
/// so the caller can fall back to the embedded default one
pub fn find_config_file(base_path: &Path) -> Result<Option<ConfigFile>> {
    log::debug!("Searching for buildall configuration files...");

    for e in WalkDir::new(base_path)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let Some(filename) = e.file_name().to_str() else {
            continue;
        };

        if e.file_type().is_file()
            && filename.starts_with(CONFIG_FILE_NAME)
            && filename.ends_with(&format!(".{CONFIG_FILE_EXT}"))
        {
            log::debug!("Found the configuration file: {:?}", e.path());
            return Ok(Some(ConfigFile {
                path: e.path().to_path_buf(),
            }));
        }
    }

    Ok(None)
}

/// Maps a [`BuildallConfigFile`] into the [`PipelineModel`], validating
/// every user input and resolving the directories against the project root
pub fn build_model<'a>(
    config: BuildallConfigFile<'a>,
    absolute_project_root: &Path,
) -> Result<PipelineModel<'a>> {
    let project = assemble_project_model(config.project, absolute_project_root);
    let build = assemble_build_model(config.build, absolute_project_root)?;
    let invocations = config
        .invocations
        .into_iter()
        .enumerate()
        .map(|(idx, invocation)| {
            assemble_invocation_model(invocation)
                .with_context(|| format!("Invalid build invocation number {}", idx + 1))
        })
        .collect::<Result<Vec<_>>>()?;
    let artifacts = config
        .artifacts
        .into_iter()
        .enumerate()
        .map(|(idx, artifacts)| {
            assemble_artifacts_model(artifacts)
                .with_context(|| format!("Invalid artifacts entry number {}", idx + 1))
        })
        .collect::<Result<Vec<_>>>()?;
    let tools = assemble_tools_model(config.tools)?;

    Ok(PipelineModel {
        project,
        build,
        invocations,
        artifacts,
        tools,
        env: config.env,
    })
}

fn assemble_project_model<'a>(config: ProjectAttribute<'a>, project_root: &Path) -> ProjectModel<'a> {
    ProjectModel {
        name: config.name,
        version: config.version,
        root: project_root.to_path_buf(),
    }
}

fn assemble_build_model<'a>(
    config: Option<BuildAttribute<'a>>,
    project_root: &Path,
) -> Result<BuildModel<'a>> {
    let config = config.unwrap_or_default();

    let build_dir = project_root.join(resolve_dir(
        config.build_dir.as_deref(),
        dir_names::DEFAULT_BUILD_DIR,
    ));
    let artifact_dir = resolve_dir(
        config.artifact_dir.as_deref(),
        dir_names::DEFAULT_ARTIFACT_DIR,
    );
    // cleared on every run, so it must live below the project root
    if !stays_below(artifact_dir) {
        bail!("{}: {artifact_dir:?}", error_messages::INVALID_ARTIFACT_DIR)
    }
    let artifact_dir = project_root.join(artifact_dir);

    let mut waf: CommandLine<'a> = match config.waf {
        Some(Cow::Borrowed(driver)) => CommandLine::from_parts(driver.split_whitespace()),
        Some(Cow::Owned(driver)) => CommandLine::from_parts(
            driver
                .split_whitespace()
                .map(|part| Argument::from(part.to_string())),
        ),
        None => CommandLine::from_parts([default_tools::WAF]),
    }
    .ok_or_else(|| eyre!(error_messages::EMPTY_WAF_DRIVER))?;

    match config.waf_stages {
        Some(stages) => waf.args.extend(stages.into_iter().map(Argument::from)),
        None => waf
            .args
            .extend(default_tools::WAF_STAGES.iter().copied().map(Argument::from)),
    }

    Ok(BuildModel {
        build_dir,
        artifact_dir,
        waf,
    })
}

fn resolve_dir<'a>(configured: Option<&'a str>, default: &'a str) -> &'a str {
    configured
        .map(|dir| dir.strip_prefix("./").unwrap_or(dir))
        .filter(|dir| !dir.is_empty())
        .unwrap_or(default)
}

/// Whether the path is relative and names something strictly below its base
fn stays_below(path: &str) -> bool {
    let mut components = Path::new(path).components();
    components.clone().any(|c| matches!(c, Component::Normal(_)))
        && components.all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

fn assemble_invocation_model(config: InvocationAttribute<'_>) -> Result<BuildInvocation<'_>> {
    let options = config
        .options
        .into_iter()
        .map(BuildOption::parse)
        .collect::<Result<Vec<_>>>()?;

    Ok(BuildInvocation {
        description: config.description,
        options,
    })
}

fn assemble_artifacts_model(config: ArtifactsAttribute<'_>) -> Result<ArtifactCopy<'_>> {
    if config.patterns.is_empty() {
        bail!(error_messages::NO_PATTERNS)
    }

    if let Some(subdir) = config.subdir.as_deref() {
        if !stays_below(subdir) {
            bail!("{}: {subdir:?}", error_messages::INVALID_SUBDIR)
        }
    }

    Ok(ArtifactCopy {
        patterns: config.patterns,
        subdir: config.subdir,
    })
}

fn assemble_tools_model(config: Option<ToolsAttribute<'_>>) -> Result<ToolsModel<'_>> {
    let config = config.unwrap_or_default();

    Ok(ToolsModel {
        status: tool_command_line("status", config.status, default_tools::STATUS)?,
        describe: tool_command_line("describe", config.describe, default_tools::DESCRIBE)?,
        docs: tool_command_line("docs", config.docs, default_tools::DOCS)?,
        cppcheck: tool_command_line("cppcheck", config.cppcheck, default_tools::CPPCHECK)?,
        stylecheck: tool_command_line("stylecheck", config.stylecheck, default_tools::STYLECHECK)?,
    })
}

fn tool_command_line<'a>(
    tool: &str,
    configured: Option<Vec<Cow<'a, str>>>,
    default: &'static [&'static str],
) -> Result<CommandLine<'a>> {
    let cmd = match configured {
        Some(parts) => CommandLine::from_parts(parts),
        None => CommandLine::from_parts(default.iter().copied()),
    };
    cmd.ok_or_else(|| eyre!("{} [{tool}]", error_messages::EMPTY_TOOL_COMMAND))
}
