//! The explicit inputs handed to every toolkit operation

use std::borrow::Cow;
use std::path::Path;

use indexmap::IndexMap;

use super::{invocation::BuildOption, tools::ToolsModel, PipelineModel};
use crate::cli::output::arguments::{Argument, CommandLine};

/// Everything a toolkit operation is allowed to know about the current run.
///
/// Steps never reach into process-wide state: the project root, the
/// directories, the environment variables for the spawned processes and
/// the dry run switch all travel with this value
#[derive(Debug, Clone, Copy)]
pub struct BuildEnvironment<'a> {
    pub model: &'a PipelineModel<'a>,
    pub dry_run: bool,
}

impl<'a> BuildEnvironment<'a> {
    pub fn new(model: &'a PipelineModel<'a>, dry_run: bool) -> Self {
        Self { model, dry_run }
    }

    pub fn root(&self) -> &'a Path {
        &self.model.project.root
    }

    pub fn build_dir(&self) -> &'a Path {
        &self.model.build.build_dir
    }

    pub fn artifact_dir(&self) -> &'a Path {
        &self.model.build.artifact_dir
    }

    pub fn tools(&self) -> &'a ToolsModel<'a> {
        &self.model.tools
    }

    pub fn env_vars(&self) -> &'a IndexMap<Cow<'a, str>, Cow<'a, str>> {
        &self.model.env
    }

    /// The full command line of a build invocation: the driver, its stages
    /// and then the invocation options, in order
    pub fn waf_command(&self, options: &[BuildOption<'a>]) -> CommandLine<'a> {
        self.model
            .build
            .waf
            .with_args(options.iter().map(Argument::from))
    }
}
