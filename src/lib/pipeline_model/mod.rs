pub mod artifacts;
pub mod build;
pub mod environment;
pub mod invocation;
pub mod project;
pub mod tools;

use std::borrow::Cow;

use indexmap::IndexMap;

use self::{
    artifacts::ArtifactCopy, build::BuildModel, invocation::BuildInvocation,
    project::ProjectModel, tools::ToolsModel,
};

/// The validated, read only representation of a configuration file.
///
/// Relative paths are already resolved against the project root
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PipelineModel<'a> {
    pub project: ProjectModel<'a>,
    pub build: BuildModel<'a>,
    pub invocations: Vec<BuildInvocation<'a>>,
    pub artifacts: Vec<ArtifactCopy<'a>>,
    pub tools: ToolsModel<'a>,
    pub env: IndexMap<Cow<'a, str>, Cow<'a, str>>,
}
