//! root file for the crate where the datastructures that holds the TOML
//! parsed data lives.
pub mod artifacts;
pub mod build;
pub mod invocation;
pub mod project;
pub mod tools;

use std::{borrow::Cow, fmt::Debug};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use self::{
    artifacts::ArtifactsAttribute, build::BuildAttribute, invocation::InvocationAttribute,
    project::ProjectAttribute, tools::ToolsAttribute,
};

/// ```rust
/// use buildall::config_file::{self, BuildallConfigFile};
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     [project]
///     name = 'adcssim'
///
///     [build]
///     artifact_dir = 'out/artifacts'
///
///     [[invocations]]
///     description = 'release - matlab image'
///     options = [ '--adcs-full' ]
///
///     [[invocations]]
///     options = [ 'gen_config' ]
///
///     [[artifacts]]
///     patterns = [ 'build/doc/*.pdf' ]
///
///     [[artifacts]]
///     patterns = [ 'build/doc/html' ]
///     subdir = 'html'
///
///     [env]
///     WAF_NO_COLOR = '1'
/// "#;
///
/// let config: BuildallConfigFile = config_file::buildall_cfg_from_file(CONFIG_FILE_MOCK)
///     .expect("A failure happened parsing the buildall toml file");
///
/// assert_eq!(config.project.name, "adcssim");
/// assert_eq!(config.invocations.len(), 2);
/// assert_eq!(config.invocations[0].options, vec!["--adcs-full"]);
/// assert_eq!(config.invocations[1].description, None);
///
/// assert_eq!(config.artifacts.len(), 2);
/// assert!(config.artifacts[0].subdir.is_none());
/// assert_eq!(config.artifacts[1].subdir.as_deref(), Some("html"));
///
/// let build = config.build.expect("[build] table is present");
/// assert_eq!(build.artifact_dir.as_deref(), Some("out/artifacts"));
/// assert!(build.waf.is_none());
///
/// assert!(config.tools.is_none());
/// assert_eq!(config.env["WAF_NO_COLOR"], "1");
/// ```
/// The [`BuildallConfigFile`] is the type that holds
/// the whole hierarchy of the buildall config file attributes
/// and properties
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct BuildallConfigFile<'a> {
    #[serde(borrow)]
    pub project: ProjectAttribute<'a>,
    #[serde(borrow)]
    pub build: Option<BuildAttribute<'a>>,
    #[serde(borrow, default)]
    pub invocations: Vec<InvocationAttribute<'a>>,
    #[serde(borrow, default)]
    pub artifacts: Vec<ArtifactsAttribute<'a>>,
    #[serde(borrow)]
    pub tools: Option<ToolsAttribute<'a>>,
    #[serde(borrow, default)]
    pub env: IndexMap<Cow<'a, str>, Cow<'a, str>>,
}

pub fn buildall_cfg_from_file(cfg: &'_ str) -> Result<BuildallConfigFile<'_>, toml::de::Error> {
    <BuildallConfigFile>::deserialize(&mut toml::Deserializer::new(cfg))
}
