//! Type for holding the files that must be kept after the pipeline ends

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// [`ArtifactsAttribute`] - A group of build outputs copied into the artifacts directory
/// * `patterns` - Glob patterns, relative to the project root
/// * `subdir` - When present, the matches are placed under this subdirectory
/// of the artifacts directory instead of its root
///
/// ### Tests
///
/// ```rust
/// use buildall::config_file::artifacts::ArtifactsAttribute;
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[[artifacts]]
///     patterns = [ 'build/doc/adcssim-getting-started/html' ]
///     subdir = 'html_getting_started'
/// "#;
///
/// let config: ArtifactsAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the buildall toml file");
///
/// assert_eq!(config.patterns, vec!["build/doc/adcssim-getting-started/html"]);
/// assert_eq!(config.subdir.as_deref(), Some("html_getting_started"));
/// ```
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ArtifactsAttribute<'a> {
    #[serde(borrow)]
    pub patterns: Vec<Cow<'a, str>>,
    #[serde(borrow)]
    pub subdir: Option<Cow<'a, str>>,
}
