//! Metadata about the user's project
use std::borrow::Cow;

use serde::*;

/// [`ProjectAttribute`] - Metadata about the user's project
/// * `name` - The project's name, recorded in the manifest
/// * `version` - An explicit version string. When it's missing,
/// the version is queried from the VCS through the `describe` tool
///
/// ### Tests
///
/// ```rust
/// use buildall::config_file::project::ProjectAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[project]
///     name = 'adcssim'
///     version = '2.1.0'
///"#;
///
/// let config: ProjectAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the buildall toml file");
///
/// assert_eq!(config.name, "adcssim");
/// assert_eq!(config.version.as_deref(), Some("2.1.0"));
/// ```
///
/// > Note: TOML table are toml commented (#) to allow us to parse
/// the inner attributes as the direct type that they belongs to.
/// That commented tables aren't the real TOML, they are just there
/// for testing and exemplification purposes of the inner attributes
/// of the configuration file.
///
/// For a test over a real example, please look at the
/// [`buildall::config_file::BuildallConfigFile`] doc-test
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectAttribute<'a> {
    #[serde(borrow)]
    pub name: Cow<'a, str>,
    #[serde(borrow)]
    pub version: Option<Cow<'a, str>>,
}
