//! The command lines of the external tools driven by the pipeline
use std::borrow::Cow;

use serde::*;

/// [`ToolsAttribute`] - Command lines for the external collaborators.
/// Every entry is a program followed by its arguments. Missing entries
/// fall back to the defaults in [`crate::utils::constants::default_tools`]
///
/// * `status` - Prints the working tree status
/// * `describe` - Prints a version string for the manifest
/// * `docs` - Generates the documentation
/// * `cppcheck` - The correctness static analysis pass
/// * `stylecheck` - The style check pass
///
/// ```rust
/// use buildall::config_file::tools::ToolsAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[tools]
///     cppcheck = [ 'cppcheck', '--error-exitcode=1', 'src' ]
///     stylecheck = [ 'clang-format', '--dry-run', '-Werror' ]
///"#;
///
/// let config: ToolsAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the buildall toml file");
///
/// assert_eq!(config.cppcheck.map(|cmd| cmd.len()), Some(3));
/// assert!(config.docs.is_none());
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct ToolsAttribute<'a> {
    #[serde(borrow)]
    pub status: Option<Vec<Cow<'a, str>>>,
    #[serde(borrow)]
    pub describe: Option<Vec<Cow<'a, str>>>,
    #[serde(borrow)]
    pub docs: Option<Vec<Cow<'a, str>>>,
    #[serde(borrow)]
    pub cppcheck: Option<Vec<Cow<'a, str>>>,
    #[serde(borrow)]
    pub stylecheck: Option<Vec<Cow<'a, str>>>,
}
