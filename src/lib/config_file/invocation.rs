//! Type for holding every invocation of the wrapped build system

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// [`InvocationAttribute`] - One call to the wrapped build system
/// * `options` - The ordered flags and targets appended to the command line.
/// Flags start with a dash (`--adcs-full`), anything else is a build system
/// target (`gen_config`)
/// * `description` - A human readable note shown in the logs and the manifest
///
/// ### Tests
///
/// ```rust
/// use buildall::config_file::invocation::InvocationAttribute;
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[[invocations]]
///     description = 'release - matlab image'
///     options = [ '--adcs-full' ]
/// "#;
///
/// let config: InvocationAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the buildall toml file");
///
/// assert_eq!(config.description.as_deref(), Some("release - matlab image"));
/// assert_eq!(config.options, vec!["--adcs-full"]);
/// ```
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct InvocationAttribute<'a> {
    #[serde(borrow)]
    pub description: Option<Cow<'a, str>>,
    #[serde(borrow)]
    pub options: Vec<Cow<'a, str>>,
}
