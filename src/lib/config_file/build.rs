//! file that contains the configuration options available
//! to configure where the build process lives and how the
//! wrapped build system is invoked
use std::borrow::Cow;

use serde::*;

/// [`BuildAttribute`] - Stores build process specific configuration
///
/// * `build_dir` - Relative to the root path where the build system dumps
/// its outputs. Defaults to `build`. Informational only: it's reported by
/// `plan`, but the build system keeps choosing its own output directory,
/// so it's never passed to the driver
/// * `artifact_dir` - Relative to the root path where the retained artifacts
/// are collected. Defaults to `artifacts`
/// * `waf` - The build system driver. Defaults to `./waf`
/// * `waf_stages` - The commands that are always passed to the driver before
/// the invocation specific options. Defaults to `distclean configure build`
///
/// ```rust
/// use buildall::config_file::build::BuildAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[build]
///     artifact_dir = 'dist'
///     waf = 'python3 waf'
///     waf_stages = [ 'configure', 'build' ]
///"#;
///
/// let config: BuildAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the buildall toml file");
///
/// assert_eq!(config.build_dir, None);
/// assert_eq!(config.artifact_dir.as_deref(), Some("dist"));
/// assert_eq!(config.waf.as_deref(), Some("python3 waf"));
/// assert_eq!(config.waf_stages, Some(vec!["configure".into(), "build".into()]));
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct BuildAttribute<'a> {
    #[serde(borrow)]
    pub build_dir: Option<Cow<'a, str>>,
    #[serde(borrow)]
    pub artifact_dir: Option<Cow<'a, str>>,
    #[serde(borrow)]
    pub waf: Option<Cow<'a, str>>,
    #[serde(borrow)]
    pub waf_stages: Option<Vec<Cow<'a, str>>>,
}
