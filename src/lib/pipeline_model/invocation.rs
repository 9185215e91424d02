//! The options handed to the wrapped build system on every invocation

use core::fmt;
use std::borrow::Cow;
use std::sync::OnceLock;

use color_eyre::{eyre::eyre, Result};
use regex::Regex;
use serde::Serialize;

use crate::cli::output::arguments::Argument;

/// A long or short option, optionally carrying a value (`--variant=full`)
const FLAG_PATTERN: &str = r"^--?[A-Za-z0-9][A-Za-z0-9_.\-]*(=\S*)?$";
/// A build system command name (`gen_config`, `build_doc`)
const TARGET_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_.\-]*$";

fn flag_regex() -> &'static Regex {
    static FLAG: OnceLock<Regex> = OnceLock::new();
    FLAG.get_or_init(|| Regex::new(FLAG_PATTERN).expect("valid flag pattern"))
}

fn target_regex() -> &'static Regex {
    static TARGET: OnceLock<Regex> = OnceLock::new();
    TARGET.get_or_init(|| Regex::new(TARGET_PATTERN).expect("valid target pattern"))
}

/// A single entry of a build invocation option list
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum BuildOption<'a> {
    /// Enables a feature or selects a variant, like `--adcs-full`
    Flag(Cow<'a, str>),
    /// A build system command, like `gen_config`
    Target(Cow<'a, str>),
}

impl<'a> BuildOption<'a> {
    /// Classifies a raw option string.
    ///
    /// ```rust
    /// use buildall::pipeline_model::invocation::BuildOption;
    ///
    /// assert!(BuildOption::parse("--adcs-full".into()).unwrap().is_flag());
    /// assert!(BuildOption::parse("gen_config".into()).unwrap().is_target());
    /// assert!(BuildOption::parse("gen config".into()).is_err());
    /// assert!(BuildOption::parse("".into()).is_err());
    /// ```
    pub fn parse(raw: Cow<'a, str>) -> Result<Self> {
        if flag_regex().is_match(&raw) {
            Ok(Self::Flag(raw))
        } else if target_regex().is_match(&raw) {
            Ok(Self::Target(raw))
        } else {
            Err(eyre!("Ill-formed build option: {raw:?}"))
        }
    }

    pub fn value(&self) -> &str {
        match self {
            BuildOption::Flag(v) | BuildOption::Target(v) => v,
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, BuildOption::Flag(_))
    }

    pub fn is_target(&self) -> bool {
        matches!(self, BuildOption::Target(_))
    }
}

impl<'a> fmt::Display for BuildOption<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl<'a> From<&BuildOption<'a>> for Argument<'a> {
    fn from(value: &BuildOption<'a>) -> Self {
        match value {
            BuildOption::Flag(v) | BuildOption::Target(v) => Argument::from(v),
        }
    }
}

/// One call of the wrapped build system
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Default)]
pub struct BuildInvocation<'a> {
    pub description: Option<Cow<'a, str>>,
    pub options: Vec<BuildOption<'a>>,
}

impl<'a> BuildInvocation<'a> {
    pub fn flags(&self) -> impl Iterator<Item = &BuildOption<'a>> {
        self.options.iter().filter(|opt| opt.is_flag())
    }

    pub fn targets(&self) -> impl Iterator<Item = &BuildOption<'a>> {
        self.options.iter().filter(|opt| opt.is_target())
    }
}

impl<'a> fmt::Display for BuildInvocation<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = self
            .options
            .iter()
            .map(|opt| opt.value())
            .collect::<Vec<_>>()
            .join(" ");
        match &self.description {
            Some(desc) => write!(f, "[{options}] ({desc})"),
            None => write!(f, "[{options}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_with_values() {
        assert!(BuildOption::parse("--variant=full".into()).unwrap().is_flag());
        assert!(BuildOption::parse("-j4".into()).unwrap().is_flag());
    }

    #[test]
    fn test_rejects_dash_only() {
        assert!(BuildOption::parse("--".into()).is_err());
        assert!(BuildOption::parse("-".into()).is_err());
    }

    #[test]
    fn test_invocation_filters_keep_order() {
        let invocation = BuildInvocation {
            description: None,
            options: vec![
                BuildOption::Flag("--a".into()),
                BuildOption::Target("build".into()),
                BuildOption::Flag("--b".into()),
            ],
        };

        let flags: Vec<&str> = invocation.flags().map(|f| f.value()).collect();
        assert_eq!(flags, vec!["--a", "--b"]);
        assert_eq!(invocation.targets().count(), 1);
        assert_eq!(invocation.to_string(), "[--a build --b]");
    }
}
