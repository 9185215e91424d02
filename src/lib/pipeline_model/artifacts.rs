use core::fmt;
use std::borrow::Cow;

use serde::Serialize;

/// A group of build outputs that must be retained in the artifacts directory
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Default)]
pub struct ArtifactCopy<'a> {
    /// Glob patterns relative to the project root
    pub patterns: Vec<Cow<'a, str>>,
    pub subdir: Option<Cow<'a, str>>,
}

impl<'a> fmt::Display for ArtifactCopy<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.patterns.join(", "))?;
        if let Some(subdir) = &self.subdir {
            write!(f, " -> {subdir}/")?;
        }
        Ok(())
    }
}
