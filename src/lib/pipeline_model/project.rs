use std::borrow::Cow;
use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Default)]
pub struct ProjectModel<'a> {
    pub name: Cow<'a, str>,
    pub version: Option<Cow<'a, str>>,
    pub root: PathBuf,
}
