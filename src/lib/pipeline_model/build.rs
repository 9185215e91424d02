use std::path::PathBuf;

use crate::cli::output::arguments::CommandLine;

#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct BuildModel<'a> {
    pub build_dir: PathBuf,
    pub artifact_dir: PathBuf,
    /// The driver plus the stages that prefix every invocation
    pub waf: CommandLine<'a>,
}
