use crate::cli::output::arguments::CommandLine;

/// The resolved command lines of every external tool
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct ToolsModel<'a> {
    pub status: CommandLine<'a>,
    pub describe: CommandLine<'a>,
    pub docs: CommandLine<'a>,
    pub cppcheck: CommandLine<'a>,
    pub stylecheck: CommandLine<'a>,
}
