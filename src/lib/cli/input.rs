use clap::{Parser, Subcommand};

/// [`CliArgs`] is the command line arguments parser
///
/// #Test
/// ```rust
/// use clap::Parser;
/// use buildall::cli::input::{CliArgs, Command};
///
/// let parser = CliArgs::parse_from(["", "-v"]);
/// assert_eq!(1, parser.verbose);
/// assert_eq!(parser.command(), Command::Run { dry_run: false });
///
/// let parser = CliArgs::parse_from(["", "--root", "adcs", "run", "--dry-run"]);
/// assert_eq!(parser.root.as_deref(), Some("adcs"));
/// assert_eq!(parser.command(), Command::Run { dry_run: true });
///
/// let parser = CliArgs::parse_from(["", "--config", "ci/buildall.toml", "plan"]);
/// assert_eq!(parser.config.as_deref(), Some("ci/buildall.toml"));
/// assert_eq!(parser.command(), Command::Plan);
///
/// let parser = CliArgs::parse_from(["", "new", "--name", "gssb", "--force"]);
/// assert_eq!(
///     parser.command(),
///     Command::New { name: Some("gssb".to_string()), force: true }
/// );
/// ```
#[derive(Parser, Debug, Default)]
#[command(name = "buildall")]
#[command(version)]
#[command(
    about = "Builds everything: artifacts, manifest, waf images, documentation and static checks",
    long_about = "Runs the whole release pipeline of a waf based project, step by step, \
    stopping at the first failure"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[arg(short, long, action = clap::ArgAction::Count, help="buildall maximum allowed verbosity level is: '-v'")]
    pub verbose: u8,

    #[arg(short, long, help = "Path to the project root. Defaults to the current directory")]
    pub root: Option<String>,

    #[arg(
        short,
        long,
        help = "Path to the configuration file, relative to the project root"
    )]
    pub config: Option<String>,
}

impl CliArgs {
    /// The requested command. Running the whole pipeline is the default
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Run { dry_run: false })
    }
}

/// [`Command`] -  The core enum commands
#[derive(Subcommand, Debug, PartialEq, Eq, Clone)]
pub enum Command {
    /// Runs the whole pipeline
    Run {
        #[arg(long, help = "Log every action without performing it")]
        dry_run: bool,
    },
    /// Prints the ordered steps and their command lines without running them
    Plan,
    /// Writes the default configuration file at the project root
    New {
        #[arg(long, help = "The project name recorded in the manifest")]
        name: Option<String>,
        #[arg(long, help = "Overwrite an existing configuration file")]
        force: bool,
    },
}
