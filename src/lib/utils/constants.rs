//! Constant value definitions to use across the whole program

pub const CONFIG_FILE_NAME: &str = "buildall";
pub const CONFIG_FILE_EXT: &str = "toml";

pub const STATUS_FILENAME: &str = "status.txt";
pub const MANIFEST_FILENAME: &str = "manifest.json";

/// The value recorded in the manifest when no version can be determined
pub const UNKNOWN_VERSION: &str = "unknown";

/// The names of the default directories, not their paths
pub mod dir_names {
    pub const DEFAULT_BUILD_DIR: &str = "build";
    pub const DEFAULT_ARTIFACT_DIR: &str = "artifacts";
}

/// Command lines used when the configuration file doesn't declare its own
pub mod default_tools {
    pub const WAF: &str = "./waf";
    pub const WAF_STAGES: &[&str] = &["distclean", "configure", "build"];

    pub const STATUS: &[&str] = &["git", "status", "--short", "--branch"];
    pub const DESCRIBE: &[&str] = &["git", "describe", "--always", "--dirty", "--tags"];
    pub const DOCS: &[&str] = &["./waf", "docs"];
    pub const CPPCHECK: &[&str] = &[
        "cppcheck",
        "--quiet",
        "--error-exitcode=1",
        "--enable=warning,performance,portability",
        "--inline-suppr",
        "src",
    ];
    pub const STYLECHECK: &[&str] = &["./waf", "stylecheck"];
}

pub mod error_messages {
    pub const READ_CFG_FILE: &str = "Could not read the configuration file";
    pub const PARSE_CFG_FILE: &str = "Could not parse the configuration file";
    pub const PIPELINE_MODEL_MAPPING: &str = "Error building the pipeline model";
    pub const FAILURE_GATHERING_PROJECT_ROOT_ABS_PATH: &str =
        "An unexpected error happened while resolving the absolute path to the current project root";
    pub const EMPTY_TOOL_COMMAND: &str = "A tool command line can't be empty";
    pub const EMPTY_WAF_DRIVER: &str = "The waf driver can't be an empty string";
    pub const INVALID_SUBDIR: &str =
        "An artifacts subdir must be a relative path that stays inside the artifacts directory";
    pub const INVALID_ARTIFACT_DIR: &str =
        "The artifacts directory must be a relative path below the project root";
    pub const NO_PATTERNS: &str = "An artifacts entry must declare at least one pattern";
    pub const PIPELINE_ABORTED: &str = "The pipeline was aborted";
    pub const CONFIG_FILE_ALREADY_EXISTS: &str =
        "A configuration file already exists at the project root. Use --force to overwrite it";
}
