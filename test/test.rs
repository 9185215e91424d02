use clap::Parser;
use color_eyre::Result;
use std::path::Path;
use tempfile::tempdir;

use buildall::cli::input::CliArgs;

#[test]
fn test_new_then_plan_and_dry_run() -> Result<()> {
    let temp = tempdir()?;
    let root = temp.path().to_string_lossy().to_string();

    buildall::worker::run_buildall(
        &CliArgs::parse_from(["", "--root", &root, "new", "--name", "gssb"]),
        Path::new("."),
    )?;
    let cfg = std::fs::read_to_string(temp.path().join("buildall.toml"))?;
    assert!(cfg.contains("name = \"gssb\""));

    // an existing configuration file is kept unless forced
    assert!(buildall::worker::run_buildall(
        &CliArgs::parse_from(["", "--root", &root, "new"]),
        Path::new(".")
    )
    .is_err());

    assert!(buildall::worker::run_buildall(
        &CliArgs::parse_from(["", "--root", &root, "plan"]),
        Path::new(".")
    )
    .is_ok());

    assert!(buildall::worker::run_buildall(
        &CliArgs::parse_from(["", "--root", &root, "run", "--dry-run"]),
        Path::new(".")
    )
    .is_ok());
    assert!(!temp.path().join("artifacts").exists());

    Ok(temp.close()?)
}

#[cfg(unix)]
mod pipeline {
    use super::*;

    /// Every tool is replaced by a script that appends its arguments to
    /// `calls.log`, and fails when its first argument matches `FAIL_ON`
    const RECORD_SCRIPT: &str = r###"echo "$*" >> calls.log
case "$1" in
    status) echo "## main...origin/main" ;;
    describe) echo "v9.9.9-1-gcafe" ;;
esac
[ "$FAIL_ON" != "$1" ]
"###;

    fn config(fail_on: &str) -> String {
        format!(
            r#"
[project]
name = "recorded"

[build]
waf = "sh record.sh waf"
waf_stages = ["distclean", "configure", "build"]

[[invocations]]
options = ["--adcs-full"]

[[invocations]]
options = ["gen_config"]

[[artifacts]]
patterns = ["build/doc/getting-started/latex/*.pdf"]

[[artifacts]]
patterns = ["build/doc/getting-started/html"]
subdir = "html_getting_started"

[tools]
status = ["sh", "record.sh", "status"]
describe = ["sh", "record.sh", "describe"]
docs = ["sh", "record.sh", "docs"]
cppcheck = ["sh", "record.sh", "cppcheck"]
stylecheck = ["sh", "record.sh", "stylecheck"]

[env]
FAIL_ON = "{fail_on}"
"#
        )
    }

    fn prepare_project(root: &Path, fail_on: &str) -> Result<()> {
        std::fs::write(root.join("record.sh"), RECORD_SCRIPT)?;
        std::fs::write(root.join("buildall.toml"), config(fail_on))?;

        let doc = root.join("build").join("doc").join("getting-started");
        std::fs::create_dir_all(doc.join("latex"))?;
        std::fs::create_dir_all(doc.join("html"))?;
        std::fs::write(doc.join("latex").join("getting-started.pdf"), "%PDF")?;
        std::fs::write(doc.join("html").join("index.html"), "<html/>")?;

        // leftovers of a previous run
        std::fs::create_dir_all(root.join("artifacts"))?;
        std::fs::write(root.join("artifacts").join("stale.txt"), "old")?;

        Ok(())
    }

    fn recorded_calls(root: &Path) -> Result<Vec<String>> {
        Ok(std::fs::read_to_string(root.join("calls.log"))?
            .lines()
            .map(str::to_string)
            .collect())
    }

    #[test]
    fn test_full_pipeline() -> Result<()> {
        let temp = tempdir()?;
        prepare_project(temp.path(), "")?;
        let root = temp.path().to_string_lossy().to_string();

        buildall::worker::run_buildall(
            &CliArgs::parse_from(["", "--root", &root, "run"]),
            Path::new("."),
        )?;

        assert_eq!(
            recorded_calls(temp.path())?,
            [
                "status",
                "describe",
                "waf distclean configure build --adcs-full",
                "waf distclean configure build gen_config",
                "docs",
                "cppcheck",
                "stylecheck",
            ]
        );

        let artifacts = temp.path().join("artifacts");
        assert!(!artifacts.join("stale.txt").exists());
        assert_eq!(
            std::fs::read_to_string(artifacts.join("status.txt"))?,
            "## main...origin/main\n"
        );
        assert!(artifacts.join("getting-started.pdf").is_file());
        assert!(artifacts
            .join("html_getting_started")
            .join("index.html")
            .is_file());

        let manifest: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(artifacts.join("manifest.json"))?)?;
        assert_eq!(manifest["project"], "recorded");
        assert_eq!(manifest["version"], "v9.9.9-1-gcafe");

        Ok(temp.close()?)
    }

    #[test]
    fn test_failing_step_stops_the_pipeline() -> Result<()> {
        let temp = tempdir()?;
        prepare_project(temp.path(), "cppcheck")?;
        let root = temp.path().to_string_lossy().to_string();

        let err = buildall::worker::run_buildall(
            &CliArgs::parse_from(["", "--root", &root, "run"]),
            Path::new("."),
        )
        .unwrap_err();
        assert!(format!("{err:?}").contains("lint correctness"));

        let calls = recorded_calls(temp.path())?;
        assert_eq!(calls.last().map(String::as_str), Some("cppcheck"));
        assert!(!calls.iter().any(|call| call == "stylecheck"));

        // the artifacts were already collected when the static analysis failed
        assert!(temp
            .path()
            .join("artifacts")
            .join("getting-started.pdf")
            .is_file());

        Ok(temp.close()?)
    }

    #[test]
    fn test_failing_build_skips_the_rest() -> Result<()> {
        let temp = tempdir()?;
        prepare_project(temp.path(), "waf")?;
        let root = temp.path().to_string_lossy().to_string();

        assert!(buildall::worker::run_buildall(
            &CliArgs::parse_from(["", "--root", &root, "run"]),
            Path::new("."),
        )
        .is_err());

        assert_eq!(
            recorded_calls(temp.path())?,
            ["status", "describe", "waf distclean configure build --adcs-full"]
        );
        assert!(!temp.path().join("artifacts").join("html_getting_started").exists());

        Ok(temp.close()?)
    }
}
