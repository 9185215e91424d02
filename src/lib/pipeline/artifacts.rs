//! Collects build outputs into the artifacts directory

use std::borrow::Cow;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::{
    eyre::{bail, eyre, Context},
    Result,
};
use walkdir::WalkDir;

use crate::pipeline_model::environment::BuildEnvironment;
use crate::utils;

/// Copies every path matched by `patterns` into the artifacts directory,
/// or into `subdir` below it.
///
/// - A matched file lands at `<dest>/<file name>`
/// - A matched directory is copied recursively. Without `subdir` it lands at
/// `<dest>/<directory name>`; with `subdir` its contents are placed directly
/// under `<dest>`, so the subdir names the copied tree
///
/// The artifacts directory itself is never copied, even when a matched
/// directory contains it. Two sources landing on the same target is an error.
///
/// A pattern that matches nothing is an error, except on a dry run, where
/// the files are usually not generated yet. Returns the number of copied files
pub fn copy_to_artifacts(
    env: &BuildEnvironment<'_>,
    patterns: &[Cow<'_, str>],
    subdir: Option<&str>,
) -> Result<usize> {
    let dest = match subdir {
        Some(subdir) => env.artifact_dir().join(subdir),
        None => env.artifact_dir().to_path_buf(),
    };
    let mut collector = Collector::new(env.artifact_dir());

    for pattern in patterns {
        let matches = expand_pattern(env.root(), pattern)?;

        if matches.is_empty() {
            if env.dry_run {
                log::warn!("[dry-run] Nothing matches {pattern:?} yet");
                continue;
            }
            bail!(
                "The pattern {pattern:?} didn't match anything under {:?}",
                env.root()
            )
        }

        for source in matches {
            if source.starts_with(env.artifact_dir()) {
                log::debug!("Skipping {source:?}, it's part of the artifacts directory");
                continue;
            }

            if env.dry_run {
                log::info!("[dry-run] Would copy {source:?} into {dest:?}");
                continue;
            }

            log::debug!("Copying {source:?} into {dest:?}");
            if source.is_dir() {
                let target = if subdir.is_some() {
                    dest.clone()
                } else {
                    dest.join(file_name(&source)?)
                };
                collector.copy_dir(&source, &target)?;
            } else {
                let target = dest.join(file_name(&source)?);
                collector.copy_file(&source, target)?;
            }
        }
    }

    Ok(collector.copied)
}

fn file_name(path: &Path) -> Result<&std::ffi::OsStr> {
    path.file_name()
        .ok_or_else(|| eyre!("Could not get the file name of {path:?}"))
}

/// Tracks the files written by a single copy step
struct Collector<'a> {
    excluded: &'a Path,
    written: HashSet<PathBuf>,
    copied: usize,
}

impl<'a> Collector<'a> {
    fn new(excluded: &'a Path) -> Self {
        Self {
            excluded,
            written: HashSet::new(),
            copied: 0,
        }
    }

    fn copy_file(&mut self, source: &Path, target: PathBuf) -> Result<()> {
        if self.written.contains(&target) {
            bail!("{source:?} would overwrite {target:?}, already copied from another source")
        }

        if let Some(parent) = target.parent() {
            utils::fs::create_directory(parent)?;
        }
        fs::copy(source, &target)
            .with_context(|| format!("Could not copy {source:?} to {target:?}"))?;

        self.written.insert(target);
        self.copied += 1;
        Ok(())
    }

    /// Recursively copies the contents of `src_dir` under `dest_dir`, preserving
    /// the relative layout
    fn copy_dir(&mut self, src_dir: &Path, dest_dir: &Path) -> Result<()> {
        utils::fs::create_directory(dest_dir)?;

        let excluded = self.excluded;
        let walker = WalkDir::new(src_dir)
            .min_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| e.path() != excluded);

        for entry in walker {
            let entry = entry.with_context(|| format!("Could not walk the directory {src_dir:?}"))?;
            let relative = entry
                .path()
                .strip_prefix(src_dir)
                .with_context(|| format!("{:?} is not under {src_dir:?}", entry.path()))?;
            let target = dest_dir.join(relative);

            if entry.file_type().is_dir() {
                utils::fs::create_directory(&target)?;
            } else {
                self.copy_file(entry.path(), target)?;
            }
        }

        Ok(())
    }
}

/// Expands a glob pattern relative to the project root. The root itself is
/// escaped, so only the user pattern is interpreted
fn expand_pattern(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let full_pattern = if Path::new(pattern).is_absolute() {
        pattern.to_string()
    } else {
        let escaped_root = glob::Pattern::escape(&root.to_string_lossy());
        format!("{escaped_root}/{pattern}")
    };

    let mut matches = glob::glob(&full_pattern)
        .with_context(|| format!("Invalid artifacts pattern {pattern:?}"))?
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Could not read the paths matched by {pattern:?}"))?;
    matches.sort();

    Ok(matches)
}
