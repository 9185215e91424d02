use std::{
    fs::{self, DirBuilder, File},
    io::Write,
    path::{Path, PathBuf},
};

use color_eyre::{eyre::Context, Result};

pub fn create_file<'a>(path: &Path, filename: &'a str, buff_write: &'a [u8]) -> Result<()> {
    let file_path = path.join(filename);

    File::create(&file_path)
        .with_context(|| format!("Could not create file {file_path:?}"))?
        .write_all(buff_write)
        .with_context(|| format!("Could not write to file {file_path:?}"))
}

pub fn create_directory(path_create: &Path) -> Result<()> {
    DirBuilder::new()
        .recursive(true)
        .create(path_create)
        .with_context(|| format!("Could not create directory {path_create:?}"))
}

/// Deletes the directory and everything below it. A missing directory is not an error
pub fn remove_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    fs::remove_dir_all(path).with_context(|| format!("Could not remove directory {path:?}"))
}

/// Gets the absolute path of the project root
pub fn get_project_root_absolute_path(project_root: &Path) -> Result<PathBuf> {
    let canonical = fs::canonicalize(project_root)
        .with_context(|| format!("Could not resolve the path {project_root:?}"))?;
    // Windows canonical paths carry the verbatim prefix, which confuses most build tools
    let stripped = canonical
        .to_str()
        .and_then(|p| p.strip_prefix(r"\\?\"))
        .map(PathBuf::from);
    Ok(stripped.unwrap_or(canonical))
}
