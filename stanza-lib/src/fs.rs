//! Whole-file reads and writes.
//!
//! Atomic writes go to `.{filename}.tmp` next to the target, are synced and
//! then renamed over the target. Source and target must share a filesystem.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::error::FileError;

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> FileError + '_ {
    move |source| FileError::Io {
        path: path.to_path_buf(),
        source,
    }
}

pub fn read_to_string(path: &Path) -> Result<String, FileError> {
    fs::read_to_string(path).map_err(io_error(path))
}

pub fn write(path: &Path, contents: &str, atomic: bool) -> Result<(), FileError> {
    if atomic {
        atomic_write(path, contents.as_bytes())
    } else {
        fs::write(path, contents).map_err(io_error(path))
    }
}

pub fn atomic_write(path: &Path, contents: &[u8]) -> Result<(), FileError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }

    let temp_path = temp_path_for(path);
    if let Err(error) = write_and_sync(&temp_path, contents) {
        let _ = fs::remove_file(&temp_path);
        return Err(error);
    }

    fs::rename(&temp_path, path).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        FileError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn temp_path_for(target: &Path) -> PathBuf {
    let file_name = target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    target.with_file_name(format!(".{file_name}.tmp"))
}

fn write_and_sync(path: &Path, contents: &[u8]) -> Result<(), FileError> {
    let mut file = File::create(path).map_err(io_error(path))?;
    file.write_all(contents).map_err(io_error(path))?;
    file.sync_all().map_err(io_error(path))
}
