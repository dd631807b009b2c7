use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::error::{Error, Result};

/// Checks that the output file may be written.
///
/// An existing file is only accepted when `overwrite` is set.
pub fn get_output_file<P: AsRef<Path>>(output_file: P, overwrite: bool) -> Result<PathBuf> {
    let output_file = output_file.as_ref();
    if output_file.exists() && !overwrite {
        return Err(Error::OutputFileExistsError {
            output_file: output_file.display().to_string(),
        });
    }
    Ok(output_file.to_path_buf())
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

/// Writes `content` to `dest_path` in one pass, creating parent directories.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(dest_path)?);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    Ok(())
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}
