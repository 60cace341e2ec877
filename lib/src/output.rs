//! Output file naming and writing

use crate::error::Result;
use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const TEXT_EXTENSION: &str = "txt";

/// Replaces the extension of `input` with `.txt`
///
/// A leading dot (hidden file) does not start an extension.
pub fn text_path(input: &Path) -> PathBuf {
    input.with_extension(TEXT_EXTENSION)
}

/// Appends `n` to the file stem, keeping the extension
///
/// `n == 0` returns the path unchanged, `n == 2` turns `art.txt` into `art2.txt`.
pub fn numbered_path(path: &Path, n: u32) -> PathBuf {
    if n == 0 {
        return path.to_path_buf();
    }
    let mut name: OsString = path.file_stem().map(OsStr::to_os_string).unwrap_or_default();
    name.push(n.to_string());
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    path.with_file_name(name)
}

/// First non-existing text file path derived from the source image path
///
/// `photo.png` → `photo.txt`, or `photo1.txt`, `photo2.txt`, ... if taken.
pub fn output_path(input: &Path) -> PathBuf {
    let base = text_path(input);
    (0..=u32::MAX)
        .map(|n| numbered_path(&base, n))
        .find(|candidate| !candidate.exists())
        .unwrap_or(base)
}

/// Writes lines to a file, each terminated by a newline
pub fn write_lines<S: AsRef<str>>(lines: &[S], path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    log::info!("Wrote {} lines to {}", lines.len(), path.display());
    Ok(())
}
