use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{ImageFormat, RgbaImage};
use tempfile::NamedTempFile;

use crate::error::Result;

/// Mode for newly created outputs; an existing target keeps its own mode.
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// Encode `img` as PNG at `output`. The data goes to a temporary file in the same
/// directory first and is renamed into place once fully written.
pub fn write_png(output: &Path, img: &RgbaImage) -> Result<()> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp_builder = tempfile::Builder::new();
    tmp_builder.prefix(".logoproc-").suffix(".png");
    let tmp: NamedTempFile = tmp_builder.tempfile_in(dir)?;

    {
        let mut writer = BufWriter::new(tmp.as_file());
        img.write_to(&mut writer, ImageFormat::Png)?;
        writer.flush()?;
    }

    // Temp files are created 0600
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = match fs::metadata(output) {
            Ok(meta) => meta.permissions().mode() & 0o7777,
            Err(_) => NEW_FILE_MODE,
        };
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(mode))?;
    }

    tmp.persist(output).map_err(|e| e.error)?;
    Ok(())
}
