use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Refuse a run whose channel files would clobber the export being read.
pub fn ensure_channels_spare_input(input: &Path, outputs: &[PathBuf]) -> Result<()> {
    let input_norm = comparable(input)
        .with_context(|| format!("failed to normalize input path {}", input.display()))?;

    for output in outputs {
        let out_norm = comparable(output)
            .with_context(|| format!("failed to normalize output path {}", output.display()))?;
        if out_norm == input_norm {
            bail!(
                "refusing to overwrite source file: channel file {} is the input export",
                output.display()
            );
        }
    }
    Ok(())
}

/// Canonical path when it exists, otherwise the path anchored at the cwd.
///
/// `..` segments in paths that do not exist yet are left unresolved.
fn comparable(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return path
            .canonicalize()
            .with_context(|| format!("canonicalize {}", path.display()));
    }
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir().context("current_dir")?.join(path))
}
