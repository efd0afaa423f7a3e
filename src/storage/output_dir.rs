use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;

/// Makes `dir` exist and be empty.
pub fn prepare_output_dir(dir: &Path) -> io::Result<()> {
    if !dir.exists() {
        return fs::create_dir_all(dir);
    }

    let mut cleared = 0_usize;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
        cleared += 1;
    }

    if cleared > 0 {
        info!("Cleared {} entries from {}", cleared, dir.display());
    }

    Ok(())
}

/// First free `snapshot_NNN.<extension>` in `dir`, counting from 1.
#[must_use]
pub fn next_snapshot_path(dir: &Path, extension: &str) -> PathBuf {
    let mut counter = 1_u32;

    loop {
        let candidate = dir.join(format!("snapshot_{:03}.{}", counter, extension));
        if !candidate.exists() || counter == u32::MAX {
            return candidate;
        }
        counter += 1;
    }
}
