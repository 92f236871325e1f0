use eyre::Result;
use std::fs;
use std::path::Path;

/// List entry names (files and directories) in `dir`, in the order the
/// filesystem returns them. Non-UTF-8 names are converted lossily.
pub fn list_dir(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let e = entry?;
        names.push(e.file_name().to_string_lossy().into_owned());
    }
    tracing::debug!(dir = %dir.display(), entries = names.len(), "listed directory");
    Ok(names)
}
