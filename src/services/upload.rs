use std::path::Path;

use crate::utils::files;

/// Name returned to clients when a write fails and uploads are not strict.
pub const FALLBACK_FILE_NAME: &str = crate::models::employee::DEFAULT_PHOTO_FILE_NAME;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The file was written under this name.
    Stored(String),
    /// Nothing usable was written; the reason is for logs only.
    Failed(String),
}

/// Writes `bytes` into `dir` under the base name of `original_name`,
/// creating the directory first. An existing file with that name is replaced.
pub async fn save_file(dir: &Path, bytes: &[u8], original_name: &str) -> SaveOutcome {
    let Some(file_name) = files::base_name(original_name) else {
        return SaveOutcome::Failed(format!("unusable file name {original_name:?}"));
    };

    if let Err(err) = tokio::fs::create_dir_all(dir).await {
        return SaveOutcome::Failed(format!("cannot create {}: {err}", dir.display()));
    }

    match tokio::fs::write(dir.join(file_name), bytes).await {
        Ok(()) => SaveOutcome::Stored(file_name.to_owned()),
        Err(err) => SaveOutcome::Failed(format!("cannot write {file_name}: {err}")),
    }
}
