use std::path::{Path, PathBuf};
use tracing::info;

use super::filename::secure_filename;

/// Write an uploaded document into `upload_dir` under its sanitized name.
///
/// Returns the stored filename, or `None` when the client filename sanitizes
/// to nothing. An existing file with the same name is overwritten.
pub async fn store_upload(
    upload_dir: &Path,
    client_filename: &str,
    data: &[u8],
) -> std::io::Result<Option<String>> {
    let Some(filename) = secure_filename(client_filename) else {
        return Ok(None);
    };

    tokio::fs::create_dir_all(upload_dir).await?;
    let path: PathBuf = upload_dir.join(&filename);
    tokio::fs::write(&path, data).await?;

    info!("Saved uploaded document {} ({} bytes)", path.display(), data.len());
    Ok(Some(filename))
}

/// Resolve a filename echoed back by the client to a document already in
/// `upload_dir`. The name is sanitized again, so only a regular file directly
/// inside the directory is ever accepted.
pub async fn existing_upload(upload_dir: &Path, client_filename: &str) -> Option<String> {
    let filename = secure_filename(client_filename)?;
    match tokio::fs::metadata(upload_dir.join(&filename)).await {
        Ok(meta) if meta.is_file() => Some(filename),
        _ => None,
    }
}
