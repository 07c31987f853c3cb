use crate::error::{PublishError, PublishResult};
use std::path::Path;

pub(crate) async fn ensure_dir(path: &Path) -> PublishResult<()> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| PublishError::CreateDir {
            path: path.to_path_buf(),
            source,
        })
}

pub(crate) async fn write_text(path: &Path, contents: &str) -> PublishResult<()> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|source| PublishError::Write {
            path: path.to_path_buf(),
            source,
        })
}
