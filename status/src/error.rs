use std::path::PathBuf;

pub type PublishResult<T> = Result<T, PublishError>;

/// Failures while persisting partitions or writing pages.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("Failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {} to {}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize bucket '{label}'")]
    Serialize {
        label: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse partition {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to render template '{template}'")]
    Render {
        template: &'static str,
        #[source]
        source: askama::Error,
    },
}
