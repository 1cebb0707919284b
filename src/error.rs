use std::path::PathBuf;

/// Errors raised while loading raw models. Constraining itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("at JSON path {json_path} → {source}")]
    Json {
        json_path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("in `{}`: {source}", path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}
