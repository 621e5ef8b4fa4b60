use std::path::PathBuf;

use thiserror::Error;

/// Why a note produced no [`crate::record::ClassRecord`].
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no front matter block")]
    MissingFrontMatter,

    #[error("front matter has no {0}: line")]
    MissingField(&'static str),
}
