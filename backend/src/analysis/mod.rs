pub mod formatter;
pub mod handler;

use crate::fetch::FetchError;
use crate::translation::TranslationError;
use crate::vision::DetectionError;
use formatter::FormattingError;

/// Every way an invocation can fail. All of them surface to the caller as the same 500 response.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Missing imageUrl query parameter")]
    MissingInput,
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
    #[error("Detection error: {0}")]
    Detection(#[from] DetectionError),
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),
    #[error("Formatting error: {0}")]
    Formatting(#[from] FormattingError),
}
