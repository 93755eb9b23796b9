use std::path::Path;

use tracing::debug;

use crate::batch::TextSource;
use crate::error::Result;
use crate::models::document::RecognizedText;

/// Reads text that was recognized ahead of time.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextSource;

impl TextSource for PlainTextSource {
    fn get_text(&self, path: &Path) -> Result<RecognizedText> {
        let content = std::fs::read_to_string(path)?;
        debug!("Read {} bytes of text from {}", content.len(), path.display());
        Ok(RecognizedText::new(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StrError;

    #[test]
    fn test_missing_file_is_io_error() {
        let err = PlainTextSource.get_text(Path::new("/nonexistent/doc.txt")).unwrap_err();
        assert!(matches!(err, StrError::Io(_)));
    }
}
