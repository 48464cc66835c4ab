//! Configurable detector

use std::io::Read;
use std::path::Path;

use crate::config::{DetectConfig, PreviewLimit};
use crate::detect::{detect, Detection};
use crate::error::Result;
use crate::{file, reader};

/// Classifies buffers, streams and files with a shared configuration
#[derive(Debug, Clone, Default)]
pub struct Detector {
    config: DetectConfig,
}

impl Detector {
    /// Create a detector that reads streams and files to the end
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with an explicit config
    pub fn with_config(config: DetectConfig) -> Self {
        Self { config }
    }

    /// Only inspect the first `kb` kilobytes of streams and files
    pub fn with_preview_kb(mut self, kb: usize) -> Result<Self> {
        self.config.preview = Some(PreviewLimit::from_kb(kb)?);
        Ok(self)
    }

    /// Current configuration
    pub fn config(&self) -> &DetectConfig {
        &self.config
    }

    /// Classify an in-memory buffer
    ///
    /// Buffers are always inspected in full; the preview limit only
    /// bounds reads.
    pub fn detect_bytes(&self, data: &[u8]) -> Detection {
        detect(data)
    }

    /// Read and classify a stream
    pub fn detect_reader<R: Read>(&self, source: R) -> Result<Detection> {
        reader::detect_reader(source, self.config.preview)
    }

    /// Open and classify a file
    pub fn detect_file(&self, path: impl AsRef<Path>) -> Result<Detection> {
        file::detect_file(path.as_ref(), self.config.preview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::BinaryReason;
    use crate::error::PlaintextError;
    use std::io::Cursor;

    #[test]
    fn test_default_reads_everything() {
        let mut data = vec![b'A'; 4096];
        data.push(0x00);

        let detector = Detector::new();
        assert!(detector.config().preview.is_none());
        assert_eq!(
            detector.detect_reader(Cursor::new(&data)).unwrap().reason(),
            Some(BinaryReason::ControlChar { offset: 4096, byte: 0 })
        );
    }

    #[test]
    fn test_preview_bounds_reader() {
        let mut data = vec![b'A'; 4096];
        data.push(0x00);

        let detector = Detector::new().with_preview_kb(4).unwrap();
        assert!(detector.detect_reader(Cursor::new(&data)).unwrap().is_plaintext());
    }

    #[test]
    fn test_preview_does_not_bound_bytes() {
        let detector = Detector::new().with_preview_kb(1).unwrap();
        let mut data = vec![b'A'; 2048];
        data.push(0x07);
        assert!(!detector.detect_bytes(&data).is_plaintext());
    }

    #[test]
    fn test_invalid_preview() {
        let err = Detector::new().with_preview_kb(0).unwrap_err();
        assert!(matches!(err, PlaintextError::InvalidLength { max_kb: 0 }));
    }

    #[test]
    fn test_with_config() {
        let detector = Detector::with_config(DetectConfig::preview_kb(8).unwrap());
        assert_eq!(detector.config().preview.map(|p| p.kb()), Some(8));
    }

    #[test]
    fn test_detect_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        std::fs::write(&path, "# Notes\n\n- item\n").unwrap();

        assert_eq!(Detector::new().detect_file(&path).unwrap(), Detection::Plaintext);
    }
}
