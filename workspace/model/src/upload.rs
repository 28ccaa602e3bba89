use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

const CSV_MIME: &str = "text/csv";
const CSV_SUFFIX: &str = ".csv";

/// Descriptor of a file picked or dropped on the upload page.
///
/// The blob itself stays with the browser; only what validation needs is
/// carried here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadFile {
    name: String,
    mime: Option<String>,
    size_bytes: u64,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, mime: Option<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.filter(|m| !m.is_empty()),
            size_bytes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime(&self) -> Option<&str> {
        self.mime.as_deref()
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }

    /// Accepts the `text/csv` MIME type or a `.csv` suffix in any case.
    pub fn is_csv(&self) -> bool {
        self.mime
            .as_deref()
            .is_some_and(|mime| mime.eq_ignore_ascii_case(CSV_MIME))
            || self.name.to_ascii_lowercase().ends_with(CSV_SUFFIX)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.is_csv() {
            return Err(ModelError::InvalidFileType {
                name: self.name.clone(),
            });
        }
        if self.size_bytes == 0 {
            return Err(ModelError::EmptyFile {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_by_suffix_or_mime() {
        assert!(UploadFile::new("ventas.csv", None, 10).is_csv());
        assert!(UploadFile::new("VENTAS.CSV", None, 10).is_csv());
        assert!(UploadFile::new("export", Some("text/csv".to_string()), 10).is_csv());
        assert!(!UploadFile::new("notes.txt", Some("text/plain".to_string()), 10).is_csv());
    }

    #[test]
    fn test_validate_rejects_txt() {
        let file = UploadFile::new("notes.txt", Some("text/plain".to_string()), 128);
        assert_eq!(
            file.validate(),
            Err(ModelError::InvalidFileType {
                name: "notes.txt".to_string()
            })
        );
    }

    #[test]
    fn test_validate_rejects_empty() {
        let file = UploadFile::new("sales.csv", Some(String::new()), 0);
        assert_eq!(file.mime(), None);
        assert_eq!(
            file.validate(),
            Err(ModelError::EmptyFile {
                name: "sales.csv".to_string()
            })
        );
    }

    #[test]
    fn test_size_kb() {
        let file = UploadFile::new("sales.csv", None, 2048);
        assert!(file.validate().is_ok());
        assert_eq!(file.size_kb(), 2.0);
    }
}
