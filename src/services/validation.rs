use crate::error::UploadError;
use crate::models::UploadCandidate;

pub const ALLOWED_EXTENSIONS: [&str; 3] = ["xlsx", "xls", "csv"];

/// 16 MiB.
pub const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Local gate in front of every upload request.
#[derive(Debug, Clone, Copy)]
pub struct ValidationPolicy {
    allowed_extensions: &'static [&'static str],
    max_file_size: u64,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            allowed_extensions: &ALLOWED_EXTENSIONS,
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

impl ValidationPolicy {
    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    /// Format is checked before size, so a 20 MiB `.pdf` reports the format.
    pub fn validate(&self, candidate: &UploadCandidate) -> Result<(), UploadError> {
        let extension = file_extension(&candidate.name).ok_or(UploadError::InvalidFormat)?;
        if !self
            .allowed_extensions
            .iter()
            .any(|allowed| *allowed == extension)
        {
            return Err(UploadError::InvalidFormat);
        }

        if candidate.size() > self.max_file_size {
            return Err(UploadError::TooLarge);
        }

        Ok(())
    }
}

/// Lowercased text after the last dot. A name with no dot has no extension.
fn file_extension(name: &str) -> Option<String> {
    name.rsplit_once('.')
        .map(|(_, extension)| extension.to_lowercase())
}
