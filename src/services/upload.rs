//! Photo upload service
//!
//! Persists registration photos under the uploads directory, enforcing the
//! configured size and content-type limits.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{info, debug};
use uuid::Uuid;

use crate::config::UploadsConfig;
use crate::utils::errors::{KilaHubError, Result};
use crate::utils::helpers::{format_bytes, generate_random_string, sanitize_filename};
use crate::utils::logging::log_upload_rejected;

/// Stores uploaded photos on the local filesystem
#[derive(Debug, Clone)]
pub struct PhotoStorage {
    config: UploadsConfig,
}

impl PhotoStorage {
    /// Create a new PhotoStorage instance
    pub fn new(config: UploadsConfig) -> Self {
        Self { config }
    }

    /// Persist a photo for a registration and return its served URL
    pub async fn store_photo(
        &self,
        registration_id: Uuid,
        original_filename: &str,
        content_type: &str,
        data: &[u8],
    ) -> Result<String> {
        if !self
            .config
            .allowed_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(content_type))
        {
            log_upload_rejected(&registration_id.to_string(), "unsupported content type");
            return Err(KilaHubError::UploadRejected(format!(
                "Unsupported content type: {}",
                content_type
            )));
        }

        if data.is_empty() {
            log_upload_rejected(&registration_id.to_string(), "empty file");
            return Err(KilaHubError::UploadRejected("Empty file".to_string()));
        }

        if data.len() as u64 > self.config.max_bytes {
            log_upload_rejected(&registration_id.to_string(), "file too large");
            return Err(KilaHubError::UploadRejected(format!(
                "File exceeds the {} limit",
                format_bytes(self.config.max_bytes)
            )));
        }

        let extension = extension_for(content_type, original_filename);
        let filename = format!(
            "{}-{}.{}",
            registration_id,
            generate_random_string(6),
            extension
        );

        fs::create_dir_all(&self.config.dir).await?;
        let path = PathBuf::from(&self.config.dir).join(&filename);
        fs::write(&path, data).await?;

        debug!(path = %path.display(), size = data.len(), "Photo written");
        info!(registration_id = %registration_id, filename = %filename, "Photo stored");

        Ok(format!("/uploads/{}", filename))
    }
}

/// Extension derived from the content type, falling back to the sanitized
/// original filename
fn extension_for(content_type: &str, original_filename: &str) -> String {
    match content_type.to_ascii_lowercase().as_str() {
        "image/jpeg" => "jpg".to_string(),
        "image/png" => "png".to_string(),
        "image/webp" => "webp".to_string(),
        _ => Path::new(&sanitize_filename(original_filename))
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("bin")
            .to_string(),
    }
}
