use crate::error::ImportError;
use async_trait::async_trait;
use log::{debug, warn};
use std::path::PathBuf;

/// Represents the source of an image for OCR processing
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Image from a file path
    Path(PathBuf),
    /// Image already loaded in memory
    Bytes(Vec<u8>),
}

impl ImageSource {
    fn describe(&self) -> String {
        match self {
            ImageSource::Path(path) => path.display().to_string(),
            ImageSource::Bytes(data) => format!("<{} bytes>", data.len()),
        }
    }

    /// Size in bytes, or `None` when the file cannot be found.
    async fn size(&self) -> Option<u64> {
        match self {
            ImageSource::Path(path) => tokio::fs::metadata(path).await.ok().map(|m| m.len()),
            ImageSource::Bytes(data) => Some(data.len() as u64),
        }
    }
}

/// An OCR engine. Implementations return the raw recognized text of one image.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    async fn recognize(&self, image: &ImageSource) -> Result<String, ImportError>;
}

/// Recognizes every image in order and joins the texts with newlines.
///
/// Images are processed one at a time so the combined text keeps the caller's
/// page order; the title heuristic looks at the first lines only. Missing
/// files and images under `min_image_bytes` are skipped. Any recognizer error
/// aborts the batch, and so does a batch where every image was skipped.
pub async fn recognize_all(
    recognizer: &dyn TextRecognizer,
    images: &[ImageSource],
    min_image_bytes: u64,
) -> Result<String, ImportError> {
    if images.is_empty() {
        return Err(ImportError::NoImages);
    }

    let mut combined = String::new();
    let mut recognized = 0;

    for image in images {
        let name = image.describe();
        match image.size().await {
            None => {
                warn!("Image path does not exist: {}", name);
                continue;
            }
            Some(size) if size < min_image_bytes => {
                warn!("Skipping tiny image: {} ({} bytes)", name, size);
                continue;
            }
            Some(_) => {}
        }

        debug!("Processing image: {}", name);
        let text = recognizer.recognize(image).await?;
        recognized += 1;
        debug!("Extracted text from image: {} characters", text.len());
        combined.push_str(&text);
        combined.push('\n');
    }

    if recognized == 0 {
        return Err(ImportError::NoImages);
    }

    Ok(combined)
}
