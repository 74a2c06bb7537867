use thiserror::Error;

/// Errors raised at the collaborator edges (fetching pages, recognizing images).
///
/// The extractors themselves never fail; every miss inside them resolves to a
/// default or placeholder value.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Failed to fetch the page
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Failed to load page: status {0}")]
    HttpStatus(u16),

    /// The input is not an absolute URL
    #[error("Invalid URL format: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The OCR collaborator could not read an image
    #[error("Failed to extract text from image: {0}")]
    RecognitionError(String),

    /// The batch was empty, or every image in it was missing or too small
    #[error("At least one readable image is required")]
    NoImages,

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Reading an input file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl ImportError {
    /// Human-readable explanation suitable for showing to an end user.
    pub fn user_message(&self) -> String {
        match self {
            ImportError::FetchError(e) if e.is_timeout() => {
                "The request timed out. The website might be slow or blocking our connection."
                    .to_string()
            }
            ImportError::HttpStatus(403) => {
                "Access was denied by the website. This site has strong anti-bot protections."
                    .to_string()
            }
            ImportError::RecognitionError(_) | ImportError::NoImages => {
                "Failed to extract text from images. Please ensure they are clear photos of a recipe."
                    .to_string()
            }
            other => other.to_string(),
        }
    }
}
