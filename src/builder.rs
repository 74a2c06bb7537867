use std::path::PathBuf;
use std::time::Duration;

use crate::config::ImportConfig;
use crate::error::ImportError;
use crate::images_to_text::{ImageSource, TextRecognizer};
use crate::model::{Ingredient, ParsedRecipe};
use crate::pipelines::RecipeExtractionPipeline;
use crate::url_to_text::fetchers::{DocumentFetcher, RequestFetcher};

/// Represents the input source for a recipe
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Fetch the page and extract from its HTML
    Url(String),
    /// Already-fetched HTML and the URL it came from
    Html { html: String, url: String },
    /// Text already produced by an OCR engine
    OcrText(String),
    /// Images to run through the configured recognizer, in page order
    Images(Vec<ImageSource>),
    /// Multi-line ingredient list; only the normalizer runs
    IngredientText(String),
}

/// Result of a recipe import operation
#[derive(Debug, Clone)]
pub enum ImportResult {
    /// A full recipe record
    Recipe(ParsedRecipe),
    /// Ingredients only, from bulk ingredient text
    Ingredients(Vec<Ingredient>),
}

/// Builder for configuring and executing recipe imports
#[derive(Default)]
pub struct RecipeImporterBuilder {
    source: Option<InputSource>,
    timeout: Option<Duration>,
    config: Option<ImportConfig>,
    fetcher: Option<Box<dyn DocumentFetcher>>,
    recognizer: Option<Box<dyn TextRecognizer>>,
}

impl RecipeImporterBuilder {
    /// Set the input source to a URL
    ///
    /// # Example
    /// ```
    /// use recipe_extract::RecipeImporter;
    ///
    /// let builder = RecipeImporter::builder()
    ///     .url("https://example.com/recipe");
    /// ```
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.source = Some(InputSource::Url(url.into()));
        self
    }

    /// Set the input source to a page that has already been fetched
    ///
    /// Relative image URLs are resolved against `url`.
    pub fn html(mut self, html: impl Into<String>, url: impl Into<String>) -> Self {
        self.source = Some(InputSource::Html {
            html: html.into(),
            url: url.into(),
        });
        self
    }

    /// Set the input source to OCR output
    ///
    /// Text from several images should be joined with newlines in page order.
    ///
    /// # Example
    /// ```
    /// use recipe_extract::RecipeImporter;
    ///
    /// let builder = RecipeImporter::builder()
    ///     .ocr_text("Pancakes\nIngredients\n1 cup flour\nDirections\nMix");
    /// ```
    pub fn ocr_text(mut self, text: impl Into<String>) -> Self {
        self.source = Some(InputSource::OcrText(text.into()));
        self
    }

    /// Set the input source to image files
    ///
    /// Requires a recognizer, see [`RecipeImporterBuilder::recognizer`].
    pub fn images<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let images = paths
            .into_iter()
            .map(|path| ImageSource::Path(path.into()))
            .collect();
        self.source = Some(InputSource::Images(images));
        self
    }

    /// Set the input source to in-memory images
    pub fn image_sources(mut self, images: Vec<ImageSource>) -> Self {
        self.source = Some(InputSource::Images(images));
        self
    }

    /// Set the input source to a bulk ingredient list
    ///
    /// # Example
    /// ```
    /// use recipe_extract::RecipeImporter;
    ///
    /// let builder = RecipeImporter::builder()
    ///     .ingredient_text("2 cups flour\n1 tsp salt");
    /// ```
    pub fn ingredient_text(mut self, text: impl Into<String>) -> Self {
        self.source = Some(InputSource::IngredientText(text.into()));
        self
    }

    /// Set a timeout for HTTP requests made by the default fetcher
    ///
    /// Overrides `ImportConfig::timeout` and keeps sub-second precision.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Use an explicit configuration instead of the defaults
    pub fn config(mut self, config: ImportConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Replace the plain HTTP fetcher, e.g. with a headless browser
    pub fn fetcher(mut self, fetcher: impl DocumentFetcher + 'static) -> Self {
        self.fetcher = Some(Box::new(fetcher));
        self
    }

    /// Set the OCR engine used for image sources
    pub fn recognizer(mut self, recognizer: impl TextRecognizer + 'static) -> Self {
        self.recognizer = Some(Box::new(recognizer));
        self
    }

    /// Build and execute the recipe import operation
    ///
    /// # Errors
    /// Returns `ImportError` if:
    /// - No input source was specified
    /// - The URL is invalid or the fetch fails
    /// - Images were given without a recognizer, or recognition fails
    ///
    /// Extraction itself never fails; missing fields get placeholders.
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_extract::RecipeImporter;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let result = RecipeImporter::builder()
    ///     .url("https://example.com/recipe")
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<ImportResult, ImportError> {
        let source = self.source.ok_or_else(|| {
            ImportError::BuilderError(
                "No input source specified. Use .url(), .html(), .ocr_text(), .images() or .ingredient_text()"
                    .to_string(),
            )
        })?;

        let pipeline = RecipeExtractionPipeline::new(self.config.unwrap_or_default());

        match source {
            InputSource::Url(url) => {
                let recipe = match self.fetcher {
                    Some(fetcher) => pipeline.from_url(fetcher.as_ref(), &url).await?,
                    None => {
                        let fetcher = match self.timeout {
                            Some(timeout) => {
                                RequestFetcher::new(Some(timeout), &pipeline.config().user_agent)?
                            }
                            None => RequestFetcher::from_config(pipeline.config())?,
                        };
                        pipeline.from_url(&fetcher, &url).await?
                    }
                };
                Ok(ImportResult::Recipe(recipe))
            }

            InputSource::Html { html, url } => {
                Ok(ImportResult::Recipe(pipeline.from_html(&html, &url)))
            }

            InputSource::OcrText(text) => Ok(ImportResult::Recipe(pipeline.from_ocr_text(&text))),

            InputSource::Images(images) => {
                let recognizer = self.recognizer.ok_or_else(|| {
                    ImportError::BuilderError(
                        "Image input needs a text recognizer. Use .recognizer()".to_string(),
                    )
                })?;
                let recipe = pipeline.from_images(recognizer.as_ref(), &images).await?;
                Ok(ImportResult::Recipe(recipe))
            }

            InputSource::IngredientText(text) => {
                Ok(ImportResult::Ingredients(pipeline.ingredients_from_text(&text)))
            }
        }
    }
}

/// Main entry point for the builder API
pub struct RecipeImporter;

impl RecipeImporter {
    /// Creates a new builder for importing recipes
    ///
    /// # Example
    /// ```
    /// use recipe_extract::RecipeImporter;
    ///
    /// let builder = RecipeImporter::builder();
    /// ```
    pub fn builder() -> RecipeImporterBuilder {
        RecipeImporterBuilder::default()
    }
}
