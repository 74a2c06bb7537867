use super::RecipeExtractionPipeline;
use crate::error::ImportError;
use crate::images_to_text::{self, ImageSource, TextRecognizer};
use crate::model::ParsedRecipe;
use log::info;

/// Recognizes the images sequentially, then segments the combined text.
pub async fn process(
    pipeline: &RecipeExtractionPipeline,
    recognizer: &dyn TextRecognizer,
    images: &[ImageSource],
) -> Result<ParsedRecipe, ImportError> {
    info!("Parsing recipe from {} images", images.len());

    let combined = images_to_text::recognize_all(
        recognizer,
        images,
        pipeline.config().min_image_bytes,
    )
    .await?;

    Ok(pipeline.from_ocr_text(&combined))
}
