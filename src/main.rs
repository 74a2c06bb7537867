use log::{debug, error};
use recipe_extract::{ImportConfig, ImportError, ImportResult, RecipeImporter};
use std::env;
use std::fs;
use std::process::ExitCode;

const USAGE: &str = "Usage:
  recipe-extract url <URL>
  recipe-extract html <FILE> <SOURCE_URL>
  recipe-extract ocr <FILE>
  recipe-extract ingredients <FILE>";

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args).await {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &[String]) -> Result<String, ImportError> {
    let usage = || ImportError::BuilderError(USAGE.to_string());

    let config = ImportConfig::load()?;
    debug!("Loaded config: {:?}", config);
    let builder = RecipeImporter::builder().config(config);

    let builder = match args {
        [command, url] if command == "url" => builder.url(url),
        [command, file, url] if command == "html" => builder.html(fs::read_to_string(file)?, url),
        [command, file] if command == "ocr" => builder.ocr_text(fs::read_to_string(file)?),
        [command, file] if command == "ingredients" => {
            builder.ingredient_text(fs::read_to_string(file)?)
        }
        _ => return Err(usage()),
    };

    let json = match builder.build().await? {
        ImportResult::Recipe(recipe) => serde_json::to_string_pretty(&recipe),
        ImportResult::Ingredients(ingredients) => serde_json::to_string_pretty(&ingredients),
    };
    json.map_err(|e| ImportError::BuilderError(format!("Failed to serialize output: {e}")))
}
