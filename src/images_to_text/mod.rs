mod ocr;

pub use self::ocr::{recognize_all, ImageSource, TextRecognizer};
