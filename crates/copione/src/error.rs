#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not extract text from the document: {0}")]
    Extraction(#[from] pdf::ExtractionError),

    #[error("Input is not valid UTF-8 text: {0}")]
    InvalidText(#[from] std::string::FromUtf8Error),
}
