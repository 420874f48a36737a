use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum Error {
    /// A required resume field was missing or blank. Validation runs before
    /// any drawing begins; no partial document is ever produced.
    #[error("required field `{0}` is missing or blank")]
    MissingField(&'static str),

    /// The uploaded photo's format is not on the PNG/JPEG/GIF allow-list
    #[error("unsupported photo format: {0}")]
    UnsupportedPhotoFormat(String),

    #[error(transparent)]
    /// [image] failed to decode the photo bytes
    PhotoDecode(#[from] image::ImageError),

    #[error(transparent)]
    /// An I/O error occurred while writing the document
    Io(#[from] std::io::Error),
}
