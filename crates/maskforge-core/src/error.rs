use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaskError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Mask of {width}x{height} pixels exceeds the encoder limit")]
    MaskTooLarge { width: u32, height: u32 },

    #[error(
        "Mask dimensions {}x{} do not match source image {}x{}",
        .actual.0, .actual.1, .expected.0, .expected.1
    )]
    MaskDimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("Invalid stroke script: {0}")]
    Script(String),

    #[error("Encode worker error: {0}")]
    Worker(String),
}

pub type Result<T> = std::result::Result<T, MaskError>;
