use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixelveilError {
    /// Represents a carrier whose pixel format does not offer the 3 color
    /// channels the codec writes to, for example a grayscale image
    #[error("Pixel format with {0} channel(s) is not supported, at least 3 color channels are required")]
    InvalidChannelCount(u8),

    /// Represents a message that does not fit into the carrier in strict mode
    #[error("Capacity error: the carrier offers {capacity} bits but the message needs {required} bits")]
    CapacityExceeded { required: usize, capacity: usize },

    /// Represents a message character outside of the Latin-1 range,
    /// which cannot be stored in a single byte
    #[error("The character {0:?} is outside of the Latin-1 range and cannot be embedded")]
    UnencodableCharacter(char),

    /// Represents an invalid carrier image. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents an unsupported carrier media. For example, a Movie file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents a lossy output target that would destroy the embedded bits
    #[error("Lossy image formats such as JPEG would destroy the embedded message, save as PNG instead")]
    LossyOutputFormat,

    /// Represents a failure when encoding the output image file
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to write the target file
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("API Error: Missing message")]
    MissingMessage,
}
