use thiserror::Error;

#[derive(Error, Debug)]
pub enum BindingError {
    #[error("{type_name} cannot be converted through epoch milliseconds")]
    UnsupportedTemporalConversion { type_name: &'static str },

    #[error("Date parsing error: {0}")]
    DateParseError(#[from] chrono::ParseError),

    #[error("Epoch milliseconds out of range: {millis}")]
    EpochMillisOutOfRange { millis: i64 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid config value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Value type mismatch: expected {expected}")]
    ValueTypeMismatch { expected: &'static str },

    #[error("Document type mismatch: expected a JSON {expected}")]
    DocumentTypeMismatch { expected: &'static str },

    #[error("No serializer available for property '{property}'")]
    MissingSerializer { property: String },

    #[error("No deserializer available for property '{property}'")]
    MissingDeserializer { property: String },

    #[error("Adapter error: {message}")]
    AdapterError { message: String },
}

pub type Result<T> = std::result::Result<T, BindingError>;
