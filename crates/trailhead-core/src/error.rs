pub type Result<T> = std::result::Result<T, SanitizeError>;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SanitizeError {
    #[error("No JSON object found in the model response")]
    NoJsonFound,

    #[error("Malformed JSON in the model response: {message}")]
    MalformedJson {
        message: String,
        /// The extracted substring that failed to parse.
        source_text: String,
    },
}
