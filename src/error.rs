use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Hugging Face token not configured")]
    MissingCredential,

    #[error("Inference service returned {status}: {details}")]
    Upstream { status: u16, details: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn upstream(status: u16, details: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            details: details.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_display_includes_status_and_details() {
        let err = Error::upstream(503, "Model is currently loading");
        assert_eq!(
            err.to_string(),
            "Inference service returned 503: Model is currently loading"
        );
    }

    #[test]
    fn test_missing_credential_display() {
        assert_eq!(
            Error::MissingCredential.to_string(),
            "Hugging Face token not configured"
        );
    }
}
