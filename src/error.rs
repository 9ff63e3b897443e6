pub type AppResult<T> = Result<T, AppError>;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("I/O error: {context}")]
    Io {
        #[source]
        source: std::io::Error,
        context: String,
    },
    #[error("invalid journal content in {origin}: {message}")]
    Content { origin: String, message: String },
    #[error("image load failed for {reference}")]
    ImageLoad {
        reference: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("unsupported: {0}")]
    Unsupported(String),
}

impl From<std::io::Error> for AppError {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            source,
            context: "I/O operation failed".to_string(),
        }
    }
}

impl AppError {
    pub fn io_with_context(source: std::io::Error, context: impl Into<String>) -> Self {
        Self::Io {
            source,
            context: context.into(),
        }
    }

    pub fn content(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Content {
            origin: origin.into(),
            message: message.into(),
        }
    }

    pub fn image_load(
        reference: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ImageLoad {
            reference: reference.into(),
            source: Box::new(source),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn image_load_error_wraps_reference_and_source() {
        let err = AppError::image_load("photos/beach.jpg", AppError::invalid_argument("bad"));
        assert!(matches!(err, AppError::ImageLoad { ref reference, .. } if reference == "photos/beach.jpg"));
        assert_eq!(err.to_string(), "image load failed for photos/beach.jpg");
    }

    #[test]
    fn content_error_names_origin() {
        let err = AppError::content("journal.toml", "missing [people]");
        assert_eq!(
            err.to_string(),
            "invalid journal content in journal.toml: missing [people]"
        );
    }
}
