/// Errors surfaced by the pricing layer. Serializable so they can sit inside Leptos resources.
#[derive(thiserror::Error, serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Generic(String),

    #[error("SDK error: {0}")]
    Sdk(String),

    #[error("Serde Error: {0}")]
    Serde(String),

    #[error("Invalid url: {0}")]
    Url(String),
}

impl Error {
    pub fn generic(message: impl ToString) -> Self {
        let message = message.to_string();
        Error::Generic(message)
    }
    pub fn serde(message: impl ToString) -> Self {
        let message = message.to_string();
        Error::Serde(message)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Self::Generic(value.to_string())
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::Generic(value)
    }
}

impl From<udon_sdk::Error> for Error {
    fn from(error: udon_sdk::Error) -> Self {
        Error::Sdk(error.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Serde(error.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(error: url::ParseError) -> Self {
        Error::Url(error.to_string())
    }
}
