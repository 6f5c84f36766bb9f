use thiserror::Error;

/// Why loading the people list failed
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("request to people API failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("people API answered with status {0}")]
    Status(reqwest::StatusCode),

    #[error("people API returned a malformed body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LoadError {
    /// The only message shown to users, whatever went wrong
    pub const USER_MESSAGE: &'static str = "Something went wrong";
}

pub type LoadResult<T> = std::result::Result<T, LoadError>;
