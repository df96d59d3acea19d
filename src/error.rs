use std::net;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("error occurred while loading config: {0}")]
    EnvyError(#[from] envy::Error),

    #[error("error occurred during parsing address: {0}")]
    AddrParseError(#[from] net::AddrParseError),

    #[error("error occurred during HTTP request: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("error occurred while decoding JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("error response received from counter API, status: {0}")]
    UpstreamStatus(reqwest::StatusCode),

    #[error("error occurred in hyper: {0}")]
    HyperError(#[from] hyper::Error),

    #[error("error occurred while encoding metrics: {0}")]
    PrometheusError(#[from] prometheus::Error),

    #[error("error occurred while decoding metrics output: {0}")]
    FromUtf8Error(#[from] std::string::FromUtf8Error),
}

impl<T> From<Error> for Result<T> {
    fn from(e: Error) -> Self {
        Err(e)
    }
}
