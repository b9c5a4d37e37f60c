use thiserror::Error;

pub type Result<T> = std::result::Result<T, GpointsError>;

#[derive(Error, Debug)]
pub enum GpointsError {
    #[error("Credentials error: {0}")]
    Credentials(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error: {url} returned status {status}")]
    Api { status: u16, url: String },
    #[error("Malformed API response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

impl GpointsError {
    pub fn malformed(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        GpointsError::MalformedResponse {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }
}
