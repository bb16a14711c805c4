use thiserror::Error;

#[derive(Error, Debug)]
pub enum CricketError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Team '{0}' has no players")]
    EmptyRoster(String),

    #[error("Domain error: {0}")]
    Domain(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl CricketError {
    /// Errors raised before any ball is bowled
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            CricketError::Config(_)
                | CricketError::EmptyRoster(_)
                | CricketError::TomlError(_)
                | CricketError::IoError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CricketError>;
