use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Configured URL could not be parsed.
    ///
    /// Raised while constructing the OAuth client from the Discord endpoint
    /// URLs. The variable name is included so the broken value can be located.
    #[error("Invalid URL in environment variable {0}")]
    InvalidUrl(String),
}
