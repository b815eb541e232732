use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parameter store {0} does not exist")]
    MissingStore(String),

    #[error("Invalid parameter '{0}'; the parameter list must be checked")]
    UnknownParameter(String),

    #[error("Invalid value for parameter '{param}': '{value}' is not a non-negative integer")]
    InvalidNumber { param: String, value: String },

    #[error("Invalid value for parameter 'maxlength': must be greater than zero")]
    NonPositiveMaxLength,

    #[error("Corrupt parameter snapshot at byte {offset}: {reason}")]
    CorruptSnapshot { offset: usize, reason: String },
}
