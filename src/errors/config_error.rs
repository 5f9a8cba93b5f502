use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingVar(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::MissingVar(key) => {
                write!(f, "Environment variable {key} is not set (it can also be put in a .env file)")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
