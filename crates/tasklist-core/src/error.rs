use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Seed error: {0}")]
    Seed(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl TaskError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
