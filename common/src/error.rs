use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("InvalidConfig({0})")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("EmptySelector({0})")]
    EmptySelector(&'static str),

    #[error("InvalidClassName({0:?})")]
    InvalidClassName(String),
}

pub type Result<T> = std::result::Result<T, Error>;
