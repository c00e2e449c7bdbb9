use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ModelError {
    #[error("Invalid genotype call: {0}")]
    InvalidGenotype(String),
}
