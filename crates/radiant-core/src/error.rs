pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("record violates normalizer contract: {message}")]
    ContractViolation { message: String },
}
