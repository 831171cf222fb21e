use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("failed to decode metadata: {0}")]
    DecodeMetadataFailed(String),

    #[error("account is not a metadata account: {0}")]
    UnexpectedKey(String),

    #[error("metadata belongs to mint {found}, expected {expected}")]
    MintMismatch { expected: String, found: String },
}
