use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

pub use crate::ledger::errors::LedgerError;
pub use crate::store::errors::PublishError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Publish(#[from] PublishError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("no record found at address {0}")]
    NotFound(Pubkey),
}

impl Error {
    /// Whether retrying the same call with the same input may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Publish(err) => err.is_transient(),
            Error::Ledger(err) => err.is_transient(),
            Error::Configuration(_) | Error::Validation(_) | Error::NotFound(_) => false,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("invalid {field} url {url:?}: {reason}")]
    InvalidUrl {
        field: &'static str,
        url: String,
        reason: String,
    },

    #[error("storage provider url is missing")]
    MissingProviderUrl,

    #[error("{0} timeout must be greater than zero")]
    InvalidTimeout(&'static str),

    #[error("endpoint {endpoint} is unreachable: {reason}")]
    Unreachable { endpoint: String, reason: String },

    #[error("failed to read config file: {0}")]
    Read(String),

    #[error("failed to parse config file: {0}")]
    Parse(String),

    #[error("failed to build http client: {0}")]
    HttpClient(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("creator shares must sum to 100, got {0}")]
    CreatorShares(u32),

    #[error("seller fee basis points must be at most 10000, got {0}")]
    BasisPointsOutOfRange(u16),

    #[error("at most {max} creators are allowed, got {count}")]
    TooManyCreators { count: usize, max: usize },

    #[error("creator {0} is listed more than once")]
    DuplicateCreator(Pubkey),

    #[error("{field} is {len} bytes, max is {max}")]
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("failed to parse string into Pubkey: {0}")]
    InvalidAddress(String),
}
