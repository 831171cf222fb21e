pub mod config;
pub mod constants;
pub mod convert;
pub mod data;
pub mod decode;
pub mod derive;
pub mod error;
pub mod keypair;
pub mod ledger;
pub mod mint;
pub mod observe;
pub mod publish;
pub mod retry;
pub mod session;
pub mod setup;
pub mod store;
pub mod transaction;
pub mod update;
pub mod validate;
pub mod verify;

pub use error::{Error, Result};
pub use session::Session;
