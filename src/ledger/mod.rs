use async_trait::async_trait;
use solana_sdk::{pubkey::Pubkey, signature::Keypair, signature::Signature};

use crate::data::{CollectionRecord, CollectionSpec, Locator};

pub mod errors;
pub mod rpc;

pub use errors::LedgerError;
pub use rpc::RpcLedger;

/// A state change the ledger is asked to apply, signed by the session identity.
#[derive(Debug, Clone)]
pub enum LedgerTransaction {
    CreateCollection(CollectionSpec),
    VerifyMembership {
        collection: Pubkey,
        candidate: Pubkey,
    },
    /// Rewrites the locator of `record`, carrying every other field over as-is.
    UpdateLocator {
        record: CollectionRecord,
        locator: Locator,
    },
}

impl LedgerTransaction {
    pub fn kind(&self) -> &'static str {
        match self {
            LedgerTransaction::CreateCollection(_) => "create_collection",
            LedgerTransaction::VerifyMembership { .. } => "verify_membership",
            LedgerTransaction::UpdateLocator { .. } => "update_locator",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    pub signature: Signature,
    /// The record the transaction acted on; for a create this is the newly
    /// assigned address.
    pub address: Pubkey,
}

#[async_trait]
pub trait Ledger: Send + Sync {
    /// Returns once the transaction has settled at the configured commitment.
    async fn submit(
        &self,
        signer: &Keypair,
        transaction: LedgerTransaction,
    ) -> Result<Receipt, LedgerError>;

    async fn query_account(&self, address: &Pubkey)
        -> Result<Option<CollectionRecord>, LedgerError>;

    async fn check_health(&self) -> Result<(), LedgerError>;
}
