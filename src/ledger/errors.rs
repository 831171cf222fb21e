use solana_client::{
    client_error::{ClientError, ClientErrorKind},
    rpc_request::RpcError,
};
use solana_sdk::{instruction::InstructionError, pubkey::Pubkey, transaction::TransactionError};
use thiserror::Error;

use crate::decode::errors::DecodeError;

// JSON-RPC server error returned while a node is behind or overloaded.
const NODE_UNHEALTHY: i64 = -32005;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("ledger request timed out: {0}")]
    Timeout(String),

    #[error("ledger connection failed: {0}")]
    Connection(String),

    #[error("ledger is congested: {0}")]
    Congestion(String),

    #[error("blockhash expired before the transaction landed")]
    BlockhashExpired,

    #[error("transaction was not confirmed: {0}")]
    Unconfirmed(String),

    #[error("insufficient funds to pay for the transaction")]
    InsufficientFunds,

    #[error("invalid signer: {0}")]
    InvalidSigner(String),

    #[error("record {0} is immutable")]
    ImmutableRecord(Pubkey),

    #[error("program rejected the transaction with error code {code:#x}")]
    ProgramError { code: u32 },

    #[error("transaction rejected: {0}")]
    Rejected(String),

    #[error("failed to build instruction: {0}")]
    InvalidInstruction(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl LedgerError {
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            LedgerError::Timeout(_)
                | LedgerError::Connection(_)
                | LedgerError::Congestion(_)
                | LedgerError::BlockhashExpired
                | LedgerError::Unconfirmed(_)
        )
    }
}

pub fn classify_transaction_error(err: &TransactionError) -> LedgerError {
    match err {
        TransactionError::InsufficientFundsForFee
        | TransactionError::InsufficientFundsForRent { .. }
        | TransactionError::AccountNotFound => LedgerError::InsufficientFunds,
        TransactionError::BlockhashNotFound => LedgerError::BlockhashExpired,
        TransactionError::SignatureFailure => LedgerError::InvalidSigner(err.to_string()),
        TransactionError::WouldExceedMaxBlockCostLimit
        | TransactionError::WouldExceedMaxAccountCostLimit
        | TransactionError::WouldExceedAccountDataBlockLimit => {
            LedgerError::Congestion(err.to_string())
        }
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => {
            LedgerError::ProgramError { code: *code }
        }
        TransactionError::InstructionError(_, InstructionError::MissingRequiredSignature) => {
            LedgerError::InvalidSigner(err.to_string())
        }
        _ => LedgerError::Rejected(err.to_string()),
    }
}

impl From<ClientError> for LedgerError {
    fn from(err: ClientError) -> Self {
        // Covers preflight simulation failures as well as landed transactions.
        if let Some(tx_err) = err.get_transaction_error() {
            return classify_transaction_error(&tx_err);
        }

        match err.kind() {
            ClientErrorKind::Io(e) => LedgerError::Connection(e.to_string()),
            ClientErrorKind::Reqwest(e) if e.is_timeout() => LedgerError::Timeout(e.to_string()),
            ClientErrorKind::Reqwest(e) => LedgerError::Connection(e.to_string()),
            ClientErrorKind::SigningError(e) => LedgerError::InvalidSigner(e.to_string()),
            ClientErrorKind::RpcError(RpcError::ForUser(msg)) => {
                LedgerError::Unconfirmed(msg.clone())
            }
            ClientErrorKind::RpcError(RpcError::RpcRequestError(msg)) => {
                LedgerError::Connection(msg.clone())
            }
            ClientErrorKind::RpcError(RpcError::RpcResponseError { code, message, .. })
                if *code == NODE_UNHEALTHY =>
            {
                LedgerError::Congestion(message.clone())
            }
            _ => LedgerError::Rejected(err.to_string()),
        }
    }
}
