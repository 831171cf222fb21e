use solana_client::nonblocking::rpc_client::RpcClient;
use solana_program::instruction::Instruction;
use solana_sdk::{
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::Transaction,
};
use tracing::debug;

use crate::ledger::LedgerError;

/// Signs with every signer, the first paying fees, and waits until the
/// transaction reaches the client's commitment level.
pub async fn send_and_confirm_tx(
    client: &RpcClient,
    signers: &[&Keypair],
    ixs: &[Instruction],
) -> Result<Signature, LedgerError> {
    let payer = signers
        .first()
        .ok_or_else(|| LedgerError::InvalidSigner("no signers supplied".to_string()))?;

    let recent_blockhash = client.get_latest_blockhash().await?;

    let mut tx = Transaction::new_with_payer(ixs, Some(&payer.pubkey()));
    tx.try_sign(signers, recent_blockhash)
        .map_err(|e| LedgerError::InvalidSigner(e.to_string()))?;

    debug!(
        payer = %payer.pubkey(),
        instructions = ixs.len(),
        commitment = ?client.commitment().commitment,
        "sending transaction"
    );

    let signature = client.send_and_confirm_transaction(&tx).await?;

    Ok(signature)
}
