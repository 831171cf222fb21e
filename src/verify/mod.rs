use solana_sdk::signature::Signature;

use crate::{
    decode::ToPubkey,
    error::Result,
    ledger::LedgerTransaction,
    observe::{LifecycleEvent, Stage},
    session::Session,
    update::fetch_collection,
};

pub enum VerifyMembershipArgs<P1: ToPubkey, P2: ToPubkey> {
    V1 { collection: P1, candidate: P2 },
}

/// Marks `candidate` as a verified member of `collection`.
///
/// The collection is read first and must already have settled; an unknown
/// collection is `Error::NotFound` and nothing is submitted. A missing
/// candidate is left to the ledger to reject. Every call is a new
/// transaction; repeated calls are not deduplicated.
pub async fn verify_membership<P1, P2>(
    session: &Session<'_>,
    args: VerifyMembershipArgs<P1, P2>,
) -> Result<Signature>
where
    P1: ToPubkey,
    P2: ToPubkey,
{
    match args {
        VerifyMembershipArgs::V1 { .. } => verify_membership_v1(session, args).await,
    }
}

async fn verify_membership_v1<P1, P2>(
    session: &Session<'_>,
    args: VerifyMembershipArgs<P1, P2>,
) -> Result<Signature>
where
    P1: ToPubkey,
    P2: ToPubkey,
{
    let VerifyMembershipArgs::V1 {
        collection,
        candidate,
    } = args;

    let collection = collection.to_pubkey()?;
    let candidate = candidate.to_pubkey()?;

    fetch_collection(session, collection).await?;

    let receipt = session
        .ledger()
        .submit(
            session.identity(),
            LedgerTransaction::VerifyMembership {
                collection,
                candidate,
            },
        )
        .await
        .map_err(|e| session.stage_failed(Stage::Verify, e))?;

    session.emit(LifecycleEvent::MembershipVerified {
        collection,
        candidate,
        signature: receipt.signature,
    });

    Ok(receipt.signature)
}
