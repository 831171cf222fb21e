use tracing::debug;

use crate::{
    data::{CollectionRecord, Locator},
    decode::ToPubkey,
    error::{Error, Result},
    ledger::{LedgerError, LedgerTransaction},
    observe::{LifecycleEvent, Stage},
    session::Session,
    validate::validate_locator,
};

pub enum UpdateMetadataArgs<P: ToPubkey> {
    V1 { address: P, locator: Locator },
}

/// Points an existing record at a new locator, leaving every other field as
/// it is on-chain.
///
/// The record is read first: an unknown address is `Error::NotFound`, an
/// immutable record fails without submitting anything.
pub async fn update_metadata<P>(
    session: &Session<'_>,
    args: UpdateMetadataArgs<P>,
) -> Result<CollectionRecord>
where
    P: ToPubkey,
{
    match args {
        UpdateMetadataArgs::V1 { .. } => update_metadata_v1(session, args).await,
    }
}

async fn update_metadata_v1<P>(
    session: &Session<'_>,
    args: UpdateMetadataArgs<P>,
) -> Result<CollectionRecord>
where
    P: ToPubkey,
{
    let UpdateMetadataArgs::V1 { address, locator } = args;

    let address = address.to_pubkey()?;
    validate_locator(&locator)?;

    let current = fetch_collection(session, address).await?;
    if !current.is_mutable {
        let err = session.stage_failed(Stage::Update, LedgerError::ImmutableRecord(address));
        return Err(err.into());
    }

    debug!(%address, from = %current.locator, to = %locator, "updating metadata locator");

    let updated = current.with_locator(locator.clone());

    let receipt = session
        .ledger()
        .submit(
            session.identity(),
            LedgerTransaction::UpdateLocator {
                record: current,
                locator: locator.clone(),
            },
        )
        .await
        .map_err(|e| session.stage_failed(Stage::Update, e))?;

    session.emit(LifecycleEvent::MetadataUpdated {
        address,
        locator,
        signature: receipt.signature,
    });

    Ok(updated)
}

/// Reads a record, mapping an address that does not resolve to `NotFound`.
pub async fn fetch_collection<P: ToPubkey>(
    session: &Session<'_>,
    address: P,
) -> Result<CollectionRecord> {
    let address = address.to_pubkey()?;

    session
        .ledger()
        .query_account(&address)
        .await?
        .ok_or(Error::NotFound(address))
}
