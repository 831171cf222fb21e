use crate::{
    data::{CollectionRecord, CollectionSpec, Creator, Locator},
    error::Result,
    ledger::LedgerTransaction,
    observe::{LifecycleEvent, Stage},
    session::Session,
    validate::{
        validate_basis_points, validate_creators, validate_locator, validate_name,
        validate_symbol,
    },
};

pub enum CreateCollectionArgs {
    V1 {
        name: String,
        symbol: String,
        locator: Locator,
        royalty_basis_points: u16,
        creators: Vec<Creator>,
        is_mutable: bool,
    },
}

impl CreateCollectionArgs {
    /// Mutable collection, the common case.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        locator: Locator,
        royalty_basis_points: u16,
        creators: Vec<Creator>,
    ) -> Self {
        CreateCollectionArgs::V1 {
            name: name.into(),
            symbol: symbol.into(),
            locator,
            royalty_basis_points,
            creators,
            is_mutable: true,
        }
    }
}

/// Creates a collection record pointing at an already published locator.
///
/// The locator itself is not resolved; only its length is checked. Ledger
/// rejections are returned as-is and never retried here.
pub async fn create_collection(
    session: &Session<'_>,
    args: CreateCollectionArgs,
) -> Result<CollectionRecord> {
    match args {
        CreateCollectionArgs::V1 { .. } => create_collection_v1(session, args).await,
    }
}

async fn create_collection_v1(
    session: &Session<'_>,
    args: CreateCollectionArgs,
) -> Result<CollectionRecord> {
    let CreateCollectionArgs::V1 {
        name,
        symbol,
        locator,
        royalty_basis_points,
        creators,
        is_mutable,
    } = args;

    validate_name(&name)?;
    validate_symbol(&symbol)?;
    validate_locator(&locator)?;
    validate_basis_points(royalty_basis_points)?;
    validate_creators(&creators)?;

    let spec = CollectionSpec {
        name,
        symbol,
        locator,
        royalty_basis_points,
        creators,
        is_mutable,
    };

    let receipt = session
        .ledger()
        .submit(
            session.identity(),
            LedgerTransaction::CreateCollection(spec.clone()),
        )
        .await
        .map_err(|e| session.stage_failed(Stage::Create, e))?;

    let record = CollectionRecord::from_spec(receipt.address, session.authority(), spec);

    session.emit(LifecycleEvent::CollectionCreated {
        address: record.address,
        locator: record.locator.clone(),
        signature: receipt.signature,
    });

    Ok(record)
}
