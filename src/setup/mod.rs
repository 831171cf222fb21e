//! The one place that knows the fixed publish-then-create order.

use thiserror::Error;
use tracing::{info, warn};

use crate::{
    data::{CollectionRecord, Locator, MetadataDocument},
    error::Error,
    mint::{create_collection, CreateCollectionArgs},
    observe::Stage,
    publish::publish,
    session::Session,
};

pub struct SetupArgs {
    pub document: MetadataDocument,
    pub is_mutable: bool,
}

impl SetupArgs {
    pub fn new(document: MetadataDocument) -> Self {
        Self {
            document,
            is_mutable: true,
        }
    }
}

/// A failed setup, tagged with the stage that failed.
///
/// `locator` is set whenever publishing already succeeded, so only the create
/// step needs to be retried (see [`resume_collection_setup`]).
#[derive(Error, Debug)]
#[error("collection setup failed during {stage}: {source}")]
pub struct SetupError {
    pub stage: Stage,
    pub locator: Option<Locator>,
    #[source]
    pub source: Error,
}

impl SetupError {
    pub fn is_transient(&self) -> bool {
        self.source.is_transient()
    }
}

/// Publishes the document, then creates a collection referencing it.
///
/// Create is never attempted if publishing fails.
pub async fn run_collection_setup(
    session: &Session<'_>,
    args: SetupArgs,
) -> Result<CollectionRecord, SetupError> {
    let locator = publish(session, &args.document)
        .await
        .map_err(|source| {
            warn!(transient = source.is_transient(), "collection setup stopped at publish");
            SetupError {
                stage: Stage::Publish,
                locator: None,
                source,
            }
        })?;

    resume_collection_setup(session, locator, args).await
}

/// Runs only the create step against a locator published earlier.
pub async fn resume_collection_setup(
    session: &Session<'_>,
    locator: Locator,
    args: SetupArgs,
) -> Result<CollectionRecord, SetupError> {
    let SetupArgs {
        document,
        is_mutable,
    } = args;

    let create_args = CreateCollectionArgs::V1 {
        name: document.name,
        symbol: document.symbol,
        locator: locator.clone(),
        royalty_basis_points: document.seller_fee_basis_points,
        creators: document.creators,
        is_mutable,
    };

    let record = create_collection(session, create_args)
        .await
        .map_err(|source| {
            warn!(%locator, transient = source.is_transient(), "collection setup stopped at create");
            SetupError {
                stage: Stage::Create,
                locator: Some(locator.clone()),
                source,
            }
        })?;

    info!(address = %record.address, locator = %record.locator, "collection setup complete");
    Ok(record)
}
