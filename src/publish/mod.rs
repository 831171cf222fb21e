use serde::Serialize;

use crate::{
    constants::{DEFAULT_CATEGORY, METADATA_CONTENT_TYPE},
    data::{Attribute, Locator, MetadataDocument, MetadataFile},
    error::{Result, ValidationError},
    observe::{LifecycleEvent, Stage},
    session::Session,
    store::PublishError,
    validate::validate_document,
};

#[derive(Serialize)]
struct OffChainMetadata<'a> {
    name: &'a str,
    symbol: &'a str,
    description: &'a str,
    image: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    external_url: Option<&'a str>,
    seller_fee_basis_points: u16,
    attributes: &'a [Attribute],
    properties: Properties<'a>,
}

#[derive(Serialize)]
struct Properties<'a> {
    category: &'static str,
    files: &'a [MetadataFile],
    creators: Vec<CreatorShare>,
}

#[derive(Serialize)]
struct CreatorShare {
    address: String,
    share: u8,
}

/// Renders a document as Metaplex off-chain metadata JSON.
pub fn render_metadata(document: &MetadataDocument) -> Result<Vec<u8>, PublishError> {
    let metadata = OffChainMetadata {
        name: &document.name,
        symbol: &document.symbol,
        description: &document.description,
        image: &document.image,
        external_url: document.external_url.as_deref(),
        seller_fee_basis_points: document.seller_fee_basis_points,
        attributes: &document.attributes,
        properties: Properties {
            category: DEFAULT_CATEGORY,
            files: &document.files,
            creators: document
                .creators
                .iter()
                .map(|c| CreatorShare {
                    address: c.address.to_string(),
                    share: c.share,
                })
                .collect(),
        },
    };

    Ok(serde_json::to_vec(&metadata)?)
}

/// Validates and uploads `document`, returning where it can be resolved.
///
/// Nothing is sent to the store if validation fails.
pub async fn publish(session: &Session<'_>, document: &MetadataDocument) -> Result<Locator> {
    validate_document(document)?;

    let bytes = render_metadata(document)?;
    let size = bytes.len();

    let locator = session
        .store()
        .upload(bytes, METADATA_CONTENT_TYPE)
        .await
        .map_err(|e| session.stage_failed(Stage::Publish, e))?;

    session.emit(LifecycleEvent::MetadataPublished {
        locator: locator.clone(),
        bytes: size,
    });

    Ok(locator)
}

/// Uploads a raw asset, typically the image the document points at.
pub async fn upload_asset(
    session: &Session<'_>,
    bytes: Vec<u8>,
    content_type: &str,
) -> Result<Locator> {
    if bytes.is_empty() {
        return Err(ValidationError::Empty("asset").into());
    }
    if content_type.is_empty() {
        return Err(ValidationError::Empty("content type").into());
    }

    let size = bytes.len();
    let locator = session
        .store()
        .upload(bytes, content_type)
        .await
        .map_err(|e| session.stage_failed(Stage::Publish, e))?;

    session.emit(LifecycleEvent::AssetUploaded {
        locator: locator.clone(),
        bytes: size,
    });

    Ok(locator)
}
