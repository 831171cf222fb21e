use mpl_token_metadata::types::{Creator as RemoteCreator, Data};
use solana_sdk::pubkey::Pubkey;

use crate::data::{CollectionRecord, Creator, Locator};

/// Only the signing authority can be marked verified when a record is created.
pub fn convert_creators(creators: &[Creator], authority: &Pubkey) -> Vec<RemoteCreator> {
    creators
        .iter()
        .map(|c| RemoteCreator {
            address: c.address,
            verified: c.address == *authority,
            share: c.share,
        })
        .collect()
}

/// Existing on-chain data with only the uri replaced.
pub fn convert_record_to_data(record: &CollectionRecord, locator: &Locator) -> Data {
    let creators = record
        .creators
        .iter()
        .map(|c| RemoteCreator {
            address: c.address,
            verified: c.verified,
            share: c.share,
        })
        .collect::<Vec<_>>();

    Data {
        name: record.name.clone(),
        symbol: record.symbol.clone(),
        uri: locator.to_string(),
        seller_fee_basis_points: record.royalty_basis_points,
        creators: if creators.is_empty() {
            None
        } else {
            Some(creators)
        },
    }
}
