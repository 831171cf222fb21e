use std::str::FromStr;

use mpl_token_metadata::{accounts::Metadata, types::Key};
use solana_sdk::pubkey::Pubkey;

use crate::{
    data::{CollectionRecord, Creator, Locator, Membership},
    error::ValidationError,
};

pub mod errors;
use errors::DecodeError;

pub trait ToPubkey {
    fn to_pubkey(self) -> Result<Pubkey, ValidationError>;
}

impl ToPubkey for Pubkey {
    fn to_pubkey(self) -> Result<Pubkey, ValidationError> {
        Ok(self)
    }
}

impl ToPubkey for &Pubkey {
    fn to_pubkey(self) -> Result<Pubkey, ValidationError> {
        Ok(*self)
    }
}

impl ToPubkey for &str {
    fn to_pubkey(self) -> Result<Pubkey, ValidationError> {
        Pubkey::from_str(self).map_err(|_| ValidationError::InvalidAddress(self.to_string()))
    }
}

impl ToPubkey for String {
    fn to_pubkey(self) -> Result<Pubkey, ValidationError> {
        self.as_str().to_pubkey()
    }
}

/// Decodes a Token Metadata account owned by `mint` into a record.
pub fn decode_record(mint: &Pubkey, account_data: &[u8]) -> Result<CollectionRecord, DecodeError> {
    let metadata = Metadata::from_bytes(account_data)
        .map_err(|e| DecodeError::DecodeMetadataFailed(e.to_string()))?;

    if metadata.key != Key::MetadataV1 {
        return Err(DecodeError::UnexpectedKey(format!("{:?}", metadata.key)));
    }

    if metadata.mint != *mint {
        return Err(DecodeError::MintMismatch {
            expected: mint.to_string(),
            found: metadata.mint.to_string(),
        });
    }

    Ok(record_from_metadata(metadata))
}

fn record_from_metadata(metadata: Metadata) -> CollectionRecord {
    let creators = metadata
        .creators
        .unwrap_or_default()
        .into_iter()
        .map(|c| Creator {
            address: c.address,
            share: c.share,
            verified: c.verified,
        })
        .collect();

    let membership = metadata.collection.map(|c| Membership {
        collection: c.key,
        verified: c.verified,
    });

    CollectionRecord {
        address: metadata.mint,
        update_authority: metadata.update_authority,
        name: trim_padding(&metadata.name),
        symbol: trim_padding(&metadata.symbol),
        locator: Locator::new(trim_padding(&metadata.uri)),
        royalty_basis_points: metadata.seller_fee_basis_points,
        creators,
        is_mutable: metadata.is_mutable,
        membership,
    }
}

/// Older metadata accounts store fixed-width strings padded with NULs.
pub fn trim_padding(value: &str) -> String {
    value.trim_matches(char::from(0)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_pubkey_accepts_base58() {
        let pubkey = Pubkey::new_unique();
        assert_eq!(pubkey.to_string().to_pubkey().unwrap(), pubkey);
        assert_eq!(pubkey.to_pubkey().unwrap(), pubkey);
    }

    #[test]
    fn to_pubkey_rejects_garbage() {
        assert_eq!(
            "not-a-key".to_pubkey(),
            Err(ValidationError::InvalidAddress("not-a-key".to_string()))
        );
    }

    #[test]
    fn trims_nul_padding() {
        assert_eq!(trim_padding("Name\0\0\0\0"), "Name");
        assert_eq!(trim_padding("loc://abc"), "loc://abc");
    }

    #[test]
    fn rejects_truncated_account() {
        let err = decode_record(&Pubkey::new_unique(), &[4, 1, 2]).unwrap_err();
        assert!(matches!(err, DecodeError::DecodeMetadataFailed(_)));
    }
}
