use std::fmt;

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::derive::{derive_edition_pda, derive_metadata_pda};

/// Opaque reference to content published on the content store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locator(String);

impl Locator {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locator {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Locator {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    #[serde(with = "pubkey_string")]
    pub address: Pubkey,
    pub share: u8,
    #[serde(default)]
    pub verified: bool,
}

impl Creator {
    pub fn new(address: Pubkey, share: u8) -> Self {
        Self {
            address,
            share,
            verified: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub trait_type: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataFile {
    pub uri: String,
    #[serde(rename = "type")]
    pub content_type: String,
}

/// Off-chain metadata for a collection, published to the content store
/// before anything is written on-chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataDocument {
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub description: String,
    /// Locator of the primary asset.
    pub image: String,
    pub seller_fee_basis_points: u16,
    pub creators: Vec<Creator>,
    #[serde(default)]
    pub external_url: Option<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub files: Vec<MetadataFile>,
}

/// Link from a child token to the collection it claims membership in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Membership {
    pub collection: Pubkey,
    pub verified: bool,
}

/// Everything the ledger needs to create a collection record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSpec {
    pub name: String,
    pub symbol: String,
    pub locator: Locator,
    pub royalty_basis_points: u16,
    pub creators: Vec<Creator>,
    pub is_mutable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionRecord {
    pub address: Pubkey,
    pub update_authority: Pubkey,
    pub name: String,
    pub symbol: String,
    pub locator: Locator,
    pub royalty_basis_points: u16,
    pub creators: Vec<Creator>,
    pub is_mutable: bool,
    pub membership: Option<Membership>,
}

impl CollectionRecord {
    /// Record as it exists right after a create transaction settled.
    pub fn from_spec(address: Pubkey, update_authority: Pubkey, spec: CollectionSpec) -> Self {
        let creators = spec
            .creators
            .into_iter()
            .map(|c| Creator {
                verified: c.address == update_authority,
                ..c
            })
            .collect();

        Self {
            address,
            update_authority,
            name: spec.name,
            symbol: spec.symbol,
            locator: spec.locator,
            royalty_basis_points: spec.royalty_basis_points,
            creators,
            is_mutable: spec.is_mutable,
            membership: None,
        }
    }

    pub fn with_locator(&self, locator: Locator) -> Self {
        Self {
            locator,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionState {
    Unpublished,
    Created,
    Verified,
    Updated,
}

impl fmt::Display for CollectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CollectionState::Unpublished => "unpublished",
            CollectionState::Created => "created",
            CollectionState::Verified => "verified",
            CollectionState::Updated => "updated",
        };
        f.write_str(s)
    }
}

/// The accounts Token Metadata keeps for a single mint.
pub struct Asset {
    pub mint: Pubkey,
    pub metadata: Pubkey,
    pub edition: Pubkey,
}

impl Asset {
    pub fn new(mint: Pubkey) -> Self {
        let metadata = derive_metadata_pda(&mint);
        let edition = derive_edition_pda(&mint);

        Self {
            mint,
            metadata,
            edition,
        }
    }
}

mod pubkey_string {
    use std::str::FromStr;

    use serde::{de, Deserialize, Deserializer, Serializer};
    use solana_sdk::pubkey::Pubkey;

    pub fn serialize<S: Serializer>(pubkey: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&pubkey.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
        let s = String::deserialize(deserializer)?;
        Pubkey::from_str(&s).map_err(de::Error::custom)
    }
}
