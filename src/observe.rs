//! Structured lifecycle events, delivered to an observer injected per session.

use solana_sdk::{pubkey::Pubkey, signature::Signature};
use tracing::{info, warn};

use crate::data::{CollectionState, Locator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Publish,
    Create,
    Verify,
    Update,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Stage::Publish => "publish",
            Stage::Create => "create",
            Stage::Verify => "verify",
            Stage::Update => "update",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    AssetUploaded {
        locator: Locator,
        bytes: usize,
    },
    MetadataPublished {
        locator: Locator,
        bytes: usize,
    },
    CollectionCreated {
        address: Pubkey,
        locator: Locator,
        signature: Signature,
    },
    MembershipVerified {
        collection: Pubkey,
        candidate: Pubkey,
        signature: Signature,
    },
    MetadataUpdated {
        address: Pubkey,
        locator: Locator,
        signature: Signature,
    },
    StageFailed {
        stage: Stage,
        error: String,
        transient: bool,
    },
}

impl LifecycleEvent {
    /// The collection state this event moves a record into, if any.
    pub fn state(&self) -> Option<CollectionState> {
        match self {
            LifecycleEvent::CollectionCreated { .. } => Some(CollectionState::Created),
            LifecycleEvent::MembershipVerified { .. } => Some(CollectionState::Verified),
            LifecycleEvent::MetadataUpdated { .. } => Some(CollectionState::Updated),
            LifecycleEvent::AssetUploaded { .. }
            | LifecycleEvent::MetadataPublished { .. }
            | LifecycleEvent::StageFailed { .. } => None,
        }
    }
}

pub trait Observer: Send + Sync {
    fn emit(&self, event: &LifecycleEvent);
}

/// Default observer; renders events as `tracing` records.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn emit(&self, event: &LifecycleEvent) {
        match event {
            LifecycleEvent::AssetUploaded { locator, bytes } => {
                info!(%locator, bytes, "asset uploaded");
            }
            LifecycleEvent::MetadataPublished { locator, bytes } => {
                info!(%locator, bytes, "metadata published");
            }
            LifecycleEvent::CollectionCreated {
                address,
                locator,
                signature,
            } => {
                info!(%address, %locator, %signature, "collection created");
            }
            LifecycleEvent::MembershipVerified {
                collection,
                candidate,
                signature,
            } => {
                info!(%collection, %candidate, %signature, "membership verified");
            }
            LifecycleEvent::MetadataUpdated {
                address,
                locator,
                signature,
            } => {
                info!(%address, %locator, %signature, "metadata updated");
            }
            LifecycleEvent::StageFailed {
                stage,
                error,
                transient,
            } => {
                warn!(%stage, transient, "stage failed: {error}");
            }
        }
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn emit(&self, _event: &LifecycleEvent) {}
}
