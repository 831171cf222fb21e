use std::{fmt::Display, sync::Arc};

use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer};
use tracing::debug;

use crate::{
    config::SessionConfig,
    error::ConfigurationError,
    ledger::{Ledger, RpcLedger},
    observe::{LifecycleEvent, Observer, Stage, TracingObserver},
    retry::Transient,
    store::{ContentStore, HttpContentStore},
};

/// A live handle on a ledger and a content store, acting as one identity.
///
/// The identity is borrowed for the lifetime of the session and never copied.
/// A session can be shared between tasks; callers must serialize writes that
/// target the same record.
pub struct Session<'a> {
    ledger: Arc<dyn Ledger>,
    store: Arc<dyn ContentStore>,
    identity: &'a Keypair,
    observer: Arc<dyn Observer>,
}

impl<'a> Session<'a> {
    /// Validates `config` and builds the Solana and HTTP backends.
    ///
    /// Connections are lazy unless `verify_connection` is set, in which case
    /// the ledger endpoint must answer before the session is returned.
    pub async fn open(
        config: &SessionConfig,
        identity: &'a Keypair,
    ) -> Result<Session<'a>, ConfigurationError> {
        config.validate()?;

        let ledger = RpcLedger::new(&config.ledger);
        let store = HttpContentStore::new(&config.storage)?;

        if config.verify_connection {
            ledger
                .check_health()
                .await
                .map_err(|e| ConfigurationError::Unreachable {
                    endpoint: config.ledger.rpc_url.clone(),
                    reason: e.to_string(),
                })?;
        }

        debug!(
            rpc_url = %config.ledger.rpc_url,
            provider_url = %config.storage.provider_url,
            identity = %identity.pubkey(),
            "session opened"
        );

        Ok(Self::from_parts(Arc::new(ledger), Arc::new(store), identity))
    }

    pub fn from_parts(
        ledger: Arc<dyn Ledger>,
        store: Arc<dyn ContentStore>,
        identity: &'a Keypair,
    ) -> Self {
        Self {
            ledger,
            store,
            identity,
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observer = observer;
        self
    }

    pub fn ledger(&self) -> &dyn Ledger {
        self.ledger.as_ref()
    }

    pub fn store(&self) -> &dyn ContentStore {
        self.store.as_ref()
    }

    pub fn identity(&self) -> &Keypair {
        self.identity
    }

    pub fn authority(&self) -> Pubkey {
        self.identity.pubkey()
    }

    pub fn emit(&self, event: LifecycleEvent) {
        self.observer.emit(&event);
    }

    /// Reports a failed stage to the observer and hands the error back.
    pub(crate) fn stage_failed<E: Transient + Display>(&self, stage: Stage, err: E) -> E {
        self.emit(LifecycleEvent::StageFailed {
            stage,
            error: err.to_string(),
            transient: err.is_transient(),
        });
        err
    }
}
