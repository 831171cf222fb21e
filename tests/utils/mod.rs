#![allow(dead_code)]

use std::{
    collections::{HashMap, VecDeque},
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use collection_lib::{
    data::{CollectionRecord, Creator, Locator, Membership, MetadataDocument},
    ledger::{Ledger, LedgerError, LedgerTransaction, Receipt},
    observe::{LifecycleEvent, Observer},
    store::{ContentStore, PublishError},
    Session,
};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};

/// Ordered record of every backend call, shared by the doubles.
pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn calls(log: &CallLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

#[derive(Default)]
pub struct MockStore {
    log: CallLog,
    locators: Mutex<VecDeque<Locator>>,
    uploads: Mutex<Vec<(Vec<u8>, String)>>,
    fail: Mutex<Option<PublishError>>,
}

impl MockStore {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            ..Default::default()
        }
    }

    /// Answers the next upload with `locator`.
    pub fn returning(self, locator: &str) -> Self {
        self.locators.lock().unwrap().push_back(Locator::new(locator));
        self
    }

    pub fn fail_next(&self, err: PublishError) {
        *self.fail.lock().unwrap() = Some(err);
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    pub fn uploads(&self) -> Vec<(Vec<u8>, String)> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentStore for MockStore {
    async fn upload(&self, bytes: Vec<u8>, content_type: &str) -> Result<Locator, PublishError> {
        self.log.lock().unwrap().push("upload".to_string());

        if let Some(err) = self.fail.lock().unwrap().take() {
            return Err(err);
        }

        let mut uploads = self.uploads.lock().unwrap();
        uploads.push((bytes, content_type.to_string()));
        let n = uploads.len();

        let locator = self
            .locators
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Locator::new(format!("loc://upload-{n}")));
        Ok(locator)
    }
}

/// In-memory ledger that applies transactions to a map of records.
#[derive(Default)]
pub struct MockLedger {
    log: CallLog,
    submissions: Mutex<Vec<LedgerTransaction>>,
    records: Mutex<HashMap<Pubkey, CollectionRecord>>,
    next_addresses: Mutex<VecDeque<Pubkey>>,
    fail: Mutex<Option<LedgerError>>,
}

impl MockLedger {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            ..Default::default()
        }
    }

    /// Assigns `address` to the next created record.
    pub fn assigning(self, address: Pubkey) -> Self {
        self.next_addresses.lock().unwrap().push_back(address);
        self
    }

    pub fn fail_next(&self, err: LedgerError) {
        *self.fail.lock().unwrap() = Some(err);
    }

    pub fn insert(&self, record: CollectionRecord) {
        self.records.lock().unwrap().insert(record.address, record);
    }

    pub fn record(&self, address: &Pubkey) -> Option<CollectionRecord> {
        self.records.lock().unwrap().get(address).cloned()
    }

    pub fn submissions(&self) -> Vec<LedgerTransaction> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }
}

#[async_trait]
impl Ledger for MockLedger {
    async fn submit(
        &self,
        signer: &Keypair,
        transaction: LedgerTransaction,
    ) -> Result<Receipt, LedgerError> {
        self.log.lock().unwrap().push(transaction.kind().to_string());

        if let Some(err) = self.fail.lock().unwrap().take() {
            return Err(err);
        }

        self.submissions.lock().unwrap().push(transaction.clone());
        let mut records = self.records.lock().unwrap();

        let address = match transaction {
            LedgerTransaction::CreateCollection(spec) => {
                let address = self
                    .next_addresses
                    .lock()
                    .unwrap()
                    .pop_front()
                    .unwrap_or_else(Pubkey::new_unique);
                records.insert(
                    address,
                    CollectionRecord::from_spec(address, signer.pubkey(), spec),
                );
                address
            }
            LedgerTransaction::VerifyMembership {
                collection,
                candidate,
            } => {
                if let Some(record) = records.get_mut(&candidate) {
                    record.membership = Some(Membership {
                        collection,
                        verified: true,
                    });
                }
                candidate
            }
            LedgerTransaction::UpdateLocator { record, locator } => {
                if let Some(stored) = records.get_mut(&record.address) {
                    stored.locator = locator;
                }
                record.address
            }
        };

        Ok(Receipt {
            signature: Signature::new_unique(),
            address,
        })
    }

    async fn query_account(
        &self,
        address: &Pubkey,
    ) -> Result<Option<CollectionRecord>, LedgerError> {
        self.log.lock().unwrap().push("query_account".to_string());
        Ok(self.records.lock().unwrap().get(address).cloned())
    }

    async fn check_health(&self) -> Result<(), LedgerError> {
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<LifecycleEvent>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<LifecycleEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl Observer for RecordingObserver {
    fn emit(&self, event: &LifecycleEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

pub struct Harness {
    pub log: CallLog,
    pub ledger: Arc<MockLedger>,
    pub store: Arc<MockStore>,
    pub observer: Arc<RecordingObserver>,
    pub identity: Keypair,
}

impl Harness {
    pub fn new() -> Self {
        let log = call_log();
        Self::with(MockLedger::new(log.clone()), MockStore::new(log.clone()), log)
    }

    pub fn with(ledger: MockLedger, store: MockStore, log: CallLog) -> Self {
        Self {
            log,
            ledger: Arc::new(ledger),
            store: Arc::new(store),
            observer: Arc::new(RecordingObserver::default()),
            identity: Keypair::new(),
        }
    }

    pub fn session(&self) -> Session<'_> {
        Session::from_parts(self.ledger.clone(), self.store.clone(), &self.identity)
            .with_observer(self.observer.clone())
    }

    pub fn calls(&self) -> Vec<String> {
        calls(&self.log)
    }
}

pub fn document(name: &str, symbol: &str, shares: &[u8]) -> MetadataDocument {
    MetadataDocument {
        name: name.to_string(),
        symbol: symbol.to_string(),
        description: "A test collection".to_string(),
        image: "loc://image".to_string(),
        seller_fee_basis_points: 500,
        creators: shares
            .iter()
            .map(|share| Creator::new(Pubkey::new_unique(), *share))
            .collect(),
        external_url: None,
        attributes: vec![],
        files: vec![],
    }
}

pub fn record(address: Pubkey, authority: Pubkey, locator: &str, is_mutable: bool) -> CollectionRecord {
    CollectionRecord {
        address,
        update_authority: authority,
        name: "Existing".to_string(),
        symbol: "EXT".to_string(),
        locator: Locator::new(locator),
        royalty_basis_points: 250,
        creators: vec![Creator {
            address: authority,
            share: 100,
            verified: true,
        }],
        is_mutable,
        membership: None,
    }
}
