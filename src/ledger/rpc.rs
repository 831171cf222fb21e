use std::time::Duration;

use async_trait::async_trait;
use mpl_token_metadata::{
    instructions::{CreateV1Builder, MintV1Builder, UpdateV1Builder, VerifyCollectionV1Builder},
    types::{CollectionDetails, PrintSupply, TokenStandard},
};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_program::instruction::Instruction;
use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer};
use tracing::{debug, info};

use super::{Ledger, LedgerError, LedgerTransaction, Receipt};
use crate::{
    config::LedgerConfig,
    convert::{convert_creators, convert_record_to_data},
    data::{Asset, CollectionRecord, CollectionSpec, Locator},
    decode::decode_record,
    derive::derive_token_account,
    transaction::send_and_confirm_tx,
};

/// Token Metadata over Solana JSON-RPC.
pub struct RpcLedger {
    client: RpcClient,
}

impl RpcLedger {
    pub fn new(config: &LedgerConfig) -> Self {
        let client = RpcClient::new_with_timeout_and_commitment(
            config.rpc_url.clone(),
            Duration::from_secs(config.timeout_secs),
            config.commitment.into(),
        );

        Self { client }
    }

    async fn create_collection(
        &self,
        authority: &Keypair,
        spec: CollectionSpec,
    ) -> Result<Receipt, LedgerError> {
        let mint_signer = Keypair::new();
        let asset = Asset::new(mint_signer.pubkey());

        let ixs = create_collection_ixs(&asset, &authority.pubkey(), spec);
        let signature = send_and_confirm_tx(&self.client, &[authority, &mint_signer], &ixs).await?;

        Ok(Receipt {
            signature,
            address: asset.mint,
        })
    }

    async fn verify_membership(
        &self,
        authority: &Keypair,
        collection: Pubkey,
        candidate: Pubkey,
    ) -> Result<Receipt, LedgerError> {
        let verify_ix = verify_membership_ix(&authority.pubkey(), &collection, &candidate);
        let signature = send_and_confirm_tx(&self.client, &[authority], &[verify_ix]).await?;

        Ok(Receipt {
            signature,
            address: candidate,
        })
    }

    async fn update_locator(
        &self,
        authority: &Keypair,
        record: CollectionRecord,
        locator: Locator,
    ) -> Result<Receipt, LedgerError> {
        let update_ix = update_locator_ix(&authority.pubkey(), &record, &locator);
        let signature = send_and_confirm_tx(&self.client, &[authority], &[update_ix]).await?;

        Ok(Receipt {
            signature,
            address: record.address,
        })
    }
}

#[async_trait]
impl Ledger for RpcLedger {
    async fn submit(
        &self,
        signer: &Keypair,
        transaction: LedgerTransaction,
    ) -> Result<Receipt, LedgerError> {
        let kind = transaction.kind();
        debug!(kind, signer = %signer.pubkey(), "submitting ledger transaction");

        let receipt = match transaction {
            LedgerTransaction::CreateCollection(spec) => {
                self.create_collection(signer, spec).await?
            }
            LedgerTransaction::VerifyMembership {
                collection,
                candidate,
            } => self.verify_membership(signer, collection, candidate).await?,
            LedgerTransaction::UpdateLocator { record, locator } => {
                self.update_locator(signer, record, locator).await?
            }
        };

        info!(kind, address = %receipt.address, signature = %receipt.signature, "transaction settled");
        Ok(receipt)
    }

    async fn query_account(
        &self,
        address: &Pubkey,
    ) -> Result<Option<CollectionRecord>, LedgerError> {
        let asset = Asset::new(*address);
        let response = self
            .client
            .get_account_with_commitment(&asset.metadata, self.client.commitment())
            .await?;

        match response.value {
            Some(account) => Ok(Some(decode_record(address, &account.data)?)),
            None => Ok(None),
        }
    }

    async fn check_health(&self) -> Result<(), LedgerError> {
        let version = self.client.get_version().await?;
        debug!(solana_core = %version.solana_core, "ledger reachable");
        Ok(())
    }
}

/// Creates the collection NFT and mints its single token to the authority.
pub fn create_collection_ixs(
    asset: &Asset,
    authority: &Pubkey,
    spec: CollectionSpec,
) -> Vec<Instruction> {
    let creators = convert_creators(&spec.creators, authority);

    let mut create_builder = CreateV1Builder::new();
    create_builder
        .metadata(asset.metadata)
        .master_edition(Some(asset.edition))
        .mint(asset.mint, true)
        .authority(*authority)
        .payer(*authority)
        .update_authority(*authority, true)
        .spl_token_program(Some(spl_token::ID))
        .name(spec.name)
        .symbol(spec.symbol)
        .uri(spec.locator.into_string())
        .seller_fee_basis_points(spec.royalty_basis_points)
        .creators(creators)
        .primary_sale_happened(false)
        .is_mutable(spec.is_mutable)
        .token_standard(TokenStandard::NonFungible)
        .collection_details(CollectionDetails::V1 { size: 0 })
        .print_supply(PrintSupply::Zero);
    let create_ix = create_builder.instruction();

    let token = derive_token_account(authority, &asset.mint);

    let mut mint_builder = MintV1Builder::new();
    mint_builder
        .token(token)
        .token_owner(Some(*authority))
        .metadata(asset.metadata)
        .master_edition(Some(asset.edition))
        .mint(asset.mint)
        .authority(*authority)
        .payer(*authority)
        .amount(1);
    let mint_ix = mint_builder.instruction();

    vec![create_ix, mint_ix]
}

pub fn verify_membership_ix(
    authority: &Pubkey,
    collection: &Pubkey,
    candidate: &Pubkey,
) -> Instruction {
    let asset = Asset::new(*candidate);
    let collection_asset = Asset::new(*collection);

    let mut verify_builder = VerifyCollectionV1Builder::new();
    verify_builder
        .authority(*authority)
        .metadata(asset.metadata)
        .collection_mint(*collection)
        .collection_metadata(Some(collection_asset.metadata))
        .collection_master_edition(Some(collection_asset.edition));

    verify_builder.instruction()
}

pub fn update_locator_ix(
    authority: &Pubkey,
    record: &CollectionRecord,
    locator: &Locator,
) -> Instruction {
    let asset = Asset::new(record.address);

    let mut update_builder = UpdateV1Builder::new();
    update_builder
        .authority(*authority)
        .payer(*authority)
        .mint(asset.mint)
        .metadata(asset.metadata)
        .edition(Some(asset.edition))
        .data(convert_record_to_data(record, locator));

    update_builder.instruction()
}
