use mpl_token_metadata::accounts::{MasterEdition, Metadata};
use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address;

pub fn derive_metadata_pda(pubkey: &Pubkey) -> Pubkey {
    let (pda, _) = Metadata::find_pda(pubkey);
    pda
}

pub fn derive_edition_pda(pubkey: &Pubkey) -> Pubkey {
    let (pda, _) = MasterEdition::find_pda(pubkey);
    pda
}

pub fn derive_token_account(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(owner, mint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_derive_metadata_pda() {
        let mint_pubkey = Pubkey::from_str("H9UJFx7HknQ9GUz7RBqqV9SRnht6XaVDh2cZS3Huogpf").unwrap();
        let expected_pda =
            Pubkey::from_str("99pKPWsqi7bZaXKMvmwkxWV4nJjb5BS5SgKSNhW26ZNq").unwrap();
        assert_eq!(derive_metadata_pda(&mint_pubkey), expected_pda);
    }

    #[test]
    fn test_derive_edition_pda() {
        let mint_pubkey = Pubkey::from_str("H9UJFx7HknQ9GUz7RBqqV9SRnht6XaVDh2cZS3Huogpf").unwrap();
        let expected_pda =
            Pubkey::from_str("2vNgLPdTtfZYMNBR14vL5WXp6jYAvumfHauEHNc1BQim").unwrap();
        assert_eq!(derive_edition_pda(&mint_pubkey), expected_pda);
    }

    #[test]
    fn test_derive_token_account_is_per_owner() {
        let mint = Pubkey::new_unique();
        let first = derive_token_account(&Pubkey::new_unique(), &mint);
        let second = derive_token_account(&Pubkey::new_unique(), &mint);
        assert_ne!(first, second);
    }
}
