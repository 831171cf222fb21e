use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use solana_sdk::signature::{read_keypair_file, Keypair};

/// Where the signing identity comes from. Read once, at process start.
#[derive(Debug, Clone)]
pub enum IdentitySource {
    /// Solana CLI keypair file (JSON array of 64 bytes).
    File(PathBuf),
    /// Environment variable holding a JSON byte array or a base58 secret.
    Env(String),
    Base58(String),
}

pub fn load_keypair(source: &IdentitySource) -> Result<Keypair> {
    match source {
        IdentitySource::File(path) => read_keypair_file(path)
            .map_err(|e| anyhow!("failed to read keypair file {}: {e}", path.display())),
        IdentitySource::Env(var) => {
            let secret =
                std::env::var(var).with_context(|| format!("environment variable {var} not set"))?;
            parse_secret(&secret).with_context(|| format!("invalid keypair in {var}"))
        }
        IdentitySource::Base58(secret) => parse_secret(secret),
    }
}

fn parse_secret(secret: &str) -> Result<Keypair> {
    let secret = secret.trim();
    if secret.is_empty() {
        bail!("keypair secret is empty");
    }

    let bytes = if secret.starts_with('[') {
        serde_json::from_str::<Vec<u8>>(secret)?
    } else {
        bs58::decode(secret).into_vec()?
    };

    Keypair::from_bytes(&bytes).map_err(|e| anyhow!("invalid keypair bytes: {e}"))
}

#[cfg(test)]
mod tests {
    use solana_sdk::{signature::write_keypair_file, signer::Signer};

    use super::*;

    #[test]
    fn loads_cli_keypair_file() {
        let keypair = Keypair::new();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("id.json");
        write_keypair_file(&keypair, &path).unwrap();

        let loaded = load_keypair(&IdentitySource::File(path)).unwrap();
        assert_eq!(loaded.pubkey(), keypair.pubkey());
    }

    #[test]
    fn parses_base58_and_json_secrets() {
        let keypair = Keypair::new();

        let from_b58 = load_keypair(&IdentitySource::Base58(keypair.to_base58_string())).unwrap();
        assert_eq!(from_b58.pubkey(), keypair.pubkey());

        let json = serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap();
        let from_json = parse_secret(&json).unwrap();
        assert_eq!(from_json.pubkey(), keypair.pubkey());
    }

    #[test]
    fn loads_from_env() {
        let keypair = Keypair::new();
        let var = "COLLECTION_LIB_TEST_KEYPAIR";
        std::env::set_var(var, keypair.to_base58_string());

        let loaded = load_keypair(&IdentitySource::Env(var.to_string())).unwrap();
        assert_eq!(loaded.pubkey(), keypair.pubkey());

        std::env::remove_var(var);
    }

    #[test]
    fn rejects_bad_secrets() {
        assert!(parse_secret("").is_err());
        assert!(parse_secret("[1, 2, 3]").is_err());
        assert!(parse_secret("0OIl").is_err());
        assert!(load_keypair(&IdentitySource::Env("COLLECTION_LIB_UNSET_VAR".to_string())).is_err());
    }
}
