pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_URI_LENGTH: usize = 200;
pub const MAX_SYMBOL_LENGTH: usize = 10;
pub const MAX_CREATOR_LIMIT: usize = 5;

pub const MAX_BASIS_POINTS: u16 = 10_000;
pub const TOTAL_CREATOR_SHARES: u32 = 100;

pub const METADATA_CONTENT_TYPE: &str = "application/json";
pub const DEFAULT_CATEGORY: &str = "image";

pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_STORAGE_TIMEOUT_SECS: u64 = 30;

// Backoff schedule for caller-level retries: 250ms, 500ms, 1s.
pub const RETRY_BASE_MILLIS: u64 = 250;
pub const RETRY_FACTOR: f64 = 2.0;
pub const RETRY_ATTEMPTS: usize = 3;
