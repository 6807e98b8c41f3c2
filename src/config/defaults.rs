//! Default configuration values

use std::time::Duration;

/// Maximum number of fetch attempts per resource
pub const MAX_FETCH_ATTEMPTS: u32 = 3;

/// Base delay for exponential backoff (in milliseconds)
pub const BACKOFF_BASE_DELAY_MS: u64 = 1000;

/// Cap for exponential backoff delay (in milliseconds)
pub const BACKOFF_MAX_DELAY_MS: u64 = 30_000;

/// Total per-request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Connect timeout
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Bytes rendered per row of a generated array literal
pub const EMBED_BYTES_PER_ROW: usize = 16;
