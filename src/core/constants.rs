// Battle
pub const MAX_ROUNDS: u32 = 2;

// Fixed-point weights: 100 == 1.0
pub const WEIGHT_SCALE: u32 = 100;
pub const DEFAULT_WEIGHT: u32 = WEIGHT_SCALE;

// Character names
pub const NAME_MIN_LEN: usize = 4;
pub const NAME_MAX_LEN: usize = 15;

// Listing
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 100;

// Server defaults
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;
