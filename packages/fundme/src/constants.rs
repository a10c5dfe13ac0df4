// Ledger TTLs, assuming ~5s per ledger
pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Smallest accepted contribution, in whole reference currency units (USD).
pub const MINIMUM_CONTRIBUTION_REFERENCE_UNITS: i128 = 50;

/// Largest decimal precision accepted from a token or a price feed.
pub const MAX_DECIMALS: u32 = 18;
