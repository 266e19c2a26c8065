/// Seed rate (per gram, local currency) applied when the history is empty,
/// so `current_rate` is always answerable after startup.
pub const DEFAULT_RATE_PER_GRAM: f64 = 7500.0;

/// Attribution recorded on the seeded rate entry.
pub const SEED_RATE_SET_BY: &str = "system";

/// Prefix of the human-readable deposit reference.
pub const DEPOSIT_REF_PREFIX: &str = "DEP";

/// Decimal places used when presenting gold weights. Stored values keep
/// full double precision; rounding is display-only.
pub const GOLD_WEIGHT_DISPLAY_DECIMALS: u32 = 3;
