//! Packer constants and runtime configuration defaults

/// Candidate cap used during the primary descending-area pass
pub const PHASE1_CANDIDATE_CAP: usize = 25;

/// Candidate cap used during the ascending-area retry pass (before the
/// `10 * placed + 30` adjustment applies)
pub const PHASE2_CANDIDATE_CAP_CEILING: usize = 50;

/// Multiplier applied to the placed-block count when deriving the phase 2
/// candidate cap (`min(50, 10 * placed + 30)`)
pub const PHASE2_CANDIDATE_CAP_PLACED_FACTOR: usize = 10;

/// Constant term added when deriving the phase 2 candidate cap
pub const PHASE2_CANDIDATE_CAP_BASE: usize = 30;

/// Default wall-clock budget for a full `place_all` invocation
pub const DEFAULT_TIME_BUDGET: std::time::Duration = std::time::Duration::from_secs(5);
