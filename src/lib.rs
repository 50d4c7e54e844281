// Per-player match statistics core for demo replay analysis.
// Raw counters and the event ledger are mutated incrementally by an
// event source; every ratio, percentage and per-round average is
// recomputed from them on read, so derived values can never drift.

pub mod errors;
pub mod ingest;
pub mod notify;
pub mod player;

// Re-export commonly used types for easier access in tests
pub use errors::StatsError;
pub use ingest::{GrenadeKind, KillDetails, MatchStats};
pub use notify::{dependents, ChangeListener, DerivedField, StatField, ALL_DERIVED};
pub use player::{
    EntryKillEvent, EventLedger, OpenKillEvent, PlayerHurtedEvent, PlayerReport, PlayerStats, Team,
};
