// Per-player statistics core: raw counters, the append-only event ledger,
// read-time derivation, and the external report shape.

pub use ledger::{EntryKillEvent, EventLedger, OpenKillEvent, PlayerHurtedEvent};
pub use models::{PlayerStats, Team};
pub use report::PlayerReport;

mod derived;
mod ledger;
mod models;
mod report;
