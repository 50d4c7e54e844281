// Ingestion facade consumed by the demo-event processor. Owns the players,
// routes events, and hosts the tracing instrumentation for dropped input.

pub use events::{GrenadeKind, KillDetails};
pub use service::MatchStats;

mod events;
mod service;
