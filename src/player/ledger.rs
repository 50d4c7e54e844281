use serde::{Deserialize, Serialize};

/// First kill of a round in the first site engagement, credited to a team.
///
/// Killer and victim are weak references by steam id; a `None` reference
/// means the demo was only partially decoded for that event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryKillEvent {
    pub round_number: u32,
    #[serde(rename = "killer_steamid")]
    pub killer: Option<u64>,
    #[serde(rename = "victim_steamid")]
    pub victim: Option<u64>,
    /// Whether the killer's side went on to win the round.
    pub has_win: bool,
}

/// First kill of a round overall, independent of site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenKillEvent {
    pub round_number: u32,
    #[serde(rename = "killer_steamid")]
    pub killer: Option<u64>,
    #[serde(rename = "victim_steamid")]
    pub victim: Option<u64>,
    pub has_win: bool,
}

/// One damage instance between two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerHurtedEvent {
    #[serde(rename = "attacker_steamid")]
    pub attacker: Option<u64>,
    #[serde(rename = "hurted_steamid")]
    pub hurted: Option<u64>,
    pub health_damage: u32,
    pub armor_damage: u32,
    pub round_number: u32,
}

/// Order-preserving logs of the combat events a player was involved in.
///
/// Each log supports only append and clear: entries are never updated or
/// removed individually during a live match. Entries with a missing
/// attacker/victim reference stay in the log and are filtered out at read
/// time by the aggregation code.
#[derive(Debug, Clone, Default)]
pub struct EventLedger {
    entry_kills: Vec<EntryKillEvent>,
    opening_kills: Vec<OpenKillEvent>,
    players_hurted: Vec<PlayerHurtedEvent>,
}

impl EventLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_entry_kill(&mut self, event: EntryKillEvent) {
        self.entry_kills.push(event);
    }

    pub fn push_opening_kill(&mut self, event: OpenKillEvent) {
        self.opening_kills.push(event);
    }

    pub fn push_player_hurted(&mut self, event: PlayerHurtedEvent) {
        self.players_hurted.push(event);
    }

    /// Clears all three logs together. Partial clears are not offered.
    pub fn clear(&mut self) {
        self.entry_kills.clear();
        self.opening_kills.clear();
        self.players_hurted.clear();
    }

    pub fn entry_kills(&self) -> &[EntryKillEvent] {
        &self.entry_kills
    }

    pub fn opening_kills(&self) -> &[OpenKillEvent] {
        &self.opening_kills
    }

    pub fn players_hurted(&self) -> &[PlayerHurtedEvent] {
        &self.players_hurted
    }

    /// Damage instances dealt by the given player. Unattributed entries are
    /// skipped.
    pub fn hurt_dealt_by(&self, steam_id: u64) -> impl Iterator<Item = &PlayerHurtedEvent> {
        self.players_hurted
            .iter()
            .filter(move |event| event.attacker == Some(steam_id))
    }

    /// Damage instances received by the given player.
    pub fn hurt_received_by(&self, steam_id: u64) -> impl Iterator<Item = &PlayerHurtedEvent> {
        self.players_hurted
            .iter()
            .filter(move |event| event.hurted == Some(steam_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hurt(attacker: Option<u64>, hurted: Option<u64>, health: u32, round: u32) -> PlayerHurtedEvent {
        PlayerHurtedEvent {
            attacker,
            hurted,
            health_damage: health,
            armor_damage: 0,
            round_number: round,
        }
    }

    #[test]
    fn appends_preserve_order_and_count() {
        let mut ledger = EventLedger::new();
        for round in 1..=4 {
            ledger.push_player_hurted(hurt(Some(1), Some(2), 10, round));
        }

        assert_eq!(ledger.players_hurted().len(), 4);
        let rounds: Vec<u32> = ledger
            .players_hurted()
            .iter()
            .map(|e| e.round_number)
            .collect();
        assert_eq!(rounds, vec![1, 2, 3, 4]);
    }

    #[test]
    fn malformed_entries_are_kept_but_filtered_from_scans() {
        let mut ledger = EventLedger::new();
        ledger.push_player_hurted(hurt(Some(1), Some(2), 20, 1));
        ledger.push_player_hurted(hurt(None, Some(2), 35, 1));
        ledger.push_player_hurted(hurt(Some(1), None, 15, 2));

        assert_eq!(ledger.players_hurted().len(), 3);
        assert_eq!(ledger.hurt_dealt_by(1).count(), 2);
        assert_eq!(ledger.hurt_received_by(2).count(), 2);
    }

    #[test]
    fn clear_empties_all_three_logs() {
        let mut ledger = EventLedger::new();
        ledger.push_entry_kill(EntryKillEvent {
            round_number: 1,
            killer: Some(1),
            victim: Some(2),
            has_win: true,
        });
        ledger.push_opening_kill(OpenKillEvent {
            round_number: 1,
            killer: Some(1),
            victim: Some(2),
            has_win: false,
        });
        ledger.push_player_hurted(hurt(Some(1), Some(2), 50, 1));

        ledger.clear();

        assert!(ledger.entry_kills().is_empty());
        assert!(ledger.opening_kills().is_empty());
        assert!(ledger.players_hurted().is_empty());
    }
}
