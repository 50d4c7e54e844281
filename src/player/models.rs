use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::ledger::EventLedger;

/// Side a player is currently on. Changes at half time and does not
/// participate in identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Team {
    #[default]
    Spectate,
    Terrorist,
    CounterTerrorist,
}

/// Raw per-player tallies for one match, plus the event ledger they are
/// derived from.
///
/// Counters only move through explicit increments from the ingestion layer
/// or an en-masse [`reset_stats`](PlayerStats::reset_stats); nothing here
/// validates against decrements. Derived metrics (ratios, averages, display
/// strings) live in the `derived` module and are recomputed from these
/// fields on every read.
#[derive(Debug, Clone)]
pub struct PlayerStats {
    /// Steam ID 64. Immutable once set; the sole equality and hash key.
    steam_id: u64,
    pub name: String,
    pub team: Team,

    pub kill_count: u32,
    pub death_count: u32,
    pub assist_count: u32,
    pub headshot_count: u32,
    pub teamkill_count: u32,
    pub round_mvp_count: u32,
    pub bomb_planted_count: u32,
    pub bomb_defused_count: u32,
    /// Score as reported by the game itself.
    pub score: u32,

    /// Rounds in which the player made exactly 1..5 kills.
    pub one_kill_count: u32,
    pub two_kill_count: u32,
    pub three_kill_count: u32,
    pub four_kill_count: u32,
    pub five_kill_count: u32,

    pub clutch_1v1_count: u32,
    pub clutch_1v2_count: u32,
    pub clutch_1v3_count: u32,
    pub clutch_1v4_count: u32,
    pub clutch_1v5_count: u32,
    /// Opponents left while the player is in a clutch. Transient.
    pub opponent_clutch_count: u32,

    pub flashbang_thrown_count: u32,
    pub smoke_thrown_count: u32,
    pub he_grenade_thrown_count: u32,
    pub molotov_thrown_count: u32,
    pub incendiary_thrown_count: u32,
    pub decoy_thrown_count: u32,

    pub round_played_count: u32,

    // Per-round / per-tick flags, maintained by the ingestion layer.
    pub has_entry_kill: bool,
    pub has_opening_kill: bool,
    pub is_alive: bool,
    pub is_controlling_bot: bool,
    pub has_bomb: bool,

    /// Rating from the hltv.org formula, supplied by the analyzer. Stored
    /// verbatim, never derived here.
    pub rating_hltv: f32,

    // Match-independent identity attributes; these survive a stats reset.
    pub is_vac_banned: bool,
    pub is_overwatch_banned: bool,
    pub rank_number_old: i32,
    pub rank_number_new: i32,
    pub win_count: u32,

    pub ledger: EventLedger,
}

impl PlayerStats {
    pub fn new(steam_id: u64, name: impl Into<String>) -> Self {
        Self {
            steam_id,
            name: name.into(),
            team: Team::Spectate,
            kill_count: 0,
            death_count: 0,
            assist_count: 0,
            headshot_count: 0,
            teamkill_count: 0,
            round_mvp_count: 0,
            bomb_planted_count: 0,
            bomb_defused_count: 0,
            score: 0,
            one_kill_count: 0,
            two_kill_count: 0,
            three_kill_count: 0,
            four_kill_count: 0,
            five_kill_count: 0,
            clutch_1v1_count: 0,
            clutch_1v2_count: 0,
            clutch_1v3_count: 0,
            clutch_1v4_count: 0,
            clutch_1v5_count: 0,
            opponent_clutch_count: 0,
            flashbang_thrown_count: 0,
            smoke_thrown_count: 0,
            he_grenade_thrown_count: 0,
            molotov_thrown_count: 0,
            incendiary_thrown_count: 0,
            decoy_thrown_count: 0,
            round_played_count: 0,
            has_entry_kill: false,
            has_opening_kill: false,
            is_alive: true,
            is_controlling_bot: false,
            has_bomb: false,
            rating_hltv: 0.0,
            is_vac_banned: false,
            is_overwatch_banned: false,
            rank_number_old: 0,
            rank_number_new: 0,
            win_count: 0,
            ledger: EventLedger::new(),
        }
    }

    pub fn steam_id(&self) -> u64 {
        self.steam_id
    }

    /// Zeroes every gameplay counter and per-round flag and clears the
    /// three event logs together. Identity (`steam_id`, `name`, `team`),
    /// ban flags and rank numbers are untouched; `rating_hltv` is reset
    /// to 0 explicitly since the analyzer recomputes it on replay.
    pub fn reset_stats(&mut self) {
        self.kill_count = 0;
        self.death_count = 0;
        self.assist_count = 0;
        self.headshot_count = 0;
        self.teamkill_count = 0;
        self.round_mvp_count = 0;
        self.one_kill_count = 0;
        self.two_kill_count = 0;
        self.three_kill_count = 0;
        self.four_kill_count = 0;
        self.five_kill_count = 0;
        self.clutch_1v1_count = 0;
        self.clutch_1v2_count = 0;
        self.clutch_1v3_count = 0;
        self.clutch_1v4_count = 0;
        self.clutch_1v5_count = 0;
        self.bomb_defused_count = 0;
        self.bomb_planted_count = 0;
        self.score = 0;
        self.opponent_clutch_count = 0;
        self.has_entry_kill = false;
        self.has_opening_kill = false;
        self.rating_hltv = 0.0;
        self.flashbang_thrown_count = 0;
        self.smoke_thrown_count = 0;
        self.he_grenade_thrown_count = 0;
        self.molotov_thrown_count = 0;
        self.incendiary_thrown_count = 0;
        self.decoy_thrown_count = 0;
        self.ledger.clear();
        self.round_played_count = 0;
    }

    /// Point-in-time copy with its own ledger storage: mutating either side
    /// afterwards leaves the other untouched.
    pub fn snapshot(&self) -> PlayerStats {
        self.clone()
    }
}

impl PartialEq for PlayerStats {
    fn eq(&self, other: &Self) -> bool {
        self.steam_id == other.steam_id
    }
}

impl Eq for PlayerStats {}

impl Hash for PlayerStats {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.steam_id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::ledger::PlayerHurtedEvent;
    use std::collections::HashSet;

    fn hurt_by(steam_id: u64, health: u32, round: u32) -> PlayerHurtedEvent {
        PlayerHurtedEvent {
            attacker: Some(steam_id),
            hurted: Some(steam_id + 1),
            health_damage: health,
            armor_damage: 0,
            round_number: round,
        }
    }

    #[test]
    fn equality_and_hash_use_steam_id_only() {
        let mut a = PlayerStats::new(76561198000000001, "alpha");
        let b = PlayerStats::new(76561198000000001, "bravo");
        let c = PlayerStats::new(76561198000000002, "alpha");
        a.kill_count = 30;

        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        set.insert(c);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn reset_zeroes_gameplay_state_but_keeps_identity_fields() {
        let mut player = PlayerStats::new(42, "player");
        player.kill_count = 12;
        player.death_count = 7;
        player.headshot_count = 5;
        player.clutch_1v3_count = 1;
        player.smoke_thrown_count = 9;
        player.round_played_count = 16;
        player.score = 31;
        player.rating_hltv = 1.34;
        player.has_entry_kill = true;
        player.is_vac_banned = true;
        player.rank_number_old = 12;
        player.rank_number_new = 13;
        player.win_count = 240;
        player.ledger.push_player_hurted(hurt_by(42, 20, 1));

        player.reset_stats();

        assert_eq!(player.kill_count, 0);
        assert_eq!(player.death_count, 0);
        assert_eq!(player.headshot_count, 0);
        assert_eq!(player.clutch_1v3_count, 0);
        assert_eq!(player.smoke_thrown_count, 0);
        assert_eq!(player.round_played_count, 0);
        assert_eq!(player.score, 0);
        assert_eq!(player.rating_hltv, 0.0);
        assert!(!player.has_entry_kill);
        assert!(player.ledger.players_hurted().is_empty());

        // Match-independent attributes survive.
        assert_eq!(player.steam_id(), 42);
        assert_eq!(player.name, "player");
        assert!(player.is_vac_banned);
        assert_eq!(player.rank_number_old, 12);
        assert_eq!(player.rank_number_new, 13);
        assert_eq!(player.win_count, 240);
    }

    #[test]
    fn snapshot_does_not_share_ledger_storage() {
        let mut player = PlayerStats::new(7, "snap");
        player.ledger.push_player_hurted(hurt_by(7, 25, 1));

        let snapshot = player.snapshot();
        player.ledger.push_player_hurted(hurt_by(7, 40, 2));

        assert_eq!(player.ledger.players_hurted().len(), 2);
        assert_eq!(snapshot.ledger.players_hurted().len(), 1);
        assert_eq!(snapshot.total_damage_health(), 25);
    }
}
