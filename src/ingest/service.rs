use tracing::{debug, warn};

use crate::errors::StatsError;
use crate::notify::{dependents, ChangeListener, DerivedField, StatField, ALL_DERIVED};
use crate::player::{EntryKillEvent, OpenKillEvent, PlayerHurtedEvent, PlayerReport, PlayerStats};

use super::events::{GrenadeKind, KillDetails};

/// Entry point for the demo-event processor: routes raw match events to the
/// owning [`PlayerStats`] and fires change notifications once each mutation
/// has been committed.
///
/// Single-threaded by contract. One logical writer feeds events in program
/// order; reads are safe at any point between writes, including mid-stream.
/// Callers that want parallel ingestion run one `MatchStats` per worker and
/// merge afterwards.
pub struct MatchStats {
    players: Vec<PlayerStats>,
    listeners: Vec<Box<dyn ChangeListener>>,
}

impl MatchStats {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            listeners: Vec::new(),
        }
    }

    pub fn add_listener(&mut self, listener: Box<dyn ChangeListener>) {
        self.listeners.push(listener);
    }

    /// Creates the player on first sight; refreshes the display name on
    /// later sightings (players rename mid-match, identity is the steam id).
    pub fn observe_player(&mut self, steam_id: u64, name: &str) -> &mut PlayerStats {
        let index = match self.players.iter().position(|p| p.steam_id() == steam_id) {
            Some(index) => {
                if self.players[index].name != name {
                    self.players[index].name = name.to_string();
                }
                index
            }
            None => {
                debug!(steam_id, name, "first sight of player");
                self.players.push(PlayerStats::new(steam_id, name));
                self.players.len() - 1
            }
        };
        &mut self.players[index]
    }

    pub fn record_kill(&mut self, kill: KillDetails) {
        self.apply(kill.killer, StatField::KillCount, |p| p.kill_count += 1);
        if kill.headshot {
            self.apply(kill.killer, StatField::HeadshotCount, |p| {
                p.headshot_count += 1;
            });
        }
        if kill.teamkill {
            self.apply(kill.killer, StatField::TeamkillCount, |p| {
                p.teamkill_count += 1;
            });
        }
        self.apply(kill.victim, StatField::DeathCount, |p| {
            p.death_count += 1;
            p.is_alive = false;
        });
    }

    pub fn record_assist(&mut self, steam_id: u64) {
        self.apply(steam_id, StatField::AssistCount, |p| p.assist_count += 1);
    }

    /// Appends the damage instance to the ledger of every involved player.
    /// A fully unattributed event carries no information and is dropped; a
    /// half-attributed one still reaches the known side.
    pub fn record_player_hurted(&mut self, event: PlayerHurtedEvent) {
        if event.attacker.is_none() && event.hurted.is_none() {
            warn!(round = event.round_number, "unattributed damage event dropped");
            return;
        }
        if let Some(attacker) = event.attacker {
            self.apply(attacker, StatField::HurtLedger, |p| {
                p.ledger.push_player_hurted(event);
            });
        }
        if let Some(hurted) = event.hurted {
            // Self-damage is already in the attacker's ledger.
            if event.attacker != event.hurted {
                self.apply(hurted, StatField::HurtLedger, |p| {
                    p.ledger.push_player_hurted(event);
                });
            }
        }
    }

    pub fn record_entry_kill(&mut self, event: EntryKillEvent) {
        let Some(killer) = event.killer else {
            warn!(round = event.round_number, "entry kill without killer dropped");
            return;
        };
        self.apply(killer, StatField::EntryKillLedger, |p| {
            p.ledger.push_entry_kill(event);
            p.has_entry_kill = true;
        });
    }

    pub fn record_open_kill(&mut self, event: OpenKillEvent) {
        let Some(killer) = event.killer else {
            warn!(round = event.round_number, "opening kill without killer dropped");
            return;
        };
        self.apply(killer, StatField::OpenKillLedger, |p| {
            p.ledger.push_opening_kill(event);
            p.has_opening_kill = true;
        });
    }

    pub fn record_clutch_win(&mut self, steam_id: u64, opponent_count: u8) -> Result<(), StatsError> {
        let field = match opponent_count {
            1 => StatField::Clutch1v1Count,
            2 => StatField::Clutch1v2Count,
            3 => StatField::Clutch1v3Count,
            4 => StatField::Clutch1v4Count,
            5 => StatField::Clutch1v5Count,
            other => {
                return Err(StatsError::Validation(format!(
                    "clutch opponent count must be 1..=5, got {other}"
                )))
            }
        };
        self.apply(steam_id, field, |p| {
            let counter = match opponent_count {
                1 => &mut p.clutch_1v1_count,
                2 => &mut p.clutch_1v2_count,
                3 => &mut p.clutch_1v3_count,
                4 => &mut p.clutch_1v4_count,
                _ => &mut p.clutch_1v5_count,
            };
            *counter += 1;
        });
        Ok(())
    }

    /// Files the round's kill total into the 1..5-kill brackets.
    pub fn record_multi_kill(&mut self, steam_id: u64, kills_in_round: u32) {
        let field = match kills_in_round {
            0 => return,
            1 => StatField::OneKillCount,
            2 => StatField::TwoKillCount,
            3 => StatField::ThreeKillCount,
            4 => StatField::FourKillCount,
            _ => StatField::FiveKillCount,
        };
        self.apply(steam_id, field, |p| {
            let counter = match kills_in_round {
                1 => &mut p.one_kill_count,
                2 => &mut p.two_kill_count,
                3 => &mut p.three_kill_count,
                4 => &mut p.four_kill_count,
                _ => &mut p.five_kill_count,
            };
            *counter += 1;
        });
    }

    /// Closes a round: everyone played it, per-round flags reset, dead
    /// players come back for the next one.
    pub fn record_round_end(&mut self, mvp: Option<u64>) {
        for player in &mut self.players {
            player.round_played_count += 1;
            player.has_entry_kill = false;
            player.has_opening_kill = false;
            player.has_bomb = false;
            player.is_alive = true;
            player.opponent_clutch_count = 0;
        }
        let steam_ids: Vec<u64> = self.players.iter().map(|p| p.steam_id()).collect();
        for steam_id in steam_ids {
            self.notify(steam_id, dependents(StatField::RoundPlayedCount));
        }
        if let Some(mvp) = mvp {
            self.apply(mvp, StatField::MvpCount, |p| p.round_mvp_count += 1);
        }
    }

    pub fn record_bomb_planted(&mut self, steam_id: u64) {
        self.apply(steam_id, StatField::BombPlantedCount, |p| {
            p.bomb_planted_count += 1;
        });
    }

    pub fn record_bomb_defused(&mut self, steam_id: u64) {
        self.apply(steam_id, StatField::BombDefusedCount, |p| {
            p.bomb_defused_count += 1;
        });
    }

    pub fn record_throw(&mut self, steam_id: u64, kind: GrenadeKind) {
        let field = match kind {
            GrenadeKind::Flashbang => StatField::FlashbangThrownCount,
            GrenadeKind::Smoke => StatField::SmokeThrownCount,
            GrenadeKind::HeGrenade => StatField::HeGrenadeThrownCount,
            GrenadeKind::Molotov => StatField::MolotovThrownCount,
            GrenadeKind::Incendiary => StatField::IncendiaryThrownCount,
            GrenadeKind::Decoy => StatField::DecoyThrownCount,
        };
        self.apply(steam_id, field, |p| {
            let counter = match kind {
                GrenadeKind::Flashbang => &mut p.flashbang_thrown_count,
                GrenadeKind::Smoke => &mut p.smoke_thrown_count,
                GrenadeKind::HeGrenade => &mut p.he_grenade_thrown_count,
                GrenadeKind::Molotov => &mut p.molotov_thrown_count,
                GrenadeKind::Incendiary => &mut p.incendiary_thrown_count,
                GrenadeKind::Decoy => &mut p.decoy_thrown_count,
            };
            *counter += 1;
        });
    }

    pub fn set_score(&mut self, steam_id: u64, score: u32) {
        self.apply(steam_id, StatField::Score, |p| p.score = score);
    }

    pub fn set_rating(&mut self, steam_id: u64, rating: f32) {
        self.apply(steam_id, StatField::RatingHltv, |p| p.rating_hltv = rating);
    }

    pub fn set_rank(&mut self, steam_id: u64, old: i32, new: i32, wins: u32) {
        self.apply(steam_id, StatField::RankNumberNew, |p| {
            p.rank_number_old = old;
            p.rank_number_new = new;
            p.win_count = wins;
        });
    }

    pub fn set_ban_flags(&mut self, steam_id: u64, vac: bool, overwatch: bool) {
        self.apply(steam_id, StatField::VacBanned, |p| {
            p.is_vac_banned = vac;
            p.is_overwatch_banned = overwatch;
        });
    }

    /// Resets every player to a pristine zero-state, e.g. on half restart
    /// or re-analysis. Ban flags and rank numbers survive.
    pub fn reset_stats(&mut self) {
        for player in &mut self.players {
            player.reset_stats();
        }
        let steam_ids: Vec<u64> = self.players.iter().map(|p| p.steam_id()).collect();
        for steam_id in steam_ids {
            self.notify(steam_id, ALL_DERIVED);
        }
    }

    pub fn reset_player(&mut self, steam_id: u64) -> bool {
        match self.players.iter_mut().find(|p| p.steam_id() == steam_id) {
            Some(player) => {
                player.reset_stats();
                self.notify(steam_id, ALL_DERIVED);
                true
            }
            None => false,
        }
    }

    pub fn player(&self, steam_id: u64) -> Option<&PlayerStats> {
        self.players.iter().find(|p| p.steam_id() == steam_id)
    }

    pub fn players(&self) -> &[PlayerStats] {
        &self.players
    }

    /// Emits every player under the fixed report shape.
    pub fn to_json(&self) -> Result<String, StatsError> {
        let reports: Vec<PlayerReport> = self.players.iter().map(PlayerReport::from).collect();
        Ok(serde_json::to_string_pretty(&reports)?)
    }

    fn apply<F>(&mut self, steam_id: u64, field: StatField, mutate: F) -> bool
    where
        F: FnOnce(&mut PlayerStats),
    {
        match self.players.iter_mut().find(|p| p.steam_id() == steam_id) {
            Some(player) => {
                mutate(player);
                self.notify(steam_id, dependents(field));
                true
            }
            None => {
                warn!(steam_id, field = ?field, "event for unobserved player dropped");
                false
            }
        }
    }

    fn notify(&mut self, steam_id: u64, fields: &'static [DerivedField]) {
        if fields.is_empty() {
            return;
        }
        for listener in &mut self.listeners {
            listener.derived_changed(steam_id, fields);
        }
    }
}

impl Default for MatchStats {
    fn default() -> Self {
        Self::new()
    }
}
