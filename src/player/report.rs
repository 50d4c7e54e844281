use serde::{Deserialize, Serialize};

use super::ledger::{EntryKillEvent, OpenKillEvent, PlayerHurtedEvent};
use super::models::PlayerStats;

/// External shape of one player's statistics.
///
/// Field tokens are fixed: existing exports and report tooling match on
/// them byte for byte. Derived values are computed at build time from the
/// live [`PlayerStats`]; UI-only state (team, alive/bomb/bot flags) is
/// deliberately absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerReport {
    pub steamid: u64,
    pub name: String,
    pub score: u32,
    pub teamkill_count: u32,
    pub assist_count: u32,
    pub bomb_planted_count: u32,
    pub bomb_defused_count: u32,
    pub death_count: u32,
    pub five_kills_count: u32,
    pub four_kills_count: u32,
    pub three_kills_count: u32,
    pub two_kills_count: u32,
    pub one_kill_count: u32,
    pub headshot_count: u32,
    pub kd_ratio: f64,
    pub mvp_count: u32,
    pub kill_count: u32,
    pub rating_hltv: f32,
    #[serde(rename = "1v1_count")]
    pub clutch_1v1_count: u32,
    #[serde(rename = "1v2_count")]
    pub clutch_1v2_count: u32,
    #[serde(rename = "1v3_count")]
    pub clutch_1v3_count: u32,
    #[serde(rename = "1v4_count")]
    pub clutch_1v4_count: u32,
    #[serde(rename = "1v5_count")]
    pub clutch_1v5_count: u32,
    pub vac_banned: bool,
    pub overwatch_banned: bool,
    pub flashbang_throwed_count: u32,
    pub smoke_throwed_count: u32,
    pub hegrenade_throwed_count: u32,
    pub molotov_throwed_count: u32,
    pub incendiary_throwed_count: u32,
    pub decoy_throwed_count: u32,
    pub round_played_count: u32,
    pub entry_kills: Vec<EntryKillEvent>,
    pub opening_kills: Vec<OpenKillEvent>,
    pub players_hurted: Vec<PlayerHurtedEvent>,
    pub rank_number_old: i32,
    pub rank_number_new: i32,
    pub number_wins: u32,
    pub entry_kill_win_count: u32,
    pub entry_kill_loss_count: u32,
    pub open_kill_win_count: u32,
    pub open_kill_loss_count: u32,
}

impl From<&PlayerStats> for PlayerReport {
    fn from(player: &PlayerStats) -> Self {
        Self {
            steamid: player.steam_id(),
            name: player.name.clone(),
            score: player.score,
            teamkill_count: player.teamkill_count,
            assist_count: player.assist_count,
            bomb_planted_count: player.bomb_planted_count,
            bomb_defused_count: player.bomb_defused_count,
            death_count: player.death_count,
            five_kills_count: player.five_kill_count,
            four_kills_count: player.four_kill_count,
            three_kills_count: player.three_kill_count,
            two_kills_count: player.two_kill_count,
            one_kill_count: player.one_kill_count,
            headshot_count: player.headshot_count,
            kd_ratio: player.kill_death_ratio(),
            mvp_count: player.round_mvp_count,
            kill_count: player.kill_count,
            rating_hltv: player.rating_hltv,
            clutch_1v1_count: player.clutch_1v1_count,
            clutch_1v2_count: player.clutch_1v2_count,
            clutch_1v3_count: player.clutch_1v3_count,
            clutch_1v4_count: player.clutch_1v4_count,
            clutch_1v5_count: player.clutch_1v5_count,
            vac_banned: player.is_vac_banned,
            overwatch_banned: player.is_overwatch_banned,
            flashbang_throwed_count: player.flashbang_thrown_count,
            smoke_throwed_count: player.smoke_thrown_count,
            hegrenade_throwed_count: player.he_grenade_thrown_count,
            molotov_throwed_count: player.molotov_thrown_count,
            incendiary_throwed_count: player.incendiary_thrown_count,
            decoy_throwed_count: player.decoy_thrown_count,
            round_played_count: player.round_played_count,
            entry_kills: player.ledger.entry_kills().to_vec(),
            opening_kills: player.ledger.opening_kills().to_vec(),
            players_hurted: player.ledger.players_hurted().to_vec(),
            rank_number_old: player.rank_number_old,
            rank_number_new: player.rank_number_new,
            number_wins: player.win_count,
            entry_kill_win_count: player.entry_kill_win_count() as u32,
            entry_kill_loss_count: player.entry_kill_loss_count() as u32,
            open_kill_win_count: player.open_kill_win_count() as u32,
            open_kill_loss_count: player.open_kill_loss_count() as u32,
        }
    }
}
