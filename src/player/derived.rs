//! Read-time metric derivation over the counters and the event ledger.
//!
//! Nothing in here is cached: every accessor recomputes from the current
//! raw state, so derived values can never desynchronize from their inputs.
//! Zero-denominator cases are explicit branches, never a division fault.

use super::models::PlayerStats;

fn round0(value: f64) -> f64 {
    value.round()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Shared win-percentage policy for entry and opening kills.
///
/// The short-circuits are asymmetric on purpose: no wins reads 0 even with
/// no data, while wins without losses reads a flat 100 regardless of the
/// total. Existing reports depend on this exact shape.
fn win_ratio_percent(wins: usize, losses: usize, total: usize) -> f64 {
    if wins == 0 {
        return 0.0;
    }
    if losses == 0 {
        return 100.0;
    }
    round0(wins as f64 / total as f64 * 100.0)
}

impl PlayerStats {
    /// Kills over deaths, 2 decimals. Reads 0 while either counter is 0.
    pub fn kill_death_ratio(&self) -> f64 {
        if self.kill_count != 0 && self.death_count != 0 {
            round2(self.kill_count as f64 / self.death_count as f64)
        } else {
            0.0
        }
    }

    /// Share of kills that were headshots, 2 decimals.
    pub fn headshot_percent(&self) -> f64 {
        if self.headshot_count == 0 {
            return 0.0;
        }
        let mut percent = 0.0;
        if self.kill_count > 0 {
            percent = (self.headshot_count * 100) as f64 / self.kill_count as f64;
        }
        round2(percent)
    }

    pub fn entry_kill_win_count(&self) -> usize {
        self.ledger.entry_kills().iter().filter(|e| e.has_win).count()
    }

    pub fn entry_kill_loss_count(&self) -> usize {
        self.ledger.entry_kills().iter().filter(|e| !e.has_win).count()
    }

    pub fn open_kill_win_count(&self) -> usize {
        self.ledger.opening_kills().iter().filter(|e| e.has_win).count()
    }

    pub fn open_kill_loss_count(&self) -> usize {
        self.ledger.opening_kills().iter().filter(|e| !e.has_win).count()
    }

    /// Percentage of entry kills that converted into a round win, rounded
    /// to a whole number.
    pub fn ratio_entry_kill(&self) -> f64 {
        win_ratio_percent(
            self.entry_kill_win_count(),
            self.entry_kill_loss_count(),
            self.ledger.entry_kills().len(),
        )
    }

    /// Same policy as [`ratio_entry_kill`](Self::ratio_entry_kill), over the
    /// opening-kill log.
    pub fn ratio_open_kill(&self) -> f64 {
        win_ratio_percent(
            self.open_kill_win_count(),
            self.open_kill_loss_count(),
            self.ledger.opening_kills().len(),
        )
    }

    /// Total health damage dealt by this player.
    pub fn total_damage_health(&self) -> u32 {
        self.ledger
            .hurt_dealt_by(self.steam_id())
            .map(|e| e.health_damage)
            .sum()
    }

    /// Total armor damage dealt by this player.
    pub fn total_damage_armor(&self) -> u32 {
        self.ledger
            .hurt_dealt_by(self.steam_id())
            .map(|e| e.armor_damage)
            .sum()
    }

    pub fn total_damage_health_received(&self) -> u32 {
        self.ledger
            .hurt_received_by(self.steam_id())
            .map(|e| e.health_damage)
            .sum()
    }

    pub fn total_damage_armor_received(&self) -> u32 {
        self.ledger
            .hurt_received_by(self.steam_id())
            .map(|e| e.armor_damage)
            .sum()
    }

    /// Average damage (health + armor) dealt per round, 1 decimal.
    ///
    /// The divisor is the round number of the last matching ledger entry in
    /// insertion order, standing in for "rounds elapsed so far" in a
    /// sequentially fed stream. It is not the count of distinct rounds with
    /// damage, and downstream reports depend on that exact reading.
    pub fn average_damage_per_round(&self) -> f64 {
        if self.ledger.players_hurted().is_empty() {
            return 0.0;
        }

        let mut total = 0.0;
        let mut round_number = 1u32;
        for event in self.ledger.hurt_dealt_by(self.steam_id()) {
            total += (event.health_damage + event.armor_damage) as f64;
            round_number = event.round_number;
        }

        if total.abs() < 0.1 {
            return total;
        }
        round1(total / round_number as f64)
    }

    pub fn kill_per_round(&self) -> f64 {
        if self.round_played_count > 0 {
            round2(self.kill_count as f64 / self.round_played_count as f64)
        } else {
            0.0
        }
    }

    pub fn assist_per_round(&self) -> f64 {
        if self.round_played_count > 0 {
            round2(self.assist_count as f64 / self.round_played_count as f64)
        } else {
            0.0
        }
    }

    pub fn death_per_round(&self) -> f64 {
        if self.round_played_count > 0 {
            round2(self.death_count as f64 / self.round_played_count as f64)
        } else {
            0.0
        }
    }

    /// `"<count> (<percent>%)"`, e.g. `"5 (25%)"`. Decimals print without
    /// trailing zeros, matching the report layout.
    pub fn headshot_display(&self) -> String {
        format!("{} ({}%)", self.headshot_count, self.headshot_percent())
    }

    /// `"<percent> %"`, e.g. `"67 %"`.
    pub fn ratio_entry_kill_display(&self) -> String {
        format!("{} %", self.ratio_entry_kill())
    }

    pub fn ratio_open_kill_display(&self) -> String {
        format!("{} %", self.ratio_open_kill())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::ledger::{EntryKillEvent, OpenKillEvent, PlayerHurtedEvent};
    use rstest::rstest;

    const STEAM_ID: u64 = 76561198000000001;

    fn player() -> PlayerStats {
        PlayerStats::new(STEAM_ID, "subject")
    }

    fn entry(has_win: bool) -> EntryKillEvent {
        EntryKillEvent {
            round_number: 1,
            killer: Some(STEAM_ID),
            victim: Some(2),
            has_win,
        }
    }

    fn open(has_win: bool) -> OpenKillEvent {
        OpenKillEvent {
            round_number: 1,
            killer: Some(STEAM_ID),
            victim: Some(2),
            has_win,
        }
    }

    fn hurt(attacker: Option<u64>, health: u32, armor: u32, round: u32) -> PlayerHurtedEvent {
        PlayerHurtedEvent {
            attacker,
            hurted: Some(99),
            health_damage: health,
            armor_damage: armor,
            round_number: round,
        }
    }

    #[rstest]
    #[case(10, 4, 2.5)]
    #[case(0, 5, 0.0)]
    #[case(5, 0, 0.0)]
    #[case(0, 0, 0.0)]
    #[case(7, 3, 2.33)]
    fn kill_death_ratio_policy(#[case] kills: u32, #[case] deaths: u32, #[case] expected: f64) {
        let mut p = player();
        p.kill_count = kills;
        p.death_count = deaths;
        assert_eq!(p.kill_death_ratio(), expected);
    }

    #[rstest]
    #[case(5, 20, 25.0)]
    #[case(0, 20, 0.0)]
    #[case(3, 0, 0.0)]
    #[case(2, 3, 66.67)]
    fn headshot_percent_policy(#[case] headshots: u32, #[case] kills: u32, #[case] expected: f64) {
        let mut p = player();
        p.headshot_count = headshots;
        p.kill_count = kills;
        assert_eq!(p.headshot_percent(), expected);
    }

    #[test]
    fn entry_kill_ratio_is_asymmetric() {
        let mut all_wins = player();
        for _ in 0..3 {
            all_wins.ledger.push_entry_kill(entry(true));
        }
        assert_eq!(all_wins.ratio_entry_kill(), 100.0);

        let mut all_losses = player();
        for _ in 0..3 {
            all_losses.ledger.push_entry_kill(entry(false));
        }
        assert_eq!(all_losses.ratio_entry_kill(), 0.0);

        let mut mixed = player();
        mixed.ledger.push_entry_kill(entry(true));
        mixed.ledger.push_entry_kill(entry(true));
        mixed.ledger.push_entry_kill(entry(false));
        assert_eq!(mixed.ratio_entry_kill(), 67.0);
        assert_eq!(mixed.entry_kill_win_count(), 2);
        assert_eq!(mixed.entry_kill_loss_count(), 1);
    }

    #[test]
    fn open_kill_ratio_follows_same_policy() {
        let mut p = player();
        p.ledger.push_opening_kill(open(true));
        p.ledger.push_opening_kill(open(false));
        p.ledger.push_opening_kill(open(false));
        p.ledger.push_opening_kill(open(false));
        assert_eq!(p.ratio_open_kill(), 25.0);
        assert_eq!(p.open_kill_win_count(), 1);
        assert_eq!(p.open_kill_loss_count(), 3);
    }

    #[test]
    fn damage_totals_filter_by_attacker_and_victim() {
        let mut p = player();
        p.ledger.push_player_hurted(hurt(Some(STEAM_ID), 20, 10, 1));
        p.ledger.push_player_hurted(hurt(Some(STEAM_ID), 30, 0, 1));
        p.ledger.push_player_hurted(hurt(Some(4242), 55, 5, 1));
        p.ledger.push_player_hurted(hurt(None, 80, 80, 1));
        p.ledger.push_player_hurted(PlayerHurtedEvent {
            attacker: Some(4242),
            hurted: Some(STEAM_ID),
            health_damage: 17,
            armor_damage: 3,
            round_number: 2,
        });

        assert_eq!(p.total_damage_health(), 50);
        assert_eq!(p.total_damage_armor(), 10);
        assert_eq!(p.total_damage_health_received(), 17);
        assert_eq!(p.total_damage_armor_received(), 3);
    }

    #[test]
    fn average_damage_divides_by_last_matching_round_number() {
        let mut p = player();
        p.ledger.push_player_hurted(hurt(Some(STEAM_ID), 20, 10, 1));
        p.ledger.push_player_hurted(hurt(Some(STEAM_ID), 30, 0, 1));
        assert_eq!(p.average_damage_per_round(), 60.0);

        p.ledger.push_player_hurted(hurt(Some(STEAM_ID), 10, 0, 2));
        assert_eq!(p.average_damage_per_round(), 45.0);
    }

    #[test]
    fn average_damage_is_zero_without_own_damage() {
        let mut p = player();
        assert_eq!(p.average_damage_per_round(), 0.0);

        // Involved in the ledger only as a bystander record.
        p.ledger.push_player_hurted(hurt(Some(4242), 90, 0, 3));
        assert_eq!(p.average_damage_per_round(), 0.0);
    }

    #[rstest]
    #[case(16, 24, 1.5)]
    #[case(0, 24, 0.0)]
    #[case(5, 0, 0.0)]
    fn kill_per_round_policy(#[case] kills: u32, #[case] rounds: u32, #[case] expected: f64) {
        let mut p = player();
        p.kill_count = kills;
        p.round_played_count = rounds;
        assert_eq!(p.kill_per_round(), expected);
    }

    #[test]
    fn per_round_rates_share_the_rounds_denominator() {
        let mut p = player();
        p.kill_count = 20;
        p.assist_count = 5;
        p.death_count = 13;
        p.round_played_count = 26;
        assert_eq!(p.kill_per_round(), 0.77);
        assert_eq!(p.assist_per_round(), 0.19);
        assert_eq!(p.death_per_round(), 0.5);
    }

    #[test]
    fn display_strings_trim_trailing_zeros() {
        let mut p = player();
        p.headshot_count = 5;
        p.kill_count = 20;
        assert_eq!(p.headshot_display(), "5 (25%)");

        p.kill_count = 6;
        assert_eq!(p.headshot_display(), "5 (83.33%)");

        p.ledger.push_entry_kill(entry(true));
        p.ledger.push_entry_kill(entry(true));
        p.ledger.push_entry_kill(entry(false));
        assert_eq!(p.ratio_entry_kill_display(), "67 %");
        assert_eq!(p.ratio_open_kill_display(), "0 %");
    }

    #[rstest]
    #[case(0.125, 0.13)]
    #[case(2.344, 2.34)]
    #[case(2.346, 2.35)]
    #[case(-0.125, -0.13)]
    fn round2_is_half_away_from_zero(#[case] input: f64, #[case] expected: f64) {
        assert_eq!(round2(input), expected);
    }
}
