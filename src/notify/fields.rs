use strum_macros::EnumIter;

/// Every mutable input of the statistics core: each raw counter, each flag,
/// and each of the three event logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum StatField {
    Name,
    TeamSide,
    KillCount,
    DeathCount,
    AssistCount,
    HeadshotCount,
    TeamkillCount,
    MvpCount,
    BombPlantedCount,
    BombDefusedCount,
    Score,
    OneKillCount,
    TwoKillCount,
    ThreeKillCount,
    FourKillCount,
    FiveKillCount,
    Clutch1v1Count,
    Clutch1v2Count,
    Clutch1v3Count,
    Clutch1v4Count,
    Clutch1v5Count,
    OpponentClutchCount,
    FlashbangThrownCount,
    SmokeThrownCount,
    HeGrenadeThrownCount,
    MolotovThrownCount,
    IncendiaryThrownCount,
    DecoyThrownCount,
    RoundPlayedCount,
    HasEntryKill,
    HasOpeningKill,
    IsAlive,
    IsControllingBot,
    HasBomb,
    RatingHltv,
    VacBanned,
    OverwatchBanned,
    RankNumberOld,
    RankNumberNew,
    WinCount,
    EntryKillLedger,
    OpenKillLedger,
    HurtLedger,
}

/// Every value the derivation engine computes, display strings included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum DerivedField {
    KillDeathRatio,
    HeadshotPercent,
    HeadshotDisplay,
    EntryKillWinCount,
    EntryKillLossCount,
    RatioEntryKill,
    RatioEntryKillDisplay,
    OpenKillWinCount,
    OpenKillLossCount,
    RatioOpenKill,
    RatioOpenKillDisplay,
    TotalDamageHealth,
    TotalDamageArmor,
    TotalDamageHealthReceived,
    TotalDamageArmorReceived,
    AverageDamagePerRound,
    KillPerRound,
    AssistPerRound,
    DeathPerRound,
}

/// All derived fields. Used when a mutation invalidates everything at once,
/// such as a stats reset.
pub const ALL_DERIVED: &[DerivedField] = &[
    DerivedField::KillDeathRatio,
    DerivedField::HeadshotPercent,
    DerivedField::HeadshotDisplay,
    DerivedField::EntryKillWinCount,
    DerivedField::EntryKillLossCount,
    DerivedField::RatioEntryKill,
    DerivedField::RatioEntryKillDisplay,
    DerivedField::OpenKillWinCount,
    DerivedField::OpenKillLossCount,
    DerivedField::RatioOpenKill,
    DerivedField::RatioOpenKillDisplay,
    DerivedField::TotalDamageHealth,
    DerivedField::TotalDamageArmor,
    DerivedField::TotalDamageHealthReceived,
    DerivedField::TotalDamageArmorReceived,
    DerivedField::AverageDamagePerRound,
    DerivedField::KillPerRound,
    DerivedField::AssistPerRound,
    DerivedField::DeathPerRound,
];

/// Static dependency table: which derived values can go stale when a given
/// input changes.
///
/// This replaces scattered "also notify X" calls at each mutation site with
/// one testable mapping. Pass-through fields (rating, ranks, bans, UI
/// flags) affect nothing and map to an empty slice.
pub fn dependents(field: StatField) -> &'static [DerivedField] {
    use DerivedField::*;

    match field {
        StatField::KillCount => &[KillDeathRatio, HeadshotPercent, HeadshotDisplay, KillPerRound],
        StatField::DeathCount => &[KillDeathRatio, DeathPerRound],
        StatField::AssistCount => &[AssistPerRound],
        StatField::HeadshotCount => &[HeadshotPercent, HeadshotDisplay],
        StatField::RoundPlayedCount => &[KillPerRound, AssistPerRound, DeathPerRound],
        StatField::EntryKillLedger => &[
            EntryKillWinCount,
            EntryKillLossCount,
            RatioEntryKill,
            RatioEntryKillDisplay,
        ],
        StatField::OpenKillLedger => &[
            OpenKillWinCount,
            OpenKillLossCount,
            RatioOpenKill,
            RatioOpenKillDisplay,
        ],
        StatField::HurtLedger => &[
            TotalDamageHealth,
            TotalDamageArmor,
            TotalDamageHealthReceived,
            TotalDamageArmorReceived,
            AverageDamagePerRound,
        ],
        _ => &[],
    }
}
