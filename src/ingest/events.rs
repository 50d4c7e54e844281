use strum_macros::EnumIter;

/// One kill as reported by the demo-event processor.
///
/// The producer has already decided attribution (entry/opening kills arrive
/// separately with their round outcome); this is only the raw tally input.
#[derive(Debug, Clone, Copy)]
pub struct KillDetails {
    pub killer: u64,
    pub victim: u64,
    pub headshot: bool,
    pub teamkill: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum GrenadeKind {
    Flashbang,
    Smoke,
    HeGrenade,
    Molotov,
    Incendiary,
    Decoy,
}
