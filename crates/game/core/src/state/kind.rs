use strum::{Display, EnumIter};

/// Closed set of bee kinds.
///
/// Kinds only differ in their stat values; every bee runs the same combat
/// algorithm. The one exception is the [`BeeKind::Queen`], whose death
/// collapses the whole hive.
///
/// Variants are declared in display order, so [`strum::IntoEnumIterator`]
/// yields Queen, Worker, Drone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
pub enum BeeKind {
    /// Hive leader.
    Queen,
    Worker,
    Drone,
}

impl BeeKind {
    pub const fn is_leader(self) -> bool {
        matches!(self, BeeKind::Queen)
    }
}
