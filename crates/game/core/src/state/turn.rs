/// Which side resolves the next turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
pub enum TurnOwner {
    #[default]
    Player,
    Hive,
}

impl TurnOwner {
    /// The side that acts after this one.
    pub const fn next(self) -> Self {
        match self {
            TurnOwner::Player => TurnOwner::Hive,
            TurnOwner::Hive => TurnOwner::Player,
        }
    }
}
