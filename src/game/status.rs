/// Messages for the status display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Nothing played yet
    Welcome,
    /// Sequence is being replayed
    Observe,
    /// Player may start entering the sequence
    YourTurn,
    /// The given level was just completed
    LevelComplete(u32),
    /// Game ended at the given level
    GameOver(u32),
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Welcome => write!(f, "Press start to play"),
            Status::Observe => write!(f, "Observe the sequence!"),
            Status::YourTurn => write!(f, "Your turn!"),
            Status::LevelComplete(level) => write!(f, "Level {} complete!", level),
            Status::GameOver(level) => {
                write!(f, "Game over! You reached level {}. Try again!", level)
            }
        }
    }
}
