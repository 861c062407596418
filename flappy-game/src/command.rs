/// The discrete inputs the game understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Only accepted while running.
    Jump,
    /// Only accepted after game over.
    Restart,
}
