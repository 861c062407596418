/// Two-state lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Running,
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunState {
    pub score: u32,
    pub lives: u32,
    pub night: bool,
    pub phase: Phase,
}

impl RunState {
    pub fn new(lives: u32) -> Self {
        Self {
            score: 0,
            lives,
            night: false,
            phase: Phase::Running,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Takes one life. Returns `true` when that was the last one, in which
    /// case the run is over.
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.phase = Phase::GameOver;
            true
        } else {
            false
        }
    }

    /// Flips between day and night when the score has moved into a new
    /// multiple of ten since `previous_score`.
    pub fn update_day_night(&mut self, previous_score: u32) -> bool {
        let crossed = self.score > 0 && self.score / 10 != previous_score / 10;
        if crossed {
            self.night = !self.night;
        }
        crossed
    }
}
