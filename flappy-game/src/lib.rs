use glam::ivec2;
use rand::{rngs::SmallRng, SeedableRng};

use crate::{
    bird::Bird,
    bounding_box::BoundingBox,
    cloud::Cloud,
    command::Command,
    config::GameConfig,
    obstacle::Obstacle,
    run_state::RunState,
    snapshot::{BirdView, ObstacleView, Snapshot},
};

pub mod bird;
pub mod bounding_box;
pub mod cloud;
pub mod command;
pub mod config;
pub mod obstacle;
pub mod run_state;
pub mod snapshot;
pub mod ticker;

/// What happened during one call to [`GameState::advance`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Obstacles recycled this tick, each worth one point.
    pub points: u32,
    pub life_lost: bool,
    pub game_over: bool,
    pub night_toggled: bool,
}

pub struct GameState {
    pub config: GameConfig,
    pub bird: Bird,
    pub obstacles: [Obstacle; 2],
    pub obstacle_speed: i32,
    pub clouds: Vec<Cloud>,
    pub run: RunState,
    rng: SmallRng,
}

impl GameState {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let clouds = (0..config.cloud_count)
            .map(|_| Cloud::scattered(&mut rng, &config))
            .collect();

        let [first, second] = config.obstacle_start;
        Self {
            bird: Bird::new(&config),
            obstacles: [
                Obstacle::new(first, config.obstacle_width),
                Obstacle::new(second, config.obstacle_width),
            ],
            obstacle_speed: config.obstacle_speed,
            clouds,
            run: RunState::new(config.lives),
            rng,
            config,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.run.is_game_over()
    }

    /// Runs one fixed timestep. Does nothing once the game is over.
    pub fn advance(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if self.is_game_over() {
            return outcome;
        }
        let previous_score = self.run.score;
        let previous_box = self.bird.bounding_box();

        self.bird.animate();
        self.bird.update(self.config.gravity);

        for obstacle in &mut self.obstacles {
            obstacle.scroll(self.obstacle_speed);
        }
        for obstacle in &mut self.obstacles {
            if obstacle.recycle(self.config.screen_width) {
                self.run.score += 1;
                outcome.points += 1;
            }
        }

        for cloud in &mut self.clouds {
            cloud.update(&mut self.rng, &self.config);
        }

        if self.collides(&previous_box) {
            outcome.life_lost = true;
            if self.run.lose_life() {
                outcome.game_over = true;
                log::debug!("out of lives with score {}", self.run.score);
            } else {
                self.bird.respawn();
                log::debug!("life lost, {} remaining", self.run.lives);
            }
        }

        outcome.night_toggled = self.run.update_day_night(previous_score);

        outcome
    }

    /// Boundaries are checked against everything the bird swept through
    /// this tick, obstacles against where it ended up. A bird that starts a
    /// tick inside the playfield gets the same answer as testing only its end
    /// position; the sweep only matters when it starts on a boundary.
    fn collides(&self, previous_box: &BoundingBox) -> bool {
        let bird = self.bird.bounding_box();
        let top = bird.top().min(previous_box.top());
        let bottom = bird.bottom().max(previous_box.bottom());
        if top <= 0 || bottom >= self.config.ground_top() {
            return true;
        }
        self.obstacles
            .iter()
            .any(|obstacle| obstacle.collides_with(&bird, &self.config))
    }

    /// Returns whether the jump was accepted.
    pub fn jump(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.bird.jump(self.config.jump_velocity);
        true
    }

    /// Starts a new run after game over. Clouds keep drifting where they are.
    /// Returns whether the restart was accepted.
    pub fn restart(&mut self) -> bool {
        if !self.is_game_over() {
            return false;
        }

        let width = self.config.screen_width;
        self.bird.reset();
        self.obstacles = [
            Obstacle::new(width, self.config.obstacle_width),
            Obstacle::new(width + self.config.obstacle_spacing, self.config.obstacle_width),
        ];
        self.obstacle_speed = self.config.obstacle_speed;
        self.run = RunState::new(self.config.lives);
        log::debug!("restarted");
        true
    }

    pub fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Jump => self.jump(),
            Command::Restart => self.restart(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let config = &self.config;
        let ground = BoundingBox::new(
            ivec2(0, config.ground_top()),
            ivec2(config.screen_width, config.screen_height),
        );
        let obstacles = self.obstacles.map(|obstacle| ObstacleView {
            top: obstacle.top_pipe(config),
            bottom: obstacle.bottom_pipe(config),
        });

        Snapshot {
            screen_size: ivec2(config.screen_width, config.screen_height),
            night: self.run.night,
            clouds: self
                .clouds
                .iter()
                .map(|cloud| cloud.bounding_box(config))
                .collect(),
            ground,
            obstacles,
            bird: BirdView {
                bounding_box: self.bird.bounding_box(),
                frame: self.bird.frame,
            },
            score: self.run.score,
            lives: self.run.lives,
            game_over: self.is_game_over(),
        }
    }
}
