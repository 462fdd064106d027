//! Game state and core simulation types
//!
//! One `GameState` owns the whole run: phase, counters, entities and the
//! seeded RNG. Nothing in here touches rendering or the platform.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::{Difficulty, DifficultyConfig};
use super::geometry::Rect;
use super::phase::{GamePhase, PhaseEvent};
use super::spawner::{generate_obstacles, spawn_fruit};
use crate::tuning::{Tuning, TuningError};

/// Direction the player sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Units per tick
    pub speed: f32,
    pub facing: Facing,
    pub moving: bool,
    /// Walk cycle frame, 0 is the neutral pose
    pub anim_frame: u8,
    /// Distance walked since the last frame change
    pub anim_distance: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.player_start(),
            size: Vec2::splat(tuning.player_size),
            speed: tuning.player_speed,
            facing: Facing::Right,
            moving: false,
            anim_frame: 0,
            anim_distance: 0.0,
        }
    }

    /// Put the player back at the spawn point, facing right and idle
    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::new(tuning);
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Return to the neutral pose
    pub fn stop(&mut self) {
        self.moving = false;
        self.anim_frame = 0;
    }
}

/// Axis an obstacle patrols along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Meteor,
    Cheese,
    Lightning,
}

impl ObstacleKind {
    pub fn name(&self) -> &'static str {
        match self {
            ObstacleKind::Meteor => "meteor",
            ObstacleKind::Cheese => "cheese",
            ObstacleKind::Lightning => "lightning",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            ObstacleKind::Meteor => "☄️",
            ObstacleKind::Cheese => "🧀",
            ObstacleKind::Lightning => "⚡",
        }
    }
}

/// A patrolling hazard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: ObstacleKind,
    pub axis: Axis,
    /// Units per tick
    pub speed: f32,
    /// +1.0 or -1.0 along `axis`
    pub dir: f32,
    /// Patrol window along `axis`
    pub patrol_min: f32,
    pub patrol_max: f32,
    pub moving: bool,
}

impl Obstacle {
    pub fn new(
        id: u32,
        pos: Vec2,
        size: f32,
        kind: ObstacleKind,
        axis: Axis,
        speed: f32,
        (patrol_min, patrol_max): (f32, f32),
    ) -> Self {
        Self {
            id,
            pos,
            size: Vec2::splat(size),
            kind,
            axis,
            speed,
            dir: 1.0,
            patrol_min,
            patrol_max,
            moving: true,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Coordinate along the patrol axis
    pub fn axis_position(&self) -> f32 {
        match self.axis {
            Axis::Horizontal => self.pos.x,
            Axis::Vertical => self.pos.y,
        }
    }

    fn set_axis_position(&mut self, value: f32) {
        match self.axis {
            Axis::Horizontal => self.pos.x = value,
            Axis::Vertical => self.pos.y = value,
        }
    }

    /// Move one tick along the patrol axis, bouncing off the window ends
    pub fn advance(&mut self) {
        if !self.moving {
            return;
        }
        let next = self.axis_position() + self.speed * self.dir;
        if next <= self.patrol_min {
            self.set_axis_position(self.patrol_min);
            self.dir = 1.0;
        } else if next >= self.patrol_max {
            self.set_axis_position(self.patrol_max);
            self.dir = -1.0;
        } else {
            self.set_axis_position(next);
        }
    }
}

/// Fruit types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FruitKind {
    Apple,
    Banana,
    Orange,
    Mango,
    Pineapple,
}

/// Every fruit the spawner can pick from
pub const FRUIT_KINDS: [FruitKind; 5] = [
    FruitKind::Apple,
    FruitKind::Banana,
    FruitKind::Orange,
    FruitKind::Mango,
    FruitKind::Pineapple,
];

impl FruitKind {
    pub fn name(&self) -> &'static str {
        match self {
            FruitKind::Apple => "apple",
            FruitKind::Banana => "banana",
            FruitKind::Orange => "orange",
            FruitKind::Mango => "mango",
            FruitKind::Pineapple => "pineapple",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            FruitKind::Apple => "🍎",
            FruitKind::Banana => "🍌",
            FruitKind::Orange => "🍊",
            FruitKind::Mango => "🥭",
            FruitKind::Pineapple => "🍍",
        }
    }
}

/// The collectible currently on the field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fruit {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: FruitKind,
    pub health_value: u32,
}

impl Fruit {
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Complete run state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Chosen preset, `None` while selecting
    pub difficulty: Option<Difficulty>,
    pub health: u32,
    pub fruits_collected: u32,
    /// Seconds left on the countdown
    pub time_remaining: f32,
    /// Milliseconds accumulated toward the next countdown second
    pub second_accumulator: f32,
    /// Simulation ticks run since the current run started
    pub time_ticks: u64,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub fruit: Option<Fruit>,
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Tuning::default())
    }

    /// Create a game state with custom tuning, rejecting values the
    /// spawner and tick cannot work with
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning))
    }

    fn build(seed: u64, tuning: Tuning) -> Self {
        let player = Player::new(&tuning);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            phase: GamePhase::SelectingDifficulty,
            difficulty: None,
            health: 0,
            fruits_collected: 0,
            time_remaining: 0.0,
            second_accumulator: 0.0,
            time_ticks: 0,
            player,
            obstacles: Vec::new(),
            fruit: None,
            next_id: 1,
        }
    }

    /// Preset of the current run
    pub fn config(&self) -> Option<&'static DifficultyConfig> {
        self.difficulty.map(Difficulty::config)
    }

    /// Arena extent as a vector
    pub fn arena(&self) -> Vec2 {
        Vec2::new(self.tuning.arena_width, self.tuning.arena_height)
    }

    /// Start a run on `difficulty`. Ignored unless a difficulty is being selected.
    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> bool {
        let Some(next) = self.phase.transition(PhaseEvent::DifficultySelected) else {
            log::debug!("Ignoring difficulty selection in {:?}", self.phase);
            return false;
        };
        log::info!("Selected {} difficulty", difficulty.name());
        self.difficulty = Some(difficulty);
        self.phase = next;
        self.start_run(difficulty.config());
        true
    }

    /// Go back to difficulty selection after a finished run
    pub fn restart(&mut self) -> bool {
        let Some(next) = self.phase.transition(PhaseEvent::Restart) else {
            log::debug!("Ignoring restart in {:?}", self.phase);
            return false;
        };
        log::info!("Returning to difficulty select");
        self.phase = next;
        self.difficulty = None;
        self.obstacles.clear();
        self.fruit = None;
        true
    }

    /// Reset counters and entities, then lay out a fresh level
    fn start_run(&mut self, config: &DifficultyConfig) {
        self.health = 0;
        self.fruits_collected = 0;
        self.time_remaining = config.initial_time;
        self.second_accumulator = 0.0;
        self.time_ticks = 0;
        self.player.reset(&self.tuning);

        self.obstacles = generate_obstacles(
            config,
            &self.player,
            &self.tuning,
            &mut self.rng,
            &mut self.next_id,
        );
        self.respawn_fruit();

        log::info!(
            "Run started: obstacles={} speed={} time={}s bonus=+{}s",
            self.obstacles.len(),
            config.obstacle_speed,
            config.initial_time,
            config.time_bonus
        );
    }

    /// Replace the current fruit with a freshly spawned one
    pub fn respawn_fruit(&mut self) {
        let fruit = spawn_fruit(&self.player, &self.obstacles, &self.tuning, &mut self.rng);
        self.fruit = Some(fruit);
    }
}
