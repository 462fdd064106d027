//! Level layout by rejection sampling
//!
//! Both spawners draw candidates from a seeded RNG and retry a bounded number
//! of times. Running out of attempts is not an error: obstacle generation
//! keeps what it placed, fruit spawning keeps its last candidate.

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::difficulty::DifficultyConfig;
use super::geometry::{Rect, is_placeable, overlaps};
use super::state::{Axis, FRUIT_KINDS, Fruit, FruitKind, Obstacle, ObstacleKind, Player};
use crate::tuning::Tuning;

/// Default candidate budget for a whole obstacle layout
pub const OBSTACLE_MAX_ATTEMPTS: u32 = 100;
/// Default candidate budget for one fruit
pub const FRUIT_MAX_ATTEMPTS: u32 = 50;

/// Uniform integer point inside an inclusive x/y range
fn sample_point<R: Rng + ?Sized>(rng: &mut R, (x0, x1): (i32, i32), (y0, y1): (i32, i32)) -> Vec2 {
    let x = rng.random_range(x0..=x1);
    let y = rng.random_range(y0..=y1);
    Vec2::new(x as f32, y as f32)
}

/// Lay out the obstacle population for a run
///
/// Candidates that overlap the padded player spawn or an already placed
/// obstacle are rejected. Stops at `config.obstacle_count` or when the
/// attempt budget runs out, whichever comes first. Every obstacle moves,
/// on a random axis, within `±patrol_range` of where it was placed.
pub fn generate_obstacles<R: Rng + ?Sized>(
    config: &DifficultyConfig,
    player: &Player,
    tuning: &Tuning,
    rng: &mut R,
    next_id: &mut u32,
) -> Vec<Obstacle> {
    let mut obstacles: Vec<Obstacle> = Vec::with_capacity(config.obstacle_count);
    let size = tuning.obstacle_size;
    let player_zone = player.rect().inflate(tuning.player_start_clearance);
    let range_x = tuning.obstacle_spawn_x();
    let range_y = tuning.obstacle_spawn_y();

    let mut attempts = 0;
    while obstacles.len() < config.obstacle_count && attempts < tuning.obstacle_max_attempts {
        attempts += 1;

        let pos = sample_point(rng, range_x, range_y);
        let candidate = Rect {
            pos,
            size: Vec2::splat(size),
        };

        if overlaps(&candidate, &player_zone) {
            continue;
        }
        if !is_placeable(&candidate, &obstacles, &[]) {
            continue;
        }

        let axis = if rng.random_bool(0.5) {
            Axis::Horizontal
        } else {
            Axis::Vertical
        };
        let kind = config
            .obstacle_kinds
            .choose(rng)
            .copied()
            .unwrap_or(ObstacleKind::Meteor);
        let window = match axis {
            Axis::Horizontal => patrol_window(pos.x, tuning.arena_width, tuning),
            Axis::Vertical => patrol_window(pos.y, tuning.arena_height, tuning),
        };

        let id = *next_id;
        *next_id += 1;
        log::debug!(
            "Placed {} #{} at ({}, {}) {:?}",
            kind.name(),
            id,
            pos.x,
            pos.y,
            axis
        );
        obstacles.push(Obstacle::new(
            id,
            pos,
            size,
            kind,
            axis,
            config.obstacle_speed,
            window,
        ));
    }

    if obstacles.len() < config.obstacle_count {
        log::warn!(
            "Placed only {}/{} obstacles after {} attempts",
            obstacles.len(),
            config.obstacle_count,
            attempts
        );
    } else {
        log::info!("Generated {} obstacles", obstacles.len());
    }

    obstacles
}

/// Patrol bounds around `start`, kept `patrol_inset` away from both arena edges
fn patrol_window(start: f32, extent: f32, tuning: &Tuning) -> (f32, f32) {
    let lo = (start - tuning.patrol_range).max(tuning.patrol_inset);
    let hi = (start + tuning.patrol_range).min(extent - tuning.obstacle_size - tuning.patrol_inset);
    (lo, hi)
}

/// Place a new fruit away from the obstacles and not right next to the player
///
/// Falls back to the last sampled position if no candidate passes.
pub fn spawn_fruit<R: Rng + ?Sized>(
    player: &Player,
    obstacles: &[Obstacle],
    tuning: &Tuning,
    rng: &mut R,
) -> Fruit {
    let kind = FRUIT_KINDS.choose(rng).copied().unwrap_or(FruitKind::Apple);
    let size = Vec2::splat(tuning.fruit_size);
    let range_x = tuning.fruit_spawn_x();
    let range_y = tuning.fruit_spawn_y();

    let mut pos = Vec2::new(range_x.0 as f32, range_y.0 as f32);
    let mut valid = false;
    let mut attempts = 0;
    while !valid && attempts < tuning.fruit_max_attempts {
        attempts += 1;
        pos = sample_point(rng, range_x, range_y);

        let far_enough = player.pos.distance(pos) > tuning.fruit_min_player_distance;
        valid = far_enough && is_placeable(&Rect { pos, size }, obstacles, &[]);
    }

    if valid {
        log::info!("Spawned {} at ({}, {})", kind.name(), pos.x, pos.y);
    } else {
        log::warn!(
            "No clear spot for {} after {} attempts, using ({}, {})",
            kind.name(),
            attempts,
            pos.x,
            pos.y
        );
    }

    Fruit {
        pos,
        size,
        kind,
        health_value: tuning.health_per_fruit,
    }
}
