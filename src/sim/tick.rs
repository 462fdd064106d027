//! Fixed timestep simulation tick
//!
//! Advances a run by one step: input, arena clamp, obstacle rollback, countdown,
//! obstacle patrol, fruit pickup, then win/loss. Outside `Playing` it does nothing.

use glam::Vec2;

use super::geometry::overlaps;
use super::phase::{GamePhase, PhaseEvent};
use super::snapshot::format_time;
use super::state::{Facing, GameState, Obstacle, Player};
use crate::consts::{MAX_TICK_DELTA_MS, MS_PER_SECOND};
use crate::tuning::Tuning;

/// Directional keys held during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Advance the game state by one tick; `dt_ms` is the wall-clock time since the last one
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.time_ticks += 1;

    let arena = state.arena();
    move_player(
        &mut state.player,
        input,
        &state.obstacles,
        &state.tuning,
        arena,
    );
    update_timer(state, sanitize_delta(dt_ms));

    for obstacle in &mut state.obstacles {
        obstacle.advance();
    }

    collect_fruit(state);
    evaluate_phase(state);
}

/// Treat garbage deltas as zero and cap long stalls
pub fn sanitize_delta(dt_ms: f32) -> f32 {
    if !dt_ms.is_finite() || dt_ms < 0.0 {
        0.0
    } else {
        dt_ms.min(MAX_TICK_DELTA_MS)
    }
}

/// Input, arena clamp and all-or-nothing rollback against obstacles
fn move_player(
    player: &mut Player,
    input: &TickInput,
    obstacles: &[Obstacle],
    tuning: &Tuning,
    arena: Vec2,
) {
    let previous = player.pos;

    apply_input(player, input, tuning);
    player.pos = player.pos.clamp(Vec2::ZERO, arena - player.size);

    let rect = player.rect();
    if obstacles.iter().any(|o| overlaps(&rect, &o.rect())) {
        player.pos = previous;
        player.stop();
    }
}

/// Horizontal keys win over vertical ones. Opposite keys both apply, so they
/// cancel out, and the later one (right, down) decides the facing.
fn apply_input(player: &mut Player, input: &TickInput, tuning: &Tuning) {
    let mut delta = Vec2::ZERO;
    let mut facing = player.facing;
    let mut moved = false;

    if input.left || input.right {
        if input.left {
            delta.x -= player.speed;
            facing = Facing::Left;
            moved = true;
        }
        if input.right {
            delta.x += player.speed;
            facing = Facing::Right;
            moved = true;
        }
    } else {
        if input.up {
            delta.y -= player.speed;
            facing = Facing::Up;
            moved = true;
        }
        if input.down {
            delta.y += player.speed;
            facing = Facing::Down;
            moved = true;
        }
    }

    player.pos += delta;

    if moved {
        player.facing = facing;
        player.moving = true;
        player.anim_distance += player.speed;
        if player.anim_distance >= tuning.anim_step {
            player.anim_frame = (player.anim_frame + 1) % tuning.anim_frames;
            player.anim_distance = 0.0;
        }
    } else {
        player.stop();
    }
}

/// One countdown second per 1000 ms accumulated; the remainder carries over
fn update_timer(state: &mut GameState, dt_ms: f32) {
    state.second_accumulator += dt_ms;
    while state.second_accumulator >= MS_PER_SECOND {
        state.time_remaining -= 1.0;
        state.second_accumulator -= MS_PER_SECOND;
    }
    state.time_remaining = state.time_remaining.max(0.0);
}

fn collect_fruit(state: &mut GameState) {
    let Some(fruit) = state.fruit.as_ref() else {
        return;
    };
    if !overlaps(&state.player.rect(), &fruit.rect()) {
        return;
    }
    let Some(config) = state.config() else {
        return;
    };
    let (kind, value) = (fruit.kind, fruit.health_value);
    let max_health = state.tuning.max_health;

    let before = state.health;
    state.health = state.health.saturating_add(value).min(max_health);
    state.fruits_collected += 1;
    state.time_remaining += config.time_bonus;

    log::info!(
        "Collected {} (health {}% -> {}%, +{}s, {} left)",
        kind.name(),
        before,
        state.health,
        config.time_bonus,
        format_time(state.time_remaining)
    );

    if state.health < max_health {
        state.respawn_fruit();
    } else {
        state.fruit = None;
    }
}

/// Win is checked before loss
fn evaluate_phase(state: &mut GameState) {
    let event = if state.health >= state.tuning.max_health {
        PhaseEvent::HealthFull
    } else if state.time_remaining <= 0.0 {
        PhaseEvent::TimeUp
    } else {
        return;
    };
    let Some(next) = state.phase.transition(event) else {
        return;
    };
    state.phase = next;

    match next {
        GamePhase::Won => {
            let taken = state
                .config()
                .map(|c| c.initial_time - state.time_remaining)
                .unwrap_or(0.0);
            log::info!("Victory! Completed in {}", format_time(taken));
        }
        GamePhase::Lost => {
            log::info!(
                "Time up at {}% health ({} of {} fruits)",
                state.health,
                state.fruits_collected,
                state.tuning.fruits_to_win
            );
        }
        _ => {}
    }
}
