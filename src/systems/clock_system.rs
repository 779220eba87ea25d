// src/systems/clock_system.rs
use crate::protocol::PuzzleEvent;
use crate::system::System;
use crate::world::World;

/// 経過時間を進めるだけのシステム。クリアしたら止まる (クリアタイムになる)。
#[derive(Debug, Default, Clone, Copy)]
pub struct ClockSystem;

impl System for ClockSystem {
    fn run(&mut self, world: &mut World, dt: f64, _events: &mut Vec<PuzzleEvent>) {
        if !world.level.status.is_complete() && dt.is_finite() && dt > 0.0 {
            world.level.elapsed += dt;
        }
    }
}
