// src/systems/scroll_system.rs
use crate::logic::scroll::hold_tick;
use crate::protocol::PuzzleEvent;
use crate::system::System;
use crate::world::World;

/// 矢印を押しっぱなしの間、毎フレーム決まった量だけトレイを送るシステム。
#[derive(Debug, Default, Clone, Copy)]
pub struct ScrollHoldSystem;

impl System for ScrollHoldSystem {
    fn run(&mut self, world: &mut World, _dt: f64, _events: &mut Vec<PuzzleEvent>) {
        let per_tick = world.config.hold_scroll_per_tick;
        let wrap_width = world.tray.wrap_width();
        hold_tick(&mut world.scroll, per_tick, wrap_width);
    }
}
