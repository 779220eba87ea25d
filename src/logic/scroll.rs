// src/logic/scroll.rs
//! トレイのスクロール計算だよ！🎞️
//!
//! - ラップモード (`wrap_width > 1`): 端まで行くと反対側につながる。オフセットは常に `[0, wrap_width)`。
//! - クランプモード (`wrap_width <= 1`): ピース1個だけのステージ。オフセットは常に 0。
//!
//! 入力はもう画面座標として検証済みなので、エラーになるケースはないよ。

use log::debug;

use crate::components::scroll_state::{ScrollMode, ScrollState};

/// 矢印の向き
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

impl ScrollDirection {
    fn sign(self) -> i32 {
        match self {
            ScrollDirection::Left => -1,
            ScrollDirection::Right => 1,
        }
    }
}

/// オフセットに `delta` を足して、ラップ or クランプした結果を返す。純粋な関数！
pub fn scroll_by(offset: i32, delta: i32, wrap_width: i32) -> i32 {
    let moved = offset.saturating_add(delta);
    if wrap_width > 1 {
        // ((x mod w) + w) mod w と同じ。負の数でも必ず 0 以上になる。
        moved.rem_euclid(wrap_width)
    } else {
        moved.clamp(0, 0)
    }
}

/// 矢印を1回クリックした分だけ動かす。動いたら true。
pub fn step(state: &mut ScrollState, direction: ScrollDirection, step: i32, wrap_width: i32) -> bool {
    let before = state.offset;
    state.offset = scroll_by(state.offset, direction.sign() * step, wrap_width);
    state.offset != before
}

/// 矢印を押した瞬間。1ステップ動かして、押しっぱなしモードに入る。
pub fn press_arrow(state: &mut ScrollState, direction: ScrollDirection, step_size: i32, wrap_width: i32) {
    step(state, direction, step_size, wrap_width);
    state.mode = match direction {
        ScrollDirection::Left => ScrollMode::ButtonScrollLeft,
        ScrollDirection::Right => ScrollMode::ButtonScrollRight,
    };
    state.skip_next_hold = true;
    debug!("scroll: arrow {:?} pressed, offset = {}", direction, state.offset);
}

/// 毎フレーム呼ぶ。矢印が押しっぱなしなら一定量だけ進める。
pub fn hold_tick(state: &mut ScrollState, per_tick: i32, wrap_width: i32) {
    let direction = match state.mode {
        ScrollMode::ButtonScrollLeft => ScrollDirection::Left,
        ScrollMode::ButtonScrollRight => ScrollDirection::Right,
        _ => return,
    };
    if state.skip_next_hold {
        state.skip_next_hold = false;
        return;
    }
    step(state, direction, per_tick, wrap_width);
}

/// トレイ上でスワイプ開始。押した X と今のオフセットを覚える。
pub fn begin_swipe(state: &mut ScrollState, pointer_x: f32) {
    state.mode = ScrollMode::Swiping {
        anchor_x: pointer_x.round() as i32,
        offset_at_start: state.offset,
    };
}

/// スワイプ中の移動。左になぞると右側のピースが見えてくる (向きが逆)。
pub fn update_swipe(state: &mut ScrollState, pointer_x: f32, wrap_width: i32) {
    if let ScrollMode::Swiping { anchor_x, offset_at_start } = state.mode {
        let swipe_distance = anchor_x - pointer_x.round() as i32;
        state.offset = scroll_by(offset_at_start, swipe_distance, wrap_width);
    }
}

/// ボタンやスワイプを離した。オフセットはそのまま止まる。
pub fn release(state: &mut ScrollState) {
    state.mode = ScrollMode::Idle;
    state.skip_next_hold = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: i32 = 189; // 3ピース分

    #[test]
    fn wrap_mode_stays_in_range() {
        let deltas = [40, -40, -500, 1000, 6, -6, 188, -189, 0, i32::MAX / 4, -(i32::MAX / 4)];
        let mut offset = 0;
        for delta in deltas {
            offset = scroll_by(offset, delta, WIDTH);
            assert!((0..WIDTH).contains(&offset), "offset {} が範囲外！ (delta {})", offset, delta);
        }
    }

    #[test]
    fn wrap_mode_goes_around() {
        assert_eq!(scroll_by(0, -40, WIDTH), 149, "左に行くと右端につながる");
        assert_eq!(scroll_by(180, 40, WIDTH), 31);
        assert_eq!(scroll_by(0, WIDTH, WIDTH), 0, "ちょうど1周で元通り");
    }

    #[test]
    fn clamp_mode_is_always_zero() {
        for delta in [-100, -1, 0, 1, 100] {
            assert_eq!(scroll_by(0, delta, 1), 0);
            assert_eq!(scroll_by(0, delta, 0), 0);
        }
    }

    #[test]
    fn step_reports_no_op_at_clamped_boundary() {
        let mut state = ScrollState::default();
        assert!(!step(&mut state, ScrollDirection::Right, 40, 1), "クランプ中は動かない");
        assert!(step(&mut state, ScrollDirection::Right, 40, WIDTH));
        assert_eq!(state.offset, 40);
    }

    #[test]
    fn holding_an_arrow_scrolls_every_tick() {
        let mut state = ScrollState::default();
        press_arrow(&mut state, ScrollDirection::Right, 40, WIDTH);
        assert_eq!(state.offset, 40);
        assert_eq!(state.mode, ScrollMode::ButtonScrollRight);

        // 押したフレームの分はもう動いてるので、最初の1回は何もしない
        hold_tick(&mut state, 6, WIDTH);
        assert_eq!(state.offset, 40, "押した瞬間は1ステップだけ");

        for _ in 0..3 {
            hold_tick(&mut state, 6, WIDTH);
        }
        assert_eq!(state.offset, 58);

        release(&mut state);
        hold_tick(&mut state, 6, WIDTH);
        assert_eq!(state.offset, 58, "離したら止まる");
    }

    #[test]
    fn swipe_is_inverted_and_relative_to_start() {
        let mut state = ScrollState { offset: 20, ..ScrollState::default() };
        begin_swipe(&mut state, 150.0);

        // 左に 50px なぞる → オフセット +50
        update_swipe(&mut state, 100.0, WIDTH);
        assert_eq!(state.offset, 70);
        // 右に戻して開始点より 30px 右 → 20 - 30 = -10 → ラップして 179
        update_swipe(&mut state, 180.0, WIDTH);
        assert_eq!(state.offset, 179);

        release(&mut state);
        assert_eq!(state.offset, 179, "離したらそこで止まる");
        update_swipe(&mut state, 0.0, WIDTH);
        assert_eq!(state.offset, 179, "スワイプ中じゃなければ何も起きない");
    }
}
