// src/system.rs

use crate::protocol::PuzzleEvent;
use crate::world::World;

/// System（システム）トレイトだよ！
///
/// 毎フレーム (tick の最後) に呼ばれて、World の状態を見て更新するロジックを
/// ひとまとめにしたもの。入力イベントに反応する処理は input_system が受け持つので、
/// ここに来るのは「時間が進んだら起きること」と「状態を見て判定すること」。
///
/// 何か起きたら `events` に積んでおくと、ホストに届くよ。
pub trait System {
    fn run(&mut self, world: &mut World, dt: f64, events: &mut Vec<PuzzleEvent>);
}
