//! パズルのロジックを役割ごとに分けたシステムたち！

pub mod clock_system;
pub mod drag_system;
pub mod input_system;
pub mod progression_system;
pub mod reset_system;
pub mod scroll_system;
