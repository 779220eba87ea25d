// src/app/state_getter.rs
//! World の状態をスナップショットにして、JSON で JS に渡すよ。

use std::sync::{Arc, Mutex};

use log::{debug, error};
use wasm_bindgen::JsValue;

use crate::world::World;

/// スナップショットを JSON 文字列にする (ロック無しで使える版)
pub fn snapshot_json(world: &World) -> Result<String, serde_json::Error> {
    serde_json::to_string(&world.snapshot())
}

/// `GameApp::get_state_json` の中身。
pub fn get_state_json(world_arc: &Arc<Mutex<World>>) -> Result<JsValue, JsValue> {
    let world = world_arc.lock().map_err(|e| {
        let error_msg = format!("Failed to lock world for getting state: {}", e);
        error!("{}", error_msg);
        JsValue::from_str(&error_msg)
    })?;

    match snapshot_json(&world) {
        Ok(json) => {
            debug!("state_getter: serialized snapshot ({} bytes)", json.len());
            Ok(JsValue::from_str(&json))
        }
        Err(e) => {
            let error_msg = format!("Failed to serialize state snapshot: {}", e);
            error!("{}", error_msg);
            Err(JsValue::from_str(&error_msg))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_json_has_the_fields_the_renderer_reads() {
        let world = World::default();
        let json = snapshot_json(&world).expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["stage"], 1);
        assert_eq!(value["complete"], false);
        assert_eq!(value["reset_count"], 0);
        assert_eq!(value["pieces"].as_array().map(|a| a.len()), Some(13));
        assert_eq!(value["pieces"][0]["piece"], "backbone", "ピースは snake_case の名前");
    }
}
