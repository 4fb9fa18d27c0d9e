#![cfg(target_arch = "wasm32")]
use glyphmotion_wasm::{abi_version, GlyphMotion};
use serde_json::json;
use serde_wasm_bindgen as swb;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use glyphmotion_core::Outputs;

wasm_bindgen_test_configure!(run_in_browser);

fn bezier() -> JsValue {
    swb::to_value(&[0.27, 1.06, 0.18, 1.0]).unwrap()
}

fn from_settings() -> JsValue {
    swb::to_value(&json!({ "wght": 800.0, "GRAD": -60.0 })).unwrap()
}

fn to_settings() -> JsValue {
    swb::to_value(&json!({ "wght": 500.0, "GRAD": 0.0 })).unwrap()
}

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn construct_with_defaults() {
    assert!(GlyphMotion::new(JsValue::UNDEFINED).is_ok());
}

#[wasm_bindgen_test]
fn fade_slide_emits_a_tween_request() {
    let mut eng = GlyphMotion::new(JsValue::NULL).unwrap();
    let id = eng
        .fade_slide("card", "in", bezier(), 350.0, None)
        .unwrap();

    let out: Outputs = swb::from_value(eng.update(0.0).unwrap()).unwrap();
    assert_eq!(out.tweens.len(), 1);
    assert_eq!(out.tweens[0].id.0, id);
    assert_eq!(out.tweens[0].options.easing, "cubic-bezier(0.27,1.06,0.18,1)");

    eng.tween_finished(id);
    let out: Outputs = swb::from_value(eng.update(16.0).unwrap()).unwrap();
    assert_eq!(out.events.len(), 1);
}

#[wasm_bindgen_test]
fn fade_slide_validates_arguments() {
    let mut eng = GlyphMotion::new(JsValue::NULL).unwrap();
    assert!(eng
        .fade_slide("card", "sideways", bezier(), 350.0, None)
        .is_err());
    let three = swb::to_value(&[0.27, 1.06, 0.18]).unwrap();
    assert!(eng.fade_slide("card", "in", three, 350.0, None).is_err());
}

#[wasm_bindgen_test]
fn morph_produces_style_changes() {
    let mut eng = GlyphMotion::new(JsValue::NULL).unwrap();
    eng.animate_font_variation("roundnum", bezier(), 100.0, from_settings(), to_settings())
        .unwrap();

    let out: Outputs = swb::from_value(eng.update(0.0).unwrap()).unwrap();
    assert_eq!(out.changes.len(), 1);
    assert_eq!(out.changes[0].target, "roundnum");
    assert_eq!(out.changes[0].style, r#""GRAD" -60, "wght" 800"#);

    let out: Outputs = swb::from_value(eng.update(120.0).unwrap()).unwrap();
    assert_eq!(out.changes[0].style, r#""GRAD" 0, "wght" 500"#);
}

#[wasm_bindgen_test]
fn cycle_requires_matching_target_count() {
    let mut eng = GlyphMotion::new(JsValue::NULL).unwrap();
    let pool = GlyphMotion::default_pool().unwrap();
    assert!(eng
        .start_cycle(vec!["only-one".into()], pool)
        .is_err());
}

#[wasm_bindgen_test]
fn select_next_returns_a_config() {
    let mut eng = GlyphMotion::new(JsValue::NULL).unwrap();
    let pool = GlyphMotion::default_pool().unwrap();
    let picked = eng.select_next(pool).unwrap();
    assert!(!picked.is_undefined());
}
