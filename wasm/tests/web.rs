//! Browser tests for the exports that take JS values
//!
//! Run with `wasm-pack test --headless --chrome wasm`.

#![cfg(target_arch = "wasm32")]

use farm_assist_wasm::filter_image_types;
use js_sys::Array;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_filter_image_types() {
    let input = Array::new();
    input.push(&JsValue::from_str("image/jpeg"));
    input.push(&JsValue::from_str("text/plain"));
    input.push(&JsValue::from_f64(42.0));
    input.push(&JsValue::from_str("image/png"));

    let kept = filter_image_types(input);
    assert_eq!(kept.length(), 2);
    assert_eq!(kept.get(0).as_string().as_deref(), Some("image/jpeg"));
    assert_eq!(kept.get(1).as_string().as_deref(), Some("image/png"));
}
