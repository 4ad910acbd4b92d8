//! Browser tests for the exported `StickyGrid`
//!
//! Run with: wasm-pack test --headless --firefox
#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

use js_sys::{Function, JSON};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

use stickygrid::StickyGrid;

wasm_bindgen_test_configure!(run_in_browser);

const PROPS: &str = r#"{
    "height": 300, "width": 400, "numberOfStickiedColumns": 1,
    "rowCount": 50, "columnCount": 6, "columnWidths": [100, 80, 80],
    "rowHeight": 25, "itemData": { "columnNames": ["a", "b", "c"] }
}"#;

fn renderer(kind: &str) -> Function {
    Function::new_with_args(
        "row, column, data, style",
        &format!("return '<span class=\"{kind}\">' + row + ':' + column + '</span>';"),
    )
}

fn mounted(rows: std::ops::RangeInclusive<u32>, columns: std::ops::RangeInclusive<u32>) -> JsValue {
    let cells: Vec<String> = rows
        .flat_map(|r| {
            columns
                .clone()
                .map(move |c| format!(r#"{{"rowIndex":{r},"columnIndex":{c}}}"#))
        })
        .collect();
    JSON::parse(&format!("[{}]", cells.join(","))).unwrap()
}

fn container() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

fn grid() -> StickyGrid {
    StickyGrid::new(
        JSON::parse(PROPS).unwrap(),
        renderer("header"),
        renderer("cell"),
    )
    .unwrap()
}

#[wasm_bindgen_test]
fn test_render_into_layers_bands() {
    let mut grid = grid();
    let el = container();
    grid.render_into(el.clone(), mounted(0..=3, 0..=2), 1250.0)
        .unwrap();

    // top band + 3 sticky column cells + 6 pass-through cells
    assert_eq!(el.child_element_count(), 10);
    let style = el.get_attribute("style").unwrap();
    assert!(style.contains("height: 1310px"));
    let markup = el.inner_html();
    assert_eq!(markup.matches(r#"class="header""#).count(), 5);
    assert_eq!(markup.matches(r#"class="cell""#).count(), 9);
    assert!(el.query_selector(r#"[data-key="0:0"]"#).unwrap().is_some());
}

#[wasm_bindgen_test]
fn test_engine_inline_style_survives_render() {
    let mut grid = grid();
    let el = container();
    el.set_attribute("style", "pointer-events: none; width: 100%; height: 10px")
        .unwrap();
    grid.render_into(el.clone(), mounted(0..=2, 0..=1), 500.0).unwrap();
    grid.render_into(el.clone(), mounted(0..=2, 0..=1), 500.0).unwrap();

    let style = el.get_attribute("style").unwrap();
    assert!(style.starts_with("pointer-events: none; width: 100%; height: 560px"));
    assert_eq!(style.matches("min-width").count(), 1);
    assert!(!style.contains("10px"));
}

#[wasm_bindgen_test]
fn test_compose_html_keeps_engine_style() {
    let mut grid = grid();
    let html = grid
        .compose_html(mounted(1..=1, 0..=0), 500.0, Some("position: relative; width: 100%".into()))
        .unwrap();
    assert!(html.starts_with(r#"<div style="position: relative; width: 100%; height: 560px"#));
}

#[wasm_bindgen_test]
fn test_renderer_identity_drives_cache() {
    let mut grid = grid();
    let _ = grid.compose_html(mounted(1..=2, 0..=1), 500.0, None).unwrap();
    let _ = grid.compose_html(mounted(5..=6, 0..=1), 500.0, None).unwrap();
    assert_eq!(grid.cache_hits(), 1.0);

    grid.set_renderers(renderer("header"), renderer("cell"));
    let _ = grid.compose_html(mounted(5..=6, 0..=1), 500.0, None).unwrap();
    assert_eq!(grid.cache_hits(), 1.0);
}

#[wasm_bindgen_test]
fn test_rejects_two_sticky_columns() {
    let mut grid = grid();
    assert!(grid.set_sticky_columns(2).is_err());
    assert!(grid.set_sticky_columns(0).is_ok());
}

#[wasm_bindgen_test]
fn test_renderer_exception_surfaces() {
    let throwing = Function::new_with_args("", "throw new Error('boom');");
    let mut grid = StickyGrid::new(JSON::parse(PROPS).unwrap(), renderer("header"), throwing)
        .unwrap();
    let err = grid.compose_html(mounted(1..=2, 0..=1), 100.0, None).unwrap_err();
    assert!(err.as_string().unwrap().contains("boom"));
}
