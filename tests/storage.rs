//! In-browser persistence tests.
//!
//! Run with `wasm-pack test --headless --chrome` (or `--firefox`); they
//! exercise the keyval layer against the browser's real IndexedDB.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use simple_checklist::models::{Task, TaskList};
use simple_checklist::utils::storage;

wasm_bindgen_test_configure!(run_in_browser);

fn sample(items: &[(&str, bool)]) -> TaskList {
    TaskList {
        tasks: items
            .iter()
            .map(|(text, done)| Task {
                text: text.to_string(),
                done: *done,
            })
            .collect(),
    }
}

#[wasm_bindgen_test]
async fn missing_key_reads_as_none() {
    let value = storage::get("never-written").await.expect("storage available");
    assert!(value.is_none());
}

#[wasm_bindgen_test]
async fn saved_tasks_read_back_equal() {
    let tasks = sample(&[("Buy milk", false), ("Call Bob", true)]);
    storage::save_tasks(&tasks).await.expect("save");
    let loaded = storage::load_tasks().await.expect("load").expect("present");
    assert_eq!(loaded, tasks);
}

#[wasm_bindgen_test]
async fn second_save_fully_overwrites_first() {
    let first = sample(&[("Buy milk", false)]);
    let second = sample(&[("Call Bob", true), ("Water plants", false)]);
    storage::save_tasks(&first).await.expect("save v1");
    storage::save_tasks(&second).await.expect("save v2");
    let loaded = storage::load_tasks().await.expect("load").expect("present");
    assert_eq!(loaded, second);
}

#[wasm_bindgen_test]
async fn repeated_reads_return_the_same_value() {
    let tasks = sample(&[("Buy milk", true)]);
    storage::save_tasks(&tasks).await.expect("save");
    let first = storage::load_tasks().await.expect("load").expect("present");
    let second = storage::load_tasks().await.expect("load").expect("present");
    assert_eq!(first, second);
}

#[wasm_bindgen_test]
async fn raw_set_then_get_round_trips() {
    let value = serde_wasm_bindgen::to_value(&vec!["Buy milk".to_string()]).unwrap();
    storage::set("scratch", &value).await.expect("set");
    let read = storage::get("scratch").await.expect("get").expect("present");
    let back: Vec<String> = serde_wasm_bindgen::from_value(read).unwrap();
    assert_eq!(back, vec!["Buy milk".to_string()]);
}

#[wasm_bindgen_test]
async fn unreadable_stored_value_loads_as_default() {
    // A shape the task list cannot decode; the next save overwrites it
    let value = serde_wasm_bindgen::to_value(&42u32).unwrap();
    storage::set(storage::TASKS_KEY, &value).await.expect("set");
    let loaded = storage::load_tasks().await.expect("load");
    assert!(loaded.is_none());
}
