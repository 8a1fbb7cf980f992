//! IndexedDB key-value persistence
//!
//! A single object store holding the task list under one key. Values are
//! stored as structured-clonable JS values, not JSON strings.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{IdbDatabase, IdbRequest, IdbTransactionMode};

use crate::models::TaskList;
use crate::utils::log;

const DB_NAME: &str = "simple-checklist";
const DB_VERSION: u32 = 1;
const STORE_NAME: &str = "keyval";

/// Storage key for the persisted task list
pub const TASKS_KEY: &str = "tasks";

thread_local! {
    // Connection opened once per page session
    static DB: RefCell<Option<IdbDatabase>> = RefCell::new(None);
}

fn describe_js_error(err: &JsValue) -> String {
    match err.dyn_ref::<web_sys::DomException>() {
        Some(dom) => format!("{}: {}", dom.name(), dom.message()),
        None => format!("{:?}", err),
    }
}

/// Adapt an IndexedDB request's success/error callbacks into a promise
fn request_promise(request: &IdbRequest) -> js_sys::Promise {
    let request = request.clone();
    js_sys::Promise::new(&mut move |resolve, reject| {
        let success_request = request.clone();
        let on_success = Closure::once_into_js(move |_: web_sys::Event| {
            let value = success_request.result().unwrap_or(JsValue::UNDEFINED);
            let _ = resolve.call1(&JsValue::NULL, &value);
        });
        request.set_onsuccess(Some(on_success.unchecked_ref()));

        let error_request = request.clone();
        let on_error = Closure::once_into_js(move |_: web_sys::Event| {
            let detail = error_request
                .error()
                .ok()
                .flatten()
                .map(JsValue::from)
                .unwrap_or_else(|| JsValue::from_str("request failed"));
            let _ = reject.call1(&JsValue::NULL, &detail);
        });
        request.set_onerror(Some(on_error.unchecked_ref()));
    })
}

async fn open_db() -> Result<IdbDatabase, String> {
    let window = web_sys::window().ok_or("window unavailable")?;
    let factory = window
        .indexed_db()
        .map_err(|e| format!("IndexedDB access denied: {}", describe_js_error(&e)))?
        .ok_or("IndexedDB unavailable")?;

    let request = factory
        .open_with_u32(DB_NAME, DB_VERSION)
        .map_err(|e| format!("IndexedDB open failed: {}", describe_js_error(&e)))?;

    // First open of this version: create the single object store
    let upgrade_request = request.clone();
    let on_upgrade = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
        if let Ok(result) = upgrade_request.result() {
            if let Ok(db) = result.dyn_into::<IdbDatabase>() {
                let _ = db.create_object_store(STORE_NAME);
            }
        }
    });
    request.set_onupgradeneeded(Some(on_upgrade.as_ref().unchecked_ref()));

    let result = JsFuture::from(request_promise(&request))
        .await
        .map_err(|e| format!("IndexedDB open rejected: {}", describe_js_error(&e)))?;

    result
        .dyn_into::<IdbDatabase>()
        .map_err(|_| "IndexedDB open returned no database".to_string())
}

async fn database() -> Result<IdbDatabase, String> {
    if let Some(db) = DB.with(|slot| slot.borrow().clone()) {
        return Ok(db);
    }
    let db = open_db().await?;
    DB.with(|slot| *slot.borrow_mut() = Some(db.clone()));
    Ok(db)
}

/// Read the value stored under `key`. A missing key is `Ok(None)`.
pub async fn get(key: &str) -> Result<Option<JsValue>, String> {
    let db = database().await?;
    let tx = db
        .transaction_with_str(STORE_NAME)
        .map_err(|e| format!("read transaction failed: {}", describe_js_error(&e)))?;
    let store = tx
        .object_store(STORE_NAME)
        .map_err(|e| format!("object store missing: {}", describe_js_error(&e)))?;
    let request = store
        .get(&JsValue::from_str(key))
        .map_err(|e| format!("get request failed: {}", describe_js_error(&e)))?;

    let value = JsFuture::from(request_promise(&request))
        .await
        .map_err(|e| format!("get rejected: {}", describe_js_error(&e)))?;

    if value.is_undefined() || value.is_null() {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}

/// Overwrite the value stored under `key`
pub async fn set(key: &str, value: &JsValue) -> Result<(), String> {
    let db = database().await?;
    let tx = db
        .transaction_with_str_and_mode(STORE_NAME, IdbTransactionMode::Readwrite)
        .map_err(|e| format!("write transaction failed: {}", describe_js_error(&e)))?;
    let store = tx
        .object_store(STORE_NAME)
        .map_err(|e| format!("object store missing: {}", describe_js_error(&e)))?;
    let request = store
        .put_with_key(value, &JsValue::from_str(key))
        .map_err(|e| format!("put request failed: {}", describe_js_error(&e)))?;

    JsFuture::from(request_promise(&request))
        .await
        .map_err(|e| format!("put rejected: {}", describe_js_error(&e)))?;
    Ok(())
}

/// Load the saved task list. `Ok(None)` when nothing is stored yet.
pub async fn load_tasks() -> Result<Option<TaskList>, String> {
    let Some(value) = get(TASKS_KEY).await? else {
        return Ok(None);
    };
    match serde_wasm_bindgen::from_value::<TaskList>(value) {
        Ok(tasks) => Ok(Some(tasks)),
        Err(e) => {
            // Stale or foreign shape: start fresh, next save overwrites it
            log::log_warn("storage", &format!("stored tasks unreadable: {}", e));
            Ok(None)
        }
    }
}

/// Persist the full task list, overwriting any previous value
pub async fn save_tasks(tasks: &TaskList) -> Result<(), String> {
    let value = serde_wasm_bindgen::to_value(tasks)
        .map_err(|e| format!("task serialization failed: {}", e))?;
    set(TASKS_KEY, &value).await
}
