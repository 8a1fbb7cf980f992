//! App bootstrap: service worker registration and the persistence bridge

use gloo::events::EventListener;
use leptos::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use simple_checklist::models::TaskList;
use simple_checklist::utils::{log, storage};
use simple_checklist::App;

/// Register the offline asset worker once the page has loaded.
/// Browsers without service worker support skip this silently.
fn register_service_worker() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let supported = js_sys::Reflect::has(
        window.navigator().as_ref(),
        &JsValue::from_str("serviceWorker"),
    )
    .unwrap_or(false);
    if !supported {
        return;
    }

    let listener = EventListener::once(&window, "load", move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let registration = window
            .navigator()
            .service_worker()
            .register("service-worker.js");
        spawn_local(async move {
            match JsFuture::from(registration).await {
                Ok(_) => log::log_info("sw", "service worker registered"),
                Err(e) => log::log_warn("sw", &format!("registration failed: {:?}", e)),
            }
        });
    });
    listener.forget();
}

fn main() {
    console_error_panic_hook::set_once();
    register_service_worker();

    // Read saved tasks, then mount. On success every UI change is written
    // back to the same record; a failed read mounts the app without
    // persistence for the rest of the session.
    spawn_local(async {
        let (initial, on_save) = match storage::load_tasks().await {
            Ok(saved) => {
                let count = saved.as_ref().map(TaskList::len).unwrap_or(0);
                log::log_info("storage", &format!("loaded {} saved tasks", count));
                let on_save = Callback::new(|tasks: TaskList| {
                    spawn_local(async move {
                        if let Err(e) = storage::save_tasks(&tasks).await {
                            log::log_warn("storage", &format!("save failed: {}", e));
                        }
                    });
                });
                (saved, Some(on_save))
            }
            Err(e) => {
                log::log_error("storage", &format!("{}; running without persistence", e));
                (None, None)
            }
        };

        mount_to_body(move || view! { <App initial=initial on_save=on_save /> });
    });
}
