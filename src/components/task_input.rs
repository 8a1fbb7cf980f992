//! New-task input row

use leptos::*;

use crate::ChecklistContext;

/// Text field plus add button. Enter submits; blank input is ignored.
#[component]
pub fn TaskInput() -> impl IntoView {
    let ctx = use_context::<ChecklistContext>().expect("ChecklistContext not found");
    let (draft, set_draft) = create_signal(String::new());

    let submit = move || {
        let text = draft.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        ctx.set_tasks.update(|tasks| tasks.add(&text));
        ctx.save();
        set_draft.set(String::new());
    };

    view! {
        <div class="task-input">
            <input
                type="text"
                placeholder="What needs doing?"
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        submit();
                    }
                }
            />
            <button class="add-btn" on:click=move |_| submit()>"+ Add"</button>
        </div>
    }
}
