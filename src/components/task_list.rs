//! Task list view

use leptos::*;

use crate::ChecklistContext;

/// Renders the checklist: one row per task with toggle, reorder and delete
/// controls, an empty-state hint, and a completion summary.
#[component]
pub fn TaskListView() -> impl IntoView {
    let ctx = use_context::<ChecklistContext>().expect("ChecklistContext not found");
    let tasks = ctx.tasks;

    let toggle = move |idx: usize| {
        ctx.set_tasks.update(|t| t.toggle(idx));
        ctx.save();
    };
    let remove = move |idx: usize| {
        ctx.set_tasks.update(|t| t.remove(idx));
        ctx.save();
    };
    // Guarded so that an edge-row click changes nothing and emits no signal
    let move_up = move |idx: usize| {
        if idx == 0 {
            return;
        }
        ctx.set_tasks.update(|t| t.move_up(idx));
        ctx.save();
    };
    let move_down = move |idx: usize| {
        if idx + 1 >= tasks.get_untracked().len() {
            return;
        }
        ctx.set_tasks.update(|t| t.move_down(idx));
        ctx.save();
    };

    view! {
        <div class="task-list">
            {move || {
                let list = tasks.get();
                if list.is_empty() {
                    return view! {
                        <p class="empty-hint">"Nothing here yet. Add your first task above."</p>
                    }.into_view();
                }

                let count = list.len();
                list.tasks.into_iter().enumerate().map(|(idx, task)| {
                    view! {
                        <div class=format!("task-row {}", if task.done { "done" } else { "" })>
                            <label class="checkbox-label">
                                <input
                                    type="checkbox"
                                    prop:checked=task.done
                                    on:change=move |_| toggle(idx)
                                />
                                <span class="task-text">{task.text.clone()}</span>
                            </label>
                            <div class="row-actions">
                                <button
                                    class="move-btn"
                                    disabled={idx == 0}
                                    on:click=move |_| move_up(idx)
                                >"↑"</button>
                                <button
                                    class="move-btn"
                                    disabled={idx + 1 == count}
                                    on:click=move |_| move_down(idx)
                                >"↓"</button>
                                <button
                                    class="delete-btn"
                                    on:click=move |_| remove(idx)
                                >"✕"</button>
                            </div>
                        </div>
                    }
                }).collect_view().into_view()
            }}
            {move || {
                let list = tasks.get();
                (!list.is_empty()).then(|| view! {
                    <p class="summary">{list.completed()} " of " {list.len()} " done"</p>
                })
            }}
        </div>
    }
}
