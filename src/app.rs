//! Root component and shared app state

use leptos::*;

use crate::components::{TaskInput, TaskListView};
use crate::models::TaskList;

/// Shared state handed to every component
#[derive(Clone, Copy)]
pub struct ChecklistContext {
    pub tasks: ReadSignal<TaskList>,
    pub set_tasks: WriteSignal<TaskList>,
    on_save: Option<Callback<TaskList>>,
}

impl ChecklistContext {
    /// Outbound change signal: hand the full current list to the save
    /// handler, when one is bound. Without persistence this is a no-op.
    pub fn save(&self) {
        if let Some(on_save) = self.on_save {
            on_save.call(self.tasks.get_untracked());
        }
    }
}

/// Application root. `initial` is the task list recovered from storage;
/// `on_save` receives the full list after every edit. Both are absent when
/// storage could not be read at startup.
#[component]
pub fn App(
    #[prop(optional_no_strip)] initial: Option<TaskList>,
    #[prop(optional_no_strip)] on_save: Option<Callback<TaskList>>,
) -> impl IntoView {
    let (tasks, set_tasks) = create_signal(initial.unwrap_or_default());
    provide_context(ChecklistContext {
        tasks,
        set_tasks,
        on_save,
    });

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Simple Checklist"</h1>
            </header>
            <main class="container">
                <TaskInput />
                <TaskListView />
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn save_delivers_full_current_list() {
        let runtime = create_runtime();
        let (tasks, set_tasks) = create_signal(TaskList::default());
        let received: Rc<RefCell<Vec<TaskList>>> = Rc::default();
        let sink = received.clone();
        let ctx = ChecklistContext {
            tasks,
            set_tasks,
            on_save: Some(Callback::new(move |list| sink.borrow_mut().push(list))),
        };

        set_tasks.update(|t| t.add("Buy milk"));
        ctx.save();
        set_tasks.update(|t| t.toggle(0));
        ctx.save();

        {
            let received = received.borrow();
            assert_eq!(received.len(), 2);
            assert_eq!(received[0].tasks[0].text, "Buy milk");
            assert!(!received[0].tasks[0].done);
            assert!(received[1].tasks[0].done);
        }
        runtime.dispose();
    }

    #[test]
    fn save_without_handler_is_a_noop() {
        let runtime = create_runtime();
        let (tasks, set_tasks) = create_signal(TaskList::default());
        let ctx = ChecklistContext {
            tasks,
            set_tasks,
            on_save: None,
        };

        set_tasks.update(|t| t.add("Buy milk"));
        ctx.save();

        assert_eq!(tasks.get_untracked().len(), 1);
        runtime.dispose();
    }
}
