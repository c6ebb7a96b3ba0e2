use std::cell::RefCell;
use std::rc::Rc;

use taskdeck_core::store::AddOutcome;
use taskdeck_core::{
  AppConfig,
  Filter,
  Notice,
  NoticeBoard,
  TaskId,
  TaskStore
};
use web_sys::{
  HtmlInputElement,
  InputEvent,
  KeyboardEvent
};
use yew::{
  Callback,
  Html,
  TargetCast,
  function_component,
  html,
  use_effect_with,
  use_force_update,
  use_mut_ref,
  use_state
};

use crate::browser::{
  self,
  BrowserStorage
};
use crate::components::{
  FilterBar,
  NotificationStack,
  TaskList,
  ThemeToggle
};
use crate::notify::Notifier;

const CONFIG_TOML: &str =
  include_str!("../assets/taskdeck.toml");

type SharedStore =
  Rc<RefCell<TaskStore<BrowserStorage>>>;

fn load_config() -> AppConfig {
  AppConfig::from_toml_or_default(
    CONFIG_TOML
  )
}

/// Logs a failed store operation and tells the user their change was not
/// saved.
fn settle<T>(
  result: anyhow::Result<T>,
  action: &str,
  notifier: &Notifier,
  failure_message: &str
) -> Option<T> {
  match result {
    | Ok(value) => Some(value),
    | Err(error) => {
      tracing::error!(
        action,
        error = %format!("{error:#}"),
        "store operation failed"
      );
      notifier.show(Notice::error(
        failure_message
      ));
      None
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let config = use_state(load_config);
  let refresh = use_force_update();
  let draft = use_state(String::new);

  let store: SharedStore = {
    let config = (*config).clone();
    let refresh = refresh.clone();
    use_mut_ref(move || {
      let mut store = TaskStore::load(
        BrowserStorage::local(),
        &config
      );
      store.subscribe(move |change| {
        tracing::debug!(
          ?change,
          "store changed; re-rendering"
        );
        // The store is still borrowed here; re-render once it is released.
        let refresh = refresh.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            refresh.force_update();
          }
        );
      });
      store
    })
  };

  let notice_board =
    use_mut_ref(NoticeBoard::default);
  let notifier = Notifier::new(
    notice_board.clone(),
    refresh.clone(),
    config.notifications
  );

  let theme = store.borrow().theme();
  {
    use_effect_with(theme, move |theme| {
      browser::apply_theme(*theme);
      tracing::debug!(
        theme = theme.storage_value(),
        "applied theme"
      );
      || ()
    });
  }

  {
    use_effect_with((), move |_| {
      tracing::info!(
        "task list mounted"
      );
      || ()
    });
  }

  let failure_message =
    config.messages.storage_failed.clone();

  let on_input = {
    let draft = draft.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      draft.set(input.value());
    })
  };

  let on_add = {
    let store = store.clone();
    let draft = draft.clone();
    let notifier = notifier.clone();
    let failure_message =
      failure_message.clone();
    Callback::from(move |()| {
      let result =
        store.borrow_mut().add(&draft);
      let Some(outcome) = settle(
        result,
        "add",
        &notifier,
        &failure_message
      ) else {
        return;
      };
      if matches!(
        outcome,
        AddOutcome::Added(_)
      ) {
        draft.set(String::new());
      }
      let notice = outcome
        .notice(store.borrow().messages());
      notifier.show_opt(notice);
    })
  };

  let on_add_click = {
    let on_add = on_add.clone();
    Callback::from(move |_| {
      on_add.emit(())
    })
  };

  let on_keypress = {
    let on_add = on_add.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        if e.key() == "Enter" {
          on_add.emit(());
        }
      }
    )
  };

  let on_toggle = {
    let store = store.clone();
    let notifier = notifier.clone();
    let failure_message =
      failure_message.clone();
    Callback::from(move |id: TaskId| {
      let result =
        store.borrow_mut().toggle(id);
      if let Some(outcome) = settle(
        result,
        "toggle",
        &notifier,
        &failure_message
      ) {
        let notice = outcome
          .notice(store.borrow().messages());
        notifier.show_opt(notice);
      }
    })
  };

  let on_delete = {
    let store = store.clone();
    let notifier = notifier.clone();
    let failure_message =
      failure_message.clone();
    Callback::from(move |id: TaskId| {
      let result =
        store.borrow_mut().delete(id);
      if let Some(outcome) = settle(
        result,
        "delete",
        &notifier,
        &failure_message
      ) {
        let notice = outcome
          .notice(store.borrow().messages());
        notifier.show_opt(notice);
      }
    })
  };

  let on_clear_completed = {
    let store = store.clone();
    let notifier = notifier.clone();
    let failure_message =
      failure_message.clone();
    Callback::from(move |_| {
      let result = store
        .borrow_mut()
        .clear_completed(&browser::confirm);
      if let Some(outcome) = settle(
        result,
        "clear_completed",
        &notifier,
        &failure_message
      ) {
        let notice = outcome
          .notice(store.borrow().messages());
        notifier.show_opt(notice);
      }
    })
  };

  let on_select_filter = {
    let store = store.clone();
    Callback::from(move |filter: Filter| {
      store.borrow_mut().set_filter(filter);
    })
  };

  let on_toggle_theme = {
    let store = store.clone();
    let notifier = notifier.clone();
    let failure_message =
      failure_message.clone();
    Callback::from(move |_| {
      let result =
        store.borrow_mut().toggle_theme();
      if let Some(outcome) = settle(
        result,
        "toggle_theme",
        &notifier,
        &failure_message
      ) {
        let notice = outcome
          .notice(store.borrow().messages());
        notifier.show_opt(notice);
      }
    })
  };

  let snapshot = store.borrow();
  let messages = snapshot.messages();
  let visible: Vec<_> = snapshot
    .filtered_tasks()
    .into_iter()
    .cloned()
    .collect();
  let filter_labels = [
    messages.filter_all.clone(),
    messages.filter_active.clone(),
    messages.filter_completed.clone()
  ];
  let entries =
    notice_board.borrow().entries().to_vec();

  html! {
      <div class="container">
          <header class="header">
              <h1>{ messages.title.clone() }</h1>
              <ThemeToggle on_toggle={on_toggle_theme} />
          </header>

          <div class="input-section">
              <input
                  id="taskInput"
                  type="text"
                  placeholder={messages.input_placeholder.clone()}
                  value={(*draft).clone()}
                  oninput={on_input}
                  onkeypress={on_keypress}
              />
              <button id="addTaskBtn" class="add-btn" onclick={on_add_click}>
                  { messages.add_button.clone() }
              </button>
          </div>

          <FilterBar
              active={snapshot.filter()}
              labels={filter_labels}
              on_select={on_select_filter}
          />

          <TaskList
              tasks={visible}
              empty_label={messages.empty_state.clone()}
              delete_title={messages.delete_title.clone()}
              on_toggle={on_toggle}
              on_delete={on_delete}
          />

          <footer class="footer">
              <span id="taskCount" class="task-count">{ snapshot.summary_line() }</span>
              <button id="clearCompleted" class="clear-btn" onclick={on_clear_completed}>
                  { messages.clear_completed.clone() }
              </button>
          </footer>

          <NotificationStack
              entries={entries}
              exit_ms={config.notifications.exit_ms}
          />
      </div>
  }
}
