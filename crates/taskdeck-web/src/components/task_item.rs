use taskdeck_core::{
  Task,
  TaskId
};
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskItemProps {
  pub task:         Task,
  pub delete_title: String,
  pub on_toggle:    Callback<TaskId>,
  pub on_delete:    Callback<TaskId>
}

/// One list entry. The text goes into a text node, so the browser does
/// the escaping.
#[function_component(TaskItem)]
pub fn task_item(
  props: &TaskItemProps
) -> Html {
  let id = props.task.id;
  let completed = props.task.completed;
  let on_toggle = props.on_toggle.clone();
  let on_delete = props.on_delete.clone();

  html! {
      <li class={classes!("task-item", completed.then_some("completed"))}>
          <input
              type="checkbox"
              class="task-checkbox"
              checked={completed}
              onchange={move |_| on_toggle.emit(id)}
          />
          <span class="task-text">{ props.task.text.clone() }</span>
          <div class="task-actions">
              <button
                  class="delete-btn"
                  title={props.delete_title.clone()}
                  onclick={move |_| on_delete.emit(id)}
              >
                  { "🗑️" }
              </button>
          </div>
      </li>
  }
}
