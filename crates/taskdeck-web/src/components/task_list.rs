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

use super::TaskItem;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub tasks:        Vec<Task>,
  pub empty_label:  String,
  pub delete_title: String,
  pub on_toggle:    Callback<TaskId>,
  pub on_delete:    Callback<TaskId>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  let empty = props.tasks.is_empty();

  html! {
      <>
          <ul id="taskList" class="task-list">
              {
                  for props.tasks.iter().cloned().map(|task| {
                      let id = task.id;
                      html! {
                          <TaskItem
                              key={id}
                              task={task}
                              delete_title={props.delete_title.clone()}
                              on_toggle={props.on_toggle.clone()}
                              on_delete={props.on_delete.clone()}
                          />
                      }
                  })
              }
          </ul>
          <div id="emptyState" class={classes!("empty-state", empty.then_some("show"))}>
              { props.empty_label.clone() }
          </div>
      </>
  }
}
