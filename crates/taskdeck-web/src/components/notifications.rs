use gloo::timers::future::TimeoutFuture;
use taskdeck_core::notice::{
  NoticeEntry,
  NoticePhase
};
use yew::{
  Html,
  Properties,
  classes,
  function_component,
  html,
  use_effect_with,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct NotificationStackProps {
  pub entries: Vec<NoticeEntry>,
  pub exit_ms: u32
}

#[function_component(NotificationStack)]
pub fn notification_stack(
  props: &NotificationStackProps
) -> Html {
  html! {
      <div class="notifications">
          {
              for props.entries.iter().cloned().map(|entry| {
                  let id = entry.id;
                  html! { <Toast key={id} entry={entry} exit_ms={props.exit_ms} /> }
              })
          }
      </div>
  }
}

#[derive(Properties, PartialEq)]
struct ToastProps {
  entry:   NoticeEntry,
  exit_ms: u32
}

fn exit_animation(exit_ms: u32) -> String {
  format!(
    "animation:slideOutRight {:.1}s ease \
     forwards;",
    f64::from(exit_ms) / 1000.0
  )
}

#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
  let applied_style =
    use_state(String::new);

  {
    let applied_style = applied_style.clone();
    let style = props.entry.notice.style.clone();
    use_effect_with(props.entry.id, move |_| {
      if let Some(style) = style {
        // Inline colors land one tick after the element is inserted.
        wasm_bindgen_futures::spawn_local(
          async move {
            TimeoutFuture::new(0).await;
            applied_style
              .set(style.inline_css());
          }
        );
      }
      || ()
    });
  }

  let mut style = (*applied_style).clone();
  if props.entry.phase == NoticePhase::Leaving
  {
    style.push_str(&exit_animation(
      props.exit_ms
    ));
  }

  html! {
      <div
          class={classes!("notification", props.entry.notice.kind.as_class())}
          style={style}
      >
          { props.entry.notice.message.clone() }
      </div>
  }
}
