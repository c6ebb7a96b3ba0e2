use taskdeck_core::Filter;
use web_sys::Element;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
  pub active:    Filter,
  /// Labels for all, active and completed.
  pub labels:    [String; 3],
  pub on_select: Callback<Filter>
}

#[function_component(FilterBar)]
pub fn filter_bar(
  props: &FilterBarProps
) -> Html {
  let onclick = {
    let on_select = props.on_select.clone();
    Callback::from(move |e: MouseEvent| {
      let key = e
        .target_dyn_into::<Element>()
        .and_then(|target| {
          target.get_attribute("data-filter")
        })
        .unwrap_or_default();
      on_select.emit(Filter::from_key(&key));
    })
  };

  html! {
      <div class="filters">
          {
              for Filter::all().into_iter().zip(props.labels.iter()).map(|(filter, label)| html! {
                  <button
                      class={classes!("filter-btn", (filter == props.active).then_some("active"))}
                      data-filter={filter.key()}
                      onclick={onclick.clone()}
                  >
                      { label.clone() }
                  </button>
              })
          }
      </div>
  }
}

#[cfg(test)]
mod tests {
  use yew::ServerRenderer;

  use super::*;

  async fn render(active: Filter) -> String {
    ServerRenderer::<FilterBar>::with_props(
      move || FilterBarProps {
        active,
        labels: [
          "All".to_string(),
          "Active".to_string(),
          "Completed".to_string()
        ],
        on_select: Callback::noop()
      }
    )
    .hydratable(false)
    .render()
    .await
  }

  #[tokio::test]
  async fn only_the_selected_filter_is_active(
  ) {
    let html =
      render(Filter::Completed).await;
    let buttons: Vec<&str> = html
      .split("<button")
      .skip(1)
      .collect();
    assert_eq!(buttons.len(), 3, "{html}");

    for button in buttons {
      let is_completed = button.contains(
        "data-filter=\"completed\""
      );
      assert_eq!(
        button.contains("filter-btn active"),
        is_completed,
        "{button}"
      );
    }
  }

  #[tokio::test]
  async fn every_button_carries_its_filter_key(
  ) {
    let html = render(Filter::All).await;
    for filter in Filter::all() {
      let attr = format!(
        "data-filter=\"{}\"",
        filter.key()
      );
      assert!(html.contains(&attr), "{html}");
      assert_eq!(
        Filter::from_key(filter.key()),
        filter
      );
    }
  }
}
