use taskdeck_core::theme::THEME_ICON;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
  pub on_toggle: Callback<MouseEvent>
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(
  props: &ThemeToggleProps
) -> Html {
  html! {
      <button id="themeToggle" class="theme-toggle" onclick={props.on_toggle.clone()}>
          <span class="theme-icon">{ THEME_ICON }</span>
      </button>
  }
}
