mod app;
mod browser;
mod components;
mod notify;

const MOUNT_ID: &str = "app";

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    version = env!("CARGO_PKG_VERSION"),
    mount = MOUNT_ID,
    "starting taskdeck frontend"
  );

  match browser::mount_point(MOUNT_ID) {
    | Some(mount) => {
      yew::Renderer::<app::App>::with_root(
        mount
      )
      .render();
    }
    | None => {
      tracing::error!(
        mount = MOUNT_ID,
        "mount element missing; \
         nothing rendered"
      );
    }
  }
}
