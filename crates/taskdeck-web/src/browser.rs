use taskdeck_core::{
  KeyValueStore,
  StorageError,
  Theme
};

/// `window.localStorage`, or nothing when the browser refuses access.
pub struct BrowserStorage {
  inner: Option<web_sys::Storage>
}

impl BrowserStorage {
  pub fn local() -> Self {
    let inner = web_sys::window()
      .and_then(|window| {
        window
          .local_storage()
          .ok()
          .flatten()
      });
    if inner.is_none() {
      tracing::warn!(
        "local storage unavailable; \
         changes will not persist"
      );
    }
    Self { inner }
  }
}

impl KeyValueStore for BrowserStorage {
  fn get_item(
    &self,
    key: &str
  ) -> Result<Option<String>, StorageError>
  {
    let Some(storage) = &self.inner else {
      return Err(StorageError::Unavailable);
    };
    storage.get_item(key).map_err(|error| {
      StorageError::read(
        key,
        format!("{error:?}")
      )
    })
  }

  fn set_item(
    &self,
    key: &str,
    value: &str
  ) -> Result<(), StorageError> {
    let Some(storage) = &self.inner else {
      return Err(StorageError::Unavailable);
    };
    storage.set_item(key, value).map_err(
      |error| {
        StorageError::write(
          key,
          format!("{error:?}")
        )
      }
    )
  }
}

/// Blocking `window.confirm` prompt. Declines when no window exists.
pub fn confirm(message: &str) -> bool {
  web_sys::window()
    .and_then(|window| {
      window
        .confirm_with_message(message)
        .ok()
    })
    .unwrap_or(false)
}

/// Sets `data-theme` on the root document element.
pub fn apply_theme(theme: Theme) {
  let Some(root) = web_sys::window()
    .and_then(|window| window.document())
    .and_then(|document| {
      document.document_element()
    })
  else {
    tracing::warn!(
      "no document element to theme"
    );
    return;
  };

  if let Err(error) = root.set_attribute(
    "data-theme",
    theme.storage_value()
  ) {
    tracing::error!(
      ?error,
      "failed applying theme attribute"
    );
  }
}

/// Element the app renders into, looked up by id.
pub fn mount_point(
  id: &str
) -> Option<web_sys::Element> {
  web_sys::window()
    .and_then(|window| window.document())
    .and_then(|document| {
      document.get_element_by_id(id)
    })
}
