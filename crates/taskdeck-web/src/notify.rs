use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use taskdeck_core::config::NoticeTimings;
use taskdeck_core::{
  Notice,
  NoticeBoard
};
use yew::functional::UseForceUpdateHandle;

/// Puts notices on the board and schedules their exit and removal.
/// Scheduled timers cannot be cancelled.
#[derive(Clone)]
pub struct Notifier {
  board:   Rc<RefCell<NoticeBoard>>,
  refresh: UseForceUpdateHandle,
  timings: NoticeTimings
}

impl Notifier {
  pub fn new(
    board: Rc<RefCell<NoticeBoard>>,
    refresh: UseForceUpdateHandle,
    timings: NoticeTimings
  ) -> Self {
    Self {
      board,
      refresh,
      timings
    }
  }

  pub fn show(&self, notice: Notice) {
    tracing::debug!(
      kind = ?notice.kind,
      message = %notice.message,
      "showing notification"
    );
    let id =
      self.board.borrow_mut().push(notice);
    self.refresh.force_update();

    let board = self.board.clone();
    let refresh = self.refresh.clone();
    let timings = self.timings;
    wasm_bindgen_futures::spawn_local(
      async move {
        TimeoutFuture::new(
          timings.display_ms
        )
        .await;
        board.borrow_mut().begin_exit(id);
        refresh.force_update();

        TimeoutFuture::new(timings.exit_ms)
          .await;
        board.borrow_mut().remove(id);
        refresh.force_update();
      }
    );
  }

  pub fn show_opt(
    &self,
    notice: Option<Notice>
  ) {
    if let Some(notice) = notice {
      self.show(notice);
    }
  }
}
