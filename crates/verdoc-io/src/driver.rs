//! Runs the upload flow inside a Dioxus component.
//!
//! [`FlowDriver`] holds the controller, the rendered [`ViewModel`], and
//! the handle of the one pending timer, all in signals. UI events go in
//! through its methods; the resulting effects are folded into the view
//! and timer requests become spawned tasks awaiting a
//! [`TimeoutFuture`].
//!
//! Cancelling a timer drops its task. The controller additionally
//! ignores any timer id it no longer expects, so a callback that slips
//! past cancellation is harmless.

use dioxus::core::Task;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use verdoc_flow::{
    Effects, FlowEvents, ScheduledTask, SelectedFile, TaskId, UploadConfig, UploadFlowController,
};

use crate::notify;
use crate::view::{HostCommand, ViewModel};

/// Handle to a running upload flow. Cheap to copy into event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct FlowDriver {
    flow: Signal<UploadFlowController>,
    view: Signal<ViewModel>,
    timer: Signal<Option<(TaskId, Task)>>,
}

/// Create a [`FlowDriver`] owned by the calling component.
pub fn use_flow_driver(config: UploadConfig) -> FlowDriver {
    let flow = use_signal(|| UploadFlowController::new(config));
    let view = use_signal(ViewModel::default);
    let timer = use_signal(|| Option::<(TaskId, Task)>::None);
    FlowDriver { flow, view, timer }
}

impl FlowDriver {
    /// The current view, for rendering.
    #[must_use]
    pub fn view(&self) -> ViewModel {
        (self.view)()
    }

    /// Files were picked or dropped.
    pub fn select(mut self, files: &[SelectedFile]) {
        let effects = self.flow.write().on_select(files);
        self.dispatch(effects);
    }

    /// "Upload another" was clicked.
    pub fn restart(mut self) {
        let effects = self.flow.write().on_restart();
        self.dispatch(effects);
    }

    /// The generic reset control was clicked.
    pub fn reset(mut self) {
        let effects = self.flow.write().on_reset();
        self.dispatch(effects);
    }

    fn fire(mut self, id: TaskId) {
        let is_live = matches!(*self.timer.peek(), Some((live, _)) if live == id);
        if is_live {
            self.timer.set(None);
        }
        let effects = self.flow.write().on_timer(id);
        self.dispatch(effects);
    }

    fn dispatch(mut self, effects: Effects) {
        for effect in effects {
            let command = self.view.write().apply(effect);
            match command {
                None => {}
                Some(HostCommand::Notify(message)) => notify::notify(&message),
                Some(HostCommand::Cancel(id)) => self.cancel(id),
                Some(HostCommand::Schedule(task)) => self.schedule(task),
            }
        }
    }

    fn schedule(mut self, scheduled: ScheduledTask) {
        let driver = self;
        let task = spawn(async move {
            TimeoutFuture::new(scheduled.delay_ms).await;
            driver.fire(scheduled.id);
        });
        if let Some((_, stale)) = self.timer.write().replace((scheduled.id, task)) {
            stale.cancel();
        }
    }

    fn cancel(mut self, id: TaskId) {
        let is_live = matches!(*self.timer.peek(), Some((live, _)) if live == id);
        if !is_live {
            return;
        }
        if let Some((_, task)) = self.timer.write().take() {
            task.cancel();
        }
    }
}
