//! The upload flow controller.
//!
//! [`UploadFlowController`] owns the single [`FlowState`] and is the only
//! thing that mutates it. It never touches the DOM or a clock: every
//! transition returns a list of [`Effect`]s for the host to apply, and
//! timers are requested as [`ScheduledTask`]s that the host fires back
//! through [`FlowEvents::on_timer`].
//!
//! ```rust
//! use verdoc_flow::{Effect, FlowEvents, SelectedFile, UploadConfig, UploadFlowController};
//!
//! let mut flow = UploadFlowController::new(UploadConfig::default());
//! let effects = flow.on_select(&[SelectedFile::new("id.pdf", "application/pdf", 4096)]);
//! let tick = effects.iter().find_map(|e| match e {
//!     Effect::Schedule(task) => Some(*task),
//!     _ => None,
//! });
//! assert!(tick.is_some());
//! assert_eq!(flow.state().progress(), Some(0));
//! ```
//!
//! # Cancellation
//!
//! At most one task is live at a time. Starting a new upload or
//! resetting emits [`Effect::Cancel`] for the live task and forgets its
//! id, so a host that fails to cancel its timer in time still cannot
//! advance a flow that was reset: [`on_timer`](FlowEvents::on_timer)
//! ignores every id except the live one.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::progress::{self, COMPLETE_STATUS, MAX_PROGRESS, PREPARING_STATUS};
use crate::report::ResultView;
use crate::step::{Step, StepIndicator};
use crate::types::{FlowState, SelectedFile, UploadConfig};
use crate::validate::check_selection;

/// Identifier of a scheduled task. Never reused within one controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a scheduled task does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    /// Advance simulated progress by one step.
    Tick,
    /// Finish verification after progress reached 100%.
    Settle,
}

/// A one-shot timer the host must fire after `delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// Id to pass back to [`FlowEvents::on_timer`].
    pub id: TaskId,
    /// What happens when the task fires.
    pub kind: TaskKind,
    /// Delay before firing, in milliseconds.
    pub delay_ms: u32,
}

impl ScheduledTask {
    /// [`delay_ms`](Self::delay_ms) as a [`Duration`].
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.delay_ms))
    }
}

/// Which surface of the widget is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    /// The drop zone and file picker.
    Intake,
    /// The progress bar (later replaced by the result view).
    Progress,
}

/// One instruction for the host UI.
///
/// Effects are applied in the order they are returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Show one surface and hide the other. Clears any result view.
    ShowSurface(Surface),
    /// Set the progress bar width to `{0}%`.
    SetProgress(u8),
    /// Replace the status line under the progress bar.
    SetStatus(String),
    /// Move the step indicator.
    SetStep(StepIndicator),
    /// Replace the progress surface content with the result view.
    ShowResults(ResultView),
    /// Show a blocking notification.
    Notify(String),
    /// Drop whatever the file picker still holds.
    ClearSelection,
    /// Start a one-shot timer.
    Schedule(ScheduledTask),
    /// Stop a previously scheduled timer if it has not fired.
    Cancel(TaskId),
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShowSurface(surface) => write!(f, "show {surface:?}"),
            Self::SetProgress(p) => write!(f, "progress {p}%"),
            Self::SetStatus(text) => write!(f, "status {text:?}"),
            Self::SetStep(step) => write!(f, "{step}"),
            Self::ShowResults(view) => write!(
                f,
                "results {:?} {} {}",
                view.file_name, view.size_label, view.mime_type
            ),
            Self::Notify(message) => write!(f, "notify {message:?}"),
            Self::ClearSelection => f.write_str("clear selection"),
            Self::Schedule(task) => {
                write!(f, "schedule {} {:?} in {}ms", task.id, task.kind, task.delay_ms)
            }
            Self::Cancel(id) => write!(f, "cancel {id}"),
        }
    }
}

/// Effects produced by one transition.
pub type Effects = Vec<Effect>;

/// Inbound events the host UI layer delivers to the flow.
///
/// This is the whole surface the UI sees: file selection (picker or
/// drop), the "upload another" button, a generic reset control, and
/// timer callbacks.
pub trait FlowEvents {
    /// Files were picked or dropped.
    fn on_select(&mut self, files: &[SelectedFile]) -> Effects;

    /// The "upload another" control in the result view was clicked.
    fn on_restart(&mut self) -> Effects;

    /// The generic reset control was clicked.
    fn on_reset(&mut self) -> Effects;

    /// A task returned in [`Effect::Schedule`] fired.
    fn on_timer(&mut self, id: TaskId) -> Effects;
}

/// State holder for the upload widget.
#[derive(Debug, Clone)]
pub struct UploadFlowController {
    config: UploadConfig,
    state: FlowState,
    live_task: Option<ScheduledTask>,
    next_task_id: u64,
}

impl UploadFlowController {
    /// Create an idle controller.
    #[must_use]
    pub const fn new(config: UploadConfig) -> Self {
        Self {
            config,
            state: FlowState::Idle,
            live_task: None,
            next_task_id: 0,
        }
    }

    /// The configuration this controller was built with.
    #[must_use]
    pub const fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// The current flow state.
    #[must_use]
    pub const fn state(&self) -> &FlowState {
        &self.state
    }

    /// The step indicator position for the current state.
    #[must_use]
    pub const fn step(&self) -> StepIndicator {
        self.state.step()
    }

    /// The task the controller is waiting on, if any.
    #[must_use]
    pub const fn live_task(&self) -> Option<ScheduledTask> {
        self.live_task
    }

    /// Try to start an upload with the first of `files`.
    ///
    /// Only accepted from [`FlowState::Idle`]. While uploading or showing
    /// results the call is ignored entirely; the user gets back to idle
    /// through [`reset`](Self::reset). An empty selection or a file that
    /// fails validation yields a single [`Effect::Notify`] and leaves the
    /// state unchanged.
    pub fn submit(&mut self, files: &[SelectedFile]) -> Effects {
        if !matches!(self.state, FlowState::Idle) {
            return Effects::new();
        }
        match check_selection(&self.config, files) {
            Ok(file) => {
                let file = file.clone();
                self.start(file)
            }
            Err(e) => vec![Effect::Notify(e.to_string())],
        }
    }

    /// Return to [`FlowState::Idle`] from any state.
    ///
    /// Cancels the live task, shows the intake surface, clears the
    /// file picker and moves the step indicator back to the start.
    pub fn reset(&mut self) -> Effects {
        let mut effects = self.cancel_live_task();
        self.state = FlowState::Idle;
        effects.extend([
            Effect::ShowSurface(Surface::Intake),
            Effect::ClearSelection,
            Effect::SetStep(StepIndicator::at(Step::Upload)),
        ]);
        effects
    }

    fn start(&mut self, file: SelectedFile) -> Effects {
        let mut effects = self.cancel_live_task();
        self.state = FlowState::Uploading { progress: 0, file };
        effects.extend([
            Effect::ShowSurface(Surface::Progress),
            Effect::SetProgress(0),
            Effect::SetStatus(PREPARING_STATUS.to_owned()),
            Effect::SetStep(StepIndicator::at(Step::Verify)),
        ]);
        effects.push(self.schedule(TaskKind::Tick));
        effects
    }

    fn tick(&mut self) -> Effects {
        let FlowState::Uploading { progress, .. } = &mut self.state else {
            return Effects::new();
        };
        *progress = progress::advance(*progress, self.config.progress_step);
        let p = *progress;

        let next = if p >= MAX_PROGRESS {
            TaskKind::Settle
        } else {
            TaskKind::Tick
        };
        vec![
            Effect::SetProgress(p),
            Effect::SetStatus(progress::status_for(p).to_owned()),
            self.schedule(next),
        ]
    }

    fn settle(&mut self) -> Effects {
        match std::mem::take(&mut self.state) {
            FlowState::Uploading {
                progress: MAX_PROGRESS,
                file,
            } => {
                let view = ResultView::for_file(&file);
                self.state = FlowState::Complete { file };
                vec![
                    Effect::SetStatus(COMPLETE_STATUS.to_owned()),
                    Effect::SetStep(StepIndicator::at(Step::Results)),
                    Effect::ShowResults(view),
                ]
            }
            other => {
                self.state = other;
                Effects::new()
            }
        }
    }

    fn schedule(&mut self, kind: TaskKind) -> Effect {
        let id = TaskId(self.next_task_id);
        self.next_task_id += 1;
        let delay_ms = match kind {
            TaskKind::Tick => self.config.progress_tick_interval_ms,
            TaskKind::Settle => self.config.finalize_delay_ms,
        };
        let task = ScheduledTask { id, kind, delay_ms };
        self.live_task = Some(task);
        Effect::Schedule(task)
    }

    fn cancel_live_task(&mut self) -> Effects {
        self.live_task
            .take()
            .map(|task| Effect::Cancel(task.id))
            .into_iter()
            .collect()
    }
}

impl Default for UploadFlowController {
    fn default() -> Self {
        Self::new(UploadConfig::default())
    }
}

impl FlowEvents for UploadFlowController {
    fn on_select(&mut self, files: &[SelectedFile]) -> Effects {
        self.submit(files)
    }

    fn on_restart(&mut self) -> Effects {
        self.reset()
    }

    fn on_reset(&mut self) -> Effects {
        self.reset()
    }

    fn on_timer(&mut self, id: TaskId) -> Effects {
        let Some(task) = self.live_task.filter(|t| t.id == id) else {
            return Effects::new();
        };
        self.live_task = None;
        match task.kind {
            TaskKind::Tick => self.tick(),
            TaskKind::Settle => self.settle(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn pdf(size: u64) -> SelectedFile {
        SelectedFile::new("passport.pdf", "application/pdf", size)
    }

    fn scheduled(effects: &[Effect]) -> Option<ScheduledTask> {
        effects.iter().find_map(|e| match e {
            Effect::Schedule(task) => Some(*task),
            _ => None,
        })
    }

    #[test]
    fn starts_idle_at_first_step() {
        let flow = UploadFlowController::default();
        assert_eq!(flow.state(), &FlowState::Idle);
        assert_eq!(flow.step().current(), Step::Upload);
        assert!(flow.live_task().is_none());
    }

    #[test]
    fn accepted_file_starts_upload() {
        let mut flow = UploadFlowController::default();
        let effects = flow.on_select(&[pdf(1000)]);

        assert_eq!(flow.state().progress(), Some(0));
        assert_eq!(flow.step().current(), Step::Verify);
        assert_eq!(effects[0], Effect::ShowSurface(Surface::Progress));
        assert_eq!(effects[1], Effect::SetProgress(0));
        assert_eq!(effects[2], Effect::SetStatus(PREPARING_STATUS.into()));
        assert_eq!(effects[3], Effect::SetStep(StepIndicator::at(Step::Verify)));
        let task = scheduled(&effects).unwrap();
        assert_eq!(task.kind, TaskKind::Tick);
        assert_eq!(task.delay_ms, 50);
        assert_eq!(flow.live_task(), Some(task));
    }

    #[test]
    fn empty_selection_notifies_without_state_change() {
        let mut flow = UploadFlowController::default();
        let effects = flow.on_select(&[]);
        assert_eq!(effects, vec![Effect::Notify("No file selected".into())]);
        assert_eq!(flow.state(), &FlowState::Idle);
    }

    #[test]
    fn rejected_file_notifies_without_state_change() {
        let mut flow = UploadFlowController::default();
        let effects = flow.on_select(&[SelectedFile::new("notes.txt", "text/plain", 10)]);
        assert_eq!(
            effects,
            vec![Effect::Notify("Please upload a PDF, JPEG, or PNG file".into())]
        );
        assert_eq!(flow.state(), &FlowState::Idle);
        assert!(flow.live_task().is_none());
    }

    #[test]
    fn selection_while_uploading_is_ignored() {
        let mut flow = UploadFlowController::default();
        flow.on_select(&[pdf(1000)]);
        let before_state = flow.state().clone();
        let before_task = flow.live_task();

        assert!(flow.on_select(&[pdf(2000)]).is_empty());
        assert!(flow.on_select(&[]).is_empty());
        assert_eq!(flow.state(), &before_state);
        assert_eq!(flow.live_task(), before_task);
    }

    #[test]
    fn tick_advances_and_reschedules() {
        let mut flow = UploadFlowController::default();
        let first = scheduled(&flow.on_select(&[pdf(1000)])).unwrap();
        let effects = flow.on_timer(first.id);

        assert_eq!(flow.state().progress(), Some(2));
        assert_eq!(effects[0], Effect::SetProgress(2));
        assert_eq!(effects[1], Effect::SetStatus("Uploading document...".into()));
        let next = scheduled(&effects).unwrap();
        assert_ne!(next.id, first.id);
        assert_eq!(next.kind, TaskKind::Tick);
    }

    #[test]
    fn stale_timer_is_ignored() {
        let mut flow = UploadFlowController::default();
        let first = scheduled(&flow.on_select(&[pdf(1000)])).unwrap();
        flow.on_timer(first.id);

        assert!(flow.on_timer(first.id).is_empty());
        assert_eq!(flow.state().progress(), Some(2));
    }

    #[test]
    fn reset_mid_upload_cancels_and_blocks_late_tick() {
        let mut flow = UploadFlowController::default();
        let task = scheduled(&flow.on_select(&[pdf(1000)])).unwrap();

        let effects = flow.on_reset();
        assert_eq!(effects[0], Effect::Cancel(task.id));
        assert_eq!(flow.state(), &FlowState::Idle);
        assert!(flow.live_task().is_none());

        // The host's timer fires anyway.
        assert!(flow.on_timer(task.id).is_empty());
        assert_eq!(flow.state(), &FlowState::Idle);
    }

    #[test]
    fn reset_from_idle_has_no_cancel() {
        let mut flow = UploadFlowController::default();
        let effects = flow.reset();
        assert_eq!(
            effects,
            vec![
                Effect::ShowSurface(Surface::Intake),
                Effect::ClearSelection,
                Effect::SetStep(StepIndicator::at(Step::Upload)),
            ]
        );
    }

    #[test]
    fn runs_to_completion_then_restarts() {
        let mut flow = UploadFlowController::default();
        let mut task = scheduled(&flow.on_select(&[pdf(2_097_152)])).unwrap();
        let mut last = 0;
        let mut ticks = 0;
        let final_effects = loop {
            let effects = flow.on_timer(task.id);
            if let Some(p) = flow.state().progress() {
                assert!(p >= last);
                last = p;
            }
            match scheduled(&effects) {
                Some(next) => {
                    if task.kind == TaskKind::Tick {
                        ticks += 1;
                    }
                    task = next;
                }
                None => break effects,
            }
        };

        assert_eq!(ticks, 50);
        assert_eq!(last, 100);
        assert_eq!(
            flow.state(),
            &FlowState::Complete {
                file: pdf(2_097_152)
            }
        );
        assert_eq!(
            final_effects,
            vec![
                Effect::SetStatus(COMPLETE_STATUS.into()),
                Effect::SetStep(StepIndicator::at(Step::Results)),
                Effect::ShowResults(ResultView {
                    file_name: "passport.pdf".into(),
                    size_label: "2048.00 KB".into(),
                    mime_type: "application/pdf".into(),
                }),
            ]
        );

        let effects = flow.on_restart();
        assert!(!effects.iter().any(|e| matches!(e, Effect::Cancel(_))));
        assert!(effects.contains(&Effect::ClearSelection));
        assert_eq!(flow.state(), &FlowState::Idle);
        assert_eq!(flow.step().current(), Step::Upload);
    }

    #[test]
    fn settle_is_scheduled_with_finalize_delay() {
        let config = UploadConfig {
            progress_step: 100,
            ..UploadConfig::default()
        };
        let mut flow = UploadFlowController::new(config);
        let tick = scheduled(&flow.on_select(&[pdf(1)])).unwrap();
        let effects = flow.on_timer(tick.id);
        assert_eq!(effects[0], Effect::SetProgress(100));
        assert_eq!(
            effects[1],
            Effect::SetStatus("Finalizing verification...".into())
        );
        let settle = scheduled(&effects).unwrap();
        assert_eq!(settle.kind, TaskKind::Settle);
        assert_eq!(settle.delay_ms, 500);
        // Still uploading until the settle task fires.
        assert_eq!(flow.state().progress(), Some(100));
    }

    #[test]
    fn selection_after_complete_is_ignored() {
        let config = UploadConfig {
            progress_step: 100,
            ..UploadConfig::default()
        };
        let mut flow = UploadFlowController::new(config);
        let tick = scheduled(&flow.on_select(&[pdf(1)])).unwrap();
        let settle = scheduled(&flow.on_timer(tick.id)).unwrap();
        flow.on_timer(settle.id);
        let done = flow.state().clone();
        assert!(matches!(done, FlowState::Complete { .. }));

        let effects = flow.on_select(&[SelectedFile::new("b.png", "image/png", 5)]);
        assert!(effects.is_empty());
        assert_eq!(flow.state(), &done);
        assert_eq!(flow.live_task(), None);

        // An invalid selection is not even validated.
        assert!(flow.on_select(&[]).is_empty());
    }

    #[test]
    fn effect_display_is_readable() {
        assert_eq!(Effect::SetProgress(42).to_string(), "progress 42%");
        assert_eq!(
            Effect::Cancel(TaskId(3)).to_string(),
            "cancel #3"
        );
    }
}
