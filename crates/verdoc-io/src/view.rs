//! What the widget currently shows, as plain data.
//!
//! [`ViewModel::apply`] folds one [`Effect`] into the view. Effects
//! that need the browser (timers, dialogs) come back as a
//! [`HostCommand`] for the driver to carry out.

use verdoc_flow::{Effect, ResultView, ScheduledTask, StepIndicator, Surface, TaskId};

/// Side effects that cannot be expressed as view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// Start a timer and report back when it fires.
    Schedule(ScheduledTask),
    /// Stop a timer if it is still pending.
    Cancel(TaskId),
    /// Show a blocking notification.
    Notify(String),
}

/// Rendered state of the upload widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    /// Which surface is visible.
    pub surface: Surface,
    /// Progress bar fill, `0..=100`.
    pub progress: u8,
    /// Status line under the progress bar.
    pub status: String,
    /// Step indicator position.
    pub step: StepIndicator,
    /// Result view replacing the progress bar, once verification completes.
    pub results: Option<ResultView>,
    /// Bumped to remount the file input, which drops its selection.
    pub picker_generation: u32,
}

impl Default for ViewModel {
    fn default() -> Self {
        Self {
            surface: Surface::Intake,
            progress: 0,
            status: String::new(),
            step: StepIndicator::default(),
            results: None,
            picker_generation: 0,
        }
    }
}

impl ViewModel {
    /// Apply one effect, returning the browser work it requires, if any.
    pub fn apply(&mut self, effect: Effect) -> Option<HostCommand> {
        match effect {
            Effect::ShowSurface(surface) => {
                self.surface = surface;
                self.results = None;
            }
            Effect::SetProgress(p) => self.progress = p.min(100),
            Effect::SetStatus(text) => self.status = text,
            Effect::SetStep(step) => self.step = step,
            Effect::ShowResults(view) => self.results = Some(view),
            Effect::ClearSelection => {
                self.picker_generation = self.picker_generation.wrapping_add(1);
            }
            Effect::Notify(message) => return Some(HostCommand::Notify(message)),
            Effect::Schedule(task) => return Some(HostCommand::Schedule(task)),
            Effect::Cancel(id) => return Some(HostCommand::Cancel(id)),
        }
        None
    }

    /// CSS width of the progress bar fill.
    #[must_use]
    pub fn progress_width(&self) -> String {
        format!("{}%", self.progress)
    }
}

#[cfg(test)]
mod tests {
    use verdoc_flow::{FlowEvents, SelectedFile, Step, UploadFlowController};

    use super::*;

    fn apply_all(view: &mut ViewModel, effects: Vec<Effect>) -> Vec<HostCommand> {
        effects.into_iter().filter_map(|e| view.apply(e)).collect()
    }

    #[test]
    fn starts_on_intake() {
        let view = ViewModel::default();
        assert_eq!(view.surface, Surface::Intake);
        assert_eq!(view.step.current(), Step::Upload);
        assert_eq!(view.progress_width(), "0%");
    }

    #[test]
    fn accepted_file_switches_to_progress_and_schedules() {
        let mut flow = UploadFlowController::default();
        let mut view = ViewModel::default();
        let commands = apply_all(
            &mut view,
            flow.on_select(&[SelectedFile::new("a.pdf", "application/pdf", 1)]),
        );

        assert_eq!(view.surface, Surface::Progress);
        assert_eq!(view.status, "Preparing upload...");
        assert_eq!(view.step.current(), Step::Verify);
        assert!(matches!(commands.as_slice(), [HostCommand::Schedule(_)]));
    }

    #[test]
    fn rejection_becomes_notification_only() {
        let mut flow = UploadFlowController::default();
        let mut view = ViewModel::default();
        let commands = apply_all(&mut view, flow.on_select(&[]));

        assert_eq!(commands, vec![HostCommand::Notify("No file selected".into())]);
        assert_eq!(view, ViewModel::default());
    }

    #[test]
    fn progress_renders_as_percentage() {
        let mut view = ViewModel::default();
        view.apply(Effect::SetProgress(64));
        assert_eq!(view.progress_width(), "64%");
    }

    #[test]
    fn reset_clears_results_and_remounts_picker() {
        let mut view = ViewModel {
            surface: Surface::Progress,
            results: Some(ResultView {
                file_name: "a.pdf".into(),
                size_label: "0.00 KB".into(),
                mime_type: "application/pdf".into(),
            }),
            ..ViewModel::default()
        };
        let mut flow = UploadFlowController::default();
        apply_all(&mut view, flow.on_reset());

        assert_eq!(view.surface, Surface::Intake);
        assert!(view.results.is_none());
        assert_eq!(view.picker_generation, 1);
        assert_eq!(view.step.current(), Step::Upload);
    }
}
