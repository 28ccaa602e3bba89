//! State of the upload page: `Idle -> Submitting -> Navigate | Idle`.
//!
//! The machine is pure; the page owns the timer or request that eventually
//! calls [`UploadState::complete`]. `B` is the file contents as the platform
//! hands them over (a browser `File`, bytes in tests); it travels with the
//! validated descriptor into the [`SubmissionRequest`]. Every submission gets a fresh ticket and
//! completions carrying any other ticket are reported as stale, so a late
//! answer after a cancel or a newer submission cannot move the page.

use model::{Horizon, UploadFile};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{ComputeError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SubmissionTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting { ticket: SubmissionTicket },
}

/// What the page hands to the prediction service.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRequest<B> {
    pub ticket: SubmissionTicket,
    pub file: UploadFile,
    pub content: B,
    pub horizon: Horizon,
}

/// Outcome of a finished submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// Go to the results page.
    Navigate,
    /// Back to idle; the error is shown to the user.
    Failed(ComputeError),
    /// The submission was cancelled or superseded; nothing changes.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadState<B> {
    horizon: Horizon,
    file: Option<(UploadFile, B)>,
    phase: Phase,
    next_ticket: u64,
}

impl<B: Clone> Default for UploadState<B> {
    fn default() -> Self {
        Self::new(Horizon::default())
    }
}

impl<B: Clone> UploadState<B> {
    pub fn new(horizon: Horizon) -> Self {
        Self {
            horizon,
            file: None,
            phase: Phase::Idle,
            next_ticket: 1,
        }
    }

    pub fn horizon(&self) -> Horizon {
        self.horizon
    }

    pub fn file(&self) -> Option<&UploadFile> {
        self.file.as_ref().map(|(file, _)| file)
    }

    pub fn content(&self) -> Option<&B> {
        self.file.as_ref().map(|(_, content)| content)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting { .. })
    }

    /// The submit control is enabled only with a file and no submission
    /// in flight.
    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.is_submitting()
    }

    /// Ignored while a submission is in flight.
    pub fn select_horizon(&mut self, horizon: Horizon) {
        if self.is_submitting() {
            debug!("Ignoring horizon change during submission");
            return;
        }
        self.horizon = horizon;
    }

    /// Replaces the selected file if it is an acceptable CSV. On error the
    /// previous selection is kept.
    pub fn offer_file(&mut self, file: UploadFile, content: B) -> Result<()> {
        if self.is_submitting() {
            debug!(file = file.name(), "Ignoring file during submission");
            return Ok(());
        }
        file.validate()?;
        info!(file = file.name(), size_bytes = file.size_bytes(), "File selected");
        self.file = Some((file, content));
        Ok(())
    }

    pub fn clear_file(&mut self) {
        if !self.is_submitting() {
            self.file = None;
        }
    }

    /// Starts a submission. Returns `None` without a file or while another
    /// submission is in flight.
    pub fn begin_submission(&mut self) -> Option<SubmissionRequest<B>> {
        if self.is_submitting() {
            return None;
        }
        let (file, content) = self.file.clone()?;

        let ticket = SubmissionTicket(self.next_ticket);
        self.next_ticket += 1;
        self.phase = Phase::Submitting { ticket };

        info!(ticket = ticket.0, horizon = self.horizon.months(), "Submission started");
        Some(SubmissionRequest {
            ticket,
            file,
            content,
            horizon: self.horizon,
        })
    }

    pub fn complete(
        &mut self,
        ticket: SubmissionTicket,
        outcome: std::result::Result<(), String>,
    ) -> Completion {
        match self.phase {
            Phase::Submitting { ticket: current } if current == ticket => {}
            _ => {
                debug!(ticket = ticket.0, "Discarding stale completion");
                return Completion::Stale;
            }
        }

        self.phase = Phase::Idle;
        match outcome {
            Ok(()) => {
                info!(ticket = ticket.0, "Submission succeeded");
                Completion::Navigate
            }
            Err(message) => {
                warn!(ticket = ticket.0, "Submission failed: {}", message);
                Completion::Failed(ComputeError::SubmissionFailed(message))
            }
        }
    }

    /// Abandons the in-flight submission, if any.
    pub fn cancel(&mut self) {
        if let Phase::Submitting { ticket } = self.phase {
            debug!(ticket = ticket.0, "Submission cancelled");
            self.phase = Phase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::init_test_tracing;
    use model::ModelError;

    type State = UploadState<&'static str>;

    const CONTENT: &str = "fecha,ventas_previas,otras_vars\n2023-01-01,5000,variable1\n";

    fn csv() -> UploadFile {
        UploadFile::new("sales.csv", Some("text/csv".to_string()), 2048)
    }

    #[test]
    fn test_submit_without_file_is_noop() {
        let mut state = State::default();
        let before = state.clone();

        assert_eq!(state.begin_submission(), None);
        assert_eq!(state, before);
        assert!(!state.can_submit());
    }

    #[test]
    fn test_txt_file_rejected_and_state_unchanged() {
        let mut state = State::default();
        let before = state.clone();

        let err = state
            .offer_file(UploadFile::new("notes.txt", Some("text/plain".to_string()), 10), "notes")
            .unwrap_err();

        assert!(matches!(
            err,
            ComputeError::Model(ModelError::InvalidFileType { .. })
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn test_empty_file_rejected_keeps_previous_selection() {
        let mut state = State::default();
        state.offer_file(csv(), CONTENT).unwrap();

        let err = state.offer_file(UploadFile::new("empty.csv", None, 0), "").unwrap_err();

        assert!(matches!(err, ComputeError::Model(ModelError::EmptyFile { .. })));
        assert_eq!(state.file().map(UploadFile::name), Some("sales.csv"));
        assert_eq!(state.content(), Some(&CONTENT));
    }

    #[test]
    fn test_successful_submission_navigates() {
        let mut state = State::default();
        state.select_horizon(Horizon::TwelveMonths);
        state.offer_file(csv(), CONTENT).unwrap();

        let request = state.begin_submission().expect("File is selected");
        assert_eq!(request.horizon, Horizon::TwelveMonths);
        assert_eq!(request.file.name(), "sales.csv");
        assert_eq!(request.content, CONTENT);
        assert!(state.is_submitting());
        assert_eq!(state.begin_submission(), None);

        assert_eq!(state.complete(request.ticket, Ok(())), Completion::Navigate);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_failed_submission_returns_to_idle() {
        let mut state = State::default();
        state.offer_file(csv(), CONTENT).unwrap();
        let request = state.begin_submission().unwrap();

        let completion = state.complete(request.ticket, Err("service down".to_string()));

        assert_eq!(
            completion,
            Completion::Failed(ComputeError::SubmissionFailed("service down".to_string()))
        );
        assert!(state.can_submit());
    }

    #[test]
    fn test_horizon_locked_while_submitting() {
        let mut state = State::default();
        state.offer_file(csv(), CONTENT).unwrap();
        state.begin_submission().unwrap();

        state.select_horizon(Horizon::OneMonth);
        assert_eq!(state.horizon(), Horizon::SixMonths);
    }

    #[test]
    fn test_completion_after_cancel_is_stale() {
        let _guard = init_test_tracing();
        let mut state = State::default();
        state.offer_file(csv(), CONTENT).unwrap();
        let first = state.begin_submission().unwrap();
        state.cancel();

        assert_eq!(state.complete(first.ticket, Ok(())), Completion::Stale);
        assert_eq!(state.phase(), Phase::Idle);

        let second = state.begin_submission().unwrap();
        assert_ne!(first.ticket, second.ticket);
        assert_eq!(state.complete(first.ticket, Ok(())), Completion::Stale);
        assert!(state.is_submitting());
        assert_eq!(state.complete(second.ticket, Ok(())), Completion::Navigate);
    }

    #[test]
    fn test_clear_file_drops_content() {
        let mut state = State::default();
        state.offer_file(csv(), CONTENT).unwrap();
        state.clear_file();

        assert_eq!(state.content(), None);
        assert_eq!(state.begin_submission(), None);
    }
}
