//! Hand-off of an upload to the prediction service.
//!
//! The real service is external; the front-end ships a simulated one that
//! answers after a fixed delay.

use compute::SubmissionRequest;
use gloo_timers::callback::Timeout;
use web_sys::File;
use yew::Callback;

use crate::settings::AppSettings;

/// An in-flight submission. Dropping it abandons the submission: the
/// completion callback will not run.
pub struct PendingSubmission {
    _timer: Timeout,
}

/// Receives the picked CSV and the horizon. The request carries the
/// browser `File`, so an implementation can stream it to a remote service.
pub trait PredictionService {
    fn submit(
        &self,
        request: SubmissionRequest<File>,
        on_complete: Callback<Result<(), String>>,
    ) -> PendingSubmission;
}

/// Always succeeds after `delay_ms`, unless configured to fail.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedPredictionService {
    delay_ms: u32,
    fail: bool,
}

impl SimulatedPredictionService {
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            delay_ms: settings.submission_delay_ms,
            fail: settings.simulate_failure,
        }
    }
}

impl PredictionService for SimulatedPredictionService {
    fn submit(
        &self,
        request: SubmissionRequest<File>,
        on_complete: Callback<Result<(), String>>,
    ) -> PendingSubmission {
        log::info!(
            "Submitting {} ({:.0} bytes) with a {} horizon",
            request.content.name(),
            request.content.size(),
            request.horizon.label()
        );

        let fail = self.fail;
        let timer = Timeout::new(self.delay_ms, move || {
            let outcome = if fail {
                Err("The prediction service is not available right now".to_string())
            } else {
                Ok(())
            };
            // Deliver outside the timer callback so the receiver may drop
            // this submission.
            wasm_bindgen_futures::spawn_local(async move { on_complete.emit(outcome) });
        });

        PendingSubmission { _timer: timer }
    }
}
