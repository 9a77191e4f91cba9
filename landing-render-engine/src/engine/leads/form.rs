use std::sync::{Arc, Mutex};
use std::time::Duration;

use bevy::prelude::*;
use content::tuning::{FORM_RESET_DELAY_SECS, RECIPIENT_EMAIL};

use super::relay::{LeadRecord, RelayError};

#[cfg(not(target_arch = "wasm32"))]
use super::relay::{FormsubmitRelay, LeadRelay};
#[cfg(target_arch = "wasm32")]
use super::relay::{build_relay_request, submit_via_fetch};

/// Lifecycle of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Which text field receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldFocus {
    #[default]
    Name,
    Email,
}

impl FieldFocus {
    pub fn next(self) -> Self {
        match self {
            FieldFocus::Name => FieldFocus::Email,
            FieldFocus::Email => FieldFocus::Name,
        }
    }
}

fn generic_error_message() -> String {
    format!("Failed to submit. Please try again or email us directly at {RECIPIENT_EMAIL}")
}

/// The wishlist form's whole state. Field contents survive a failed
/// attempt so the visitor can retry without retyping.
#[derive(Resource, Default)]
pub struct WishlistForm {
    pub name: String,
    pub email: String,
    pub status: FormStatus,
    pub error_message: String,
    pub focus: FieldFocus,
    reset_delay: Option<Timer>,
}

impl WishlistForm {
    /// Starts a submission. Returns the lead to relay, or `None` when
    /// the email is blank or an attempt is already in flight.
    pub fn begin_submit(&mut self) -> Option<LeadRecord> {
        if self.status == FormStatus::Submitting {
            return None;
        }
        let email = self.email.trim();
        if email.is_empty() {
            return None;
        }

        self.status = FormStatus::Submitting;
        self.error_message.clear();

        let name = self.name.trim();
        Some(LeadRecord {
            name: (!name.is_empty()).then(|| name.to_string()),
            email: email.to_string(),
        })
    }

    /// Lands the relay's verdict. Success clears the fields; failure
    /// keeps them and shows one generic message regardless of cause.
    pub fn apply_outcome(&mut self, outcome: Result<(), RelayError>) {
        match outcome {
            Ok(()) => {
                self.status = FormStatus::Success;
                self.name.clear();
                self.email.clear();
            }
            Err(_) => {
                self.status = FormStatus::Error;
                self.error_message = generic_error_message();
            }
        }
    }

    /// Returns the error state to idle so the visitor can edit and
    /// resubmit.
    pub fn retry(&mut self) {
        if self.status == FormStatus::Error {
            self.status = FormStatus::Idle;
            self.error_message.clear();
        }
    }

    /// Arms the delayed reset that runs when the modal closes. The
    /// delay keeps the status from visibly flickering mid-close.
    pub fn schedule_reset(&mut self) {
        self.reset_delay = Some(Timer::from_seconds(FORM_RESET_DELAY_SECS, TimerMode::Once));
    }

    pub fn has_pending_reset(&self) -> bool {
        self.reset_delay.is_some()
    }

    /// Advances the reset timer. An in-flight submission is left alone;
    /// its outcome still lands through [`Self::apply_outcome`].
    pub fn tick(&mut self, delta: Duration) {
        let Some(timer) = &mut self.reset_delay else {
            return;
        };
        if timer.tick(delta).finished() {
            self.reset_delay = None;
            if self.status != FormStatus::Submitting {
                self.status = FormStatus::Idle;
                self.error_message.clear();
            }
        }
    }
}

/// Fired by the UI when the visitor submits the wishlist form.
#[derive(Event)]
pub struct SubmitLeadEvent;

/// Hand-off point between background relay tasks and the ECS. Tasks
/// push outcomes; a frame system drains them.
#[derive(Resource, Clone, Default)]
pub struct RelayOutcomeQueue(Arc<Mutex<Vec<Result<(), RelayError>>>>);

impl RelayOutcomeQueue {
    pub fn push(&self, outcome: Result<(), RelayError>) {
        if let Ok(mut queue) = self.0.lock() {
            queue.push(outcome);
        }
    }

    fn drain(&self) -> Vec<Result<(), RelayError>> {
        self.0
            .lock()
            .map(|mut queue| std::mem::take(&mut *queue))
            .unwrap_or_default()
    }
}

/// The transport in use. Swappable so tests never touch the network.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Resource, Clone)]
pub struct ActiveRelay(pub Arc<dyn LeadRelay>);

#[cfg(not(target_arch = "wasm32"))]
impl Default for ActiveRelay {
    fn default() -> Self {
        ActiveRelay(Arc::new(FormsubmitRelay))
    }
}

/// Turns submit events into background relay calls.
pub fn dispatch_lead_submissions(
    mut events: EventReader<SubmitLeadEvent>,
    mut form: ResMut<WishlistForm>,
    queue: Res<RelayOutcomeQueue>,
    #[cfg(not(target_arch = "wasm32"))] relay: Res<ActiveRelay>,
) {
    for _ in events.read() {
        let Some(lead) = form.begin_submit() else {
            continue;
        };
        info!("Submitting wishlist lead for {}", lead.email);

        let queue = queue.clone();

        #[cfg(not(target_arch = "wasm32"))]
        {
            let relay = relay.0.clone();
            bevy::tasks::IoTaskPool::get()
                .spawn(async move {
                    queue.push(relay.submit(&lead));
                })
                .detach();
        }

        #[cfg(target_arch = "wasm32")]
        {
            let request = build_relay_request(&lead);
            wasm_bindgen_futures::spawn_local(async move {
                queue.push(submit_via_fetch(request).await);
            });
        }
    }
}

/// Drains finished relay calls into the form.
pub fn poll_relay_outcomes(queue: Res<RelayOutcomeQueue>, mut form: ResMut<WishlistForm>) {
    for outcome in queue.drain() {
        match &outcome {
            Ok(()) => info!("Lead relay acknowledged the submission"),
            Err(error) => warn!("Lead relay failure: {error}"),
        }
        form.apply_outcome(outcome);
    }
}

/// Advances the delayed post-close reset.
pub fn tick_form_reset(mut form: ResMut<WishlistForm>, time: Res<Time>) {
    if !form.has_pending_reset() {
        return;
    }
    form.tick(time.delta());
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic stand-in for the network transport.
    struct StubRelay {
        accept: bool,
    }

    impl LeadRelay for StubRelay {
        fn submit(&self, _lead: &LeadRecord) -> Result<(), RelayError> {
            if self.accept {
                Ok(())
            } else {
                Err(RelayError::Network("connection refused".to_string()))
            }
        }
    }

    fn filled_form() -> WishlistForm {
        WishlistForm {
            name: "Ayesha".to_string(),
            email: "ayesha@example.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn successful_round_trip_clears_fields() {
        let mut form = filled_form();
        let lead = form.begin_submit().expect("submit should start");
        assert_eq!(form.status, FormStatus::Submitting);

        let relay = StubRelay { accept: true };
        form.apply_outcome(relay.submit(&lead));

        assert_eq!(form.status, FormStatus::Success);
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
    }

    #[test]
    fn failure_keeps_fields_and_shows_generic_message() {
        let mut form = filled_form();
        let lead = form.begin_submit().expect("submit should start");

        let relay = StubRelay { accept: false };
        form.apply_outcome(relay.submit(&lead));

        assert_eq!(form.status, FormStatus::Error);
        assert_eq!(form.email, "ayesha@example.com");
        assert!(form.error_message.contains(RECIPIENT_EMAIL));
    }

    #[test]
    fn blank_email_never_submits() {
        let mut form = WishlistForm {
            email: "   ".to_string(),
            ..Default::default()
        };
        assert!(form.begin_submit().is_none());
        assert_eq!(form.status, FormStatus::Idle);
    }

    #[test]
    fn concurrent_submit_is_ignored() {
        let mut form = filled_form();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn retry_returns_error_to_idle() {
        let mut form = filled_form();
        let _ = form.begin_submit();
        form.apply_outcome(Err(RelayError::Rejected("nope".to_string())));

        form.retry();
        assert_eq!(form.status, FormStatus::Idle);
        assert!(form.error_message.is_empty());
        assert_eq!(form.email, "ayesha@example.com");
    }

    #[test]
    fn reset_fires_after_the_delay() {
        let mut form = filled_form();
        let _ = form.begin_submit();
        form.apply_outcome(Ok(()));
        form.schedule_reset();

        form.tick(Duration::from_millis(300));
        assert_eq!(form.status, FormStatus::Success);

        form.tick(Duration::from_millis(300));
        assert_eq!(form.status, FormStatus::Idle);
        assert!(!form.has_pending_reset());
    }

    #[test]
    fn reset_leaves_inflight_submission_alone() {
        let mut form = filled_form();
        let _ = form.begin_submit();
        form.schedule_reset();

        form.tick(Duration::from_secs(1));
        assert_eq!(form.status, FormStatus::Submitting);

        form.apply_outcome(Ok(()));
        assert_eq!(form.status, FormStatus::Success);
    }

    #[test]
    fn whitespace_name_is_omitted_from_the_lead() {
        let mut form = WishlistForm {
            name: "  ".to_string(),
            email: "lead@example.com".to_string(),
            ..Default::default()
        };
        let lead = form.begin_submit().expect("submit should start");
        assert_eq!(lead.name, None);
        assert_eq!(lead.email, "lead@example.com");
    }
}
