//! Lead capture: the wishlist form and its relay.
//!
//! The form is a small state machine (idle → submitting → success |
//! error) living in a resource; the relay is the one real I/O boundary
//! in the application.
//!
//! ## Submission flow
//!
//! ```text
//! SubmitLeadEvent
//!   └─> dispatch_lead_submissions()
//!       ├─> WishlistForm::begin_submit()      (idle → submitting)
//!       └─> background task: POST multipart to the relay
//!           └─> RelayOutcomeQueue             (thread-safe hand-off)
//!               └─> poll_relay_outcomes()
//!                   └─> WishlistForm::apply_outcome()
//! ```
//!
//! The relay contract (POST + JSON success flag) sits behind
//! [`relay::build_relay_request`] / [`relay::interpret_relay_response`]
//! and the [`relay::LeadRelay`] transport trait, so the third-party
//! service can be swapped for a first-party backend without touching the
//! state machine. Distinct failure causes (network, rejection, malformed
//! response) are logged; the user sees one generic retry message.

/// Relay request construction, response interpretation and transports.
pub mod relay;

/// The wishlist form state machine and its ECS systems.
pub mod form;
