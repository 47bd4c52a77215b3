//! Client-side state synchronization: start → poll → move → reconcile.
//!
//! [`GameController`] is a plain state machine. It never performs I/O: each
//! intent yields a sequenced [`Request`], [`execute`] runs it against a
//! `GameApi`, and [`GameController::apply`] reconciles the [`Response`].
//! [`GameDriver`] wires the three together with a tokio runtime and the
//! 2-second [`Poller`].

pub mod controller;
pub mod driver;
pub mod executor;
pub mod poller;
pub mod state;

pub use controller::{GameController, Outcome, Request, RequestKind, Response};
pub use driver::{GameDriver, RuntimeEvent};
pub use executor::execute;
pub use poller::{POLL_INTERVAL, Poller};
pub use state::{Action, Theme, ViewState};
