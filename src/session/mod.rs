//! Game session: state machine, key events and the display boundary

mod controller;
mod key;
mod slot;
mod surface;

pub use controller::{
    KeyOutcome, MAX_GUESSES, Phase, Session, SubmitOutcome, ValidationRequest,
};
pub use key::Key;
pub use slot::Slot;
pub use surface::Surface;
