//! Charge-up timing model.
//!
//! A [`TimingWindow`] fills from 0 to 1 over a fixed duration along an
//! [`Easing`] curve. The reaction check asks whether the eased progress sits
//! inside a [`ReactionWindow`] at the instant the defender reacts.
//!
//! Everything here is a pure function of accumulated time; the only input is
//! the `dt` handed to [`TimingWindow::advance`].

mod easing;
mod window;

pub use easing::Easing;
pub use window::{ReactionWindow, TimingError, TimingWindow};
