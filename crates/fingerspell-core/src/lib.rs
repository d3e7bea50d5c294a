//! Core geometry for fingerspelling recognition.
//!
//! Turns the 21 hand landmarks reported by a hand detector into
//! hand-size-invariant coordinates, per-finger bend metrics and a small
//! library of geometric predicates. Letter rules live in
//! `fingerspell-letters`; nothing here knows about the alphabet.
//!
//! The crate is purely geometric and synchronous: no I/O, no detector, no
//! image types.

mod error;
mod fingers;
mod landmarks;
mod logger;
mod normalize;
mod predicates;
pub mod synth;

pub use error::LandmarkError;
pub use fingers::{analyze, analyze_finger, FingerMetric, FingerParams, HandMetrics};
pub use landmarks::*;
pub use normalize::{normalize, NormalizedHand};
pub use predicates::{
    adjacent, crossed, is_hand_vertical, pointing, spread, thumb_across_palm, touching,
    HandPredicates, Heading, PredicateParams,
};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::{default_directive, init_with_level, verbosity_level};
