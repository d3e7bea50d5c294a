//! Fingerspelling practice core.
//!
//! Takes one frame of hand landmarks at a time from an external hand
//! detector and reports whether the hand forms the letter being practiced.
//!
//! This crate provides:
//! - re-exports of the geometry (`fingerspell::core`) and rule
//!   (`fingerspell::letters`) crates
//! - [`FramePipeline`], the stateless frame-to-feedback function
//! - [`Session`], the owned letter-navigation state with synchronous
//!   change notifications
//! - JSON recordings, configs and reports in [`io`]
//!
//! ## Quickstart
//!
//! ```
//! use fingerspell::{ClassificationResult, FramePipeline, Session};
//! use fingerspell::letters::{reference_pose, Letter};
//!
//! let pipeline = FramePipeline::default();
//! let mut session = Session::new();
//! session.set_letter("w");
//!
//! let frame = reference_pose(Letter::W).unwrap().into_vec();
//! let result = pipeline.process_for_session(&mut session, Some(&frame));
//! assert_eq!(result, ClassificationResult::Correct);
//!
//! // no hand detected
//! assert_eq!(
//!     pipeline.process_for_session(&mut session, None).message(),
//!     "Waiting..."
//! );
//! ```
//!
//! ## Threading
//!
//! Everything is synchronous. A [`Session`] is not `Send`; keep it and the
//! pipeline on the thread that receives frames. Hosts with several capture
//! threads should funnel frames through one queue first.

pub use fingerspell_core as core;
pub use fingerspell_letters as letters;

pub use fingerspell_core::{HandLandmarks, LandmarkError, LandmarkPoint, HAND_LANDMARK_COUNT};
pub use fingerspell_letters::{ClassificationResult, ClassifierParams, Letter, UnsupportedLetter};

pub mod io;
mod pipeline;
mod session;

pub use pipeline::{FrameEvaluation, FramePipeline};
pub use session::{Session, SessionEvent, SubscriptionId};
