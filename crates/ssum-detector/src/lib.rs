//! Rule-based "썸" detector.
//!
//! Scores a free-text description of a romantic situation against a keyword
//! lexicon, or a fixed yes/no questionnaire against per-question weights, then
//! maps the score onto a High / Mixed / Low band with a canned narrative.

pub mod analysis;
pub mod config;
pub mod error;
pub mod session;
pub mod telemetry;
