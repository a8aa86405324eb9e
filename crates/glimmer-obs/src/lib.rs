//! Field recording and point detectors for Glimmer simulations.
//!
//! [`FieldHistory`] is the write-once record of the Ez field over a
//! whole run, one frame per time step. A [`Detector`] extracts the
//! time series at a single cell from that record, either as the raw
//! signed field (coherent) or elementwise absolute value (magnitude).
//! Detectors never perturb the fields they read.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod detector;
pub mod history;

pub use detector::{Detector, DetectorMode};
pub use history::FieldHistory;
