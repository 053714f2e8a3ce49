//! Version scheme detection and comparison engine
//!
//! This module is the decision core of the crate: it classifies version
//! strings into schemes, compares two versions under a shared scheme, and
//! maps the resulting change onto an update status. It is pure and performs
//! no I/O; everything network-facing lives in [`crate::resolver`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Scheme    │────▶│  Comparator │────▶│   Status    │
//! │  (detect)   │     │  (compare)  │     │ (classify)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`scheme`]: Scheme registry, patterns, and detection
//! - [`compare`]: Field-by-field version comparison
//! - [`status`]: Update status classification
//! - [`error`]: Error types for detection and comparison

pub mod compare;
pub mod error;
pub mod scheme;
pub mod status;
