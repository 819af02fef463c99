//! # repohelper-domain
//!
//! Pure domain model for the repohelper front-end.
//!
//! ## Responsibilities
//! - Foundational types: error conventions
//! - Define the **Mode** (question or flowchart) and its framing text
//! - Define the **Landing form** (link, mode, prompt) and its submission snapshot
//! - Define **Routes** and the path-to-view resolution rule
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod form;
pub mod mode;
pub mod route;
