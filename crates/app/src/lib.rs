//! # repohelper-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `Navigator` — browser-history navigation
//! - Define **driving/inbound ports** as use-case structs:
//!   - `LandingService` — submit the landing form
//!   - `NavigationService` — step back from the not-found page
//!
//! ## Dependency rule
//! Depends on `repohelper-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
