//! # repohelper-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **compiled front-end** (wasm, js, css) straight from disk
//! - Answer every other path with the **SPA shell** (`index.html`) so the
//!   client-side router can pick the view
//! - Mirror the client routing rule in the status code: `200` for `/`,
//!   `404` for everything else
//! - Expose a `/health` probe
//!
//! ## Dependency rule
//! Depends on `repohelper-domain` for the routing rule. Never leaks axum types
//! into the domain.

pub mod router;
pub mod shell;
pub mod state;
