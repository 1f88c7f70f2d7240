//! # Drey
//!
//! A drey is a squirrel's nest; this one is a small CRUD service that keeps
//! a registry of squirrels in a single JSON file and serves it over HTTP.
//!
//! The crate is three layers, outside in:
//!
//! ```text
//! server  - axum routes and handlers; verbs/paths -> repository calls,
//!           repository results -> status codes and JSON bodies
//! repo    - domain CRUD (list, get, create, update, delete); owns record
//!           shape and id semantics, reopens storage on every call
//! store   - whole-file persistence of an ordered record sequence; one
//!           JSON array per file, full read / full overwrite, no index
//! ```
//!
//! The store is deliberately naive: every operation is a full-file round
//! trip, and overlapping load-mutate-save sequences from concurrent writers
//! are last-save-wins. That trade-off is part of the design, not an
//! accident — callers needing multi-writer safety must add their own lock
//! around a whole operation.
//!
//! Records are open JSON objects (`id`, `name`, `size` plus whatever else a
//! client stored), so unknown fields survive every round trip.

pub mod error;
pub mod model;
pub mod repo;
pub mod server;
pub mod store;
