//! Service layer: validation orchestration and side-effect helpers.
//!
//! ## Service map
//! - `batch.rs` — runs the validator over records and renders outcome reports.
//! - `input.rs` — decodes records from stdin (JSON array or JSON Lines).
//! - `output.rs` — JSON/text output helpers and error envelopes.
//! - `logging.rs` — tracing subscriber setup (stderr only).
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod batch;
pub mod input;
pub mod logging;
pub mod output;
