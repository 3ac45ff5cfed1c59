//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — the validated `Record` plus report/output structs.
//! - `constants.rs` — age bounds and the built-in demo roster.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no stdin/stdout side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
