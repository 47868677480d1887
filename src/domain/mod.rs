//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching provider responses
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `state.rs` — State containers with update methods (for UI-driven data)
//! - `client.rs` — Sub-client with HTTP methods

pub mod checker;
pub mod market;
pub mod search;
