//! Command argument handling for resources loaded from data packs.
//!
//! Handlers convert between the tokens a user types and typed values, enumerate the
//! valid tokens for completion, and are looked up by [`command::arguments::ArgumentKind`]
//! through a [`command::arguments::HandlerTable`].
pub mod command;
pub mod config;
