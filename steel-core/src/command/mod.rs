//! This module contains everything needed to turn command tokens into typed arguments.
pub mod arguments;
pub mod error;
pub mod matcher;

pub use arguments::{
    AnyHandler, ArgumentHandler, ArgumentKind, ArgumentType, ArgumentValue, HandlerTable,
    ParameterHandler,
};
pub use error::DecreeError;
pub use matcher::KeyMatcher;
