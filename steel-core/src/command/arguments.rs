//! This module contains the parameter handlers and the table they are looked up in.
pub mod boolean;
pub mod integer;
pub mod resource;

use std::{
    fmt::{self, Display},
    str::FromStr,
    sync::Arc,
};

use enum_dispatch::enum_dispatch;
use rustc_hash::FxHashMap;
use steel_registry::{BiomeDefinition, DataPackSource, EntityDefinition, PackError, PackScan};
use thiserror::Error;

use crate::command::error::DecreeError;
use crate::command::matcher::KeyMatcher;

pub use boolean::BooleanHandler;
pub use integer::IntegerHandler;
pub use resource::{BiomeHandler, EntityHandler, ResourceHandler};

/// Every argument type a handler can be registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    /// An entity definition from the data packs.
    Entity,
    /// A biome definition from the data packs.
    Biome,
    /// A boolean literal.
    Boolean,
    /// An integer literal.
    Integer,
}

impl ArgumentKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 4] = [Self::Entity, Self::Biome, Self::Boolean, Self::Integer];

    /// The lowercase name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Biome => "biome",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
        }
    }
}

impl Display for ArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A name that is not an [`ArgumentKind`].
#[derive(Debug, Error)]
#[error("Unknown argument kind \"{0}\"")]
pub struct ArgumentKindError(String);

impl FromStr for ArgumentKind {
    type Err = ArgumentKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ArgumentKindError(s.to_string()))
    }
}

/// A parsed argument of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentValue {
    /// See [`ArgumentKind::Entity`].
    Entity(EntityDefinition),
    /// See [`ArgumentKind::Biome`].
    Biome(BiomeDefinition),
    /// See [`ArgumentKind::Boolean`].
    Boolean(bool),
    /// See [`ArgumentKind::Integer`].
    Integer(i64),
}

/// A Rust type that is the value of exactly one [`ArgumentKind`].
pub trait ArgumentType: Sized {
    /// The kind this type is the value of.
    const KIND: ArgumentKind;

    /// Wraps the value.
    fn into_value(self) -> ArgumentValue;

    /// Unwraps a value of this kind.
    fn from_value(value: &ArgumentValue) -> Option<&Self>;
}

macro_rules! argument_type {
    ($ty:ty, $variant:ident) => {
        impl ArgumentType for $ty {
            const KIND: ArgumentKind = ArgumentKind::$variant;

            fn into_value(self) -> ArgumentValue {
                ArgumentValue::$variant(self)
            }

            fn from_value(value: &ArgumentValue) -> Option<&Self> {
                match value {
                    ArgumentValue::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }
    };
}

argument_type!(EntityDefinition, Entity);
argument_type!(BiomeDefinition, Biome);
argument_type!(bool, Boolean);
argument_type!(i64, Integer);

/// Converts between tokens and values of one argument type.
pub trait ParameterHandler {
    /// The type this handler produces.
    type Output: ArgumentType;

    /// Every value this handler knows of, with whatever failed while collecting them.
    fn possibilities(&self) -> Result<PackScan<Self::Output>, PackError>;

    /// Turns a value back into its canonical token. Inverse of [`Self::parse`].
    fn to_token(&self, value: &Self::Output) -> String;

    /// Parses a token into a value.
    fn parse(&self, token: &str) -> Result<Self::Output, DecreeError>;

    /// A token used to fill in examples. It does not need to parse.
    fn default_token(&self) -> &'static str;

    /// The rule narrowing possibilities to a token.
    fn matcher(&self) -> KeyMatcher {
        KeyMatcher::default()
    }

    /// The possibilities whose token matches `token` under [`Self::matcher`].
    fn possibilities_matching(
        &self,
        token: &str,
    ) -> Result<PackScan<Self::Output>, PackError> {
        let PackScan { values, failures } = self.possibilities()?;
        let values = self
            .matcher()
            .select(token, values, |value| self.to_token(value));
        Ok(PackScan { values, failures })
    }

    /// Returns true only for the exact kind this handler produces.
    fn supports(&self, kind: ArgumentKind) -> bool {
        kind == <Self::Output as ArgumentType>::KIND
    }
}

/// The kind-erased face of a [`ParameterHandler`], used through [`AnyHandler`].
#[enum_dispatch]
pub trait ArgumentHandler {
    /// The kind this handler produces.
    fn kind(&self) -> ArgumentKind;

    /// Tokens offered for completion of `prefix`. An empty prefix offers everything.
    fn suggest(&self, prefix: &str) -> Result<PackScan<String>, PackError>;

    /// Parses a token into a value of [`ArgumentHandler::kind`].
    fn parse_argument(&self, token: &str) -> Result<ArgumentValue, DecreeError>;

    /// The canonical token of `value`, or `None` if it is of another kind.
    fn format_argument(&self, value: &ArgumentValue) -> Option<String>;

    /// A token used to fill in examples.
    fn placeholder(&self) -> &'static str;
}

impl<H: ParameterHandler> ArgumentHandler for H {
    fn kind(&self) -> ArgumentKind {
        <H::Output as ArgumentType>::KIND
    }

    fn suggest(&self, prefix: &str) -> Result<PackScan<String>, PackError> {
        let scan = if prefix.trim().is_empty() {
            self.possibilities()?
        } else {
            self.possibilities_matching(prefix)?
        };
        Ok(PackScan {
            values: scan.values.iter().map(|value| self.to_token(value)).collect(),
            failures: scan.failures,
        })
    }

    fn parse_argument(&self, token: &str) -> Result<ArgumentValue, DecreeError> {
        self.parse(token).map(ArgumentType::into_value)
    }

    fn format_argument(&self, value: &ArgumentValue) -> Option<String> {
        <H::Output as ArgumentType>::from_value(value).map(|value| self.to_token(value))
    }

    fn placeholder(&self) -> &'static str {
        self.default_token()
    }
}

/// Every registered handler, one variant per [`ArgumentKind`].
#[enum_dispatch(ArgumentHandler)]
pub enum AnyHandler {
    /// Entity definitions.
    Entity(EntityHandler),
    /// Biome definitions.
    Biome(BiomeHandler),
    /// Boolean literals.
    Boolean(BooleanHandler),
    /// Integer literals.
    Integer(IntegerHandler),
}

/// Maps each [`ArgumentKind`] to the handler registered for it.
#[derive(Default)]
pub struct HandlerTable {
    handlers: FxHashMap<ArgumentKind, AnyHandler>,
}

impl HandlerTable {
    /// Creates a table with no handlers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table with a handler for every kind, reading resources from `source`.
    #[must_use]
    pub fn standard(source: Arc<dyn DataPackSource>, matcher: KeyMatcher) -> Self {
        let mut table = Self::new();
        table.register(EntityHandler::new(source.clone(), matcher));
        table.register(BiomeHandler::new(source, matcher));
        table.register(BooleanHandler);
        table.register(IntegerHandler);
        table
    }

    /// Registers a handler under its kind. A kind keeps its first handler.
    pub fn register(&mut self, handler: impl Into<AnyHandler>) -> bool {
        let handler = handler.into();
        let kind = handler.kind();

        if self.handlers.contains_key(&kind) {
            log::warn!("A handler for {kind} arguments is already registered");
            return false;
        }
        self.handlers.insert(kind, handler);
        true
    }

    /// The handler registered for `kind`.
    #[must_use]
    pub fn get(&self, kind: ArgumentKind) -> Option<&AnyHandler> {
        self.handlers.get(&kind)
    }

    /// Parses `token` with the handler registered for `kind`.
    pub fn parse(&self, kind: ArgumentKind, token: &str) -> Result<ArgumentValue, DecreeError> {
        self.get(kind)
            .ok_or(DecreeError::Unsupported(kind))?
            .parse_argument(token)
    }
}
