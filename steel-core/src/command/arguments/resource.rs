//! Arguments naming a resource from the data packs.
use std::{marker::PhantomData, sync::Arc};

use steel_registry::{
    BiomeDefinition, DataPackSource, EntityDefinition, PackError, PackFailure, PackResource,
    PackScan, ResourceRegistry,
};

use crate::command::arguments::{ArgumentType, ParameterHandler};
use crate::command::error::DecreeError;
use crate::command::matcher::KeyMatcher;

/// Handler for entity definitions, e.g. `zombie` or `mobs/husk`.
pub type EntityHandler = ResourceHandler<EntityDefinition>;

/// Handler for biome definitions.
pub type BiomeHandler = ResourceHandler<BiomeDefinition>;

/// A handler whose values are the resources of kind `R` in every pack of a source.
///
/// Nothing is cached: every call scans the source again and drops what it loaded once
/// it returns.
pub struct ResourceHandler<R> {
    source: Arc<dyn DataPackSource>,
    matcher: KeyMatcher,
    default_token: &'static str,
    _marker: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceHandler<R> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            matcher: self.matcher,
            default_token: self.default_token,
            _marker: PhantomData,
        }
    }
}

impl<R: PackResource> ResourceHandler<R> {
    /// Creates a handler reading from `source`.
    pub fn with_default_token(
        source: Arc<dyn DataPackSource>,
        matcher: KeyMatcher,
        default_token: &'static str,
    ) -> Self {
        Self {
            source,
            matcher,
            default_token,
            _marker: PhantomData,
        }
    }
}

impl EntityHandler {
    /// Creates an entity handler reading from `source`.
    pub fn new(source: Arc<dyn DataPackSource>, matcher: KeyMatcher) -> Self {
        Self::with_default_token(source, matcher, "entity")
    }
}

impl BiomeHandler {
    /// Creates a biome handler reading from `source`.
    pub fn new(source: Arc<dyn DataPackSource>, matcher: KeyMatcher) -> Self {
        Self::with_default_token(source, matcher, "biome")
    }
}

impl<R: PackResource + ArgumentType> ParameterHandler for ResourceHandler<R> {
    type Output = R;

    fn possibilities(&self) -> Result<PackScan<R>, PackError> {
        ResourceRegistry::<R>::scan(self.source.as_ref())
    }

    fn to_token(&self, value: &R) -> String {
        value.load_key().to_string()
    }

    fn parse(&self, token: &str) -> Result<R, DecreeError> {
        let scan = self
            .possibilities_matching(token)
            .map_err(|error| DecreeError::LoadFailure {
                kind: R::NAME,
                token: token.to_string(),
                failures: vec![PackFailure::from(error)],
            })?;

        for failure in &scan.failures {
            log::warn!("Skipped while looking up {} \"{token}\": {failure}", R::NAME);
        }

        let PackScan {
            mut values,
            failures,
        } = scan;

        if values.len() > 1 {
            return Err(DecreeError::MultipleMatches {
                kind: R::NAME,
                token: token.to_string(),
                candidates: values.iter().map(|value| self.to_token(value)).collect(),
            });
        }

        if let Some(value) = values.pop() {
            return Ok(value);
        }

        // Only failures that could have held a match turn a miss into a load failure.
        let matcher = self.matcher();
        let failures: Vec<PackFailure> = failures
            .into_iter()
            .filter(|failure| {
                !token.trim().is_empty() && failure.may_hide(|key| matcher.matches(key, token))
            })
            .collect();

        if failures.is_empty() {
            Err(DecreeError::NotFound {
                kind: R::NAME,
                token: token.to_string(),
            })
        } else {
            Err(DecreeError::LoadFailure {
                kind: R::NAME,
                token: token.to_string(),
                failures,
            })
        }
    }

    fn default_token(&self) -> &'static str {
        self.default_token
    }

    fn matcher(&self) -> KeyMatcher {
        self.matcher
    }
}
