//! Resolution criteria.

use crate::config::SecurityConfiguration;
use crate::error::ResolveError;

/// The configuration chain handed to a resolver, highest priority first.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationCriterion<C = SecurityConfiguration> {
    configurations: Vec<C>,
}

impl<C> ConfigurationCriterion<C> {
    /// Build a criterion. Fails if `configurations` is empty.
    pub fn new(configurations: Vec<C>) -> Result<Self, ResolveError> {
        if configurations.is_empty() {
            return Err(ResolveError::InvalidInput(
                "configuration list cannot be empty".to_string(),
            ));
        }
        Ok(Self { configurations })
    }

    /// The chain, highest priority first.
    pub fn configurations(&self) -> &[C] {
        &self.configurations
    }
}

/// Criteria for a resolver call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriteriaSet<C = SecurityConfiguration> {
    configuration: Option<ConfigurationCriterion<C>>,
}

impl<C> Default for CriteriaSet<C> {
    fn default() -> Self {
        Self { configuration: None }
    }
}

impl<C> CriteriaSet<C> {
    /// An empty criteria set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Criteria set holding the given configuration chain.
    pub fn with_configurations(configurations: Vec<C>) -> Result<Self, ResolveError> {
        Ok(Self {
            configuration: Some(ConfigurationCriterion::new(configurations)?),
        })
    }

    /// Set the configuration criterion.
    pub fn set_configuration(&mut self, criterion: ConfigurationCriterion<C>) {
        self.configuration = Some(criterion);
    }

    /// The configuration criterion, if present.
    pub fn configuration(&self) -> Option<&ConfigurationCriterion<C>> {
        self.configuration.as_ref()
    }

    /// The configuration chain, or `InvalidInput` if the criterion is missing.
    pub fn require_configurations(&self) -> Result<&[C], ResolveError> {
        self.configuration
            .as_ref()
            .map(ConfigurationCriterion::configurations)
            .ok_or_else(|| {
                ResolveError::InvalidInput(
                    "criteria set does not contain a configuration criterion".to_string(),
                )
            })
    }
}
