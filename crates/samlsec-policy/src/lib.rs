//! Whitelist/blacklist resolution over prioritized security configurations.
//!
//! A resolution call takes a chain of [`SecurityConfiguration`]s, highest
//! priority first, and produces the effective whitelist, effective blacklist,
//! effective [`Precedence`] and an [`AlgorithmPredicate`] that admits or refuses
//! individual algorithm identifiers.
//!
//! List merging is transitive: the first configuration with a non-empty list is
//! the base, and lower-priority lists are folded in only while every
//! contributing configuration has its merge flag set. A contributing
//! configuration without the flag is still included, then ends the walk.
//! Configurations with an empty list are skipped whatever their flag says.

mod config;
mod criteria;
mod error;
mod normalize;
mod params;
mod predicate;
mod result;

pub use config::{Precedence, SecurityConfiguration};
pub use criteria::{ConfigurationCriterion, CriteriaSet};
pub use error::ResolveError;
pub use normalize::{normalize_identifier, normalize_identifiers};
pub use params::WhitelistBlacklistParameters;
pub use predicate::AlgorithmPredicate;
pub use result::{Decision, DenialReason};

use std::collections::BTreeSet;

/// Resolve the effective whitelist of a chain.
///
/// An empty chain, or a chain where no configuration has a whitelist, yields
/// an empty set.
pub fn resolve_effective_whitelist<C>(chain: &[C]) -> BTreeSet<String>
where
    C: AsRef<SecurityConfiguration>,
{
    resolve_effective_list(
        chain,
        "whitelist",
        SecurityConfiguration::whitelist,
        SecurityConfiguration::is_whitelist_merge,
    )
}

/// Resolve the effective blacklist of a chain.
pub fn resolve_effective_blacklist<C>(chain: &[C]) -> BTreeSet<String>
where
    C: AsRef<SecurityConfiguration>,
{
    resolve_effective_list(
        chain,
        "blacklist",
        SecurityConfiguration::blacklist,
        SecurityConfiguration::is_blacklist_merge,
    )
}

/// Resolve the effective precedence: that of the highest-priority
/// configuration, or [`Precedence::Whitelist`] for an empty chain.
pub fn resolve_precedence<C>(chain: &[C]) -> Precedence
where
    C: AsRef<SecurityConfiguration>,
{
    chain
        .first()
        .map(|config| config.as_ref().precedence())
        .unwrap_or_default()
}

/// Resolve the admission predicate of a chain.
pub fn resolve_predicate<C>(chain: &[C]) -> AlgorithmPredicate
where
    C: AsRef<SecurityConfiguration>,
{
    let whitelist = resolve_effective_whitelist(chain);
    let blacklist = resolve_effective_blacklist(chain);
    let precedence = resolve_precedence(chain);
    let predicate = AlgorithmPredicate::from_lists(&whitelist, &blacklist, precedence);
    tracing::debug!(
        mode = predicate.mode(),
        whitelist = whitelist.len(),
        blacklist = blacklist.len(),
        precedence = precedence.name(),
        "resolved algorithm predicate"
    );
    predicate
}

/// Resolve lists and precedence of a chain into `params`.
///
/// Both effective lists are written even when only one of them will be
/// consulted; `params.predicate()` applies the precedence.
pub fn resolve_and_populate<C>(params: &mut WhitelistBlacklistParameters, chain: &[C])
where
    C: AsRef<SecurityConfiguration>,
{
    params.whitelist = resolve_effective_whitelist(chain);
    params.blacklist = resolve_effective_blacklist(chain);
    params.precedence = resolve_precedence(chain);
}

/// Walk the chain, folding lists while merging is allowed.
fn resolve_effective_list<C, L, M>(
    chain: &[C],
    kind: &'static str,
    list: L,
    merge: M,
) -> BTreeSet<String>
where
    C: AsRef<SecurityConfiguration>,
    L: Fn(&SecurityConfiguration) -> &BTreeSet<String>,
    M: Fn(&SecurityConfiguration) -> bool,
{
    let mut accumulator = BTreeSet::new();
    for (index, config) in chain.iter().enumerate() {
        let config = config.as_ref();
        let ids = list(config);
        // A configuration without this list takes no part in the walk
        if ids.is_empty() {
            continue;
        }
        accumulator.extend(ids.iter().cloned());
        if !merge(config) {
            tracing::debug!(
                list = kind,
                stopped_at = index,
                size = accumulator.len(),
                "merge stopped"
            );
            break;
        }
    }
    accumulator
}

/// Criteria-driven front end over the chain functions.
///
/// Stateless; a single instance may serve any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainResolver;

impl ChainResolver {
    /// Create a resolver.
    pub fn new() -> Self {
        Self
    }

    /// Resolve whitelist, blacklist and precedence for the criteria.
    pub fn resolve<C>(
        &self,
        criteria: &CriteriaSet<C>,
    ) -> Result<WhitelistBlacklistParameters, ResolveError>
    where
        C: AsRef<SecurityConfiguration>,
    {
        let chain = criteria.require_configurations()?;
        let mut params = WhitelistBlacklistParameters::default();
        resolve_and_populate(&mut params, chain);
        Ok(params)
    }

    /// Resolve the admission predicate for the criteria.
    pub fn resolve_predicate<C>(
        &self,
        criteria: &CriteriaSet<C>,
    ) -> Result<AlgorithmPredicate, ResolveError>
    where
        C: AsRef<SecurityConfiguration>,
    {
        let chain = criteria.require_configurations()?;
        Ok(resolve_predicate(chain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_chain() {
        let chain: Vec<SecurityConfiguration> = vec![];
        assert!(resolve_effective_whitelist(&chain).is_empty());
        assert!(resolve_effective_blacklist(&chain).is_empty());
        assert_eq!(resolve_precedence(&chain), Precedence::Whitelist);
        assert!(resolve_predicate(&chain).is_allowed("anything"));
    }

    #[test]
    fn test_first_non_empty_is_base() {
        let chain = vec![
            SecurityConfiguration::new(),
            SecurityConfiguration::new().with_whitelist(["A"]),
            SecurityConfiguration::new().with_whitelist(["B"]),
        ];
        assert_eq!(resolve_effective_whitelist(&chain), set(&["A"]));
    }

    #[test]
    fn test_merge_flag_on_empty_leading_config_is_irrelevant() {
        let chain = vec![
            SecurityConfiguration::new().with_whitelist_merge(false),
            SecurityConfiguration::new().with_whitelist(["A"]).with_whitelist_merge(true),
            SecurityConfiguration::new().with_whitelist(["B"]),
        ];
        assert_eq!(resolve_effective_whitelist(&chain), set(&["A", "B"]));
    }

    #[test]
    fn test_config_without_list_does_not_stop_merge() {
        let chain = vec![
            SecurityConfiguration::new().with_blacklist(["A"]).with_blacklist_merge(true),
            SecurityConfiguration::new(),
            SecurityConfiguration::new().with_blacklist(["B"]),
        ];
        assert_eq!(resolve_effective_blacklist(&chain), set(&["A", "B"]));
    }

    #[test]
    fn test_whitelist_only_config_passes_blacklist_through() {
        let chain = vec![
            SecurityConfiguration::new().with_blacklist(["A"]).with_blacklist_merge(true),
            SecurityConfiguration::new().with_whitelist(["W"]),
            SecurityConfiguration::new().with_blacklist(["B"]),
        ];
        assert_eq!(resolve_effective_blacklist(&chain), set(&["A", "B"]));
        assert_eq!(resolve_effective_whitelist(&chain), set(&["W"]));
    }

    #[test]
    fn test_lists_resolve_independently() {
        let chain = vec![
            SecurityConfiguration::new()
                .with_whitelist(["A"])
                .with_blacklist(["X"])
                .with_blacklist_merge(true),
            SecurityConfiguration::new()
                .with_whitelist(["B"])
                .with_blacklist(["Y"]),
        ];
        assert_eq!(resolve_effective_whitelist(&chain), set(&["A"]));
        assert_eq!(resolve_effective_blacklist(&chain), set(&["X", "Y"]));
    }

    #[test]
    fn test_precedence_from_first_config() {
        let chain = vec![
            SecurityConfiguration::new().with_precedence(Precedence::Blacklist),
            SecurityConfiguration::new().with_precedence(Precedence::Whitelist),
        ];
        assert_eq!(resolve_precedence(&chain), Precedence::Blacklist);
    }

    #[test]
    fn test_resolve_and_populate_writes_both_lists() {
        let chain = vec![SecurityConfiguration::new()
            .with_whitelist(["A"])
            .with_blacklist(["X"])
            .with_precedence(Precedence::Blacklist)];
        let mut params = WhitelistBlacklistParameters::default();
        resolve_and_populate(&mut params, &chain);
        assert_eq!(params.whitelist, set(&["A"]));
        assert_eq!(params.blacklist, set(&["X"]));
        assert_eq!(params.precedence, Precedence::Blacklist);
        assert!(!params.predicate().is_allowed("X"));
    }

    #[test]
    fn test_resolve_and_populate_overwrites_previous_values() {
        let mut params = WhitelistBlacklistParameters {
            whitelist: set(&["stale"]),
            blacklist: set(&["stale"]),
            precedence: Precedence::Blacklist,
        };
        let chain: Vec<SecurityConfiguration> = vec![];
        resolve_and_populate(&mut params, &chain);
        assert!(params.is_unrestricted());
        assert_eq!(params.precedence, Precedence::Whitelist);
    }

    #[test]
    fn test_chain_resolver_requires_criterion() {
        let resolver = ChainResolver::new();
        let criteria = CriteriaSet::<SecurityConfiguration>::new();
        assert!(matches!(
            resolver.resolve(&criteria),
            Err(ResolveError::InvalidInput(_))
        ));
        assert!(matches!(
            resolver.resolve_predicate(&criteria),
            Err(ResolveError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_chain_resolver_resolves() {
        let criteria = CriteriaSet::with_configurations(vec![
            SecurityConfiguration::new().with_blacklist(["X"]),
        ])
        .unwrap();
        let resolver = ChainResolver::new();
        let params = resolver.resolve(&criteria).unwrap();
        assert_eq!(params.blacklist, set(&["X"]));
        let predicate = resolver.resolve_predicate(&criteria).unwrap();
        assert!(!predicate.is_allowed("X"));
        assert!(predicate.is_allowed("A"));
    }

    #[test]
    fn test_chain_of_references() {
        let first = SecurityConfiguration::new().with_whitelist(["A"]).with_whitelist_merge(true);
        let second = SecurityConfiguration::new().with_whitelist(["B"]);
        let chain: Vec<&SecurityConfiguration> = vec![&first, &second];
        assert_eq!(resolve_effective_whitelist(&chain), set(&["A", "B"]));
    }
}
