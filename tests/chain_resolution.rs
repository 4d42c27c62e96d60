//! Chain resolution scenario tests
//!
//! Whitelist/blacklist merging, precedence and predicate behaviour over
//! hand-built configuration chains.

use samlsec::{
    resolve_and_populate, resolve_effective_blacklist, resolve_effective_whitelist,
    resolve_precedence, resolve_predicate, ChainResolver, CriteriaSet, Precedence, ResolveError,
    SecurityConfiguration, WhitelistBlacklistParameters,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;

fn set(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

fn whitelisting(ids: &[&str], merge: bool) -> SecurityConfiguration {
    SecurityConfiguration::new()
        .with_whitelist(ids)
        .with_whitelist_merge(merge)
}

fn blacklisting(ids: &[&str], merge: bool) -> SecurityConfiguration {
    SecurityConfiguration::new()
        .with_blacklist(ids)
        .with_blacklist_merge(merge)
}

// =============================================================================
// Category 1: Merge semantics
// =============================================================================

#[test]
fn test_blacklist_no_merge() {
    let chain = vec![
        SecurityConfiguration::new().with_blacklist(["A", "B", "C", "D"]),
        SecurityConfiguration::new().with_blacklist(["X", "Y", "Z"]),
    ];
    assert_eq!(resolve_effective_blacklist(&chain), set(&["A", "B", "C", "D"]));
}

#[test]
fn test_blacklist_simple_merge() {
    let chain = vec![
        blacklisting(&["A", "B", "C", "D"], true),
        blacklisting(&["X", "Y", "Z"], false),
    ];
    assert_eq!(
        resolve_effective_blacklist(&chain),
        set(&["A", "B", "C", "D", "X", "Y", "Z"])
    );
}

#[test]
fn test_whitelist_transitive_merge_stops_inclusively() {
    let chain = vec![
        whitelisting(&["A", "B"], true),
        whitelisting(&["C", "D"], false),
        whitelisting(&["E", "F"], false),
    ];
    assert_eq!(resolve_effective_whitelist(&chain), set(&["A", "B", "C", "D"]));
}

#[test]
fn test_whitelist_merge_through_whole_chain() {
    let chain = vec![
        whitelisting(&["A"], true),
        whitelisting(&["B"], true),
        whitelisting(&["C"], false),
    ];
    assert_eq!(resolve_effective_whitelist(&chain), set(&["A", "B", "C"]));
}

#[test]
fn test_whitelist_no_merge_takes_first_non_empty() {
    let chain = vec![
        whitelisting(&[], false),
        whitelisting(&["B"], false),
        whitelisting(&["C"], false),
    ];
    assert_eq!(resolve_effective_whitelist(&chain), set(&["B"]));
}

#[test]
fn test_blacklist_transitive_merge_symmetric() {
    let chain = vec![
        blacklisting(&["A"], true),
        blacklisting(&["B"], false),
        blacklisting(&["C"], true),
    ];
    assert_eq!(resolve_effective_blacklist(&chain), set(&["A", "B"]));
}

#[test]
fn test_layer_without_blacklist_does_not_end_merge() {
    let chain = vec![
        blacklisting(&["A"], true),
        whitelisting(&["W"], false),
        SecurityConfiguration::new().with_precedence(Precedence::Blacklist),
        blacklisting(&["B"], false),
        blacklisting(&["C"], false),
    ];
    assert_eq!(resolve_effective_blacklist(&chain), set(&["A", "B"]));
}

#[test]
fn test_merging_config_with_nothing_below() {
    let chain = vec![whitelisting(&["A"], true)];
    assert_eq!(resolve_effective_whitelist(&chain), set(&["A"]));
}

#[test]
fn test_no_lists_anywhere() {
    let chain = vec![SecurityConfiguration::new(), SecurityConfiguration::new()];
    assert!(resolve_effective_whitelist(&chain).is_empty());
    assert!(resolve_effective_blacklist(&chain).is_empty());
    assert!(resolve_predicate(&chain).is_allowed("anything"));
}

#[test]
fn test_overlapping_lists_are_not_mutated() {
    let chain = vec![SecurityConfiguration::new()
        .with_whitelist(["A", "X"])
        .with_blacklist(["X"])];
    assert_eq!(resolve_effective_whitelist(&chain), set(&["A", "X"]));
    assert_eq!(resolve_effective_blacklist(&chain), set(&["X"]));
}

// =============================================================================
// Category 2: Precedence and predicate
// =============================================================================

#[test]
fn test_precedence_flip() {
    let mut config = SecurityConfiguration::new()
        .with_whitelist(["A"])
        .with_blacklist(["X"])
        .with_precedence(Precedence::Whitelist);

    let predicate = resolve_predicate(&[config.clone()]);
    assert!(predicate.is_allowed("A"));
    assert!(!predicate.is_allowed("X"));
    assert!(!predicate.is_allowed("anything-else"));

    config.set_precedence(Precedence::Blacklist);
    let predicate = resolve_predicate(&[config]);
    assert!(predicate.is_allowed("A"));
    assert!(!predicate.is_allowed("X"));
    assert!(predicate.is_allowed("anything-else"));
}

#[test]
fn test_precedence_only_matters_for_shared_ids() {
    let base = SecurityConfiguration::new()
        .with_whitelist(["A", "S"])
        .with_blacklist(["S", "X"]);
    let white = resolve_predicate(&[base.clone().with_precedence(Precedence::Whitelist)]);
    let black = resolve_predicate(&[base.with_precedence(Precedence::Blacklist)]);

    // Whitelist-only member: admitted either way
    assert!(white.is_allowed("A"));
    assert!(black.is_allowed("A"));

    // Member of both: follows the active precedence
    assert!(white.is_allowed("S"));
    assert!(!black.is_allowed("S"));
}

#[test]
fn test_precedence_comes_from_highest_priority() {
    let chain = vec![
        SecurityConfiguration::new().with_precedence(Precedence::Blacklist),
        whitelisting(&["A"], false),
        blacklisting(&["A"], false),
    ];
    assert_eq!(resolve_precedence(&chain), Precedence::Blacklist);
    let predicate = resolve_predicate(&chain);
    assert!(!predicate.is_allowed("A"));
    assert!(predicate.is_allowed("B"));
}

#[test]
fn test_only_blacklist_ignores_precedence() {
    let chain = vec![blacklisting(&["X"], false).with_precedence(Precedence::Whitelist)];
    let predicate = resolve_predicate(&chain);
    assert!(!predicate.is_allowed("X"));
    assert!(predicate.is_allowed("Y"));
}

#[test]
fn test_only_whitelist_ignores_precedence() {
    let chain = vec![whitelisting(&["A"], false).with_precedence(Precedence::Blacklist)];
    let predicate = resolve_predicate(&chain);
    assert!(predicate.is_allowed("A"));
    assert!(!predicate.is_allowed("Y"));
}

// =============================================================================
// Category 3: Empty chain, idempotence, populate
// =============================================================================

#[test]
fn test_empty_chain_defaults() {
    let chain: Vec<SecurityConfiguration> = Vec::new();
    assert!(resolve_effective_whitelist(&chain).is_empty());
    assert!(resolve_effective_blacklist(&chain).is_empty());
    assert_eq!(resolve_precedence(&chain), Precedence::Whitelist);
    let predicate = resolve_predicate(&chain);
    assert!(predicate.is_allowed(""));
    assert!(predicate.is_allowed("http://www.w3.org/2001/04/xmldsig-more#rsa-md5"));
}

#[test]
fn test_idempotent() {
    let chain = vec![
        whitelisting(&["A"], true),
        blacklisting(&["X"], true),
        whitelisting(&["B"], false),
    ];
    assert_eq!(
        resolve_effective_whitelist(&chain),
        resolve_effective_whitelist(&chain)
    );
    assert_eq!(
        resolve_effective_blacklist(&chain),
        resolve_effective_blacklist(&chain)
    );
    assert_eq!(resolve_predicate(&chain), resolve_predicate(&chain));

    let predicate = resolve_predicate(&chain);
    for _ in 0..3 {
        assert!(predicate.is_allowed("A"));
        assert!(!predicate.is_allowed("X"));
    }
}

#[test]
fn test_resolve_and_populate() {
    let chain = vec![
        SecurityConfiguration::new()
            .with_whitelist(["A"])
            .with_blacklist(["X"])
            .with_blacklist_merge(true)
            .with_precedence(Precedence::Blacklist),
        blacklisting(&["Y"], false),
    ];
    let mut params = WhitelistBlacklistParameters::default();
    resolve_and_populate(&mut params, &chain);

    assert_eq!(params.whitelist, set(&["A"]));
    assert_eq!(params.blacklist, set(&["X", "Y"]));
    assert_eq!(params.precedence, Precedence::Blacklist);
    assert_eq!(params.predicate(), resolve_predicate(&chain));
}

// =============================================================================
// Category 4: Criteria-driven resolution
// =============================================================================

#[test]
fn test_criteria_missing_configuration() {
    let resolver = ChainResolver::new();
    let criteria: CriteriaSet = CriteriaSet::new();
    let err = resolver.resolve(&criteria).unwrap_err();
    assert!(matches!(err, ResolveError::InvalidInput(_)));
    assert!(err.to_string().contains("configuration criterion"));
}

#[test]
fn test_criteria_empty_configuration_list() {
    let result = CriteriaSet::<SecurityConfiguration>::with_configurations(Vec::new());
    assert!(matches!(result, Err(ResolveError::InvalidInput(_))));
}

#[test]
fn test_criteria_resolution_matches_slice_resolution() {
    let chain = vec![whitelisting(&["A"], true), whitelisting(&["B"], false)];
    let criteria = CriteriaSet::with_configurations(chain.clone()).unwrap();
    let params = ChainResolver::new().resolve(&criteria).unwrap();
    assert_eq!(params.whitelist, resolve_effective_whitelist(&chain));
}

// =============================================================================
// Category 5: Sharing across threads
// =============================================================================

#[test]
fn test_predicate_shared_across_threads() {
    let chain = vec![blacklisting(&["X"], false)];
    let predicate = Arc::new(resolve_predicate(&chain));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let predicate = Arc::clone(&predicate);
            thread::spawn(move || {
                let id = format!("alg-{}", i);
                predicate.is_allowed(&id) && !predicate.is_allowed("X")
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn test_concurrent_resolution_of_shared_chain() {
    let chain = vec![whitelisting(&["A"], true), whitelisting(&["B"], false)];

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(resolve_effective_whitelist(&chain), set(&["A", "B"]));
            });
        }
    });
}
