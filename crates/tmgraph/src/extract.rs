//! Reference extraction from grammar rules.
//!
//! [`extract_references`] lists every reference a rule makes, directly or
//! through its nested `patterns`, in a reproducible order:
//!
//! 1. the rule's own `include`
//! 2. references of nested patterns, depth-first and left to right
//! 3. the rule's `match` regex (regex mode only)
//! 4. the rule's `begin`/`end` pair as a surround reference (regex mode only)
//!
//! Decoded rules form an owned tree, so the recursion always terminates.

use tmgraph_core::{grammar::Rule, identifier::SurroundIds, reference::Reference};

/// Collect the references of `rule`.
///
/// Surround ids are drawn from `ids`, which must belong to the current
/// graph build.
pub fn extract_references(
    rule: &Rule,
    include_regex: bool,
    ids: &mut SurroundIds,
) -> Vec<Reference> {
    let mut references = Vec::new();
    collect(rule, include_regex, ids, &mut references);
    references
}

fn collect(rule: &Rule, include_regex: bool, ids: &mut SurroundIds, out: &mut Vec<Reference>) {
    if let Some(target) = rule.include_target() {
        out.push(Reference::include(target));
    }

    for child in rule.patterns().unwrap_or_default() {
        collect(child, include_regex, ids, out);
    }

    if !include_regex {
        return;
    }

    if let Some(regex) = rule.match_regex() {
        out.push(Reference::matching(regex));
    }

    if let Some((begin, end)) = rule.surround_regexes() {
        let id = ids.next_id();
        out.push(Reference::surround(id.to_string(), begin, end));
    }
}
