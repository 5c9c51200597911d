use super::store::DescriptionStore;
use crate::core::{
    normalize_variable_name, DescriptionRecord, ElementType, MatchCondition, MEMBER_SEPARATOR,
};

/// How strictly names are compared against non-`like` reference entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchPolicy {
    /// Case-sensitive equality when true, case-insensitive otherwise.
    pub exact_match: bool,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self { exact_match: true }
    }
}

/// Outcome of looking an element up in the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resolution {
    pub description: Option<String>,
    pub found: bool,
}

impl Resolution {
    pub fn not_found() -> Self {
        Self::default()
    }

    fn found(description: &str) -> Self {
        Self {
            description: Some(description.to_string()),
            found: true,
        }
    }
}

/// Names an element may be listed under in the store, most specific first.
pub fn candidate_names(
    element_type: ElementType,
    name: &str,
    short_name: Option<&str>,
) -> Vec<String> {
    let raw: Vec<String> = match element_type {
        ElementType::Method | ElementType::Property | ElementType::ClassConstant => {
            let mut names = vec![name.to_string()];
            if let Some((_, member)) = name.rsplit_once(MEMBER_SEPARATOR) {
                names.push(member.to_string());
            }
            names.extend(short_name.map(str::to_string));
            names
        }
        ElementType::Variable => vec![normalize_variable_name(name)],
        ElementType::Class | ElementType::Function | ElementType::Constant => {
            let mut names = vec![name.to_string()];
            names.extend(short_name.map(str::to_string));
            names
        }
    };

    let mut candidates: Vec<String> = Vec::with_capacity(raw.len());
    for candidate in raw {
        if !candidate.is_empty() && !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    }
    candidates
}

fn record_matches(record: &DescriptionRecord, candidates: &[String], policy: MatchPolicy) -> bool {
    match record.condition() {
        MatchCondition::Like => {
            let haystack = record.name.to_lowercase();
            candidates
                .iter()
                .any(|candidate| haystack.contains(&candidate.to_lowercase()))
        }
        MatchCondition::Exact if policy.exact_match => {
            candidates.iter().any(|candidate| record.name == *candidate)
        }
        MatchCondition::Exact => {
            let wanted = record.name.to_lowercase();
            candidates
                .iter()
                .any(|candidate| candidate.to_lowercase() == wanted)
        }
    }
}

/// Maps element names to curated descriptions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameMatcher {
    policy: MatchPolicy,
}

impl NameMatcher {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// The first record in store order that matches any candidate wins.
    pub fn resolve(
        &self,
        store: &DescriptionStore,
        element_type: ElementType,
        name: &str,
        short_name: Option<&str>,
    ) -> Resolution {
        let candidates = candidate_names(element_type, name, short_name);
        if candidates.is_empty() {
            return Resolution::not_found();
        }

        store
            .descriptions(element_type)
            .iter()
            .filter(|record| !record.name.is_empty())
            .find(|record| record_matches(record, &candidates, self.policy))
            .map(|record| Resolution::found(&record.desc))
            .unwrap_or_else(Resolution::not_found)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn exact_mode_never_matches_case_variants(name in "[a-z]{1,12}") {
            let upper = name.to_uppercase();
            let store = DescriptionStore::from_sets(
                "descriptions",
                [(ElementType::Function, vec![DescriptionRecord::new(upper.clone(), "Doc.")])],
            );
            let exact = NameMatcher::new(MatchPolicy { exact_match: true })
                .resolve(&store, ElementType::Function, &name, None);
            let loose = NameMatcher::new(MatchPolicy { exact_match: false })
                .resolve(&store, ElementType::Function, &name, None);
            prop_assert!(!exact.found);
            prop_assert!(loose.found);
        }

        #[test]
        fn variable_normalization_is_idempotent(base in "[a-zA-Z_][a-zA-Z0-9_]{0,10}", sigils in 0usize..4) {
            let name = format!("{}{}", "$".repeat(sigils), base);
            let once = normalize_variable_name(&name);
            prop_assert_eq!(normalize_variable_name(&once), once.clone());
            prop_assert_eq!(once, format!("${base}"));
        }
    }
}
