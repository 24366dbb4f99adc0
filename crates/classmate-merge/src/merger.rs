//! The class-list merger.

use std::collections::{HashMap, HashSet};

use crate::groups::{Matcher, CONFLICTS, KEYWORDS, PREFIXES};
use crate::parse::parse_class;

/// Merges class lists, resolving conflicting utilities by position.
///
/// A merger owns the conflict-group table. [`ClassMerger::new`] starts
/// from the default table; custom utilities can be registered with
/// [`ClassMerger::group`] and linked with [`ClassMerger::conflicts`].
///
/// # Example
///
/// ```rust
/// use classmate_merge::ClassMerger;
///
/// let merger = ClassMerger::new()
///     .group("elevation", &["elevation"])
///     .group("elevation-x", &["elevation-x"])
///     .conflicts("elevation", &["elevation-x"]);
///
/// assert_eq!(merger.merge(&["elevation-x-1 elevation-2"]), "elevation-2");
/// assert_eq!(merger.merge(&["elevation-2 elevation-x-1"]), "elevation-2 elevation-x-1");
/// ```
#[derive(Debug, Clone)]
pub struct ClassMerger {
    keywords: HashMap<String, String>,
    prefixes: HashMap<String, Prefix>,
    conflicts: HashMap<String, Vec<String>>,
}

#[derive(Clone)]
enum Prefix {
    Group(String),
    Refine(fn(&str) -> &'static str),
}

impl std::fmt::Debug for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Prefix::Group(group) => f.debug_tuple("Group").field(group).finish(),
            Prefix::Refine(_) => f.write_str("Refine(..)"),
        }
    }
}

impl ClassMerger {
    /// Creates a merger with the default conflict table.
    pub fn new() -> Self {
        let keywords = KEYWORDS
            .iter()
            .map(|(class, group)| (class.to_string(), group.to_string()))
            .collect();
        let prefixes = PREFIXES
            .iter()
            .map(|(prefix, matcher)| {
                let prefix_kind = match matcher {
                    Matcher::Group(group) => Prefix::Group(group.to_string()),
                    Matcher::Refine(refine) => Prefix::Refine(*refine),
                };
                (prefix.to_string(), prefix_kind)
            })
            .collect();
        let conflicts = CONFLICTS
            .iter()
            .map(|(group, others)| {
                (
                    group.to_string(),
                    others.iter().map(|o| o.to_string()).collect(),
                )
            })
            .collect();

        Self {
            keywords,
            prefixes,
            conflicts,
        }
    }

    /// Creates a merger with no groups; every class is treated as opaque.
    pub fn empty() -> Self {
        Self {
            keywords: HashMap::new(),
            prefixes: HashMap::new(),
            conflicts: HashMap::new(),
        }
    }

    /// Registers utility prefixes as one conflict group.
    ///
    /// A registered prefix replaces any default mapping for the same prefix.
    pub fn group(mut self, name: &str, prefixes: &[&str]) -> Self {
        for prefix in prefixes {
            self.prefixes
                .insert(prefix.to_string(), Prefix::Group(name.to_string()));
        }
        self
    }

    /// Registers standalone utilities (no value part) as one conflict group.
    pub fn keywords(mut self, name: &str, classes: &[&str]) -> Self {
        for class in classes {
            self.keywords.insert(class.to_string(), name.to_string());
        }
        self
    }

    /// Declares that a later class of `group` overrides earlier classes of
    /// each of `overridden`.
    pub fn conflicts(mut self, group: &str, overridden: &[&str]) -> Self {
        let entry = self.conflicts.entry(group.to_string()).or_default();
        for other in overridden {
            if !entry.iter().any(|existing| existing == other) {
                entry.push(other.to_string());
            }
        }
        self
    }

    /// Returns the conflict group of a class, or `None` for opaque classes.
    ///
    /// Modifiers and markers are ignored here; they scope conflicts but do
    /// not change the group.
    pub fn group_of(&self, class: &str) -> Option<String> {
        let utility = parse_class(class).utility;
        self.utility_group(utility)
    }

    fn utility_group(&self, utility: &str) -> Option<String> {
        if utility.is_empty() {
            return None;
        }
        if let Some(group) = self.keywords.get(utility) {
            return Some(group.clone());
        }

        let mut best: Option<(&str, &Prefix)> = None;
        for (prefix, kind) in &self.prefixes {
            let matches = utility == prefix
                || (utility.starts_with(prefix.as_str())
                    && utility[prefix.len()..].starts_with('-'));
            if matches && best.map_or(true, |(b, _)| prefix.len() > b.len()) {
                best = Some((prefix.as_str(), kind));
            }
        }

        best.map(|(prefix, kind)| {
            let value = utility
                .get(prefix.len() + 1..)
                .unwrap_or_default();
            match kind {
                Prefix::Group(group) => group.clone(),
                Prefix::Refine(refine) => refine(value).to_string(),
            }
        })
    }

    /// Merges class lists.
    ///
    /// All lists are read as one sequence, left list before right list. For
    /// each conflict group (within the same modifier scope) only the
    /// rightmost class survives, at its own position. Opaque classes keep
    /// their first occurrence. Empty lists contribute nothing.
    pub fn merge(&self, lists: &[&str]) -> String {
        let classes: Vec<&str> = lists
            .iter()
            .flat_map(|list| list.split_whitespace())
            .collect();

        let keys: Vec<Option<(String, String)>> = classes
            .iter()
            .map(|class| {
                let parsed = parse_class(class);
                self.utility_group(parsed.utility)
                    .map(|group| (parsed.scope(), group))
            })
            .collect();

        let mut claimed: HashSet<(String, String)> = HashSet::new();
        let mut keep = vec![false; classes.len()];
        for index in (0..classes.len()).rev() {
            let Some((scope, group)) = &keys[index] else {
                continue;
            };
            if claimed.contains(&(scope.clone(), group.clone())) {
                continue;
            }
            keep[index] = true;
            claimed.insert((scope.clone(), group.clone()));
            if let Some(overridden) = self.conflicts.get(group) {
                for other in overridden {
                    claimed.insert((scope.clone(), other.clone()));
                }
            }
        }

        let mut seen: HashSet<&str> = HashSet::new();
        let mut merged: Vec<&str> = Vec::with_capacity(classes.len());
        for (index, class) in classes.iter().copied().enumerate() {
            let emit = match keys[index] {
                Some(_) => keep[index],
                None => seen.insert(class),
            };
            if emit {
                merged.push(class);
            }
        }

        merged.join(" ")
    }
}

impl Default for ClassMerger {
    fn default() -> Self {
        Self::new()
    }
}
