use std::collections::HashSet;

use crate::services::naming::normalize;

/// Decides whether a normalized team name refers to a recognized team.
pub trait TeamValidator: Send + Sync {
    /// `true` when `normalized_name` is a known team.
    fn is_known(&self, normalized_name: &str) -> bool;
}

/// Any predicate can act as a validator, e.g. `|name: &str| name != "Tnt"`.
impl<F> TeamValidator for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_known(&self, normalized_name: &str) -> bool {
        self(normalized_name)
    }
}

/// Validator backed by a fixed reference list of team names.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTeams {
    names: HashSet<String>,
}

impl ReferenceTeams {
    /// Build the reference set. Entries are stored normalized so every one of them can be matched
    /// by a normalized lookup; blank entries are skipped.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|name| normalize(name.as_ref()))
            .filter(|name| !name.is_empty())
            .collect();
        Self { names }
    }

    /// Number of distinct reference names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the reference list is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl TeamValidator for ReferenceTeams {
    fn is_known(&self, normalized_name: &str) -> bool {
        self.names.contains(normalized_name)
    }
}
