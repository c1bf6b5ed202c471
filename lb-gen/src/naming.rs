//! Deterministic, collision-free entity names.
//!
//! Names are `{call_site}-{n}` for an increasing counter `n`.  The call site identifies who is
//! inserting (e.g. `pre_insert_artifact_type`), and the generator is told which names the store
//! already holds so that re-running a seed against a populated store never produces a duplicate.
//! Nothing here depends on clocks or randomness: the same store contents always yield the same
//! names.
use std::collections::HashSet;

/// An endless iterator of unused names for one call site.
#[derive(Clone, Debug)]
pub struct NameGenerator {
    /// Prefix shared by every generated name.
    call_site: String,
    /// Counter for the next candidate.
    next: u64,
    /// Names that must not be produced, including everything produced so far.
    taken: HashSet<String>,
}

impl NameGenerator {
    /// A generator starting at `{call_site}-0` with nothing reserved.
    #[must_use]
    pub fn new(call_site: impl Into<String>) -> Self {
        Self { call_site: call_site.into(), next: 0, taken: HashSet::new() }
    }

    /// Reserve `names` so they are never generated.  The counter starts past the number of
    /// reserved names, which skips straight over the names a previous run with the same call
    /// site produced.
    #[must_use]
    pub fn avoiding(mut self, names: impl IntoIterator<Item = String>) -> Self {
        self.taken.extend(names);
        self.next = self.next.max(self.taken.len() as u64);
        self
    }
}

impl Iterator for NameGenerator {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let candidate = format!("{}-{}", self.call_site, self.next);
            self.next += 1;
            if self.taken.insert(candidate.clone()) {
                return Some(candidate);
            }
        }
    }
}
