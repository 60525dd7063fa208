use std::collections::BTreeSet;

use super::normalise_basename;
use crate::request::RequestContext;

/// Generate the conventional basenames for a request.
///
/// The root basename comes first, followed by the layout, every namespace prefix of the
/// controller, its ancestors, the controller itself, and finally the controller's action.
/// Later duplicates are dropped so each basename appears once in first-seen order.
pub fn generate_basenames(context: &RequestContext, root_basename: &str) -> Vec<String> {
    let mut list = CandidateList::new();

    list.push(root_basename);
    if let Some(layout) = context.layout() {
        list.push(layout);
    }
    list.extend(context.namespace_prefixes());
    list.extend(context.ancestors().iter().cloned());
    if !context.controller_path().is_empty() {
        list.push(context.controller_path());
        list.push(format!("{}/{}", context.controller_path(), context.action()));
    }

    list.finish()
}

/// Ordered list that ignores repeated entries, keeping the first occurrence.
///
/// Entries compare on their normalised form, so `/shop/items` repeats `shop/items`. The first
/// spelling is the one kept.
#[derive(Debug, Default)]
pub struct CandidateList {
    seen: BTreeSet<String>,
    result: Vec<String>,
}

impl CandidateList {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a candidate unless it is blank or already present.
    pub fn push(&mut self, candidate: impl Into<String>) {
        let candidate = candidate.into();
        let key = normalise_basename(&candidate);
        if key.is_empty() {
            return;
        }
        if self.seen.insert(key.to_string()) {
            self.result.push(candidate);
        }
    }

    /// Append every candidate in order.
    pub fn extend<I, S>(&mut self, candidates: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for candidate in candidates {
            self.push(candidate);
        }
    }

    /// Consume the list, returning candidates in insertion order.
    pub fn finish(self) -> Vec<String> {
        self.result
    }
}
