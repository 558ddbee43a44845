//! Tabu memory and the policy applied when it blocks every successor.

use std::collections::VecDeque;

/// What to do when every successor of the current state is tabu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TabuFallback {
    /// Move to the successor whose latest tabu entry is the oldest.
    /// Ties go to the higher objective value, then to encounter order.
    #[default]
    LeastRecentlyTabu,

    /// Fail the run with [`SearchError::AllSuccessorsTabu`](crate::SearchError::AllSuccessorsTabu).
    Fail,
}

/// Bounded-age record of recently chosen states.
///
/// Entries are `(state, iteration_recorded)` kept in recording order.
/// Eviction is by age: after [`evict_older_than`](Self::evict_older_than)
/// at iteration `i`, every entry satisfies `i - t <= max_age`.
///
/// # Examples
///
/// ```
/// use u_localsearch::tabu::TabuList;
///
/// let mut list = TabuList::new();
/// for i in 0..5 {
///     list.record(i * 10, i);
///     list.evict_older_than(i, 2);
/// }
/// assert_eq!(list.len(), 3);
/// assert!(!list.contains(&10));
/// assert_eq!(list.last_recorded(&40), Some(4));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TabuList<S> {
    entries: VecDeque<(S, usize)>,
}

impl<S> Default for TabuList<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> TabuList<S> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(state, iteration_recorded)`, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = (&S, usize)> {
        self.entries.iter().map(|(state, t)| (state, *t))
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Records `state` as chosen at `iteration`.
    ///
    /// Iterations must be recorded in non-decreasing order.
    pub fn record(&mut self, state: S, iteration: usize) {
        debug_assert!(
            self.entries.back().is_none_or(|&(_, t)| t <= iteration),
            "tabu entries must be recorded in iteration order"
        );
        self.entries.push_back((state, iteration));
    }

    /// Evicts every entry older than `max_age` iterations at `iteration`.
    ///
    /// Returns the number of evicted entries.
    pub fn evict_older_than(&mut self, iteration: usize, max_age: usize) -> usize {
        let mut evicted = 0;
        while let Some(&(_, t)) = self.entries.front() {
            if iteration.saturating_sub(t) <= max_age {
                break;
            }
            self.entries.pop_front();
            evicted += 1;
        }
        evicted
    }
}

impl<S: PartialEq> TabuList<S> {
    /// Whether `state` is currently tabu.
    pub fn contains(&self, state: &S) -> bool {
        self.entries.iter().any(|(s, _)| s == state)
    }

    /// Iteration of the most recent entry for `state`, if any.
    pub fn last_recorded(&self, state: &S) -> Option<usize> {
        self.entries
            .iter()
            .rev()
            .find(|(s, _)| s == state)
            .map(|&(_, t)| t)
    }
}
