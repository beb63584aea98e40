//! Split point search for three-way merges
//!
//! The split point of two commits is their best common ancestor:
//!
//! > A best common ancestor of commits X and Y is any common ancestor of X and Y
//! > that is not an ancestor of any other common ancestor.
//!
//! ## Algorithm
//!
//! 1. Paint every commit reachable from the current tip with `SOURCE` and every commit
//!    reachable from the target tip with `TARGET`. Commits carrying both flags are common
//!    ancestors.
//! 2. Paint every strict ancestor of a common ancestor `STALE`. Those can never be best.
//! 3. The remaining common ancestors are the best ones. In a criss-cross history several can
//!    survive; the newest (by timestamp, then by id) is chosen so the result is deterministic.
//!
//! Both walks use an explicit worklist and consult the visit state before expanding a
//! commit, so each commit is expanded at most once per flag.
//!
//! ## Debug Logging
//!
//! Building with `--features debug_merge` emits the visit state of every commit through
//! `tracing::debug!`.

use crate::artifacts::objects::commit::SlimCommit;
use crate::artifacts::objects::object_id::ObjectId;
use bitflags::bitflags;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_merge")]
        {
            tracing::debug!($($arg)*);
        }
    };
}

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    struct VisitState: u8 {
        const NONE = 0b000;
        const SOURCE = 0b001;
        const TARGET = 0b010;
        const BOTH = Self::SOURCE.bits() | Self::TARGET.bits();
        const STALE = 0b100;
    }
}

impl fmt::Debug for VisitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut flags = Vec::new();
        if self.contains(VisitState::SOURCE) {
            flags.push("SOURCE");
        }
        if self.contains(VisitState::TARGET) {
            flags.push("TARGET");
        }
        if self.contains(VisitState::STALE) {
            flags.push("STALE");
        }
        if flags.is_empty() {
            write!(f, "NONE")
        } else {
            write!(f, "{}", flags.join("|"))
        }
    }
}

impl fmt::Display for VisitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Finds the split point of two commits
///
/// The loader turns a commit id into its parents and timestamp, so the finder works the same
/// over the object database and over an in-memory graph.
pub struct MergeBaseFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    commit_loader: CommitLoaderFn,
    cache: RefCell<HashMap<ObjectId, SlimCommit>>,
}

impl<CommitLoaderFn> MergeBaseFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    pub fn new(commit_loader: CommitLoaderFn) -> Self {
        Self {
            commit_loader,
            cache: RefCell::new(HashMap::new()),
        }
    }

    fn load(&self, commit_id: &ObjectId) -> anyhow::Result<SlimCommit> {
        if let Some(commit) = self.cache.borrow().get(commit_id) {
            return Ok(commit.clone());
        }

        let commit = (self.commit_loader)(commit_id)?;
        self.cache
            .borrow_mut()
            .insert(commit_id.clone(), commit.clone());

        Ok(commit)
    }

    /// Add `flag` to every commit reachable from `starts` (inclusive)
    fn paint(
        &self,
        states: &mut HashMap<ObjectId, VisitState>,
        starts: Vec<ObjectId>,
        flag: VisitState,
    ) -> anyhow::Result<()> {
        let mut worklist = starts;

        while let Some(commit_id) = worklist.pop() {
            let state = states.entry(commit_id.clone()).or_insert(VisitState::NONE);
            if state.contains(flag) {
                continue;
            }
            *state |= flag;

            debug_log!("Painted commit {}: state={}", commit_id, state);

            worklist.extend(self.load(&commit_id)?.parents);
        }

        Ok(())
    }

    /// Returns the best common ancestor of `current` and `target`, or `None` when the two
    /// histories share no commit
    pub fn find_merge_base(
        &self,
        current: &ObjectId,
        target: &ObjectId,
    ) -> anyhow::Result<Option<ObjectId>> {
        if current == target {
            return Ok(Some(current.clone()));
        }

        let mut states = HashMap::<ObjectId, VisitState>::new();
        self.paint(&mut states, vec![current.clone()], VisitState::SOURCE)?;
        self.paint(&mut states, vec![target.clone()], VisitState::TARGET)?;

        let common_ancestors = states
            .iter()
            .filter(|(_, state)| state.contains(VisitState::BOTH))
            .map(|(oid, _)| oid.clone())
            .collect::<Vec<_>>();

        debug_log!(
            "Common ancestors of {} and {}: {}",
            current,
            target,
            common_ancestors
                .iter()
                .map(|oid| oid.as_ref())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let mut stale_starts = Vec::new();
        for commit_id in &common_ancestors {
            stale_starts.extend(self.load(commit_id)?.parents);
        }
        self.paint(&mut states, stale_starts, VisitState::STALE)?;

        let mut best_common_ancestors = Vec::new();
        for commit_id in common_ancestors {
            let is_stale = states
                .get(&commit_id)
                .is_some_and(|state| state.contains(VisitState::STALE));

            if !is_stale {
                best_common_ancestors.push(self.load(&commit_id)?);
            }
        }

        debug_log!(
            "Best common ancestors: {}",
            best_common_ancestors
                .iter()
                .map(|commit| commit.oid.as_ref())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(best_common_ancestors
            .into_iter()
            .max()
            .map(|commit| commit.oid))
    }
}
