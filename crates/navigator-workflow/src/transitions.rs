//! Allowed stage moves and the guard each one must pass.

use std::collections::BTreeMap;

use navigator_core::models::record::PatientRecord;
use navigator_core::models::stage::StageName;

/// Predicate a record must satisfy for an edge to be taken.
pub type Guard = fn(&PatientRecord) -> bool;

/// Immutable map of `(from, to)` edges to their guards.
///
/// Built once when a `Workflow` is constructed. Edges can only be added
/// through the consuming builder, so a table shared by a running workflow
/// never changes.
#[derive(Clone)]
pub struct TransitionTable {
    edges: BTreeMap<(StageName, StageName), Guard>,
}

impl TransitionTable {
    /// A table with no edges at all.
    pub fn empty() -> Self {
        Self {
            edges: BTreeMap::new(),
        }
    }

    /// intake → assessment → care planning, plus the declared
    /// care planning → intake loop the router never proposes.
    pub fn standard() -> Self {
        Self::empty()
            .with_edge(StageName::Intake, StageName::Assessment, |r| r.intake_complete)
            .with_edge(StageName::Assessment, StageName::CarePlanning, |r| {
                r.assessment_complete
            })
            .with_edge(StageName::CarePlanning, StageName::Intake, |r| {
                r.care_plan_complete
            })
    }

    pub fn with_edge(mut self, from: StageName, to: StageName, guard: Guard) -> Self {
        self.edges.insert((from, to), guard);
        self
    }

    pub fn initial(&self) -> StageName {
        StageName::Intake
    }

    pub fn contains(&self, from: StageName, to: StageName) -> bool {
        self.edges.contains_key(&(from, to))
    }

    /// Whether the edge exists and its guard holds for `record`. A missing
    /// edge is never allowed.
    pub fn allows(&self, from: StageName, to: StageName, record: &PatientRecord) -> bool {
        self.edges
            .get(&(from, to))
            .is_some_and(|guard| guard(record))
    }

    /// Declared edges in stage order.
    pub fn edges(&self) -> impl Iterator<Item = (StageName, StageName)> + '_ {
        self.edges.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for TransitionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.edges()).finish()
    }
}
