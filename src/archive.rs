use ndarray::Array1;

use crate::dominance::dominates;

/// One resident of the best-found front.
#[derive(Debug, Clone)]
pub struct FrontMember {
    /// The decision vector.
    pub decision: Array1<f64>,
    /// Its evaluated objective vector.
    pub objectives: Array1<f64>,
}

/// Incrementally maintained non-dominated set over every candidate that
/// was ever offered to it.
#[derive(Debug, Default)]
pub(crate) struct ParetoArchive {
    members: Vec<FrontMember>,
}

impl ParetoArchive {
    pub fn new() -> ParetoArchive {
        ParetoArchive::default()
    }

    /// Folds one evaluated candidate into the front. A candidate dominated
    /// by a member is discarded; otherwise members the candidate dominates
    /// are dropped and the candidate is inserted.
    pub fn fold(&mut self, decision: &Array1<f64>, objectives: &Array1<f64>) {
        if self
            .members
            .iter()
            .any(|member| dominates(&member.objectives.view(), &objectives.view()))
        {
            return;
        }

        self.members
            .retain(|member| !dominates(&objectives.view(), &member.objectives.view()));
        self.members.push(FrontMember {
            decision: decision.clone(),
            objectives: objectives.clone(),
        });
    }

    pub fn members(&self) -> &[FrontMember] {
        &self.members
    }

    pub fn into_members(self) -> Vec<FrontMember> {
        self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }
}
