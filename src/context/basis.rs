/*!
The basis of a case split, and the exhaustiveness proviso.

Before a case rule may discharge a split over formulas F₁, …, Fₖ it must know the split is logically complete.
The [basis](crate::structures::state::NamedState::basis) of the formulas over a named state is the set of *realizable* sign combinations:
one truth value per formula, restricted to combinations some world of the state realizes.
Each combination is a [Branch] of the split, carrying the worlds realizing it; worlds are total, so signs are classical, and the branches partition the world set.

[is_exhaustive] then demands a bijection: each supplied named state must be exactly the refinement corresponding to one branch --- its world set equal to the branch's --- with no branch uncovered and no named state redundant.
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        assignment::VariableAssignment,
        formula::{Formula, Truth},
        interpretation::AttributeInterpretation,
        state::NamedState,
    },
    types::err::ErrorKind,
};

/// One realizable sign combination of a case split, with the worlds realizing it.
#[derive(Clone, Debug, PartialEq)]
pub struct Branch {
    /// One truth value per formula of the split, in formula order.
    signs: Vec<Truth>,

    /// The worlds of the parent state realizing the combination.
    worlds: Vec<NamedState>,
}

impl Branch {
    pub fn signs(&self) -> &[Truth] {
        &self.signs
    }

    pub fn worlds(&self) -> &[NamedState] {
        &self.worlds
    }
}

/// The realizable sign combinations of a set of formulas over a named state.
#[derive(Clone, Debug, PartialEq)]
pub struct Basis {
    branches: Vec<Branch>,
}

impl Basis {
    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}

impl Basis {
    /// The basis of the given formulas over an already-collected world set.
    ///
    /// The rule layer collects a state's worlds once per rule application and threads them here.
    pub(crate) fn over(
        worlds: &[NamedState],
        variable_assignment: &VariableAssignment,
        interpretation: &AttributeInterpretation,
        formulas: &[Formula],
    ) -> Result<Basis, ErrorKind> {
        let mut branches: Vec<Branch> = Vec::new();

        for world in worlds {
            let signs = formulas
                .iter()
                .map(|f| f.assign_truth_value(interpretation, world, variable_assignment))
                .collect::<Result<Vec<_>, _>>()?;

            match branches.iter_mut().find(|branch| branch.signs == signs) {
                Some(branch) => branch.worlds.push(world.clone()),
                None => branches.push(Branch {
                    signs,
                    worlds: vec![world.clone()],
                }),
            }
        }

        log::trace!(target: targets::EXHAUSTIVENESS, "Basis of {} formula(s): {} realizable branch(es).", formulas.len(), branches.len());

        Ok(Basis { branches })
    }
}

impl NamedState {
    /// The basis of the given formulas over self: every sign combination some world realizes, each with its worlds.
    pub fn basis(
        &self,
        variable_assignment: &VariableAssignment,
        interpretation: &AttributeInterpretation,
        formulas: &[Formula],
    ) -> Result<Basis, ErrorKind> {
        let worlds: Vec<NamedState> = self.worlds().collect();

        Basis::over(&worlds, variable_assignment, interpretation, formulas)
    }
}

/// Whether the given named states are in bijection with the branches of the basis.
///
/// Each named state must be exactly the refinement corresponding to one branch:
/// its worlds, as a set, equal to the branch's worlds.
/// No branch may go uncovered, and no named state may be redundant.
pub fn is_exhaustive(basis: &Basis, named_states: &[NamedState]) -> Result<bool, ErrorKind> {
    let case_worlds: Vec<Vec<NamedState>> = named_states
        .iter()
        .map(|named_state| named_state.worlds().collect())
        .collect();

    Ok(exhaustive_over(basis, &case_worlds))
}

/// [is_exhaustive] over already-collected case world sets, one per supplied named state.
pub(crate) fn exhaustive_over(basis: &Basis, case_worlds: &[Vec<NamedState>]) -> bool {
    if basis.len() != case_worlds.len() {
        return false;
    }

    let mut matched = vec![false; basis.len()];

    'states: for worlds in case_worlds {
        for (position, branch) in basis.branches().iter().enumerate() {
            if matched[position] {
                continue;
            }

            if same_world_set(worlds, branch.worlds()) {
                matched[position] = true;
                continue 'states;
            }
        }

        log::trace!(target: targets::EXHAUSTIVENESS, "A supplied case corresponds to no uncovered branch.");
        return false;
    }

    matched.iter().all(|&m| m)
}

/// Set equality over world enumerations; each enumeration is duplicate-free.
fn same_world_set(ours: &[NamedState], theirs: &[NamedState]) -> bool {
    ours.len() == theirs.len() && ours.iter().all(|world| theirs.contains(world))
}
