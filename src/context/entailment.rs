/*!
The entailment operators: model checking by exhaustive enumeration.

Each operator quantifies over the same candidate space --- the worlds of a state crossed with the total variable assignments over the object universe --- and each short-circuits on the first falsifying candidate.
The space is exponential in the unresolved ascriptions and unbound variables; the engine is built for proof-checking of small, finite diagrams, so no pruning is attempted beyond the short-circuit.

The public operators enumerate lazily.
Within one rule application a world set consulted by more than one nested check is collected once and threaded through the crate-internal `_over` variants instead of being re-enumerated.

# The named-entailment proviso

[is_named_entailment](crate::structures::state::NamedState::is_named_entailment) is the formal proviso behind disjunctive diagrammatic steps:
every model of the assumption base among the worlds of (σ; ρ) must refine at least one of the supplied cases.
It is decided through [alternate extensions](crate::structures::state::State::alternate_extensions):
the worlds of σ refining none of the cases are exactly the worlds of the alternate extensions by the cases' worlds,
so the proviso holds exactly when the base is unsatisfiable over every alternate extension.
*/

use std::borrow::Borrow;

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::{
        assignment::VariableAssignment,
        formula::{AssumptionBase, Formula, Truth},
        interpretation::AttributeInterpretation,
        state::{NamedState, State},
    },
    types::err::{self, ErrorKind},
};

impl Context {
    /// Whether every model of the context is a refinement of the given named state.
    ///
    /// A model is a (world, total assignment) candidate satisfying every formula of the assumption base.
    pub fn entails_named_state(
        &self,
        inferred: &NamedState,
        interpretation: &AttributeInterpretation,
    ) -> Result<bool, ErrorKind> {
        self.worlds_refine(self.named_state().worlds(), inferred, interpretation)
    }

    /// [entails_named_state](Context::entails_named_state) over an already-collected world set.
    pub(crate) fn entails_named_state_over(
        &self,
        worlds: &[NamedState],
        inferred: &NamedState,
        interpretation: &AttributeInterpretation,
    ) -> Result<bool, ErrorKind> {
        self.worlds_refine(worlds, inferred, interpretation)
    }

    /// Whether the given formula is true in every model of the context.
    pub fn entails_formula(
        &self,
        formula: &Formula,
        interpretation: &AttributeInterpretation,
    ) -> Result<bool, ErrorKind> {
        self.worlds_satisfy(self.named_state().worlds(), formula, interpretation)
    }

    /// [entails_formula](Context::entails_formula) over an already-collected world set.
    pub(crate) fn entails_formula_over(
        &self,
        worlds: &[NamedState],
        formula: &Formula,
        interpretation: &AttributeInterpretation,
    ) -> Result<bool, ErrorKind> {
        self.worlds_satisfy(worlds, formula, interpretation)
    }

    fn worlds_refine<I>(
        &self,
        worlds: I,
        inferred: &NamedState,
        interpretation: &AttributeInterpretation,
    ) -> Result<bool, ErrorKind>
    where
        I: IntoIterator,
        I::Item: Borrow<NamedState>,
    {
        let naming = self.named_state().naming();
        let dummy = VariableAssignment::dummy(naming.vocabulary().clone(), naming.system().clone());

        for world in worlds {
            let world = world.borrow();

            for assignment in dummy.total_extensions() {
                let is_model = world.satisfies_assumption_base(
                    self.assumption_base(),
                    interpretation,
                    &assignment,
                )?;

                if is_model && !world.is_extension_of(inferred)? {
                    log::trace!(target: targets::ENTAILMENT, "Counterexample world found: a model of β does not refine the inferred state.");
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }

    fn worlds_satisfy<I>(
        &self,
        worlds: I,
        formula: &Formula,
        interpretation: &AttributeInterpretation,
    ) -> Result<bool, ErrorKind>
    where
        I: IntoIterator,
        I::Item: Borrow<NamedState>,
    {
        let naming = self.named_state().naming();
        let dummy = VariableAssignment::dummy(naming.vocabulary().clone(), naming.system().clone());

        for world in worlds {
            let world = world.borrow();

            for assignment in dummy.total_extensions() {
                let is_model = world.satisfies_assumption_base(
                    self.assumption_base(),
                    interpretation,
                    &assignment,
                )?;

                if is_model {
                    let value = formula.assign_truth_value(interpretation, world, &assignment)?;

                    if value != Truth::True {
                        log::trace!(target: targets::ENTAILMENT, "Counterexample world found: a model of β does not satisfy the formula.");
                        return Ok(false);
                    }
                }
            }
        }

        Ok(true)
    }
}

impl NamedState {
    /// The proviso behind disjunctive steps: (σ; ρ) ⊨β each model refines one of the given named states.
    ///
    /// Each given named state must be a proper extension of self under the same naming.
    pub fn is_named_entailment(
        &self,
        assumption_base: &AssumptionBase,
        interpretation: &AttributeInterpretation,
        named_states: &[NamedState],
    ) -> Result<bool, ErrorKind> {
        let case_worlds: Vec<Vec<NamedState>> = named_states
            .iter()
            .map(|named_state| named_state.worlds().collect())
            .collect();

        self.named_entailment_over(assumption_base, interpretation, named_states, &case_worlds)
    }

    /// [is_named_entailment](NamedState::is_named_entailment) over already-collected case world sets.
    pub(crate) fn named_entailment_over(
        &self,
        assumption_base: &AssumptionBase,
        interpretation: &AttributeInterpretation,
        named_states: &[NamedState],
        case_worlds: &[Vec<NamedState>],
    ) -> Result<bool, ErrorKind> {
        for named_state in named_states {
            if !named_state.is_proper_extension_of(self)? {
                return Err(err::PreconditionError::NotAnExtension.into());
            }
        }

        let avoided: Vec<State> = case_worlds
            .iter()
            .flatten()
            .map(|world| world.state().clone())
            .collect();

        let alternates = self.state().alternate_extensions(&avoided)?;

        let naming = self.naming();
        let dummy = VariableAssignment::dummy(naming.vocabulary().clone(), naming.system().clone());

        // The proviso holds exactly when β is unsatisfiable over every alternate extension.
        for alternate in &alternates {
            let named_alternate = NamedState::new(alternate.clone(), naming.clone())
                .map_err(ErrorKind::from)?;

            // The worlds of an alternate extension are exactly the worlds of σ refining no case.
            for world in named_alternate.worlds() {
                for assignment in dummy.total_extensions() {
                    if world.satisfies_assumption_base(
                        assumption_base,
                        interpretation,
                        &assignment,
                    )? {
                        log::trace!(target: targets::ENTAILMENT, "Named entailment fails: β is satisfiable outside the given cases.");
                        return Ok(false);
                    }
                }
            }
        }

        Ok(true)
    }
}
