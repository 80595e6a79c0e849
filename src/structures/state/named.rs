/*!
Named states --- a state paired with a naming of some of its objects.

A [NamedState] (σ; ρ) couples a [State] σ with a [ConstantAssignment] ρ over the same attribute system.
The naming gives constants of the vocabulary as handles on specific objects, which is what lets sentential formulas speak about the diagram.

Extension, worlds, and satisfaction are all defined through the state component; the naming components of two named states being compared must agree.
*/

use crate::{
    structures::{
        assignment::{ConstantAssignment, VariableAssignment},
        formula::{AssumptionBase, Truth},
        interpretation::AttributeInterpretation,
        state::State,
    },
    types::err::{self, ErrorKind},
};

/// A state with a naming: (σ; ρ).
#[derive(Clone, Debug, PartialEq)]
pub struct NamedState {
    state: State,
    naming: ConstantAssignment,
}

impl NamedState {
    /// The named state (σ; ρ), requiring σ and ρ to share an attribute system.
    pub fn new(state: State, naming: ConstantAssignment) -> Result<Self, err::AscriptionError> {
        if state.system() != naming.system() {
            return Err(err::AscriptionError::SystemMismatch);
        }

        Ok(NamedState { state, naming })
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn naming(&self) -> &ConstantAssignment {
        &self.naming
    }

    /// Whether every ascription of an object the naming picks out is a singleton.
    ///
    /// The named parts of the diagram are then fully determined; unnamed objects may remain partial.
    pub fn is_valuation(&self) -> bool {
        let named: Vec<&str> = self.naming.named_objects().collect();

        for (attribute, object) in self.state.system().pairs() {
            if named.contains(&object) {
                // Declared pair, the lookup cannot miss.
                let ascription = self
                    .state
                    .ascription(attribute.label(), object)
                    .expect("declared pair");

                if !ascription.is_singleton() {
                    return false;
                }
            }
        }

        true
    }

    /// Whether the state component is a world.
    pub fn is_world(&self) -> bool {
        self.state.is_world()
    }

    /// Whether self extends other: equal namings, and other's state ≤ self's.
    pub fn is_extension_of(&self, other: &NamedState) -> Result<bool, err::AscriptionError> {
        Ok(self.naming == other.naming && self.state.is_extension_of(&other.state)?)
    }

    /// Whether self properly extends other.
    pub fn is_proper_extension_of(&self, other: &NamedState) -> Result<bool, err::AscriptionError> {
        Ok(self.naming == other.naming && self.state.is_proper_extension_of(&other.state)?)
    }

    /// The worlds of the state component, each re-paired with the same naming.
    pub fn worlds(&self) -> impl Iterator<Item = NamedState> + '_ {
        self.state.worlds().map(|world| NamedState {
            state: world,
            naming: self.naming.clone(),
        })
    }

    /// The count of worlds, without enumeration.
    pub fn world_count(&self) -> usize {
        self.state.world_count()
    }

    /// Whether the given formula evaluates true in self under the given assignment.
    pub fn satisfies_formula(
        &self,
        formula: &crate::structures::formula::Formula,
        interpretation: &AttributeInterpretation,
        variable_assignment: &VariableAssignment,
    ) -> Result<bool, ErrorKind> {
        let value = formula.assign_truth_value(interpretation, self, variable_assignment)?;
        Ok(value == Truth::True)
    }

    /// Whether every formula of the given base evaluates true in self under the given assignment.
    pub fn satisfies_assumption_base(
        &self,
        assumption_base: &AssumptionBase,
        interpretation: &AttributeInterpretation,
        variable_assignment: &VariableAssignment,
    ) -> Result<bool, ErrorKind> {
        for formula in assumption_base.formulas() {
            if !self.satisfies_formula(formula, interpretation, variable_assignment)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Whether self --- expected to be a world --- satisfies the given context under the given assignment.
    ///
    /// That is: self extends the context's named state, and satisfies its assumption base.
    pub fn satisfies_context(
        &self,
        context: &crate::context::Context,
        interpretation: &AttributeInterpretation,
        variable_assignment: &VariableAssignment,
    ) -> Result<bool, ErrorKind> {
        if !self.is_extension_of(context.named_state())? {
            return Ok(false);
        }

        self.satisfies_assumption_base(
            context.assumption_base(),
            interpretation,
            variable_assignment,
        )
    }
}
