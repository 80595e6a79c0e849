/*!
The context --- one full line of a diagrammatic/sentential proof, and the entailment engine over it.

A [Context] (β; (σ; ρ)) pairs an [AssumptionBase] β with a [NamedState] (σ; ρ).
The engine decides whether a context entails a further named state or formula by model checking over explicit enumeration:
the candidate space is the cartesian product of the worlds of σ and the total variable assignments over the object universe,
the assumption base filters the space, and the residue must lie within the models of the conclusion.

Contexts are never mutated; the inference rules build fresh ones.

# Example

```rust
# use std::sync::Arc;
# use vivid::context::Context;
# use vivid::structures::assignment::ConstantAssignment;
# use vivid::structures::attribute::{Attribute, AttributeStructure, AttributeSystem};
# use vivid::structures::formula::AssumptionBase;
# use vivid::structures::state::{NamedState, State};
# use vivid::structures::value::ValueSet;
# use vivid::structures::vocabulary::Vocabulary;
let color = Attribute::new("color", ValueSet::new(["R", "G"]).unwrap());
let structure = Arc::new(AttributeStructure::new([color]).unwrap());
let system = Arc::new(AttributeSystem::new(structure, ["s1"]).unwrap());
let vocabulary = Arc::new(Vocabulary::new(["c"], ["x"], []).unwrap());

let state = State::new(system.clone());
let naming = ConstantAssignment::new(vocabulary.clone(), system, [("c", "s1")]).unwrap();
let named_state = NamedState::new(state, naming).unwrap();

let context = Context::new(AssumptionBase::empty(vocabulary), named_state).unwrap();
assert!(context.assumption_base().is_empty());
```
*/

pub mod basis;
mod entailment;

pub use basis::{Basis, Branch};

use crate::{
    structures::{formula::AssumptionBase, state::NamedState},
    types::err::{self},
};

/// An assumption base paired with a named state: (β; (σ; ρ)).
#[derive(Clone, Debug, PartialEq)]
pub struct Context {
    assumption_base: AssumptionBase,
    named_state: NamedState,
}

impl Context {
    /// The context (β; (σ; ρ)), requiring β and ρ to share a vocabulary.
    pub fn new(
        assumption_base: AssumptionBase,
        named_state: NamedState,
    ) -> Result<Self, err::AssignmentError> {
        if assumption_base.vocabulary() != named_state.naming().vocabulary() {
            return Err(err::AssignmentError::VocabularyMismatch);
        }

        Ok(Context {
            assumption_base,
            named_state,
        })
    }

    pub fn assumption_base(&self) -> &AssumptionBase {
        &self.assumption_base
    }

    pub fn named_state(&self) -> &NamedState {
        &self.named_state
    }

    /// A fresh context over the same named state, the base extended by the given formula.
    pub fn extended_with(&self, formula: crate::structures::formula::Formula) -> Context {
        Context {
            assumption_base: self.assumption_base.with(formula),
            named_state: self.named_state.clone(),
        }
    }
}
