/*!
Diagrammatic absurdity --- ex falso over diagrams.

To show (σ'; ρ') **by absurdity** is to show (β; (σ; ρ)) ⊨ (σ'; ρ') in the knowledge that β is contradictory.
The mechanism is intentionally identical to plain named-state entailment:
when some formula of β is false in every world of the diagram, no candidate is a model, the quantifier over models is vacuous, and the entailment holds for *any* named state whatsoever.
That vacuity is the formal content of ex falso, not a corner case to guard against.
*/

use crate::{
    context::Context,
    structures::{interpretation::AttributeInterpretation, state::NamedState},
    types::err::ErrorKind,
};

/// Whether the given named state can be obtained from the context by absurdity.
pub fn diagrammatic_absurdity(
    context: &Context,
    named_state: &NamedState,
    interpretation: &AttributeInterpretation,
) -> Result<bool, ErrorKind> {
    context.entails_named_state(named_state, interpretation)
}
