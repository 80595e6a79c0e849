/*!
Observation --- reading a formula off the diagram.

**observe** F holds in (β; (σ; ρ)) exactly when (β; (σ; ρ)) ⊨ F: every model of the context satisfies F.
The rule is a direct application of formula entailment.
*/

use crate::{
    context::Context,
    structures::{formula::Formula, interpretation::AttributeInterpretation},
    types::err::ErrorKind,
};

/// Whether the given formula can be observed in the context.
pub fn observe(
    context: &Context,
    formula: &Formula,
    interpretation: &AttributeInterpretation,
) -> Result<bool, ErrorKind> {
    context.entails_formula(formula, interpretation)
}
