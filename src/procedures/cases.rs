/*!
The diagrammatic case-split rules [C1] and [C3].

Both rules conclude from the present diagram and zero or more case-splitting formulas F₁, …, Fₖ, with named states (σ₁; ρ₁), …, (σₙ; ρₙ) as the branches of the split.

The shared scaffolding:
1. With formulas supplied, compute their [basis](crate::context::Basis) over the diagram and require the branches to be [exhaustive](crate::context::basis::is_exhaustive) --- a precondition error otherwise.
   The case assumption base is then built from the formulas; without formulas, an empty base over the context's vocabulary stands in.
2. Require the named-entailment proviso of the branch states against that base --- a precondition error otherwise.
3. Decide entailment of the conclusion from the context extended with the union of its own base and the formulas.

[C1] concludes a named state, via named-state entailment; [C3] concludes a formula, via formula entailment.

A single rule application consults the diagram's world set twice (basis, then entailment) and each branch's world set twice (exhaustiveness, then the proviso).
The scaffolding collects each set once and threads it through the crate-internal variants of the nested checks.
*/

use crate::{
    context::{
        basis::{self, Basis},
        Context,
    },
    misc::log::targets::{self},
    structures::{
        assignment::VariableAssignment,
        formula::{AssumptionBase, Formula},
        interpretation::AttributeInterpretation,
        state::NamedState,
    },
    types::err::{self, ErrorKind},
};

/// Whether the given named state can be derived in every one of the given cases.
///
/// This is rule [C1].
pub fn diagrammatic_to_diagrammatic(
    context: &Context,
    inferred: &NamedState,
    named_states: &[NamedState],
    interpretation: &AttributeInterpretation,
    variable_assignment: &VariableAssignment,
    formulas: &[Formula],
) -> Result<bool, ErrorKind> {
    let (extended, worlds) = case_scaffolding(
        context,
        named_states,
        interpretation,
        variable_assignment,
        formulas,
    )?;

    extended.entails_named_state_over(&worlds, inferred, interpretation)
}

/// Whether the given formula can be derived in every one of the given cases.
///
/// This is rule [C3].
pub fn diagrammatic_to_sentential(
    context: &Context,
    conclusion: &Formula,
    named_states: &[NamedState],
    interpretation: &AttributeInterpretation,
    variable_assignment: &VariableAssignment,
    formulas: &[Formula],
) -> Result<bool, ErrorKind> {
    let (extended, worlds) = case_scaffolding(
        context,
        named_states,
        interpretation,
        variable_assignment,
        formulas,
    )?;

    extended.entails_formula_over(&worlds, conclusion, interpretation)
}

/// The scaffolding shared by [C1] and [C3]: exhaustiveness, the proviso, and the extended context.
///
/// Returns the extended context together with the diagram's world set, collected once, for the final entailment check.
fn case_scaffolding(
    context: &Context,
    named_states: &[NamedState],
    interpretation: &AttributeInterpretation,
    variable_assignment: &VariableAssignment,
    formulas: &[Formula],
) -> Result<(Context, Vec<NamedState>), ErrorKind> {
    let vocabulary = context.assumption_base().vocabulary().clone();

    // The world sets the nested checks consult, each collected once.
    let context_worlds: Vec<NamedState> = context.named_state().worlds().collect();
    let case_worlds: Vec<Vec<NamedState>> = named_states
        .iter()
        .map(|named_state| named_state.worlds().collect())
        .collect();

    let case_base = match formulas.is_empty() {
        true => AssumptionBase::empty(vocabulary),

        false => {
            let basis = Basis::over(&context_worlds, variable_assignment, interpretation, formulas)?;

            if !basis::exhaustive_over(&basis, &case_worlds) {
                log::trace!(target: targets::RULES, "Case split rejected: the named states are not exhaustive on the basis of the formulas.");
                return Err(err::PreconditionError::NotExhaustive.into());
            }

            AssumptionBase::from_formulas(vocabulary, formulas.iter().cloned())
        }
    };

    let proviso = context.named_state().named_entailment_over(
        &case_base,
        interpretation,
        named_states,
        &case_worlds,
    )?;

    if !proviso {
        log::trace!(target: targets::RULES, "Case split rejected: the named-entailment proviso does not hold.");
        return Err(err::PreconditionError::ProvisoFailed.into());
    }

    // The proviso holds; conclude from (β ∪ {F₁, …, Fₖ}; (σ; ρ)).
    let extended = Context::new(
        context.assumption_base().union(formulas.iter().cloned()),
        context.named_state().clone(),
    )?;

    Ok((extended, context_worlds))
}
