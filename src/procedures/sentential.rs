/*!
The sentential case-split rules: discharging a disjunction into a sentential or diagrammatic conclusion.

Both rules begin from a disjunction F₁ ∨ F₂ which must already hold in the diagram: at least one disjunct evaluates true in the context's named state.
Neither disjunct holding is a precondition error --- the split is not licensed, rather than merely unproductive.

- [sentential_to_sentential] discharges into a formula G: G must hold whenever F₁ holds and whenever F₂ holds.
- [sentential_to_diagrammatic] ([C2]) discharges into a named state (σ'; ρ'): every world of the *target* state, under every total variable assignment, must satisfy both the context extended with F₁ and the context extended with F₂ --- the conclusion follows from the diagram under either disjunct.
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::{
        assignment::VariableAssignment,
        formula::{Formula, Truth},
        interpretation::AttributeInterpretation,
        state::NamedState,
    },
    types::err::{self, ErrorKind},
};

/// Whether G can be concluded from the context given the disjunction F₁ ∨ F₂.
pub fn sentential_to_sentential(
    context: &Context,
    f1: &Formula,
    f2: &Formula,
    g: &Formula,
    interpretation: &AttributeInterpretation,
    variable_assignment: Option<&VariableAssignment>,
) -> Result<bool, ErrorKind> {
    let naming = context.named_state().naming();
    let dummy;
    let assignment = match variable_assignment {
        Some(assignment) => assignment,
        None => {
            dummy = VariableAssignment::dummy(naming.vocabulary().clone(), naming.system().clone());
            &dummy
        }
    };

    let f1_holds =
        f1.assign_truth_value(interpretation, context.named_state(), assignment)? == Truth::True;
    let f2_holds =
        f2.assign_truth_value(interpretation, context.named_state(), assignment)? == Truth::True;

    if !f1_holds && !f2_holds {
        return Err(err::PreconditionError::DisjunctionFailed.into());
    }

    let g_holds =
        g.assign_truth_value(interpretation, context.named_state(), assignment)? == Truth::True;

    if f1_holds && !g_holds {
        return Ok(false);
    }

    if f2_holds && !g_holds {
        return Ok(false);
    }

    Ok(true)
}

/// Whether the given named state can be concluded from the context given the disjunction F₁ ∨ F₂.
///
/// This is rule [C2].
pub fn sentential_to_diagrammatic(
    context: &Context,
    f1: &Formula,
    f2: &Formula,
    named_state: &NamedState,
    interpretation: &AttributeInterpretation,
    variable_assignment: Option<&VariableAssignment>,
) -> Result<bool, ErrorKind> {
    let naming = context.named_state().naming();
    let dummy;
    let assignment = match variable_assignment {
        Some(assignment) => assignment,
        None => {
            dummy = VariableAssignment::dummy(naming.vocabulary().clone(), naming.system().clone());
            &dummy
        }
    };

    let f1_holds =
        f1.assign_truth_value(interpretation, context.named_state(), assignment)? == Truth::True;
    let f2_holds =
        f2.assign_truth_value(interpretation, context.named_state(), assignment)? == Truth::True;

    if !f1_holds && !f2_holds {
        return Err(err::PreconditionError::DisjunctionFailed.into());
    }

    let f1_context = context.extended_with(f1.clone());
    let f2_context = context.extended_with(f2.clone());

    // The worlds come from the entailed state while the contexts keep the original diagram:
    // (β ∪ {F₁ ∨ F₂}; (σ; ρ)) ⊨ (σ'; ρ') is shown by every world of (σ'; ρ') satisfying
    // both extended contexts, so the conclusion follows either way.
    let unbound = VariableAssignment::dummy(naming.vocabulary().clone(), naming.system().clone());

    for world in named_state.worlds() {
        for assignment in unbound.total_extensions() {
            let satisfies_f1 = world.satisfies_context(&f1_context, interpretation, &assignment)?;
            let satisfies_f2 = world.satisfies_context(&f2_context, interpretation, &assignment)?;

            if !satisfies_f1 || !satisfies_f2 {
                log::trace!(target: targets::RULES, "[C2] fails: a world of the target escapes an extended context.");
                return Ok(false);
            }
        }
    }

    Ok(true)
}
