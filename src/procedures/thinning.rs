/*!
Thinning --- moving up the information order.

With no assumption base, thinning licenses (σ'; ρ') from (β; (σ; ρ)) exactly when (σ'; ρ') ≤ (σ; ρ): the diagram already carries at least the information of the conclusion.

With an assumption base {F₁, …, Fₙ}, the rule instead asks whether (σ; ρ) ⊩{F₁, …, Fₙ} (σ'; ρ') --- the named-entailment proviso with the external hypotheses --- which licenses thinning that plain extension alone would not.
An interpretation is then required to evaluate the hypotheses.
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::{
        formula::AssumptionBase, interpretation::AttributeInterpretation, state::NamedState,
    },
    types::err::{self, ErrorKind},
};

/// Whether the given named state can be obtained from the context by thinning.
pub fn thinning(
    context: &Context,
    named_state: &NamedState,
    assumption_base: Option<&AssumptionBase>,
    interpretation: Option<&AttributeInterpretation>,
) -> Result<bool, ErrorKind> {
    match assumption_base {
        None => {
            let holds = context.named_state().is_extension_of(named_state)?;
            log::trace!(target: targets::RULES, "Thinning by plain extension: {holds}.");
            Ok(holds)
        }

        Some(base) => {
            let Some(interpretation) = interpretation else {
                return Err(err::PreconditionError::MissingInterpretation.into());
            };

            context.named_state().is_named_entailment(
                base,
                interpretation,
                std::slice::from_ref(named_state),
            )
        }
    }
}
