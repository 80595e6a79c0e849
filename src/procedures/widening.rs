/*!
Widening --- moving down the information order.

Widening licenses (σ'; ρ') from (β; (σ; ρ)) when (σ; ρ) ≤ (σ'; ρ'): the conclusion carries at least the diagram's information.

When an interpretation is supplied the rule additionally requires (β; (σ; ρ)) ⊨ (σ'; ρ') to hold first, failing with a precondition error otherwise; the plain-extension check is always applied last as the operative result.
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::{interpretation::AttributeInterpretation, state::NamedState},
    types::err::{self, ErrorKind},
};

/// Whether the given named state can be obtained from the context by widening.
pub fn widening(
    context: &Context,
    named_state: &NamedState,
    interpretation: Option<&AttributeInterpretation>,
) -> Result<bool, ErrorKind> {
    if let Some(interpretation) = interpretation {
        if !context.entails_named_state(named_state, interpretation)? {
            return Err(err::PreconditionError::EntailmentFailed.into());
        }
    }

    let holds = named_state.is_extension_of(context.named_state())?;
    log::trace!(target: targets::RULES, "Widening by plain extension: {holds}.");

    Ok(holds)
}
