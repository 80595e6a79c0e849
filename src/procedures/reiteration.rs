/*!
Diagram reiteration --- retrieving the current diagram.

(β; (σ; ρ)) ⊨ (σ; ρ) always holds, so the rule simply returns the context's own named state, unchanged.
*/

use crate::{context::Context, structures::state::NamedState};

/// The context's own named state: (β; (σ; ρ)) ⊨ (σ; ρ).
pub fn diagram_reiteration(context: &Context) -> NamedState {
    context.named_state().clone()
}
