/*!
Alternate extensions --- the minimal strict extensions of a state avoiding given worlds.

Given a state σ and worlds w₁, …, wₙ of σ, an *alternate extension* of σ is a minimal extension admitting none of the wᵢ.
Together the alternate extensions carve up the remainder: a world of σ refines some alternate extension exactly when it is none of the given worlds.
This is what the named-entailment proviso of the case rules quantifies over --- the part of the diagram the supplied cases do *not* cover.

# Search

To avoid a world wᵢ, at least one ascription must exclude wᵢ's value at some pair.
So candidates are built by choosing, per avoided world, one pair at which to exclude its value, and taking the cartesian product of these blocking choices.
Candidates with an emptied ascription are discarded (no state represents them), duplicates collapse, and only minimal candidates --- those extending no other candidate --- remain.

The search is exponential in the number of avoided worlds, which is in keeping with the engine's charter of checking small diagrams exactly.
*/

use crate::{
    misc::log::targets::{self},
    structures::{state::State, value::Value},
    types::err::{self},
};

impl State {
    /// The minimal strict extensions of self admitting none of the given worlds.
    ///
    /// Each given state must be a world of self.
    /// With no worlds given there is nothing to avoid, and self is its own sole 'extension'.
    pub fn alternate_extensions(&self, worlds: &[State]) -> Result<Vec<State>, err::AscriptionError> {
        for world in worlds {
            if !world.is_world_of(self)? {
                return Err(err::AscriptionError::NotAWorldOf);
            }
        }

        if worlds.is_empty() {
            return Ok(vec![self.clone()]);
        }

        // Per avoided world, the pairs at which its value can be excluded.
        let mut blocking_choices: Vec<Vec<(usize, Value)>> = Vec::with_capacity(worlds.len());

        for world in worlds {
            let mut choices = Vec::new();

            for (index, ascription) in self.ascriptions().iter().enumerate() {
                // A world ascription is a singleton.
                let value = world.ascriptions()[index]
                    .the_value()
                    .expect("singleton ascription");

                if ascription.len() > 1 {
                    choices.push((index, value.clone()));
                }
            }

            // Some world admits no exclusion only when self is that world itself.
            if choices.is_empty() {
                log::trace!(target: targets::WORLDS, "No extension avoids a given world: the state is total.");
                return Ok(Vec::new());
            }

            blocking_choices.push(choices);
        }

        let mut candidates: Vec<State> = Vec::new();

        'choices: for combination in crate::generic::product::Product::new(blocking_choices) {
            let mut candidate = self.clone();

            for (index, value) in combination {
                match candidate.ascriptions[index].without(&value) {
                    Some(narrowed) => candidate.ascriptions[index] = narrowed,

                    // Exclusion emptied an ascription, no state represents the choice.
                    None => continue 'choices,
                }
            }

            if !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        }

        // Keep the minimal candidates: those which are not proper extensions of another.
        let mut minimal: Vec<State> = Vec::new();

        'candidates: for (position, candidate) in candidates.iter().enumerate() {
            for (other_position, other) in candidates.iter().enumerate() {
                if position != other_position && candidate.is_proper_extension_of(other)? {
                    continue 'candidates;
                }
            }
            minimal.push(candidate.clone());
        }

        log::trace!(target: targets::WORLDS, "{} alternate extension(s) found for {} avoided world(s).", minimal.len(), worlds.len());

        Ok(minimal)
    }
}
