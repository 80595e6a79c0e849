/*!
States --- snapshots of partial knowledge over an attribute system --- and their worlds.

A [State] ascribes to every (attribute, object) pair of its system a [ValueSet] of values still considered possible.
The map is total: a pair never narrowed is ascribed the attribute's full declared domain, maximal ignorance.

A *world* is a state in which every ascription is a singleton --- complete information.
[worlds](State::worlds) enumerates, lazily and exactly, the worlds obtained by choosing one value per ascription: all the ways the partial state could be completed.

# The extension order

A state s₂ *extends* s₁ (s₁ ≤ s₂) when the two share an attribute system and every ascription of s₂ is a subset of the corresponding ascription of s₁.
Extension is a partial order, and is the formal meaning of gaining information: thinning moves up the order, widening moves down it.
Comparing states over distinct systems is a caller bug, reported as [SystemMismatch](crate::types::err::AscriptionError::SystemMismatch).

# Revision

The only mutation a state permits is [set_ascription](State::set_ascription), and only to a subset of the current set (narrowing) or a superset of it within the declared domain (re-widening).
An empty replacement, values outside the domain, a replacement comparable in neither direction, or an undeclared pair are rejected without mutating the state.

```rust
# use vivid::structures::attribute::{Attribute, AttributeStructure, AttributeSystem};
# use vivid::structures::state::State;
# use vivid::structures::value::ValueSet;
# use std::sync::Arc;
let color = Attribute::new("color", ValueSet::new(["R", "G", "B"]).unwrap());
let structure = Arc::new(AttributeStructure::new([color]).unwrap());
let system = Arc::new(AttributeSystem::new(structure, ["s1", "s2"]).unwrap());

let mut state = State::new(system);
assert_eq!(state.world_count(), 9);

state.set_ascription("color", "s1", ["R"]).unwrap();
assert_eq!(state.world_count(), 3);
assert!(state.set_ascription("color", "s1", ["G"]).is_err());
```
*/

mod extensions;
pub mod named;

pub use named::NamedState;

use std::sync::Arc;

use crate::{
    generic::product::Product,
    misc::log::targets::{self},
    structures::{
        attribute::AttributeSystem,
        value::{Value, ValueSet},
    },
    types::err::{self},
};

/// A total ascription of value sets across an attribute system.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct State {
    system: Arc<AttributeSystem>,

    /// One value set per (attribute, object) pair, flat, in the system's canonical pair order.
    ascriptions: Vec<ValueSet>,
}

impl State {
    /// The state of maximal ignorance: every pair ascribed its full declared domain.
    pub fn new(system: Arc<AttributeSystem>) -> Self {
        let ascriptions = system
            .pairs()
            .map(|(attribute, _)| attribute.domain().clone())
            .collect();

        State {
            system,
            ascriptions,
        }
    }

    /// A state narrowed by the given batch of ascriptions, applied in order.
    pub fn with_ascriptions<V: Into<Value>>(
        system: Arc<AttributeSystem>,
        ascriptions: impl IntoIterator<Item = (impl AsRef<str>, impl AsRef<str>, Vec<V>)>,
    ) -> Result<Self, err::AscriptionError> {
        let mut state = State::new(system);

        for (attribute, object, values) in ascriptions {
            state.set_ascription(attribute.as_ref(), object.as_ref(), values)?;
        }

        Ok(state)
    }

    pub fn system(&self) -> &Arc<AttributeSystem> {
        &self.system
    }

    /// The value set ascribed to the given (attribute, object) pair.
    pub fn ascription(&self, attribute: &str, object: &str) -> Result<&ValueSet, err::AscriptionError> {
        match self.system.pair_index(attribute, object) {
            Some(index) => Ok(&self.ascriptions[index]),
            None => Err(err::AscriptionError::UndeclaredPair(
                attribute.to_owned(),
                object.to_owned(),
            )),
        }
    }

    /// The ascriptions of the state, flat, in canonical pair order.
    pub fn ascriptions(&self) -> &[ValueSet] {
        &self.ascriptions
    }

    /// Revise the ascription of the given pair.
    ///
    /// The replacement must be non-empty, within the declared domain, and a narrowing or re-widening of the current set.
    /// On any error the state is unchanged.
    pub fn set_ascription<V: Into<Value>>(
        &mut self,
        attribute: &str,
        object: &str,
        values: impl IntoIterator<Item = V>,
    ) -> Result<(), err::AscriptionError> {
        let Some(index) = self.system.pair_index(attribute, object) else {
            return Err(err::AscriptionError::UndeclaredPair(
                attribute.to_owned(),
                object.to_owned(),
            ));
        };

        let replacement = match ValueSet::new(values) {
            Ok(set) => set,
            Err(err::ValueSetError::Empty) => return Err(err::AscriptionError::EmptyAscription),
        };

        // The pair index is valid, so the attribute is declared.
        let domain = self
            .system
            .structure()
            .attribute(attribute)
            .expect("declared attribute")
            .domain();

        if !replacement.is_subset(domain) {
            return Err(err::AscriptionError::OutsideDomain);
        }

        let current = &self.ascriptions[index];
        if !replacement.is_subset(current) && !replacement.is_superset(current) {
            return Err(err::AscriptionError::Incomparable);
        }

        log::trace!(target: targets::WORLDS, "Ascription ({attribute}, {object}) set to {replacement}.");
        self.ascriptions[index] = replacement;

        Ok(())
    }

    /// Whether every ascription is a singleton --- complete information.
    pub fn is_world(&self) -> bool {
        self.ascriptions.iter().all(ValueSet::is_singleton)
    }

    /// Whether self extends other: other ≤ self.
    ///
    /// Distinct attribute systems are a caller bug.
    pub fn is_extension_of(&self, other: &State) -> Result<bool, err::AscriptionError> {
        if self.system != other.system {
            return Err(err::AscriptionError::SystemMismatch);
        }

        let extends = self
            .ascriptions
            .iter()
            .zip(&other.ascriptions)
            .all(|(ours, theirs)| ours.is_subset(theirs));

        Ok(extends)
    }

    /// Whether self properly extends other: other < self.
    pub fn is_proper_extension_of(&self, other: &State) -> Result<bool, err::AscriptionError> {
        Ok(self.is_extension_of(other)? && self != other)
    }

    /// The count of worlds of the state, without enumeration.
    pub fn world_count(&self) -> usize {
        self.ascriptions.iter().map(ValueSet::len).product()
    }

    /// The worlds of the state: every total refinement, by lazy cartesian product of the ascriptions.
    ///
    /// Each world is itself a state which [is_world](State::is_world) and extends self, and every such total refinement appears exactly once.
    pub fn worlds(&self) -> impl Iterator<Item = State> + '_ {
        let axes = self
            .ascriptions
            .iter()
            .map(|set| set.iter().cloned().collect::<Vec<_>>())
            .collect::<Vec<_>>();

        Product::new(axes).map(|choice| State {
            system: self.system.clone(),
            ascriptions: choice.into_iter().map(ValueSet::singleton).collect(),
        })
    }

    /// Whether self is one of the worlds of the given state.
    pub fn is_world_of(&self, state: &State) -> Result<bool, err::AscriptionError> {
        Ok(self.is_world() && self.is_extension_of(state)?)
    }
}
