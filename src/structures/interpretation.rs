/*!
Attribute interpretations --- the grounding of relation symbols in attribute values.

An [AttributeInterpretation] pairs each interpreted relation symbol with one or more [Profile]s.
A profile is a tuple of attribute labels, one per argument place of the symbol, together with a truth condition over the corresponding value tuple.

An atomic formula R(t₁, …, tₖ) is then grounded by resolving each term to an object and asking, of the values the objects' ascriptions still admit, whether some profile's condition holds.
Over a partial state the answer may depend on which admissible values are chosen; the [evaluator](crate::structures::formula) reports this as an indeterminate truth value.

Conditions are arbitrary closures over value tuples, shared via [Arc] so interpretations clone cheaply.
*/

use std::{collections::BTreeMap, sync::Arc};

use crate::{
    structures::{attribute::AttributeStructure, value::Value, vocabulary::Vocabulary},
    types::err::{self},
};

/// The truth condition of a profile, over one value per argument place.
pub type Condition = Arc<dyn Fn(&[&Value]) -> bool + Send + Sync>;

/// One way a relation symbol is realised in attributes: an attribute tuple and a condition over its values.
#[derive(Clone)]
pub struct Profile {
    attributes: Vec<String>,
    condition: Condition,
}

impl Profile {
    pub fn new(
        attributes: impl IntoIterator<Item = impl Into<String>>,
        condition: impl Fn(&[&Value]) -> bool + Send + Sync + 'static,
    ) -> Self {
        Profile {
            attributes: attributes.into_iter().map(Into::into).collect(),
            condition: Arc::new(condition),
        }
    }

    /// The attribute labels of the profile, one per argument place of its symbol.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Whether the condition holds of the given value tuple.
    pub fn holds(&self, values: &[&Value]) -> bool {
        (self.condition)(values)
    }
}

impl std::fmt::Debug for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Profile")
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}

/// A grounding of relation symbols in terms of attribute-value conditions.
#[derive(Clone, Debug)]
pub struct AttributeInterpretation {
    vocabulary: Arc<Vocabulary>,
    profiles: BTreeMap<String, Vec<Profile>>,
}

impl AttributeInterpretation {
    /// An interpretation of the given profiles, keyed by relation-symbol name.
    ///
    /// Each symbol must be declared by the vocabulary, each profile tuple must match its symbol's arity, and every referenced attribute must be declared by the structure.
    pub fn new(
        vocabulary: Arc<Vocabulary>,
        structure: &AttributeStructure,
        profiles: impl IntoIterator<Item = (impl Into<String>, Vec<Profile>)>,
    ) -> Result<Self, err::InterpretationError> {
        let profiles: BTreeMap<String, Vec<Profile>> = profiles
            .into_iter()
            .map(|(name, ps)| (name.into(), ps))
            .collect();

        for (name, symbol_profiles) in &profiles {
            let Some(symbol) = vocabulary.relation_symbol(name) else {
                return Err(err::InterpretationError::UnknownRelationSymbol(
                    name.clone(),
                ));
            };

            for profile in symbol_profiles {
                if profile.attributes().len() != symbol.arity() {
                    return Err(err::InterpretationError::ArityMismatch(name.clone()));
                }

                for attribute in profile.attributes() {
                    if structure.attribute(attribute).is_none() {
                        return Err(err::InterpretationError::UnknownAttribute(
                            attribute.clone(),
                        ));
                    }
                }
            }
        }

        Ok(AttributeInterpretation {
            vocabulary,
            profiles,
        })
    }

    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    /// The profiles grounding the named symbol, if interpreted.
    pub fn profiles_of(&self, name: &str) -> Option<&[Profile]> {
        self.profiles.get(name).map(Vec::as_slice)
    }
}
