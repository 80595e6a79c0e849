/*!
Assignments of objects to constant and variable symbols.

A [ConstantAssignment] is a partial map from a vocabulary's constants to objects of an attribute system --- the naming component ρ of a named state.
A [VariableAssignment] is the analogue over variables, used to bind the free variables of a formula during evaluation.

Both are validated on construction: every source symbol must be declared by the vocabulary and every target must be an object of the system.
Aliasing is permitted --- two symbols may name one object --- and equality formulas decide object identity, not symbol identity.

# The dummy assignment

Evaluation of a closed formula needs no variable binding, yet takes an assignment.
For this, [VariableAssignment::dummy] is the empty assignment, flagged so a caller may distinguish 'deliberately empty' from 'not yet extended'.

# Total extensions

Entailment quantifies over every total variable assignment.
[total_extensions](VariableAssignment::total_extensions) enumerates these lazily as the cartesian product of the object universe over the unbound variables, the bound variables held fixed.
*/

use std::{collections::BTreeMap, sync::Arc};

use crate::{
    generic::product::Product,
    structures::{attribute::AttributeSystem, vocabulary::Vocabulary},
    types::err::{self},
};

/// A partial map from constants to objects: the naming ρ of a named state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConstantAssignment {
    vocabulary: Arc<Vocabulary>,
    system: Arc<AttributeSystem>,
    map: BTreeMap<String, String>,
}

impl ConstantAssignment {
    /// An assignment of the given constant-to-object map.
    pub fn new(
        vocabulary: Arc<Vocabulary>,
        system: Arc<AttributeSystem>,
        map: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Result<Self, err::AssignmentError> {
        let map: BTreeMap<String, String> = map
            .into_iter()
            .map(|(c, o)| (c.into(), o.into()))
            .collect();

        for (constant, object) in &map {
            if !vocabulary.has_constant(constant) {
                return Err(err::AssignmentError::UnknownConstant(constant.clone()));
            }
            if !system.has_object(object) {
                return Err(err::AssignmentError::UnknownObject(object.clone()));
            }
        }

        Ok(ConstantAssignment {
            vocabulary,
            system,
            map,
        })
    }

    /// The empty naming over the given vocabulary and system.
    pub fn empty(vocabulary: Arc<Vocabulary>, system: Arc<AttributeSystem>) -> Self {
        ConstantAssignment {
            vocabulary,
            system,
            map: BTreeMap::new(),
        }
    }

    /// The object the given constant names, if any.
    pub fn object_of(&self, constant: &str) -> Option<&str> {
        self.map.get(constant).map(String::as_str)
    }

    /// The objects named by some constant.
    pub fn named_objects(&self) -> impl Iterator<Item = &str> {
        self.map.values().map(String::as_str)
    }

    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    pub fn system(&self) -> &Arc<AttributeSystem> {
        &self.system
    }
}

/// A partial map from variables to objects.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VariableAssignment {
    vocabulary: Arc<Vocabulary>,
    system: Arc<AttributeSystem>,
    map: BTreeMap<String, String>,

    /// Set for the deliberately-empty assignment used when no binding is needed.
    dummy: bool,
}

impl VariableAssignment {
    /// An assignment of the given variable-to-object map.
    pub fn new(
        vocabulary: Arc<Vocabulary>,
        system: Arc<AttributeSystem>,
        map: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Result<Self, err::AssignmentError> {
        let map: BTreeMap<String, String> = map
            .into_iter()
            .map(|(v, o)| (v.into(), o.into()))
            .collect();

        for (variable, object) in &map {
            if !vocabulary.has_variable(variable) {
                return Err(err::AssignmentError::UnknownVariable(variable.clone()));
            }
            if !system.has_object(object) {
                return Err(err::AssignmentError::UnknownObject(object.clone()));
            }
        }

        Ok(VariableAssignment {
            vocabulary,
            system,
            map,
            dummy: false,
        })
    }

    /// The empty assignment, flagged, for evaluation which needs no binding.
    pub fn dummy(vocabulary: Arc<Vocabulary>, system: Arc<AttributeSystem>) -> Self {
        VariableAssignment {
            vocabulary,
            system,
            map: BTreeMap::new(),
            dummy: true,
        }
    }

    pub fn is_dummy(&self) -> bool {
        self.dummy
    }

    /// The object the given variable is bound to, if any.
    pub fn object_of(&self, variable: &str) -> Option<&str> {
        self.map.get(variable).map(String::as_str)
    }

    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    pub fn system(&self) -> &Arc<AttributeSystem> {
        &self.system
    }

    /// The variables of the vocabulary this assignment does not bind.
    pub fn unbound_variables(&self) -> Vec<String> {
        self.vocabulary
            .variables()
            .iter()
            .filter(|v| !self.map.contains_key(*v))
            .cloned()
            .collect()
    }

    /// Every total assignment extending this one over the object universe, lazily.
    ///
    /// With nothing unbound the sole extension is the assignment itself.
    pub fn total_extensions(&self) -> impl Iterator<Item = VariableAssignment> + '_ {
        let unbound = self.unbound_variables();
        let universe: Vec<String> = self.system.objects().to_vec();

        let choices = Product::new(vec![universe; unbound.len()]);

        choices.map(move |objects| {
            let mut map = self.map.clone();
            for (variable, object) in unbound.iter().zip(objects) {
                map.insert(variable.clone(), object);
            }

            VariableAssignment {
                vocabulary: self.vocabulary.clone(),
                system: self.system.clone(),
                map,
                dummy: false,
            }
        })
    }
}
