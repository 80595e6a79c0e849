/*!
The vocabulary --- the fixed symbols available to formulas.

A [Vocabulary] collects three symbol sets: constants, variables, and [relation symbols](RelationSymbol).
Constants and variables are names for objects; relation symbols have a name and a fixed, positive arity.

Vocabularies are validated on construction and immutable afterwards:
- Each set is kept sorted and deduplicated, so membership and equality are order-independent.
- A name may not serve as both a constant and a variable.

Formulas and assumption bases are closed over a single shared vocabulary, referenced via [Arc](std::sync::Arc).
*/

use crate::types::err::{self};

/// A relation symbol: a name with a fixed positive arity.
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct RelationSymbol {
    name: String,
    arity: usize,
}

impl RelationSymbol {
    /// A symbol of the given name and arity.
    ///
    /// Zero arity is an error.
    pub fn new(name: impl Into<String>, arity: usize) -> Result<Self, err::VocabularyError> {
        let name = name.into();

        if arity == 0 {
            return Err(err::VocabularyError::ZeroArity(name));
        }

        Ok(RelationSymbol { name, arity })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }
}

/// The symbol sets available to formulas of some proof.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vocabulary {
    constants: Vec<String>,
    variables: Vec<String>,
    relation_symbols: Vec<RelationSymbol>,
}

impl Vocabulary {
    /// A vocabulary over the given symbols.
    ///
    /// Sets are sorted and checked for duplicates, and no name may be both a constant and a variable.
    pub fn new(
        constants: impl IntoIterator<Item = impl Into<String>>,
        variables: impl IntoIterator<Item = impl Into<String>>,
        relation_symbols: impl IntoIterator<Item = RelationSymbol>,
    ) -> Result<Self, err::VocabularyError> {
        let mut constants: Vec<String> = constants.into_iter().map(Into::into).collect();
        let mut variables: Vec<String> = variables.into_iter().map(Into::into).collect();
        let mut relation_symbols: Vec<RelationSymbol> = relation_symbols.into_iter().collect();

        constants.sort();
        variables.sort();
        relation_symbols.sort();

        if let Some(name) = first_adjacent_duplicate(&constants) {
            return Err(err::VocabularyError::DuplicateConstant(name.to_owned()));
        }

        if let Some(name) = first_adjacent_duplicate(&variables) {
            return Err(err::VocabularyError::DuplicateVariable(name.to_owned()));
        }

        for window in relation_symbols.windows(2) {
            if window[0].name() == window[1].name() {
                return Err(err::VocabularyError::DuplicateRelationSymbol(
                    window[0].name().to_owned(),
                ));
            }
        }

        for constant in &constants {
            if variables.binary_search(constant).is_ok() {
                return Err(err::VocabularyError::ConstantVariableClash(
                    constant.clone(),
                ));
            }
        }

        Ok(Vocabulary {
            constants,
            variables,
            relation_symbols,
        })
    }

    pub fn constants(&self) -> &[String] {
        &self.constants
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn relation_symbols(&self) -> &[RelationSymbol] {
        &self.relation_symbols
    }

    pub fn has_constant(&self, name: &str) -> bool {
        self.constants.binary_search_by(|c| c.as_str().cmp(name)).is_ok()
    }

    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.binary_search_by(|v| v.as_str().cmp(name)).is_ok()
    }

    /// The relation symbol with the given name, if declared.
    pub fn relation_symbol(&self, name: &str) -> Option<&RelationSymbol> {
        self.relation_symbols.iter().find(|rs| rs.name() == name)
    }

    /// The arity of the named relation symbol, if declared.
    pub fn arity_of(&self, name: &str) -> Option<usize> {
        self.relation_symbol(name).map(RelationSymbol::arity)
    }
}

fn first_adjacent_duplicate(sorted: &[String]) -> Option<&str> {
    sorted
        .windows(2)
        .find(|window| window[0] == window[1])
        .map(|window| window[0].as_str())
}
