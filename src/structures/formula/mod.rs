/*!
Formulas over a many-sorted first-order vocabulary, and assumption bases.

A [Formula] is a closed variant tree: atomic relational formulas, equalities over terms, and the sentential compounds built from them.
The closed sum makes the [evaluator](Formula::assign_truth_value) a total, exhaustively-matched recursion --- there is no unhandled shape.

Formula trees are assumed already well-typed against a vocabulary by their constructor; the evaluator still surfaces symbols it cannot resolve as [EvaluationError](crate::types::err::EvaluationError)s.

An [AssumptionBase] is an ordered, deduplicated collection of formulas over one shared vocabulary: the running hypothesis set β of a proof.
Deduplication is maintained at the single insertion point, never recomputed.
*/

mod evaluate;
pub mod truth;

pub use truth::Truth;

use std::sync::Arc;

use crate::structures::vocabulary::Vocabulary;

/// A term of an atomic or equality formula: a constant or a variable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Term {
    Constant(String),
    Variable(String),
}

impl Term {
    /// The symbol's name, whichever kind it is.
    pub fn name(&self) -> &str {
        match self {
            Term::Constant(name) | Term::Variable(name) => name,
        }
    }
}

/// A formula of the calculus.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Formula {
    /// A relational atom R(t₁, …, tₖ).
    Atom { relation: String, terms: Vec<Term> },

    /// An equality t₁ = t₂ over resolved objects.
    Equality(Term, Term),

    Negation(Box<Formula>),
    Conjunction(Box<Formula>, Box<Formula>),
    Disjunction(Box<Formula>, Box<Formula>),
    Conditional(Box<Formula>, Box<Formula>),
}

impl Formula {
    pub fn atom(relation: impl Into<String>, terms: impl IntoIterator<Item = Term>) -> Self {
        Formula::Atom {
            relation: relation.into(),
            terms: terms.into_iter().collect(),
        }
    }

    pub fn equality(left: Term, right: Term) -> Self {
        Formula::Equality(left, right)
    }

    pub fn negation(operand: Formula) -> Self {
        Formula::Negation(Box::new(operand))
    }

    pub fn conjunction(left: Formula, right: Formula) -> Self {
        Formula::Conjunction(Box::new(left), Box::new(right))
    }

    pub fn disjunction(left: Formula, right: Formula) -> Self {
        Formula::Disjunction(Box::new(left), Box::new(right))
    }

    pub fn conditional(antecedent: Formula, consequent: Formula) -> Self {
        Formula::Conditional(Box::new(antecedent), Box::new(consequent))
    }
}

/// An ordered, deduplicated collection of formulas over one vocabulary: β.
#[derive(Clone, Debug, PartialEq)]
pub struct AssumptionBase {
    vocabulary: Arc<Vocabulary>,
    formulas: Vec<Formula>,
}

impl AssumptionBase {
    /// The empty base over the given vocabulary.
    pub fn empty(vocabulary: Arc<Vocabulary>) -> Self {
        AssumptionBase {
            vocabulary,
            formulas: Vec::new(),
        }
    }

    /// A base over the given formulas, in order, duplicates collapsed.
    pub fn from_formulas(
        vocabulary: Arc<Vocabulary>,
        formulas: impl IntoIterator<Item = Formula>,
    ) -> Self {
        let mut base = AssumptionBase::empty(vocabulary);
        for formula in formulas {
            base.insert(formula);
        }

        base
    }

    /// A fresh base extended by the given formula, deduplicated.
    pub fn with(&self, formula: Formula) -> Self {
        let mut base = self.clone();
        base.insert(formula);

        base
    }

    /// A fresh base extended by each of the given formulas, deduplicated.
    pub fn union(&self, formulas: impl IntoIterator<Item = Formula>) -> Self {
        let mut base = self.clone();
        for formula in formulas {
            base.insert(formula);
        }

        base
    }

    /// The single insertion point: appends unless the formula is already present.
    fn insert(&mut self, formula: Formula) {
        if !self.formulas.contains(&formula) {
            self.formulas.push(formula);
        }
    }

    pub fn contains(&self, formula: &Formula) -> bool {
        self.formulas.contains(formula)
    }

    pub fn formulas(&self) -> &[Formula] {
        &self.formulas
    }

    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }
}
