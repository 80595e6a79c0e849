/*!
The three-valued truth evaluator, by structural recursion on a formula.

Evaluation happens in a named state under a variable assignment, with an attribute interpretation grounding the relation symbols.

- A relational atom quantifies over the admissible completions of the ascriptions its profiles reference:
  every completion verifying some profile gives [True], every completion falsifying every profile gives [False], a mix gives [Indeterminate](Truth::Indeterminate) --- the state has not yet settled the fact.
- An equality compares resolved objects; objects are always fully determined, so equality is never indeterminate.
- The compounds follow the Kleene tables, with a classically-forced operand short-circuiting recursion into the other.

In a world every ascription is a singleton, each atom has exactly one completion, and evaluation is classical.
*/

use crate::{
    generic::product::Product,
    misc::log::targets::{self},
    structures::{
        assignment::VariableAssignment,
        formula::{truth::Truth, Formula, Term},
        interpretation::AttributeInterpretation,
        state::NamedState,
        value::Value,
    },
    types::err::{self, ErrorKind},
};

impl Formula {
    /// The truth value of the formula in the given named state, under the given assignment and interpretation.
    pub fn assign_truth_value(
        &self,
        interpretation: &AttributeInterpretation,
        named_state: &NamedState,
        variable_assignment: &VariableAssignment,
    ) -> Result<Truth, ErrorKind> {
        let naming = named_state.naming();

        if naming.vocabulary() != variable_assignment.vocabulary()
            || naming.vocabulary() != interpretation.vocabulary()
            || naming.system() != variable_assignment.system()
        {
            return Err(err::EvaluationError::DomainMismatch.into());
        }

        self.evaluate(interpretation, named_state, variable_assignment)
    }

    /// The recursion behind [assign_truth_value](Formula::assign_truth_value), domain checks done.
    fn evaluate(
        &self,
        interpretation: &AttributeInterpretation,
        named_state: &NamedState,
        variable_assignment: &VariableAssignment,
    ) -> Result<Truth, ErrorKind> {
        match self {
            Formula::Atom { relation, terms } => {
                atom_truth(relation, terms, interpretation, named_state, variable_assignment)
            }

            Formula::Equality(left, right) => {
                let left = resolve(left, named_state, variable_assignment)?;
                let right = resolve(right, named_state, variable_assignment)?;

                Ok(Truth::from(left == right))
            }

            Formula::Negation(operand) => {
                let value = operand.evaluate(interpretation, named_state, variable_assignment)?;
                Ok(value.negate())
            }

            Formula::Conjunction(left, right) => {
                match left.evaluate(interpretation, named_state, variable_assignment)? {
                    Truth::False => Ok(Truth::False),
                    value => {
                        let other =
                            right.evaluate(interpretation, named_state, variable_assignment)?;
                        Ok(value.and(other))
                    }
                }
            }

            Formula::Disjunction(left, right) => {
                match left.evaluate(interpretation, named_state, variable_assignment)? {
                    Truth::True => Ok(Truth::True),
                    value => {
                        let other =
                            right.evaluate(interpretation, named_state, variable_assignment)?;
                        Ok(value.or(other))
                    }
                }
            }

            Formula::Conditional(antecedent, consequent) => {
                match antecedent.evaluate(interpretation, named_state, variable_assignment)? {
                    Truth::False => Ok(Truth::True),
                    value => {
                        let other =
                            consequent.evaluate(interpretation, named_state, variable_assignment)?;
                        Ok(value.conditional(other))
                    }
                }
            }
        }
    }
}

/// The object a term picks out: constants through the state's naming, variables through the supplied assignment.
fn resolve<'a>(
    term: &Term,
    named_state: &'a NamedState,
    variable_assignment: &'a VariableAssignment,
) -> Result<&'a str, ErrorKind> {
    let object = match term {
        Term::Constant(name) => named_state.naming().object_of(name),
        Term::Variable(name) => variable_assignment.object_of(name),
    };

    match object {
        Some(object) => Ok(object),
        None => Err(err::EvaluationError::UnboundTerm(term.name().to_owned()).into()),
    }
}

/// The truth of a relational atom, quantifying over completions of the referenced ascriptions.
fn atom_truth(
    relation: &str,
    terms: &[Term],
    interpretation: &AttributeInterpretation,
    named_state: &NamedState,
    variable_assignment: &VariableAssignment,
) -> Result<Truth, ErrorKind> {
    let Some(profiles) = interpretation.profiles_of(relation) else {
        return Err(err::EvaluationError::UninterpretedSymbol(relation.to_owned()).into());
    };

    match named_state.naming().vocabulary().arity_of(relation) {
        Some(arity) if arity == terms.len() => {}
        _ => return Err(err::EvaluationError::DomainMismatch.into()),
    }

    let objects = terms
        .iter()
        .map(|term| resolve(term, named_state, variable_assignment))
        .collect::<Result<Vec<_>, _>>()?;

    // The distinct (attribute, object) pairs the profiles reference, and per profile the index of each argument's pair.
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut profile_indices: Vec<Vec<usize>> = Vec::with_capacity(profiles.len());

    for profile in profiles {
        let mut indices = Vec::with_capacity(profile.attributes().len());

        for (attribute, object) in profile.attributes().iter().zip(&objects) {
            let pair = (attribute.clone(), (*object).to_owned());

            let index = match pairs.iter().position(|p| *p == pair) {
                Some(index) => index,
                None => {
                    pairs.push(pair);
                    pairs.len() - 1
                }
            };

            indices.push(index);
        }

        profile_indices.push(indices);
    }

    let axes = pairs
        .iter()
        .map(|(attribute, object)| {
            let ascription = named_state
                .state()
                .ascription(attribute, object)
                .map_err(ErrorKind::from)?;
            Ok(ascription.iter().cloned().collect::<Vec<Value>>())
        })
        .collect::<Result<Vec<_>, ErrorKind>>()?;

    let mut seen_verifying = false;
    let mut seen_falsifying = false;

    for completion in Product::new(axes) {
        let verified = profiles.iter().zip(&profile_indices).any(|(profile, indices)| {
            let values: Vec<&Value> = indices.iter().map(|&index| &completion[index]).collect();
            profile.holds(&values)
        });

        match verified {
            true => seen_verifying = true,
            false => seen_falsifying = true,
        }

        // Both observed: no further completion can settle the atom.
        if seen_verifying && seen_falsifying {
            log::trace!(target: targets::EVALUATION, "{relation} indeterminate over the current ascriptions.");
            return Ok(Truth::Indeterminate);
        }
    }

    // Value sets are non-empty, so at least one completion was examined.
    match seen_verifying {
        true => Ok(Truth::True),
        false => Ok(Truth::False),
    }
}
