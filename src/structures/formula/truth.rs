/*!
Three-valued truth, with the (strong) Kleene connective tables.

A formula evaluated over a partial state may be [True], [False], or [Indeterminate](Truth::Indeterminate) --- the last when the verdict depends on which admissible completion of the state is chosen.
Indeterminacy is a value of its own, represented distinctly from both classical values.

The connectives follow the Kleene tables: a classically-forced operand forces the result, and otherwise indeterminacy propagates.
So a false conjunct makes a conjunction false whatever the other conjunct, while true ∧ indeterminate is indeterminate.

The conditional is material: a → b is ¬a ∨ b under the tables.

Over a world --- a fully determined state --- evaluation never produces [Indeterminate](Truth::Indeterminate).
*/

pub use Truth::{False, True};

/// A three-valued truth value.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Truth {
    True,
    False,
    Indeterminate,
}

impl Truth {
    /// Kleene negation: the classical values swap, indeterminacy propagates.
    pub fn negate(self) -> Truth {
        match self {
            True => False,
            False => True,
            Truth::Indeterminate => Truth::Indeterminate,
        }
    }

    /// Kleene conjunction: false dominates.
    pub fn and(self, other: Truth) -> Truth {
        match (self, other) {
            (False, _) | (_, False) => False,
            (True, True) => True,
            _ => Truth::Indeterminate,
        }
    }

    /// Kleene disjunction: true dominates.
    pub fn or(self, other: Truth) -> Truth {
        match (self, other) {
            (True, _) | (_, True) => True,
            (False, False) => False,
            _ => Truth::Indeterminate,
        }
    }

    /// The material conditional: ¬a ∨ b.
    pub fn conditional(self, other: Truth) -> Truth {
        self.negate().or(other)
    }

    /// Whether the value is settled, i.e. not indeterminate.
    pub fn is_determinate(self) -> bool {
        !matches!(self, Truth::Indeterminate)
    }
}

impl From<bool> for Truth {
    fn from(b: bool) -> Self {
        match b {
            true => True,
            false => False,
        }
    }
}

impl std::fmt::Display for Truth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            True => write!(f, "true"),
            False => write!(f, "false"),
            Truth::Indeterminate => write!(f, "indeterminate"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALUES: [Truth; 3] = [True, False, Truth::Indeterminate];

    #[test]
    fn negation_involution() {
        for value in VALUES {
            assert_eq!(value.negate().negate(), value);
        }
    }

    #[test]
    fn forced_operands() {
        for value in VALUES {
            assert_eq!(False.and(value), False);
            assert_eq!(value.and(False), False);

            assert_eq!(True.or(value), True);
            assert_eq!(value.or(True), True);

            // A false antecedent or a true consequent settles a conditional.
            assert_eq!(False.conditional(value), True);
            assert_eq!(value.conditional(True), True);
        }
    }

    #[test]
    fn indeterminacy_propagates() {
        assert_eq!(True.and(Truth::Indeterminate), Truth::Indeterminate);
        assert_eq!(False.or(Truth::Indeterminate), Truth::Indeterminate);
        assert_eq!(
            True.conditional(Truth::Indeterminate),
            Truth::Indeterminate
        );
        assert_eq!(
            Truth::Indeterminate.conditional(False),
            Truth::Indeterminate
        );
    }
}
