use std::sync::Arc;

use vivid::structures::{
    assignment::{ConstantAssignment, VariableAssignment},
    attribute::{Attribute, AttributeStructure, AttributeSystem},
    formula::{Formula, Term, Truth},
    interpretation::{AttributeInterpretation, Profile},
    state::{NamedState, State},
    value::{Value, ValueSet},
    vocabulary::{RelationSymbol, Vocabulary},
};
use vivid::types::err::{ErrorKind, EvaluationError};

struct Fixture {
    structure: Arc<AttributeStructure>,
    system: Arc<AttributeSystem>,
    vocabulary: Arc<Vocabulary>,
}

fn fixture() -> Fixture {
    let color = Attribute::new("color", ValueSet::new(["R", "G", "B"]).unwrap());
    let structure = Arc::new(AttributeStructure::new([color]).unwrap());
    let system = Arc::new(AttributeSystem::new(structure.clone(), ["s1", "s2"]).unwrap());

    let vocabulary = Arc::new(
        Vocabulary::new(
            ["c1", "c2"],
            ["x"],
            [
                RelationSymbol::new("Red", 1).unwrap(),
                RelationSymbol::new("Green", 1).unwrap(),
                RelationSymbol::new("Blue", 1).unwrap(),
            ],
        )
        .unwrap(),
    );

    Fixture {
        structure,
        system,
        vocabulary,
    }
}

fn interpretation(fx: &Fixture) -> AttributeInterpretation {
    // Blue is declared but deliberately left uninterpreted.
    AttributeInterpretation::new(
        fx.vocabulary.clone(),
        &fx.structure,
        [
            (
                "Red",
                vec![Profile::new(["color"], |values: &[&Value]| {
                    values[0] == &Value::from("R")
                })],
            ),
            (
                "Green",
                vec![Profile::new(["color"], |values: &[&Value]| {
                    values[0] == &Value::from("G")
                })],
            ),
        ],
    )
    .unwrap()
}

fn named_state(fx: &Fixture, first: &[&str], second: &[&str]) -> NamedState {
    let state = State::with_ascriptions(
        fx.system.clone(),
        [
            ("color", "s1", first.to_vec()),
            ("color", "s2", second.to_vec()),
        ],
    )
    .unwrap();

    let naming = ConstantAssignment::new(
        fx.vocabulary.clone(),
        fx.system.clone(),
        [("c1", "s1"), ("c2", "s2")],
    )
    .unwrap();

    NamedState::new(state, naming).unwrap()
}

fn red_c1() -> Formula {
    Formula::atom("Red", [Term::Constant("c1".to_owned())])
}

mod atoms {
    use super::*;

    #[test]
    fn settled_and_unsettled() {
        let fx = fixture();
        let interpretation = interpretation(&fx);
        let dummy = VariableAssignment::dummy(fx.vocabulary.clone(), fx.system.clone());

        let cases = [
            (&["R"][..], Truth::True),
            (&["R", "G"][..], Truth::Indeterminate),
            (&["G", "B"][..], Truth::False),
        ];

        for (ascription, expected) in cases {
            let state = named_state(&fx, ascription, &["R", "G", "B"]);
            let value = red_c1()
                .assign_truth_value(&interpretation, &state, &dummy)
                .unwrap();

            assert_eq!(value, expected);
        }
    }

    #[test]
    fn determinate_in_a_world() {
        let fx = fixture();
        let interpretation = interpretation(&fx);
        let dummy = VariableAssignment::dummy(fx.vocabulary.clone(), fx.system.clone());

        let partial = named_state(&fx, &["R", "G"], &["R", "G", "B"]);

        for world in partial.worlds() {
            let value = red_c1()
                .assign_truth_value(&interpretation, &world, &dummy)
                .unwrap();

            assert!(value.is_determinate());
        }
    }

    #[test]
    fn uninterpreted_symbol() {
        let fx = fixture();
        let interpretation = interpretation(&fx);
        let dummy = VariableAssignment::dummy(fx.vocabulary.clone(), fx.system.clone());
        let state = named_state(&fx, &["B"], &["B"]);

        let blue = Formula::atom("Blue", [Term::Constant("c1".to_owned())]);

        assert_eq!(
            blue.assign_truth_value(&interpretation, &state, &dummy),
            Err(ErrorKind::Evaluation(EvaluationError::UninterpretedSymbol(
                "Blue".to_owned()
            )))
        );
    }

    #[test]
    fn unbound_variable() {
        let fx = fixture();
        let interpretation = interpretation(&fx);
        let dummy = VariableAssignment::dummy(fx.vocabulary.clone(), fx.system.clone());
        let state = named_state(&fx, &["R"], &["R"]);

        let open = Formula::atom("Red", [Term::Variable("x".to_owned())]);

        assert_eq!(
            open.assign_truth_value(&interpretation, &state, &dummy),
            Err(ErrorKind::Evaluation(EvaluationError::UnboundTerm(
                "x".to_owned()
            )))
        );
    }

    #[test]
    fn bound_variable() {
        let fx = fixture();
        let interpretation = interpretation(&fx);
        let state = named_state(&fx, &["R"], &["G"]);

        let binding = VariableAssignment::new(
            fx.vocabulary.clone(),
            fx.system.clone(),
            [("x", "s2")],
        )
        .unwrap();

        let open = Formula::atom("Red", [Term::Variable("x".to_owned())]);

        assert_eq!(
            open.assign_truth_value(&interpretation, &state, &binding),
            Ok(Truth::False)
        );
    }
}

mod valuations {
    use super::*;

    #[test]
    fn named_objects_must_be_settled() {
        let fx = fixture();

        // s1 settled, s2 still partial.
        let state = State::with_ascriptions(fx.system.clone(), [("color", "s1", vec!["R"])])
            .unwrap();

        let only_s1 = ConstantAssignment::new(
            fx.vocabulary.clone(),
            fx.system.clone(),
            [("c1", "s1")],
        )
        .unwrap();
        let named = NamedState::new(state.clone(), only_s1).unwrap();

        // The unnamed object may remain partial.
        assert!(named.is_valuation());
        assert!(!named.is_world());

        let both = ConstantAssignment::new(
            fx.vocabulary.clone(),
            fx.system.clone(),
            [("c1", "s1"), ("c2", "s2")],
        )
        .unwrap();
        let both_named = NamedState::new(state, both).unwrap();

        assert!(!both_named.is_valuation());
    }

    #[test]
    fn worlds_are_valuations() {
        let fx = fixture();
        let partial = named_state(&fx, &["R", "G"], &["R", "G", "B"]);

        for world in partial.worlds() {
            assert!(world.is_valuation());
        }
    }
}

mod equalities {
    use super::*;

    #[test]
    fn object_identity() {
        let fx = fixture();
        let interpretation = interpretation(&fx);
        let dummy = VariableAssignment::dummy(fx.vocabulary.clone(), fx.system.clone());
        let state = named_state(&fx, &["R", "G"], &["R", "G"]);

        let same = Formula::equality(
            Term::Constant("c1".to_owned()),
            Term::Constant("c1".to_owned()),
        );
        let different = Formula::equality(
            Term::Constant("c1".to_owned()),
            Term::Constant("c2".to_owned()),
        );

        // Objects are settled even when their ascriptions are not.
        assert_eq!(
            same.assign_truth_value(&interpretation, &state, &dummy),
            Ok(Truth::True)
        );
        assert_eq!(
            different.assign_truth_value(&interpretation, &state, &dummy),
            Ok(Truth::False)
        );
    }
}

mod compounds {
    use super::*;

    #[test]
    fn negation_duality() {
        let fx = fixture();
        let interpretation = interpretation(&fx);
        let dummy = VariableAssignment::dummy(fx.vocabulary.clone(), fx.system.clone());

        let negated = Formula::negation(red_c1());

        let cases = [
            (&["G", "B"][..], Truth::True),
            (&["R", "G"][..], Truth::Indeterminate),
            (&["R"][..], Truth::False),
        ];

        for (ascription, expected) in cases {
            let state = named_state(&fx, ascription, &["R"]);
            let value = negated
                .assign_truth_value(&interpretation, &state, &dummy)
                .unwrap();

            assert_eq!(value, expected);
        }
    }

    #[test]
    fn strong_kleene_tables() {
        let fx = fixture();
        let interpretation = interpretation(&fx);
        let dummy = VariableAssignment::dummy(fx.vocabulary.clone(), fx.system.clone());

        // Red(c1) indeterminate, Green(c2) false, Red(c2) true under {R,G} / {R}.
        let state = named_state(&fx, &["R", "G"], &["R"]);

        let indeterminate = red_c1();
        let falsum = Formula::atom("Green", [Term::Constant("c2".to_owned())]);
        let verum = Formula::atom("Red", [Term::Constant("c2".to_owned())]);

        let value = |formula: &Formula| {
            formula
                .assign_truth_value(&interpretation, &state, &dummy)
                .unwrap()
        };

        // A classically-forced operand decides the compound.
        assert_eq!(
            value(&Formula::conjunction(indeterminate.clone(), falsum.clone())),
            Truth::False
        );
        assert_eq!(
            value(&Formula::disjunction(indeterminate.clone(), verum.clone())),
            Truth::True
        );
        assert_eq!(
            value(&Formula::conditional(indeterminate.clone(), verum.clone())),
            Truth::True
        );
        assert_eq!(
            value(&Formula::conditional(falsum.clone(), indeterminate.clone())),
            Truth::True
        );

        // Otherwise indeterminacy propagates.
        assert_eq!(
            value(&Formula::conjunction(indeterminate.clone(), verum)),
            Truth::Indeterminate
        );
        assert_eq!(
            value(&Formula::disjunction(indeterminate.clone(), falsum.clone())),
            Truth::Indeterminate
        );
        assert_eq!(
            value(&Formula::conditional(indeterminate.clone(), falsum)),
            Truth::Indeterminate
        );
        assert_eq!(
            value(&Formula::conjunction(
                indeterminate.clone(),
                indeterminate
            )),
            Truth::Indeterminate
        );
    }

    #[test]
    fn domain_mismatch_rejected() {
        let fx = fixture();
        let interpretation = interpretation(&fx);
        let state = named_state(&fx, &["R"], &["R"]);

        let other_vocabulary =
            Arc::new(Vocabulary::new(["c1"], ["x"], []).unwrap());
        let foreign =
            VariableAssignment::dummy(other_vocabulary, fx.system.clone());

        assert_eq!(
            red_c1().assign_truth_value(&interpretation, &state, &foreign),
            Err(ErrorKind::Evaluation(EvaluationError::DomainMismatch))
        );
    }
}
