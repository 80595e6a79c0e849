use std::sync::Arc;

use vivid::context::{basis::is_exhaustive, Context};
use vivid::structures::{
    assignment::{ConstantAssignment, VariableAssignment},
    attribute::{Attribute, AttributeStructure, AttributeSystem},
    formula::{AssumptionBase, Formula, Term, Truth},
    interpretation::{AttributeInterpretation, Profile},
    state::{NamedState, State},
    value::{Value, ValueSet},
    vocabulary::{RelationSymbol, Vocabulary},
};
use vivid::types::err::{ErrorKind, PreconditionError};

struct Fixture {
    system: Arc<AttributeSystem>,
    vocabulary: Arc<Vocabulary>,
    interpretation: AttributeInterpretation,
}

fn fixture() -> Fixture {
    let color = Attribute::new("color", ValueSet::new(["R", "G", "B"]).unwrap());
    let structure = Arc::new(AttributeStructure::new([color]).unwrap());
    let system = Arc::new(AttributeSystem::new(structure.clone(), ["s1"]).unwrap());

    let no_variables: [&str; 0] = [];
    let vocabulary = Arc::new(
        Vocabulary::new(
            ["c1"],
            no_variables,
            [
                RelationSymbol::new("Red", 1).unwrap(),
                RelationSymbol::new("Green", 1).unwrap(),
                RelationSymbol::new("Blue", 1).unwrap(),
            ],
        )
        .unwrap(),
    );

    let color_is = |expected: &'static str| {
        move |values: &[&Value]| values[0] == &Value::from(expected)
    };

    let interpretation = AttributeInterpretation::new(
        vocabulary.clone(),
        &structure,
        [
            ("Red", vec![Profile::new(["color"], color_is("R"))]),
            ("Green", vec![Profile::new(["color"], color_is("G"))]),
            ("Blue", vec![Profile::new(["color"], color_is("B"))]),
        ],
    )
    .unwrap();

    Fixture {
        system,
        vocabulary,
        interpretation,
    }
}

fn named(fx: &Fixture, colors: &[&str]) -> NamedState {
    let state =
        State::with_ascriptions(fx.system.clone(), [("color", "s1", colors.to_vec())]).unwrap();

    let naming =
        ConstantAssignment::new(fx.vocabulary.clone(), fx.system.clone(), [("c1", "s1")])
            .unwrap();

    NamedState::new(state, naming).unwrap()
}

fn context(fx: &Fixture, formulas: impl IntoIterator<Item = Formula>, colors: &[&str]) -> Context {
    let base = AssumptionBase::from_formulas(fx.vocabulary.clone(), formulas);

    Context::new(base, named(fx, colors)).unwrap()
}

fn atom(relation: &str) -> Formula {
    Formula::atom(relation, [Term::Constant("c1".to_owned())])
}

mod formulas {
    use super::*;

    #[test]
    fn assumed_colour_excludes_the_others() {
        let fx = fixture();
        let context = context(&fx, [atom("Red")], &["R", "G", "B"]);

        assert_eq!(
            context.entails_formula(&Formula::negation(atom("Green")), &fx.interpretation),
            Ok(true)
        );
        assert_eq!(
            context.entails_formula(&atom("Green"), &fx.interpretation),
            Ok(false)
        );
    }

    #[test]
    fn nothing_assumed_nothing_settled() {
        let fx = fixture();
        let context = context(&fx, [], &["R", "G", "B"]);

        assert_eq!(
            context.entails_formula(&atom("Red"), &fx.interpretation),
            Ok(false)
        );
        assert_eq!(
            context.entails_formula(
                &Formula::disjunction(
                    atom("Red"),
                    Formula::disjunction(atom("Green"), atom("Blue"))
                ),
                &fx.interpretation
            ),
            Ok(true)
        );
    }

    #[test]
    fn inconsistent_base_entails_everything() {
        let fx = fixture();
        let context = context(
            &fx,
            [atom("Red"), Formula::negation(atom("Red"))],
            &["R", "G", "B"],
        );

        assert_eq!(
            context.entails_formula(&atom("Green"), &fx.interpretation),
            Ok(true)
        );
    }
}

mod states {
    use super::*;

    #[test]
    fn models_must_refine_the_inferred_state() {
        let fx = fixture();
        let red = named(&fx, &["R"]);

        let assumed = context(&fx, [atom("Red")], &["R", "G", "B"]);
        assert_eq!(assumed.entails_named_state(&red, &fx.interpretation), Ok(true));

        let unassumed = context(&fx, [], &["R", "G", "B"]);
        assert_eq!(
            unassumed.entails_named_state(&red, &fx.interpretation),
            Ok(false)
        );
    }

    #[test]
    fn weaker_assumption_weaker_state() {
        let fx = fixture();
        let not_blue = named(&fx, &["R", "G"]);

        let context = context(&fx, [Formula::negation(atom("Blue"))], &["R", "G", "B"]);

        assert_eq!(
            context.entails_named_state(&not_blue, &fx.interpretation),
            Ok(true)
        );
    }
}

mod named_entailment {
    use super::*;

    #[test]
    fn cases_covering_every_model() {
        let fx = fixture();
        let base =
            AssumptionBase::from_formulas(fx.vocabulary.clone(), [Formula::negation(atom("Blue"))]);

        let parent = named(&fx, &["R", "G", "B"]);
        let cases = [named(&fx, &["R"]), named(&fx, &["G"])];

        assert_eq!(
            parent.is_named_entailment(&base, &fx.interpretation, &cases),
            Ok(true)
        );
    }

    #[test]
    fn missing_case_leaves_a_model_uncovered() {
        let fx = fixture();
        let base =
            AssumptionBase::from_formulas(fx.vocabulary.clone(), [Formula::negation(atom("Blue"))]);

        let parent = named(&fx, &["R", "G", "B"]);
        let cases = [named(&fx, &["R"])];

        // The green world satisfies the base yet refines no case.
        assert_eq!(
            parent.is_named_entailment(&base, &fx.interpretation, &cases),
            Ok(false)
        );
    }

    #[test]
    fn cases_must_properly_extend_the_parent() {
        let fx = fixture();
        let base = AssumptionBase::empty(fx.vocabulary.clone());

        let parent = named(&fx, &["R", "G", "B"]);
        let cases = [parent.clone()];

        assert_eq!(
            parent.is_named_entailment(&base, &fx.interpretation, &cases),
            Err(ErrorKind::Precondition(PreconditionError::NotAnExtension))
        );
    }
}

mod bases {
    use super::*;

    #[test]
    fn branch_per_realized_sign_combination() {
        let fx = fixture();
        let parent = named(&fx, &["R", "G", "B"]);
        let dummy = VariableAssignment::dummy(fx.vocabulary.clone(), fx.system.clone());

        let basis = parent
            .basis(&dummy, &fx.interpretation, &[atom("Red")])
            .unwrap();

        assert_eq!(basis.len(), 2);

        for branch in basis.branches() {
            match branch.signs() {
                [Truth::True] => assert_eq!(branch.worlds().len(), 1),
                [Truth::False] => assert_eq!(branch.worlds().len(), 2),
                signs => panic!("unrealizable signs {signs:?}"),
            }
        }
    }

    #[test]
    fn branches_partition_the_worlds() {
        let fx = fixture();
        let parent = named(&fx, &["R", "G", "B"]);
        let dummy = VariableAssignment::dummy(fx.vocabulary.clone(), fx.system.clone());

        let basis = parent
            .basis(&dummy, &fx.interpretation, &[atom("Red"), atom("Green")])
            .unwrap();

        // Every world of the parent lands in exactly one branch, so the
        // branches jointly carry the parent's full world set.
        let held: usize = basis.branches().iter().map(|b| b.worlds().len()).sum();
        assert_eq!(held, parent.world_count());

        for world in parent.worlds() {
            let holders = basis
                .branches()
                .iter()
                .filter(|branch| branch.worlds().contains(&world))
                .count();

            assert_eq!(holders, 1);
        }
    }

    #[test]
    fn exhaustive_split() {
        let fx = fixture();
        let parent = named(&fx, &["R", "G", "B"]);
        let dummy = VariableAssignment::dummy(fx.vocabulary.clone(), fx.system.clone());

        let basis = parent
            .basis(&dummy, &fx.interpretation, &[atom("Red")])
            .unwrap();

        let split = [named(&fx, &["R"]), named(&fx, &["G", "B"])];
        assert_eq!(is_exhaustive(&basis, &split), Ok(true));

        // A case short of a world realizes no branch exactly.
        let ragged = [named(&fx, &["R"]), named(&fx, &["G"])];
        assert_eq!(is_exhaustive(&basis, &ragged), Ok(false));

        // A missing case leaves a branch uncovered.
        let partial = [named(&fx, &["R"])];
        assert_eq!(is_exhaustive(&basis, &partial), Ok(false));
    }
}
