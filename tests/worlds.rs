use std::sync::Arc;

use vivid::structures::{
    attribute::{Attribute, AttributeStructure, AttributeSystem},
    state::State,
    value::ValueSet,
};
use vivid::types::err::AscriptionError;

fn color_size_system() -> Arc<AttributeSystem> {
    let color = Attribute::new("color", ValueSet::new(["R", "G", "B"]).unwrap());
    let size = Attribute::new("size", ValueSet::new(["S", "M", "L"]).unwrap());
    let structure = Arc::new(AttributeStructure::new([color, size]).unwrap());

    Arc::new(AttributeSystem::new(structure, ["s1", "s2"]).unwrap())
}

fn color_system() -> Arc<AttributeSystem> {
    let color = Attribute::new("color", ValueSet::new(["R", "G", "B"]).unwrap());
    let structure = Arc::new(AttributeStructure::new([color]).unwrap());

    Arc::new(AttributeSystem::new(structure, ["s1"]).unwrap())
}

mod generation {
    use super::*;

    #[test]
    fn nine_worlds() {
        // s1 settled, s2 free on both attributes: 3 × 3 completions.
        let state = State::with_ascriptions(
            color_size_system(),
            [("color", "s1", vec!["R"]), ("size", "s1", vec!["M"])],
        )
        .unwrap();

        assert_eq!(state.world_count(), 9);

        let worlds: Vec<State> = state.worlds().collect();
        assert_eq!(worlds.len(), 9);

        for world in &worlds {
            assert!(world.is_world());
            assert_eq!(world.is_extension_of(&state), Ok(true));
            assert_eq!(
                world.ascription("color", "s1"),
                Ok(&ValueSet::singleton("R"))
            );
        }

        // Each total refinement appears exactly once.
        for (position, world) in worlds.iter().enumerate() {
            assert!(!worlds[position + 1..].contains(world));
        }
    }

    #[test]
    fn world_of_a_world_is_itself() {
        let mut state = State::new(color_system());
        state.set_ascription("color", "s1", ["G"]).unwrap();

        assert!(state.is_world());

        let worlds: Vec<State> = state.worlds().collect();
        assert_eq!(worlds, vec![state]);
    }

    #[test]
    fn membership() {
        let state = State::new(color_system());

        let mut red = State::new(color_system());
        red.set_ascription("color", "s1", ["R"]).unwrap();

        assert_eq!(red.is_world_of(&state), Ok(true));
        // A partial state is not a world of anything.
        assert_eq!(state.is_world_of(&state), Ok(false));
    }
}

mod alternates {
    use super::*;

    #[test]
    fn avoiding_one_world() {
        let state = State::new(color_system());

        let mut red = State::new(color_system());
        red.set_ascription("color", "s1", ["R"]).unwrap();

        let alternates = state.alternate_extensions(&[red]).unwrap();

        let mut green_blue = State::new(color_system());
        green_blue.set_ascription("color", "s1", ["G", "B"]).unwrap();

        assert_eq!(alternates, vec![green_blue]);
    }

    #[test]
    fn avoiding_two_worlds() {
        let state = State::new(color_system());

        let mut red = State::new(color_system());
        red.set_ascription("color", "s1", ["R"]).unwrap();
        let mut green = State::new(color_system());
        green.set_ascription("color", "s1", ["G"]).unwrap();

        let alternates = state.alternate_extensions(&[red, green]).unwrap();

        let mut blue = State::new(color_system());
        blue.set_ascription("color", "s1", ["B"]).unwrap();

        assert_eq!(alternates, vec![blue]);
    }

    #[test]
    fn avoiding_every_world_leaves_nothing() {
        let state = State::new(color_system());
        let worlds: Vec<State> = state.worlds().collect();

        let alternates = state.alternate_extensions(&worlds).unwrap();

        assert!(alternates.is_empty());
    }

    #[test]
    fn non_world_rejected() {
        let state = State::new(color_size_system());
        let partial = State::new(color_size_system());

        assert_eq!(
            state.alternate_extensions(&[partial]),
            Err(AscriptionError::NotAWorldOf)
        );
    }

    #[test]
    fn covers_the_remainder() {
        // Two attributes over one object, so exclusions interact.
        let color = Attribute::new("color", ValueSet::new(["R", "G"]).unwrap());
        let size = Attribute::new("size", ValueSet::new(["S", "L"]).unwrap());
        let structure = Arc::new(AttributeStructure::new([color, size]).unwrap());
        let system = Arc::new(AttributeSystem::new(structure, ["s1"]).unwrap());

        let state = State::new(system.clone());

        let mut red_small = State::new(system);
        red_small.set_ascription("color", "s1", ["R"]).unwrap();
        red_small.set_ascription("size", "s1", ["S"]).unwrap();

        let alternates = state.alternate_extensions(std::slice::from_ref(&red_small)).unwrap();

        // Every world of the state other than the avoided one refines some alternate,
        // and no alternate admits the avoided world.
        for world in state.worlds() {
            let covered = alternates
                .iter()
                .any(|alt| world.is_extension_of(alt).unwrap());

            assert_eq!(covered, world != red_small);
        }
    }
}
