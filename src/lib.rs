//! A library for checking derivations in a heterogeneous diagrammatic/sentential reasoning calculus.
//!
//! vivid represents partially-specified states of knowledge over a finite domain of objects and attributes, represents formulas over a many-sorted first-order vocabulary, and decides whether one representation is a sound logical consequence of another.
//! On top of that decision procedure sits a fixed catalogue of inference rules --- thinning, widening, observation, absurdity, reiteration, and the mixed diagrammatic/sentential case rules --- which a proof checker composes to validate multi-step derivations.
//!
//! Satisfiability here is decided by explicit enumeration over a finite, explicitly bounded domain.
//! There is no clause learning and there are no heuristics: the engine is built for *checking* small diagrams exactly, not for model search at scale.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context](crate::context::Context): an assumption base β paired with a named state (σ; ρ) --- one full line of a proof.
//!
//! At a high level:
//! - A [state](crate::structures::state) ascribes to every (attribute, object) pair the set of values still considered possible; a *world* is a state with every ascription a singleton, and a state's worlds are all the ways its partial information could be completed.
//! - An [interpretation](crate::structures::interpretation) grounds each relation symbol in conditions over attribute values, under which a [formula](crate::structures::formula) takes one of three truth values in a state --- true, false, or indeterminate.
//! - The [entailment operators](crate::context) quantify over every world of the diagram and every total variable assignment, filter by the assumption base, and test the residue against the conclusion.
//! - The [inference rules](crate::procedures) wrap the operators with the side conditions --- provisos, exhaustiveness --- that separate sound steps from unsound ones.
//!
//! Useful starting points:
//! - The [structures] to familiarise yourself with the abstract elements of the calculus and their representation.
//! - The [context](crate::context) module to inspect the decision procedure itself.
//! - The [procedures] to see the rule catalogue a proof checker builds on.
//!
//! # Example
//!
//! ```rust
//! # use std::sync::Arc;
//! # use vivid::context::Context;
//! # use vivid::procedures;
//! # use vivid::structures::assignment::ConstantAssignment;
//! # use vivid::structures::attribute::{Attribute, AttributeStructure, AttributeSystem};
//! # use vivid::structures::formula::AssumptionBase;
//! # use vivid::structures::state::{NamedState, State};
//! # use vivid::structures::value::ValueSet;
//! # use vivid::structures::vocabulary::Vocabulary;
//! let color = Attribute::new("color", ValueSet::new(["R", "G", "B"]).unwrap());
//! let size = Attribute::new("size", ValueSet::new(["S", "M", "L"]).unwrap());
//! let structure = Arc::new(AttributeStructure::new([color, size]).unwrap());
//! let system = Arc::new(AttributeSystem::new(structure, ["s1", "s2"]).unwrap());
//! let vocabulary = Arc::new(Vocabulary::new(["c1"], ["x"], []).unwrap());
//!
//! // A diagram with s1 settled and s2 unknown: 3 × 3 = 9 worlds remain.
//! let mut state = State::new(system.clone());
//! state.set_ascription("color", "s1", ["R"]).unwrap();
//! state.set_ascription("size", "s1", ["M"]).unwrap();
//! assert_eq!(state.world_count(), 9);
//!
//! let naming = ConstantAssignment::new(vocabulary.clone(), system, [("c1", "s1")]).unwrap();
//! let named_state = NamedState::new(state, naming).unwrap();
//!
//! let context = Context::new(AssumptionBase::empty(vocabulary), named_state.clone()).unwrap();
//!
//! // Reiteration returns the diagram unchanged, and thinning to the diagram itself always holds.
//! assert_eq!(procedures::diagram_reiteration(&context), named_state);
//! assert_eq!(procedures::thinning(&context, &named_state, None, None), Ok(true));
//! ```
//!
//! # Guiding principles
//!
//! ## Exactness
//!
//! + World generation and variable-assignment generation are literal cartesian products, produced by [lazy iterators](crate::generic::product) so entailment checks can short-circuit on the first falsifying candidate.
//!   The enumeration is exact --- never sampled --- and exponential in the unresolved ascriptions, which is in keeping with checking finite, already-small diagrams.
//!
//! ## A closed calculus
//!
//! + Formulas are a closed sum, so the evaluator is a total, exhaustively-matched recursion; there is no unhandled shape.
//! + Structural errors (a malformed proof object) and precondition errors (a proof step that is not licensed) travel on different variants of [ErrorKind](crate::types::err::ErrorKind), as the two demand different handling from a proof checker.
//!
//! ## Purity
//!
//! + Every operation is a deterministic function of immutable inputs.
//!   The only mutation is the narrow/widen contract on a state's ascriptions, which is local and synchronous.
//!   Attribute systems and vocabularies are shared read-only behind [Arc](std::sync::Arc) and never mutated once a state references them.
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! As logging is only built on request, and further can be requested by level, logs are verbose.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to entailment checks can be filtered with `RUST_LOG=entailment …` or,
//! - Logs of rule applications without engine detail can be found with `RUST_LOG=rules=trace …`

pub mod context;
pub mod procedures;
pub mod structures;
pub mod types;

pub mod generic;

pub mod misc;
