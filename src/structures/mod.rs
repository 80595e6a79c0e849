//! The abstract objects of the calculus and their representation.
//!
//! Bottom-up:
//! - [Values and value sets](value) --- the points of attribute domains, and the sets of values an ascription still admits.
//! - [Attributes, structures, and systems](attribute) --- the immutable configuration a proof session is built over.
//! - [The vocabulary](vocabulary) --- the constant, variable, and relation symbols available to formulas.
//! - [Assignments](assignment) --- partial maps from constants/variables to objects.
//! - [States](state) --- snapshots of partial knowledge, their extension order, and their worlds.
//! - [Interpretations](interpretation) --- the grounding of relation symbols in attribute values.
//! - [Formulas](formula) --- the sentential side, with three-valued evaluation.
//!
//! Attribute systems and vocabularies are validated containers consumed read-only; states and formulas carry the algorithmic weight.

pub mod assignment;
pub mod attribute;
pub mod formula;
pub mod interpretation;
pub mod state;
pub mod value;
pub mod vocabulary;
