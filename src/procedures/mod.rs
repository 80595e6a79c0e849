//! The inference rules of the calculus.
//!
//! Each rule is a pure predicate or constructor over contexts, named states, and formulas: a thin, side-condition-checking wrapper around the entailment engine.
//! None mutate their arguments; contexts extended for a check are built fresh.
//!
//! A rule distinguishes two kinds of 'no':
//! - `Ok(false)` --- the step's conclusion does not follow.
//! - `Err(Precondition(..))` --- the step is not licensed at all, e.g. neither disjunct of a split holds, or a case analysis is not exhaustive.
//!
//! A proof checker composes these to validate multi-step derivations, catching precondition errors to report the failing line.

pub mod absurdity;
pub mod cases;
pub mod observe;
pub mod reiteration;
pub mod sentential;
pub mod thinning;
pub mod widening;

pub use absurdity::diagrammatic_absurdity;
pub use cases::{diagrammatic_to_diagrammatic, diagrammatic_to_sentential};
pub use observe::observe;
pub use reiteration::diagram_reiteration;
pub use sentential::{sentential_to_diagrammatic, sentential_to_sentential};
pub use thinning::thinning;
pub use widening::widening;
