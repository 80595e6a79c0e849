//! Error types used in the library.
//!
//! - The structural families (value sets, structures, vocabularies, assignments, ascriptions, interpretations, evaluation) report a malformed proof object.
//!   These are raised at the point of detection and never recovered --- a malformed object is a caller bug, not a runtime condition to retry.
//! - [PreconditionError] is the normal way a rule reports 'this proof step is not licensed'.
//!   A proof checker is expected to catch these and report the failing line, rather than treat them as fatal.
//!
//! Throughout the library the module is imported as `err::{self}` and the families used prefixed --- `err::AscriptionError` and the like --- so the family an error belongs to stays visible at each raise site.

/// The top-level error, wrapping each family.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    ValueSet(ValueSetError),
    Structure(StructureError),
    Vocabulary(VocabularyError),
    Assignment(AssignmentError),
    Ascription(AscriptionError),
    Interpretation(InterpretationError),
    Evaluation(EvaluationError),
    Precondition(PreconditionError),
}

/// Noted errors when building a value set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueSetError {
    /// An empty value set signals an inconsistent ascription, and is rejected rather than represented.
    Empty,
}

impl From<ValueSetError> for ErrorKind {
    fn from(e: ValueSetError) -> Self {
        ErrorKind::ValueSet(e)
    }
}

/// Noted errors when building an attribute structure or system.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StructureError {
    /// Two attributes with the same label.
    DuplicateAttribute(String),

    /// Two objects with the same identifier.
    DuplicateObject(String),

    /// An object universe with no objects.
    EmptyUniverse,
}

impl From<StructureError> for ErrorKind {
    fn from(e: StructureError) -> Self {
        ErrorKind::Structure(e)
    }
}

/// Noted errors when building a vocabulary.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum VocabularyError {
    /// Two constants with the same name.
    DuplicateConstant(String),

    /// Two variables with the same name.
    DuplicateVariable(String),

    /// Two relation symbols with the same name.
    DuplicateRelationSymbol(String),

    /// A name used both as a constant and as a variable.
    ConstantVariableClash(String),

    /// A relation symbol declared with arity zero.
    ZeroArity(String),
}

impl From<VocabularyError> for ErrorKind {
    fn from(e: VocabularyError) -> Self {
        ErrorKind::Vocabulary(e)
    }
}

/// Noted errors when building constant or variable assignments.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AssignmentError {
    /// A source symbol is not a constant of the vocabulary.
    UnknownConstant(String),

    /// A source symbol is not a variable of the vocabulary.
    UnknownVariable(String),

    /// A target is not an object of the attribute system.
    UnknownObject(String),

    /// Two parts of an operation disagree on the vocabulary in use.
    VocabularyMismatch,
}

impl From<AssignmentError> for ErrorKind {
    fn from(e: AssignmentError) -> Self {
        ErrorKind::Assignment(e)
    }
}

/// Noted errors when reading or revising the ascriptions of a state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AscriptionError {
    /// The addressed (attribute, object) pair is not declared by the state's attribute system.
    UndeclaredPair(String, String),

    /// An attempt to ascribe the empty set.
    EmptyAscription,

    /// A replacement ascription with values outside the attribute's declared domain.
    OutsideDomain,

    /// A replacement ascription which neither narrows nor re-widens the current ascription.
    Incomparable,

    /// Two states over different attribute systems were compared.
    SystemMismatch,

    /// A state passed as a world of another is not, in fact, one of its worlds.
    NotAWorldOf,
}

impl From<AscriptionError> for ErrorKind {
    fn from(e: AscriptionError) -> Self {
        ErrorKind::Ascription(e)
    }
}

/// Noted errors when building an attribute interpretation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InterpretationError {
    /// A profile for a symbol the vocabulary does not declare.
    UnknownRelationSymbol(String),

    /// A profile whose attribute tuple does not match the arity of its symbol.
    ArityMismatch(String),

    /// A profile referencing an attribute the structure does not declare.
    UnknownAttribute(String),
}

impl From<InterpretationError> for ErrorKind {
    fn from(e: InterpretationError) -> Self {
        ErrorKind::Interpretation(e)
    }
}

/// Noted errors during the evaluation of a formula.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EvaluationError {
    /// A term which neither the constant assignment nor the variable assignment binds to an object.
    UnboundTerm(String),

    /// An atomic formula over a symbol the interpretation does not ground.
    UninterpretedSymbol(String),

    /// The formula, state, and assignments disagree on the vocabulary or attribute system in use.
    DomainMismatch,
}

impl From<EvaluationError> for ErrorKind {
    fn from(e: EvaluationError) -> Self {
        ErrorKind::Evaluation(e)
    }
}

/// A rule's logical precondition does not hold.
///
/// These are expected during proof checking --- an unlicensed step is a fact about the proof, not a fault in the engine.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PreconditionError {
    /// Neither disjunct of a case split evaluates to true.
    DisjunctionFailed,

    /// The named states supplied to a case rule do not cover every branch of the basis, or cover one twice.
    NotExhaustive,

    /// The named-entailment proviso of a case rule does not hold.
    ProvisoFailed,

    /// A named state supplied as a case is not a proper extension of the diagram under its naming.
    NotAnExtension,

    /// Thinning with an assumption base requires an interpretation to evaluate it.
    MissingInterpretation,

    /// Widening with an interpretation requires the context to entail the widened state.
    EntailmentFailed,
}

impl From<PreconditionError> for ErrorKind {
    fn from(e: PreconditionError) -> Self {
        ErrorKind::Precondition(e)
    }
}
