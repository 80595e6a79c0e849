/*!
Named targets for [logging](log).

Calls to the log macro are made at the decision points of the engine, each against one of the targets below, so output can be narrowed to the part of a check under inspection.

No log implementation is provided; a consumer picks a sink.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [world generation](crate::structures::state)
    pub const WORLDS: &str = "worlds";

    /// Logs related to [formula evaluation](crate::structures::formula)
    pub const EVALUATION: &str = "evaluation";

    /// Logs related to [entailment checks](crate::context)
    pub const ENTAILMENT: &str = "entailment";

    /// Logs related to basis computation and [exhaustiveness checks](crate::context::basis)
    pub const EXHAUSTIVENESS: &str = "exhaustiveness";

    /// Logs related to the [inference rules](crate::procedures)
    pub const RULES: &str = "rules";
}
