use miette::Diagnostic;
use thiserror::Error;

/// Errors surfaced by the unwinding passes.
///
/// None of these are recovered internally: a failing pass aborts the
/// unwinding of the current property without emitting a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum UnwindError {
    /// The classifier rejected the property; the unwinder must not run on it.
    #[error("property is not supported by bounded model checking")]
    #[diagnostic(code(spool::unwind::unsupported_property))]
    UnsupportedProperty,

    #[error("failed to convert {context} to a timeframe index")]
    #[diagnostic(code(spool::unwind::bound_conversion))]
    BoundConversion { context: &'static str },

    #[error("malformed expression: {reason}")]
    #[diagnostic(code(spool::unwind::malformed_expression))]
    MalformedExpression { reason: String },

    /// An obligation timeframe fell outside `[0, bound)`; indicates a bug
    /// in a pass rather than in the input.
    #[error("obligation timeframe {timeframe} outside [0, {bound})")]
    #[diagnostic(code(spool::unwind::invariant_violation))]
    InvariantViolation { timeframe: usize, bound: usize },

    #[error("unknown module '{module}'")]
    #[diagnostic(code(spool::unwind::unknown_module))]
    UnknownModule { module: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_name_the_failing_condition() {
        assert_eq!(
            UnwindError::UnsupportedProperty.to_string(),
            "property is not supported by bounded model checking"
        );
        assert_eq!(
            UnwindError::BoundConversion {
                context: "sva_cycle_delay offset",
            }
            .to_string(),
            "failed to convert sva_cycle_delay offset to a timeframe index"
        );
        assert_eq!(
            UnwindError::InvariantViolation {
                timeframe: 7,
                bound: 5,
            }
            .to_string(),
            "obligation timeframe 7 outside [0, 5)"
        );
        assert_eq!(
            UnwindError::UnknownModule {
                module: "top".into(),
            }
            .to_string(),
            "unknown module 'top'"
        );
    }
}
