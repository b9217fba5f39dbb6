//! Errors raised while rendering message templates.

use thiserror::Error;

/// A template could not be rendered against the supplied arguments.
///
/// This is the only error the outcome type can produce. A failed operation
/// is reported through [`crate::Outcome::is_success`], never through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FormatError {
    /// A placeholder referenced an argument that was not supplied.
    #[error("placeholder {{{index}}} at position {position} is out of range: {count} argument(s) supplied")]
    IndexOutOfRange {
        index: usize,
        count: usize,
        position: usize,
    },

    /// A `{` was opened but never closed.
    #[error("unclosed '{{' at position {position}")]
    UnclosedPlaceholder { position: usize },

    /// A lone `}` that is neither a placeholder end nor an escaped `}}`.
    #[error("unmatched '}}' at position {position}")]
    UnmatchedBrace { position: usize },

    /// The text between braces is not `index[,alignment][:format]`.
    #[error("invalid placeholder '{{{text}}}' at position {position}")]
    InvalidPlaceholder { text: String, position: usize },

    /// An argument's `Display` implementation reported an error.
    #[error("argument {index} could not be converted to text")]
    Argument { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_out_of_range_display() {
        let e = FormatError::IndexOutOfRange {
            index: 1,
            count: 1,
            position: 6,
        };
        assert_eq!(
            e.to_string(),
            "placeholder {1} at position 6 is out of range: 1 argument(s) supplied"
        );
    }

    #[test]
    fn brace_errors_name_the_position() {
        assert!(
            FormatError::UnclosedPlaceholder { position: 3 }
                .to_string()
                .contains("position 3")
        );
        assert!(
            FormatError::UnmatchedBrace { position: 0 }
                .to_string()
                .contains("'}'")
        );
    }

    #[test]
    fn satisfies_error_trait() {
        let e = FormatError::Argument { index: 0 };
        let _: &dyn std::error::Error = &e;
        assert!(e.to_string().contains("argument 0"));
    }
}
