use pest::error::LineColLocation;
use thiserror::Error;

/// The grammar definition itself failed to load. Fatal at startup; there
/// is no recovery path.
#[derive(Debug, Error)]
pub enum GrammarLoadError {
    #[error("malformed grammar definition:\n{details}")]
    Malformed { details: String },
    #[error("grammar does not define required rule `{rule}`")]
    MissingRule { rule: &'static str },
}

/// Failure while parsing or compiling a template input.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The input does not conform to the grammar. Line and column are
    /// 1-based and point at the first unmatched construct.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
    /// The grammar produced a parse node the lowering step does not know
    /// about. Unreachable with [`DEFAULT_GRAMMAR`](crate::DEFAULT_GRAMMAR);
    /// a foreign grammar can trigger it.
    #[error("unexpected grammar rule `{rule}` in parse tree")]
    UnexpectedRule { rule: String },
}

impl TemplateError {
    pub(crate) fn from_pest(err: pest::error::Error<&str>) -> Self {
        let (line, column) = match err.line_col {
            LineColLocation::Pos((line, column)) => (line, column),
            LineColLocation::Span((line, column), _) => (line, column),
        };
        TemplateError::Syntax {
            line,
            column,
            message: err.variant.message().into_owned(),
        }
    }

    pub(crate) fn unexpected_rule(rule: &str) -> Self {
        log::error!("grammar/lowering mismatch: no lowering for rule `{rule}`");
        TemplateError::UnexpectedRule {
            rule: rule.to_string(),
        }
    }
}
