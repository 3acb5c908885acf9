pub mod error;
pub mod grammar;
pub mod template_ast;
pub mod template_compile;
pub mod template_parse;
pub mod template_transform;

pub use error::{GrammarLoadError, TemplateError};
pub use grammar::{DEFAULT_GRAMMAR, Grammar};
pub use template_ast::{Node, TemplateAttr};
pub use template_compile::{CompiledTemplate, SYNTHETIC_ROOT_TAG};
pub use template_parse::TemplateParser;
pub use template_transform::transform;
