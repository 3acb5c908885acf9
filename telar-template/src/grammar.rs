use pest::iterators::Pairs;
use pest_vm::Vm;

use crate::error::GrammarLoadError;

/// Grammar shipped with the crate. Hosts normally pass this to
/// [`Grammar::load`]; a different definition may be loaded instead, as
/// long as it defines the same rule names.
pub const DEFAULT_GRAMMAR: &str = include_str!("template.pest");

/// Rules the lowering step drives by name. A grammar that loads but does
/// not define all of them could never produce a usable parse tree, so it
/// is rejected up front.
const REQUIRED_RULES: &[&str] = &[
    "template",
    "element",
    "void_element",
    "text",
    "tag_name",
    "attribute",
    "attr_name",
    "attr_value",
];

/// A loaded template grammar: pest grammar text parsed, optimized and
/// wrapped in an interpreter. Immutable once loaded; parsers borrow it,
/// so several parsers (or several grammars) can coexist in one process.
pub struct Grammar {
    vm: Vm,
}

impl std::fmt::Debug for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grammar").finish_non_exhaustive()
    }
}

impl Grammar {
    pub fn load(source: &str) -> Result<Self, GrammarLoadError> {
        let (_, rules) = pest_meta::parse_and_optimize(source).map_err(|errors| {
            GrammarLoadError::Malformed {
                details: errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n"),
            }
        })?;
        for required in REQUIRED_RULES {
            if !rules.iter().any(|r| r.name == *required) {
                return Err(GrammarLoadError::MissingRule { rule: required });
            }
        }
        Ok(Self {
            vm: Vm::new(rules),
        })
    }

    pub(crate) fn parse_rule<'a>(
        &'a self,
        rule: &'a str,
        input: &'a str,
    ) -> Result<Pairs<'a, &'a str>, pest::error::Error<&'a str>> {
        self.vm.parse(rule, input)
    }
}
