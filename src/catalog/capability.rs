use super::descriptor::BlockCatalog;
use ahash::AHashSet;
use itertools::Itertools;
use regex_lite::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Identifier tokens immediately followed by `(` in a code sample, e.g.
/// `min(`, `len(`.
static CALL_HEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([a-zA-Z_][a-zA-Z0-9_]*)\s*\(").expect("call-head pattern"));

/// A coarse, keyword-derived summary of which operation categories the
/// target block grammar supports.
///
/// Built once per catalog by substring-matching every descriptor's type name
/// against fixed keyword groups, and never mutated afterwards. This is an
/// existence check, not a structural schema match: a plan can pass every
/// capability gate and still exercise operators no block implements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapabilitySet {
    pub has_arithmetic: bool,
    pub has_comparisons: bool,
    pub has_logic: bool,
    pub has_print: bool,
    pub has_variables: bool,
    pub has_input: bool,

    /// Function names scraped from the catalog's code samples.
    pub functions: AHashSet<String>,
}

impl CapabilitySet {
    /// Scans every catalog entry once and derives the capability flags.
    pub fn from_catalog(catalog: &BlockCatalog) -> Self {
        let mut caps = Self::default();

        for block in &catalog.blocks {
            let block_type = block.block_type.to_ascii_lowercase();

            caps.has_arithmetic |=
                block_type.contains("arithmetic") || block_type.contains("math");
            caps.has_comparisons |=
                block_type.contains("compare") || block_type.contains("comparison");
            caps.has_logic |= block_type.contains("logic") || block_type.contains("boolean");
            caps.has_print |= block_type.contains("print");
            // "var" also covers "variable".
            caps.has_variables |= block_type.contains("var");
            caps.has_input |= block_type.contains("input");

            if let Some(sample) = &block.python_sample {
                for capture in CALL_HEAD.captures_iter(sample) {
                    caps.functions.insert(capture[1].to_string());
                }
            }
        }

        caps
    }

    pub fn supports_function(&self, name: &str) -> bool {
        self.functions.contains(name)
    }
}

impl fmt::Display for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let categories = [
            ("arithmetic", self.has_arithmetic),
            ("comparisons", self.has_comparisons),
            ("logic", self.has_logic),
            ("print", self.has_print),
            ("variables", self.has_variables),
            ("input", self.has_input),
        ];
        let enabled = categories
            .iter()
            .filter(|(_, on)| *on)
            .map(|(name, _)| *name)
            .join(", ");

        if enabled.is_empty() {
            write!(f, "none")?;
        } else {
            write!(f, "{}", enabled)?;
        }

        if !self.functions.is_empty() {
            write!(f, "; functions: {}", self.functions.iter().sorted().join(", "))?;
        }
        Ok(())
    }
}
