use crate::error::{ChunkerError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// A named line predicate marking a good place to start a new chunk
#[derive(Debug, Clone)]
pub struct BreakpointRule {
    name: String,
    pattern: Regex,
}

impl BreakpointRule {
    /// Compile a rule from a regex matched against a single line (no trailing `\n`)
    pub fn new(name: impl Into<String>, pattern: &str) -> Result<Self> {
        let pattern =
            Regex::new(pattern).map_err(|e| ChunkerError::invalid_pattern(pattern, e))?;
        Ok(Self {
            name: name.into(),
            pattern,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matches(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

const DEFAULT_PATTERNS: &[(&str, &str)] = &[
    ("function_declaration", r"^function\s+\w+"),
    ("class_declaration", r"^class\s+\w+"),
    ("function_expression", r"^const\s+\w+\s*=\s*function"),
    ("arrow_function", r"^const\s+\w+\s*=\s*\(.*?\)\s*=>"),
    ("banner_comment", r"^//\s*-----"),
    ("import", r"^import\s+"),
    ("export", r"^export\s+"),
    ("closing_brace", r"^}\s*$"),
    ("blank_line", r"^\s*$"),
];

static DEFAULT_RULES: Lazy<Vec<BreakpointRule>> = Lazy::new(|| {
    DEFAULT_PATTERNS
        .iter()
        .map(|(name, pattern)| {
            BreakpointRule::new(*name, pattern).expect("default breakpoint pattern must compile")
        })
        .collect()
});

/// Ordered list of breakpoint rules; a line is a breakpoint if any rule matches.
///
/// This is a structural heuristic over curly-brace syntax, not a parser. New
/// language families extend it with [`Breakpoints::with_rule`].
#[derive(Debug, Clone)]
pub struct Breakpoints {
    rules: Vec<BreakpointRule>,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES.clone(),
        }
    }
}

impl Breakpoints {
    /// A list with no rules: only the hard size cap splits chunks
    #[must_use]
    pub const fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Builder: append a rule compiled from `pattern`
    pub fn with_rule(mut self, name: impl Into<String>, pattern: &str) -> Result<Self> {
        self.rules.push(BreakpointRule::new(name, pattern)?);
        Ok(self)
    }

    pub fn push(&mut self, rule: BreakpointRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[BreakpointRule] {
        &self.rules
    }

    pub fn is_breakpoint(&self, line: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(line))
    }

    /// Name of the first rule that matches `line`
    pub fn matching_rule(&self, line: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.matches(line))
            .map(BreakpointRule::name)
    }
}
