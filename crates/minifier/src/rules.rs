use crate::family::LanguageFamily;
use once_cell::sync::Lazy;
use regex::Regex;

/// A named pattern whose matches are deleted from the raw text
pub(crate) struct RemovalRule {
    pub name: &'static str,
    pub pattern: Regex,
}

fn rule(name: &'static str, pattern: &str) -> RemovalRule {
    RemovalRule {
        name,
        pattern: Regex::new(pattern).expect("removal rule pattern must compile"),
    }
}

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("whitespace pattern must compile")
}

static SCRIPT_RULES: Lazy<Vec<RemovalRule>> = Lazy::new(|| {
    vec![
        rule("line_comment", r"(?m)//.*?$"),
        rule("block_comment", r"(?s)/\*.*?\*/"),
        rule("import", r"(?m)^\s*import\s+.*?;\s*$"),
    ]
});

static PYTHON_RULES: Lazy<Vec<RemovalRule>> = Lazy::new(|| {
    vec![
        rule("line_comment", r"(?m)#.*?$"),
        rule("single_quote_docstring", r"(?s)'''.*?'''"),
        rule("double_quote_docstring", r#"(?s)""".*?""""#),
        rule("from_import", r"(?m)^\s*from\s+.*?import.*?$"),
        rule("import", r"(?m)^\s*import\s+.*?$"),
    ]
});

static JAVA_LIKE_RULES: Lazy<Vec<RemovalRule>> = Lazy::new(|| {
    vec![
        rule("line_comment", r"(?m)//.*?$"),
        rule("block_comment", r"(?s)/\*.*?\*/"),
        rule("doc_comment", r"(?s)/\*\*.*?\*/"),
        rule("package", r"(?m)^\s*package\s+.*?;\s*$"),
        rule("import", r"(?m)^\s*import\s+.*?;\s*$"),
    ]
});

static MARKUP_RULES: Lazy<Vec<RemovalRule>> =
    Lazy::new(|| vec![rule("markup_comment", r"(?s)<!--.*?-->")]);

static STYLESHEET_RULES: Lazy<Vec<RemovalRule>> =
    Lazy::new(|| vec![rule("block_comment", r"(?s)/\*.*?\*/")]);

static HORIZONTAL_WS: Lazy<Regex> = Lazy::new(|| re(r"[^\S\n]+"));
static SPACES_TABS: Lazy<Regex> = Lazy::new(|| re(r"[ \t]+"));
static AROUND_NEWLINE: Lazy<Regex> = Lazy::new(|| re(r"\s*\n\s*"));
static NEWLINE_RUNS: Lazy<Regex> = Lazy::new(|| re(r"\n+"));
static BLANK_LINE_RUNS: Lazy<Regex> = Lazy::new(|| re(r"\n\n+"));
static ANY_WS: Lazy<Regex> = Lazy::new(|| re(r"\s+"));
static BETWEEN_TAGS: Lazy<Regex> = Lazy::new(|| re(r">\s+<"));
static AROUND_COLON: Lazy<Regex> = Lazy::new(|| re(r"\s*:\s*"));
static AROUND_SEMICOLON: Lazy<Regex> = Lazy::new(|| re(r"\s*;\s*"));
static AROUND_OPEN_BRACE: Lazy<Regex> = Lazy::new(|| re(r"\s*\{\s*"));
static AROUND_CLOSE_BRACE: Lazy<Regex> = Lazy::new(|| re(r"\s*\}\s*"));
static LEADING_BLANK_LINES: Lazy<Regex> = Lazy::new(|| re(r"\A(?:[^\S\n]*\n)+"));

/// Ordered removal rules for a family (empty for plain text and JSON)
pub(crate) fn removal_rules(family: LanguageFamily) -> &'static [RemovalRule] {
    match family {
        LanguageFamily::Script => &SCRIPT_RULES,
        LanguageFamily::Python => &PYTHON_RULES,
        LanguageFamily::JavaLike => &JAVA_LIKE_RULES,
        LanguageFamily::Markup => &MARKUP_RULES,
        LanguageFamily::Stylesheet => &STYLESHEET_RULES,
        LanguageFamily::Plain | LanguageFamily::Json => &[],
    }
}

/// Apply every removal rule of `family`, in order, to the raw text
pub(crate) fn strip_noise(family: LanguageFamily, text: &str) -> String {
    let mut out = text.to_string();
    for rule in removal_rules(family) {
        let replaced = rule.pattern.replace_all(&out, "");
        if replaced.len() != out.len() {
            log::trace!(
                "{} rule '{}' removed {} bytes",
                family.as_str(),
                rule.name,
                out.len() - replaced.len()
            );
            out = replaced.into_owned();
        }
    }
    out
}

fn replace(pattern: &Regex, text: &str, with: &str) -> String {
    pattern.replace_all(text, with).into_owned()
}

/// Family-specific whitespace collapse, applied after noise removal
pub(crate) fn collapse_whitespace(family: LanguageFamily, text: &str) -> String {
    match family {
        LanguageFamily::Script | LanguageFamily::JavaLike => {
            let out = replace(&HORIZONTAL_WS, text, " ");
            let out = replace(&AROUND_NEWLINE, &out, "\n");
            let out = replace(&NEWLINE_RUNS, &out, "\n");
            out.trim().to_string()
        }
        // Lossy: indentation collapses to a single space.
        LanguageFamily::Python => {
            let out = replace(&SPACES_TABS, text, " ");
            let out = replace(&BLANK_LINE_RUNS, &out, "\n\n");
            out.trim().to_string()
        }
        LanguageFamily::Markup => {
            let out = replace(&ANY_WS, text, " ");
            let out = replace(&BETWEEN_TAGS, &out, "><");
            out.trim().to_string()
        }
        LanguageFamily::Stylesheet => {
            let out = replace(&ANY_WS, text, " ");
            let out = replace(&BETWEEN_TAGS, &out, "><");
            let out = replace(&AROUND_COLON, &out, ":");
            let out = replace(&AROUND_SEMICOLON, &out, ";");
            let out = replace(&AROUND_OPEN_BRACE, &out, "{");
            let out = replace(&AROUND_CLOSE_BRACE, &out, "}");
            out.trim().to_string()
        }
        LanguageFamily::Plain => replace(&LEADING_BLANK_LINES, text, ""),
        LanguageFamily::Json => text.to_string(),
    }
}
