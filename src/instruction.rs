//! Instruction model and line factory.
//!
//! One parsed configuration directive is an [`Instruction`]: an optional
//! human-readable title, the frozen token list, and a tagged [`Body`] that
//! is either a contact link or an attachment descriptor. Resolution logic
//! matches on the tag; there is no runtime type inspection anywhere.
//!
//! Directive grammar (after tokenization):
//!
//! ```text
//! <scope> <kind> <payload...> [as <title>]
//!
//! <scope>   package identifier, or `*` for a global rule
//! <kind>    store | support | link | include
//! <payload> link kinds:  a URL or mail-compose target
//!           include:     attachment keyword + source reference
//! ```
//!
//! The trailing `as <title>` clause is consumed by the factory before the
//! token list is frozen, so titles never count toward rule specificity.

use crate::{ParseError, tokenize};

/// Scope token marking a rule as global rather than package-specific.
pub const WILDCARD_SCOPE: &str = "*";

const TITLE_KEYWORD: &str = "as";

/// Contact-link flavor, derived from the kind keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// `store` — link to the package's store page.
    Store,
    /// `support` — the package's preferred support contact.
    Support,
    /// `link` — any other link offered alongside the report.
    Other,
}

impl LinkKind {
    /// The directive keyword this kind was parsed from.
    pub fn keyword(self) -> &'static str {
        match self {
            LinkKind::Store => "store",
            LinkKind::Support => "support",
            LinkKind::Other => "link",
        }
    }
}

/// What kind of diagnostic material an `include` directive attaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentKind {
    CrashLog,
    PackageList,
    File,
    Command,
}

impl AttachmentKind {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "crash-log" => Some(AttachmentKind::CrashLog),
            "package-list" => Some(AttachmentKind::PackageList),
            "file" => Some(AttachmentKind::File),
            "command" => Some(AttachmentKind::Command),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            AttachmentKind::CrashLog => "crash-log",
            AttachmentKind::PackageList => "package-list",
            AttachmentKind::File => "file",
            AttachmentKind::Command => "command",
        }
    }
}

/// Per-variant payload of an [`Instruction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// A contact target: URL or mail-compose directive.
    Link { kind: LinkKind, target: String },
    /// An attachment descriptor: what to gather and where to find it.
    /// `source` is a path or logical name resolved at report time by the
    /// presentation layer.
    Include { kind: AttachmentKind, source: String },
}

/// One parsed configuration directive.
///
/// Immutable once constructed; the token list is non-empty and its first
/// token is always the scope selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    title: Option<String>,
    tokens: Vec<String>,
    body: Body,
}

impl Instruction {
    /// Parse one configuration line into an `Instruction`.
    ///
    /// Pure factory: identical input yields a structurally identical
    /// instruction, no I/O, no registry access. Dispatches on the kind
    /// keyword; anything unrecognized is [`ParseError::UnknownInstructionKind`].
    pub fn from_line(line: &str) -> Result<Self, ParseError> {
        let mut tokens = tokenize(line)?;
        let title = extract_title(&mut tokens);

        if tokens.len() < 2 {
            return Err(ParseError::malformed("expected `<scope> <kind> <payload...>`"));
        }

        let body = match tokens[1].as_str() {
            "store" => link_body(LinkKind::Store, &tokens)?,
            "support" => link_body(LinkKind::Support, &tokens)?,
            "link" => link_body(LinkKind::Other, &tokens)?,
            "include" => include_body(&tokens)?,
            other => return Err(ParseError::UnknownInstructionKind(other.to_string())),
        };

        Ok(Instruction { title, tokens, body })
    }

    /// Optional human-readable label from the `as <title>` clause.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The frozen token list. First token is the scope selector.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Scope selector: a package identifier or [`WILDCARD_SCOPE`].
    pub fn scope(&self) -> &str {
        &self.tokens[0]
    }

    pub fn is_wildcard(&self) -> bool {
        self.scope() == WILDCARD_SCOPE
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Link view: `Some((kind, target))` when this is a link directive.
    pub fn as_link(&self) -> Option<(LinkKind, &str)> {
        match &self.body {
            Body::Link { kind, target } => Some((*kind, target)),
            Body::Include { .. } => None,
        }
    }

    /// Include view: `Some((kind, source))` when this is an include directive.
    pub fn as_include(&self) -> Option<(AttachmentKind, &str)> {
        match &self.body {
            Body::Include { kind, source } => Some((*kind, source)),
            Body::Link { .. } => None,
        }
    }

    /// Number of payload tokens (everything after the scope selector).
    /// Specificity input for the comparator.
    pub fn payload_len(&self) -> usize {
        self.tokens.len() - 1
    }
}

/// Pop a trailing `as <title>` clause off the token list, if present.
///
/// Only recognized when at least two tokens precede it, so a bare
/// `<scope> as <x>` is left for the keyword dispatch to reject.
fn extract_title(tokens: &mut Vec<String>) -> Option<String> {
    if tokens.len() >= 4 && tokens[tokens.len() - 2] == TITLE_KEYWORD {
        let title = tokens.pop();
        tokens.pop();
        title
    } else {
        None
    }
}

fn link_body(kind: LinkKind, tokens: &[String]) -> Result<Body, ParseError> {
    let Some(target) = tokens.get(2) else {
        return Err(ParseError::malformed(format!("`{}` directive is missing a target", kind.keyword())));
    };
    Ok(Body::Link { kind, target: target.clone() })
}

fn include_body(tokens: &[String]) -> Result<Body, ParseError> {
    let Some(keyword) = tokens.get(2) else {
        return Err(ParseError::malformed("`include` directive is missing an attachment kind"));
    };
    let Some(kind) = AttachmentKind::from_keyword(keyword) else {
        return Err(ParseError::malformed(format!("unknown attachment kind `{keyword}`")));
    };
    let Some(source) = tokens.get(3) else {
        return Err(ParseError::malformed(format!("`include {keyword}` is missing a source")));
    };
    Ok(Body::Include { kind, source: source.clone() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_dispatch_builds_the_right_variant() {
        // Array of (line, expected link kind) for the three link keywords.
        let cases = vec![
            ("pkg.id store https://store/x", LinkKind::Store),
            ("pkg.id support mailto:dev@x", LinkKind::Support),
            ("pkg.id link https://wiki/x", LinkKind::Other),
        ];

        for (line, expected) in cases {
            let instruction = Instruction::from_line(line).unwrap();
            let (kind, target) = instruction.as_link().unwrap();
            assert_eq!(kind, expected, "line: {line:?}");
            assert_eq!(target, instruction.tokens()[2]);
            assert!(instruction.as_include().is_none());
        }
    }

    #[test]
    fn include_parses_attachment_kind_and_source() {
        let cases = vec![
            ("pkg.id include crash-log /var/log/crash.log", AttachmentKind::CrashLog, "/var/log/crash.log"),
            ("* include package-list dpkg", AttachmentKind::PackageList, "dpkg"),
            ("pkg.id include file /etc/pkg.conf", AttachmentKind::File, "/etc/pkg.conf"),
            ("pkg.id include command uname", AttachmentKind::Command, "uname"),
        ];

        for (line, expected_kind, expected_source) in cases {
            let instruction = Instruction::from_line(line).unwrap();
            let (kind, source) = instruction.as_include().unwrap();
            assert_eq!(kind, expected_kind, "line: {line:?}");
            assert_eq!(source, expected_source);
        }
    }

    #[test]
    fn identical_input_yields_identical_instruction() {
        let line = r#"pkg.id support mailto:dev@x as "Contact us""#;
        assert_eq!(Instruction::from_line(line).unwrap(), Instruction::from_line(line).unwrap());
    }

    #[test]
    fn title_clause_is_extracted_and_excluded_from_tokens() {
        let instruction = Instruction::from_line(r#"pkg.id link https://x as "Report a bug""#).unwrap();
        assert_eq!(instruction.title(), Some("Report a bug"));
        assert_eq!(instruction.tokens(), ["pkg.id", "link", "https://x"]);
        assert_eq!(instruction.payload_len(), 2);
    }

    #[test]
    fn missing_title_clause_leaves_title_unset() {
        let instruction = Instruction::from_line("pkg.id link https://x").unwrap();
        assert_eq!(instruction.title(), None);
    }

    #[test]
    fn scope_and_wildcard() {
        let scoped = Instruction::from_line("pkg.id support mailto:dev@x").unwrap();
        assert_eq!(scoped.scope(), "pkg.id");
        assert!(!scoped.is_wildcard());

        let global = Instruction::from_line("* support mailto:dev@x").unwrap();
        assert!(global.is_wildcard());
    }

    #[test]
    fn unknown_keyword_is_its_own_error() {
        let err = Instruction::from_line("pkg.id frobnicate x").unwrap_err();
        assert_eq!(err, ParseError::UnknownInstructionKind("frobnicate".to_string()));
    }

    #[test]
    fn incomplete_directives_are_malformed() {
        let cases = vec![
            "pkg.id",
            "pkg.id store",
            "pkg.id include",
            "pkg.id include crash-log",
            "pkg.id include blob /x",
        ];

        for line in cases {
            let err = Instruction::from_line(line).unwrap_err();
            assert!(matches!(err, ParseError::MalformedLine { .. }), "line: {line:?}");
        }
    }
}
