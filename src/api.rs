//! Scan-phase driver.
//!
//! The engine's lifecycle is two mutually exclusive phases: a scan phase
//! that populates a [`Registry`] from configuration lines, then a resolve
//! phase of pure queries against the frozen registry. This module ships the
//! scan driver; resolution lives in `engine.rs`.
//!
//! The driver owns the line-filtering contract: blank lines and `#` comments
//! are skipped before the tokenizer ever sees them. Parse failures follow
//! the skip-log-continue policy so one bad line never blocks the remaining
//! rules; callers wanting fail-fast behavior compose
//! [`Instruction::from_line`] and [`Registry::append`] themselves.

use tracing::warn;

use crate::{Instruction, ParseError, Registry};

/// Lines starting with this character (after trimming) are comments.
pub const COMMENT_MARKER: char = '#';

/// Outcome of one scan pass.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Number of instructions appended to the registry.
    pub appended: usize,
    /// Lines that failed to parse and were skipped, in input order.
    pub skipped: Vec<SkippedLine>,
}

/// One configuration line the scan skipped, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line_number: usize,
    pub error: ParseError,
}

/// Scan configuration lines into `registry`.
///
/// Appends one instruction per parseable directive line. Does not flush
/// first: repeated calls accumulate, which is how multiple configuration
/// sources are layered (and why later sources win comparator ties). Flush
/// explicitly between independent scans.
pub fn scan_lines<'a, I>(registry: &mut Registry, lines: I) -> ScanReport
where
    I: IntoIterator<Item = &'a str>,
{
    let mut report = ScanReport::default();

    for (index, raw) in lines.into_iter().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }

        match Instruction::from_line(line) {
            Ok(instruction) => {
                registry.append(instruction);
                report.appended += 1;
            }
            Err(error) => {
                let line_number = index + 1;
                warn!(line = line_number, %error, "skipping configuration line");
                report.skipped.push(SkippedLine { line_number, error });
            }
        }
    }

    report
}

/// Scan a whole configuration text, one directive per line.
pub fn scan_str(registry: &mut Registry, text: &str) -> ScanReport {
    scan_lines(registry, text.lines())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PackageDescriptor, resolve};

    #[test]
    fn blank_and_comment_lines_are_skipped_silently() {
        let mut registry = Registry::new();
        let report = scan_str(
            &mut registry,
            "# contact rules\n\n   \npkg.id support mailto:dev@x\n  # trailing comment\n",
        );

        assert_eq!(report.appended, 1);
        assert!(report.skipped.is_empty());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn bad_lines_are_recorded_and_do_not_block_later_rules() {
        let mut registry = Registry::new();
        let report = scan_str(
            &mut registry,
            "pkg.id frobnicate x\npkg.id link \"no end\npkg.id support mailto:dev@x\n",
        );

        assert_eq!(report.appended, 1);
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[0].line_number, 1);
        assert_eq!(report.skipped[0].error, ParseError::UnknownInstructionKind("frobnicate".to_string()));
        assert_eq!(report.skipped[1].line_number, 2);
        assert!(matches!(report.skipped[1].error, ParseError::MalformedLine { .. }));

        // The good rule still landed.
        assert_eq!(registry.all()[0].scope(), "pkg.id");
    }

    #[test]
    fn repeated_scans_accumulate_until_flushed() {
        let mut registry = Registry::new();
        scan_str(&mut registry, "* support mailto:default@x");
        scan_str(&mut registry, "pkg.id support mailto:special@x");
        assert_eq!(registry.len(), 2);

        registry.flush();
        assert!(registry.is_empty());
    }

    #[test]
    fn scan_then_resolve_is_deterministic() {
        let text = "\
# layered sources
* support mailto:default@x
pkg.id support mailto:special@x
pkg.id store https://store/pkg
pkg.id link https://wiki/pkg as \"Wiki\"
pkg.id include crash-log /var/log/c.log
";
        let descriptor = PackageDescriptor { identifier: "pkg.id".to_string(), ..PackageDescriptor::default() };

        let mut registry = Registry::new();
        scan_str(&mut registry, text);
        let first = resolve(&registry, &descriptor);

        for _ in 0..5 {
            let mut fresh = Registry::new();
            scan_str(&mut fresh, text);
            let again = resolve(&fresh, &descriptor);
            assert_eq!(again, first);
        }
    }
}
