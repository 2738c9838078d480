use crate::application::dto::{RankReport, RankedPackage};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// TextFormatter - the classic terminal report.
///
/// ```text
/// total installed packages: 1289
/// top 3 packages:
///   libreoffice-fresh: 211 (35)
///     (libreoffice-fresh: 211 (35)) -> (gst-plugins-base-libs: 164 (12))
///   ...
/// ```
///
/// In recursive mode each entry shows `closure (direct)`; otherwise just the
/// direct dependency count.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn format_entry(entry: &RankedPackage, recursive: bool) -> String {
        Self::format_weights(
            entry.name.as_str(),
            entry.closure_size,
            entry.direct_count,
            recursive,
        )
    }

    fn format_weights(name: &str, closure: usize, direct: usize, recursive: bool) -> String {
        if recursive {
            format!("{}: {} ({})", name, closure, direct)
        } else {
            format!("{}: {}", name, closure)
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &RankReport) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "total installed packages: {}", report.total_explicit)?;
        // The header announces the requested count, even when fewer
        // explicit packages exist to fill it.
        writeln!(out, "top {} packages:", report.limit)?;

        for entry in &report.entries {
            writeln!(out, "  {}", Self::format_entry(entry, report.recursive))?;

            if !entry.chain.is_empty() {
                let rendered: Vec<String> = entry
                    .chain
                    .iter()
                    .map(|link| {
                        format!(
                            "({})",
                            Self::format_weights(
                                link.name.as_str(),
                                link.closure_size,
                                link.direct_count,
                                report.recursive,
                            )
                        )
                    })
                    .collect();
                writeln!(out, "    {}", rendered.join(" -> "))?;
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bloat_analysis::domain::PackageName;
    use crate::bloat_analysis::services::ChainLink;

    fn entry(name: &str, closure: usize, direct: usize, chain: Vec<ChainLink>) -> RankedPackage {
        RankedPackage {
            name: PackageName::new(name).unwrap(),
            closure_size: closure,
            direct_count: direct,
            chain,
        }
    }

    fn link(name: &str, closure: usize, direct: usize) -> ChainLink {
        ChainLink {
            name: PackageName::new(name).unwrap(),
            closure_size: closure,
            direct_count: direct,
        }
    }

    #[test]
    fn test_text_format_recursive() {
        let report = RankReport::new(
            42,
            true,
            2,
            vec![entry("firefox", 120, 30, vec![]), entry("vim", 15, 5, vec![])],
        );
        let out = TextFormatter::new().format(&report).unwrap();

        assert!(out.contains("total installed packages: 42"));
        assert!(out.contains("top 2 packages:"));
        assert!(out.contains("  firefox: 120 (30)"));
        assert!(out.contains("  vim: 15 (5)"));
    }

    #[test]
    fn test_text_format_header_announces_requested_count() {
        // Fewer explicit packages than asked for: the header still shows
        // the requested count, not the entry count.
        let report = RankReport::new(1, false, 10, vec![entry("firefox", 3, 3, vec![])]);
        let out = TextFormatter::new().format(&report).unwrap();

        assert!(out.contains("top 10 packages:"));
        assert_eq!(report.entries.len(), 1);
    }

    #[test]
    fn test_text_format_non_recursive_omits_direct_count() {
        let report = RankReport::new(10, false, 10, vec![entry("firefox", 30, 30, vec![])]);
        let out = TextFormatter::new().format(&report).unwrap();

        assert!(out.contains("  firefox: 30\n"));
        assert!(!out.contains("(30)"));
    }

    #[test]
    fn test_text_format_chain_line() {
        let chain = vec![link("firefox", 120, 30), link("gtk3", 80, 20)];
        let report = RankReport::new(42, true, 10, vec![entry("firefox", 120, 30, chain)]);
        let out = TextFormatter::new().format(&report).unwrap();

        assert!(out.contains("    (firefox: 120 (30)) -> (gtk3: 80 (20))"));
    }

    #[test]
    fn test_text_format_empty_report() {
        let report = RankReport::new(0, false, 0, vec![]);
        let out = TextFormatter::new().format(&report).unwrap();
        assert!(out.contains("top 0 packages:"));
    }
}
