//! `sitenav check` command implementation.

use std::path::Path;

use clap::Args;
use sitenav_menu::check::{SetDiff, compare_locales, dead_links, duplicate_links};
use sitenav_menu::{LocaleConfig, MenuNode, SiteMenus};

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Fail on warnings as well as errors.
    #[arg(long)]
    strict: bool,
}

/// How serious a finding is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Severity {
    Warning,
    Error,
}

/// One problem found in a locale's menus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Finding {
    pub(crate) severity: Severity,
    pub(crate) locale: String,
    pub(crate) message: String,
}

/// Findings of a full check run.
#[derive(Debug, Default)]
pub(crate) struct Report {
    pub(crate) findings: Vec<Finding>,
}

impl Report {
    fn push(&mut self, severity: Severity, locale: &str, message: String) {
        self.findings.push(Finding {
            severity,
            locale: locale.to_owned(),
            message,
        });
    }

    fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }

    pub(crate) fn errors(&self) -> usize {
        self.count(Severity::Error)
    }

    pub(crate) fn warnings(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Pass or fail: errors always fail, warnings only when `strict`.
    pub(crate) fn outcome(&self, strict: bool) -> Result<(), CliError> {
        let (errors, warnings) = (self.errors(), self.warnings());
        if errors > 0 || (strict && warnings > 0) {
            return Err(CliError::Validation(format!(
                "Check failed: {errors} error(s), {warnings} warning(s)"
            )));
        }
        Ok(())
    }
}

/// Named trees of a locale: the nav, then each sidebar entry.
fn named_trees(locale: &LocaleConfig) -> Vec<(String, &[MenuNode])> {
    let mut trees = vec![("nav".to_owned(), locale.nav.as_slice())];
    trees.extend(
        locale
            .sidebar
            .entries()
            .iter()
            .map(|entry| (format!("sidebar {}", entry.prefix), entry.items.as_slice())),
    );
    trees
}

fn report_diff(report: &mut Report, locale: &str, root: &str, kind: &str, diff: &SetDiff) {
    for item in &diff.only_in_left {
        report.push(
            Severity::Warning,
            locale,
            format!("{kind} {item} exists in {root} but not here"),
        );
    }
    for item in &diff.only_in_right {
        report.push(
            Severity::Warning,
            locale,
            format!("{kind} {item} has no counterpart in {root}"),
        );
    }
}

/// Run every check over `site`.
///
/// Dead links are only checked when `content_root` is given.
pub(crate) fn run_checks(site: &SiteMenus, content_root: Option<&Path>) -> Report {
    let mut report = Report::default();

    for locale in site.locales() {
        for (name, tree) in named_trees(locale) {
            for link in duplicate_links(tree) {
                report.push(
                    Severity::Warning,
                    &locale.lang,
                    format!("{name}: duplicate link {link}"),
                );
            }
            if let Some(root) = content_root {
                for link in dead_links(tree, root) {
                    report.push(
                        Severity::Error,
                        &locale.lang,
                        format!("{name}: dead link {link}"),
                    );
                }
            }
        }
    }

    if let Some(root) = site.root() {
        for other in site.locales().iter().filter(|l| !l.is_root()) {
            let diff = compare_locales(root, other);
            report_diff(&mut report, &other.lang, &root.lang, "link", &diff.links);
            report_diff(&mut report, &other.lang, &root.lang, "sidebar", &diff.prefixes);
        }
    }

    report
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (config, site) = self.site.load()?;

        let source_dir = &config.docs_resolved.source_dir;
        let content_root = if source_dir.is_dir() {
            output.info(&format!("Source: {}", source_dir.display()));
            Some(source_dir.as_path())
        } else {
            tracing::warn!(path = %source_dir.display(), "Docs source directory not found");
            output.warning(&format!(
                "Skipping dead link check: {} not found",
                source_dir.display()
            ));
            None
        };

        let report = run_checks(&site, content_root);

        for finding in &report.findings {
            let line = format!("[{}] {}", finding.locale, finding.message);
            match finding.severity {
                Severity::Warning => output.warning(&line),
                Severity::Error => output.error(&line),
            }
        }

        output.separator();
        report.outcome(self.strict)?;

        output.success(&format!(
            "Checked {} locale(s): {} warning(s)",
            site.locales().len(),
            report.warnings()
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::tests::load_test_site;

    fn messages(report: &Report, severity: Severity) -> Vec<(String, String)> {
        report
            .findings
            .iter()
            .filter(|f| f.severity == severity)
            .map(|f| (f.locale.clone(), f.message.clone()))
            .collect()
    }

    #[test]
    fn test_cross_locale_gaps_are_warnings() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (_, site) = load_test_site(temp_dir.path());

        let report = run_checks(&site, None);

        assert_eq!(report.errors(), 0);
        assert_eq!(
            messages(&report, Severity::Warning),
            vec![(
                "zh-CN".to_owned(),
                "link /Algorithms/Blind75/Binary/sum exists in en-US but not here".to_owned()
            )]
        );
    }

    #[test]
    fn test_dead_links_are_errors() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (_, site) = load_test_site(temp_dir.path());
        let docs = temp_dir.path().join("docs");
        fs::create_dir_all(docs.join("Algorithms/Blind75/Array")).unwrap();
        fs::write(docs.join("Algorithms/index.md"), "# Algorithms").unwrap();
        fs::write(docs.join("Algorithms/Blind75/intro.md"), "# Intro").unwrap();
        fs::write(docs.join("Algorithms/Blind75/Array/two-sum.md"), "# Two Sum").unwrap();

        let report = run_checks(&site, Some(&docs));

        let errors = messages(&report, Severity::Error);
        assert!(errors.contains(&(
            "en-US".to_owned(),
            "sidebar /Algorithms/Blind75/: dead link /Algorithms/Blind75/Binary/sum".to_owned()
        )));
        assert!(errors.contains(&(
            "zh-CN".to_owned(),
            "nav: dead link /zh/Algorithms/".to_owned()
        )));
        assert_eq!(errors.iter().filter(|(lang, _)| lang == "en-US").count(), 1);
    }

    #[test]
    fn test_duplicate_links_are_warnings() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (_, site) = load_test_site(temp_dir.path());
        let locale = site.locale("en-US").unwrap().clone();
        let mut nav = locale.nav.clone();
        nav.push(MenuNode::leaf("Algorithms again", "/Algorithms"));
        let duplicated = LocaleConfig { nav, ..locale };
        let site = SiteMenus::new(vec![duplicated]).unwrap();

        let report = run_checks(&site, None);

        assert_eq!(
            messages(&report, Severity::Warning),
            vec![(
                "en-US".to_owned(),
                "nav: duplicate link /Algorithms".to_owned()
            )]
        );
    }

    fn report_with(severities: &[Severity]) -> Report {
        let mut report = Report::default();
        for &severity in severities {
            report.push(severity, "en-US", "finding".to_owned());
        }
        report
    }

    #[test]
    fn test_outcome_clean_report_passes() {
        assert!(Report::default().outcome(true).is_ok());
    }

    #[test]
    fn test_outcome_errors_fail_without_strict() {
        let report = report_with(&[Severity::Error, Severity::Warning]);

        let err = report.outcome(false).unwrap_err();

        assert_eq!(err.to_string(), "Check failed: 1 error(s), 1 warning(s)");
    }

    #[test]
    fn test_outcome_warnings_pass_without_strict() {
        let report = report_with(&[Severity::Warning, Severity::Warning]);

        assert!(report.outcome(false).is_ok());
    }

    #[test]
    fn test_outcome_warnings_fail_with_strict() {
        let report = report_with(&[Severity::Warning]);

        let err = report.outcome(true).unwrap_err();

        assert!(matches!(err, CliError::Validation(_)));
        assert_eq!(err.to_string(), "Check failed: 0 error(s), 1 warning(s)");
    }

    #[test]
    fn test_outcome_dead_links_fail_check() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (_, site) = load_test_site(temp_dir.path());
        let docs = temp_dir.path().join("docs");
        fs::create_dir_all(&docs).unwrap();

        let report = run_checks(&site, Some(&docs));

        assert!(report.errors() > 0);
        assert!(report.outcome(false).is_err());
    }
}
