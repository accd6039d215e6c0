//! Console rendering of a [`RunOutcome`].

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;
use seoscan_common::BUILD_STEP;
use seoscan_web::{LengthVerdict, SeoChecks, StructuredDataResult};

use crate::driver::{RunOutcome, ScanReport};

const PASS: &str = "✅";
const FAIL: &str = "❌";
const WARN: &str = "⚠️";
const RULE_WIDTH: usize = 50;

/// Render the full console text for one run.
pub fn render(outcome: &RunOutcome) -> String {
    outcome.to_string()
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed(report) => write!(f, "{report}"),
            Self::MissingInput { path } => writeln!(
                f,
                "{FAIL} {} not found. Run '{BUILD_STEP}' first.",
                path.display()
            ),
            Self::Failed { message } => writeln!(f, "{FAIL} Error: {message}"),
        }
    }
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🔍 SEO VALIDATION REPORT")?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        write_structured_data(f, &self.structured_data)?;
        write_checks(f, &self.checks)
    }
}

fn write_structured_data(
    f: &mut fmt::Formatter<'_>,
    results: &[StructuredDataResult],
) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "📋 JSON-LD Structured Data: {} scripts found", results.len())?;
    for result in results {
        match result {
            StructuredDataResult::Valid { script_index, .. } => {
                writeln!(f, "  {PASS} Script {script_index}: Valid JSON-LD")?;
                if let Some(kind) = result.schema_type() {
                    writeln!(f, "     Type: {}", display_value(kind))?;
                }
                if let Some(name) = result.name() {
                    writeln!(f, "     Name: {}", display_value(name))?;
                }
            }
            StructuredDataResult::Invalid {
                script_index,
                error,
            } => writeln!(f, "  {FAIL} Script {script_index}: Invalid - {error}")?,
        }
    }
    Ok(())
}

fn write_checks(f: &mut fmt::Formatter<'_>, checks: &SeoChecks) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "📊 Basic SEO Checks:")?;

    writeln!(f, "  Title Tag: {}", presence(checks.has_title()))?;
    if let Some(title) = &checks.title {
        writeln!(f, "    Length: {} chars {}", title.length, verdict(title.verdict()))?;
        writeln!(f, "    Text: {}", title.text)?;
    }

    writeln!(f, "  Meta Description: {}", presence(checks.has_meta_description()))?;
    if let Some(desc) = &checks.description {
        writeln!(f, "    Length: {} chars {}", desc.length, verdict(desc.verdict()))?;
        writeln!(f, "    Text: {}", desc.text)?;
    }

    writeln!(f, "  Canonical URL: {}", presence(checks.has_canonical()))?;
    if let Some(url) = &checks.canonical_url {
        writeln!(f, "    URL: {url}")?;
    }

    writeln!(f, "  Open Graph Image: {}", presence(checks.has_og_image()))?;
    if let Some(url) = &checks.og_image_url {
        writeln!(f, "    URL: {url}")?;
    }

    writeln!(f, "  Robots Meta: {}", presence(checks.has_robots_meta()))?;
    if let Some(content) = &checks.robots_content {
        writeln!(f, "    Content: {content}")?;
    }
    Ok(())
}

fn presence(found: bool) -> &'static str {
    if found { PASS } else { FAIL }
}

fn verdict(v: LengthVerdict) -> &'static str {
    match v {
        LengthVerdict::Pass => PASS,
        LengthVerdict::Warn => WARN,
    }
}

/// Strings print bare; anything else prints as compact JSON.
fn display_value(v: &Value) -> Cow<'_, str> {
    match v {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}
