//! Markdown report rendering.

use std::fmt::Write;

use super::ReportMetadata;
use crate::dns::RecordKind;
use crate::models::ScanResult;

/// Escapes characters that would break a Markdown table cell.
fn cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}

/// Renders the scan result as a Markdown document.
pub fn render_markdown(
    result: &ScanResult,
    metadata: &ReportMetadata,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let stats = &metadata.stats;

    writeln!(out, "# DNS report: {}", result.target())?;
    writeln!(out)?;
    writeln!(
        out,
        "- Generated: {}",
        metadata.generated_at.format("%Y-%m-%d %H:%M:%S %:z")
    )?;
    writeln!(out, "- Scan duration: {:.1} s", metadata.elapsed_seconds)?;
    writeln!(
        out,
        "- Queries: {} sent, {} answered, {} failed",
        stats.queries,
        stats.answered,
        stats.total_failures()
    )?;

    for kind in RecordKind::TARGET_KINDS {
        writeln!(out)?;
        writeln!(out, "## {} records ({})", kind, kind.description())?;
        writeln!(out)?;
        let values = result.records().get(kind);
        if values.is_empty() {
            writeln!(out, "_None found._")?;
        }
        for value in values {
            writeln!(out, "- `{}`", value.replace('`', "'"))?;
        }
    }

    writeln!(out)?;
    writeln!(out, "## Reverse names")?;
    writeln!(out)?;
    if result.canonical_names().is_empty() {
        writeln!(out, "_No address has a PTR record._")?;
    } else {
        writeln!(out, "| Address | Canonical name |")?;
        writeln!(out, "|---|---|")?;
        for (address, name) in result.canonical_names() {
            writeln!(out, "| {} | {} |", address, cell(name))?;
        }
    }

    writeln!(out)?;
    writeln!(out, "## Neighbors")?;
    if result.neighbors().is_empty() {
        writeln!(out)?;
        writeln!(out, "_No address was swept._")?;
    }
    for (base, neighbors) in result.neighbors() {
        writeln!(out)?;
        writeln!(out, "### {base}")?;
        writeln!(out)?;
        if neighbors.is_empty() {
            writeln!(out, "_No resolving neighbors._")?;
            continue;
        }
        writeln!(out, "| Address | Names |")?;
        writeln!(out, "|---|---|")?;
        for (address, names) in neighbors {
            writeln!(out, "| {} | {} |", address, cell(&names.join(", ")))?;
        }
    }

    writeln!(out)?;
    writeln!(out, "## Subdomains")?;
    writeln!(out)?;
    if result.subdomains().is_empty() {
        writeln!(out, "_No candidate subdomain resolves._")?;
    } else {
        writeln!(out, "| Subdomain | Addresses |")?;
        writeln!(out, "|---|---|")?;
        for (name, addresses) in result.subdomains() {
            writeln!(out, "| {} | {} |", cell(name), addresses.join(", "))?;
        }
    }

    writeln!(out)?;
    writeln!(out, "## Query statistics")?;
    writeln!(out)?;
    writeln!(out, "| Outcome | Count |")?;
    writeln!(out, "|---|---|")?;
    writeln!(out, "| answered | {} |", stats.answered)?;
    for (kind, count) in &stats.failures {
        writeln!(out, "| {kind} | {count} |")?;
    }

    Ok(out)
}
