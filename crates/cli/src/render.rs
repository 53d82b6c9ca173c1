use anyhow::Result;
use catalog::{CatalogItem, MediaKind, NOT_AVAILABLE};
use colored::Colorize;
use dispatcher::{Outcome, PipelineReport};
use pipeline::Recommendations;
use std::io::Write;

fn joined_or_na(values: &[String]) -> String {
    if values.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        values.join(", ")
    }
}

/// One numbered listing line for `item`
pub fn item_line(rank: usize, item: &CatalogItem) -> String {
    match item.kind {
        MediaKind::Book => format!(
            "{}. Title: {}, Authors: {}, Categories: {}, Published Date: {}",
            rank,
            item.title,
            joined_or_na(&item.authors),
            joined_or_na(&item.tags),
            item.display_release()
        ),
        MediaKind::Movie => format!(
            "{}. Title: {}, Genres: {}, Year: {}",
            rank,
            item.title,
            joined_or_na(&item.tags),
            item.display_release()
        ),
    }
}

fn not_found_message(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Book => "No books found with that query.",
        MediaKind::Movie => "No movies found with that name.",
    }
}

fn write_items<W: Write>(out: &mut W, items: &[CatalogItem]) -> Result<()> {
    for (i, item) in items.iter().enumerate() {
        writeln!(out, "{}", item_line(i + 1, item))?;
    }
    Ok(())
}

fn write_recommendations<W: Write>(
    out: &mut W,
    kind: MediaKind,
    recommendations: &Recommendations,
    explain: bool,
) -> Result<()> {
    writeln!(
        out,
        "{}",
        format!("Recommendations based on the first searched {}:", kind)
            .bold()
            .blue()
    )?;

    if recommendations.is_empty() {
        writeln!(out, "No recommendations found.")?;
        return Ok(());
    }

    if explain {
        if let Some(tier) = recommendations.tier {
            writeln!(out, "{}Matched on {} ({} tier)", "• ".cyan(), tier.describe(), tier)?;
        }
    }
    write_items(out, &recommendations.items)
}

/// Print one pipeline's searched items and recommendations
pub fn write_report<W: Write>(out: &mut W, report: &PipelineReport, explain: bool) -> Result<()> {
    match &report.outcome {
        Outcome::NoResults => {
            writeln!(out, "{}", not_found_message(report.kind).yellow())?;
        }
        Outcome::Ranked {
            searched,
            recommendations,
        } => {
            writeln!(
                out,
                "{}",
                format!("Searched {}:", report.kind.plural()).bold().blue()
            )?;
            write_items(out, searched)?;
            writeln!(out)?;
            write_recommendations(out, report.kind, recommendations, explain)?;
        }
    }
    writeln!(out)?;
    Ok(())
}
