use anyhow::Result;
use colored::Colorize;
use herald_core::{
    Duplicate, ObservedRecipient, RecipientDetails, RecipientDiff, RecipientReference,
};
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::cli::OutputFormat;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Status lines go to stderr so they never mix with JSON output.
pub fn print_note(msg: &str) {
    eprintln!("{} {}", "•".cyan(), msg);
}

pub fn print_references(references: &[RecipientReference], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(references),
        OutputFormat::Table => {
            if references.is_empty() {
                println!("No recipients.");
                return Ok(());
            }
            let mut builder = Builder::default();
            builder.push_record(["#", "Mode", "ID", "Type", "Target", "Details"]);
            for (i, reference) in references.iter().enumerate() {
                let locator = reference.locator();
                builder.push_record([
                    i.to_string(),
                    reference.mode().to_string(),
                    reference.id().unwrap_or("-").to_string(),
                    locator.map_or_else(|| "-".to_string(), |l| l.kind.to_string()),
                    locator.map_or_else(|| "-".to_string(), |l| l.target.clone()),
                    format_details(reference.details.as_ref()),
                ]);
            }
            let table = builder.build().with(Style::rounded()).to_string();
            println!("{table}");
            Ok(())
        }
    }
}

pub fn print_observed(recipients: &[ObservedRecipient], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(recipients),
        OutputFormat::Table => {
            if recipients.is_empty() {
                println!("No recipients found.");
                return Ok(());
            }
            let mut builder = Builder::default();
            builder.push_record(["ID", "Type", "Target", "Details"]);
            for recipient in recipients {
                builder.push_record([
                    recipient.id.clone(),
                    recipient.kind.to_string(),
                    recipient.target.clone(),
                    format_details(recipient.details.as_ref()),
                ]);
            }
            let table = builder.build().with(Style::rounded()).to_string();
            println!("{table}");
            println!("Total: {}", recipients.len());
            Ok(())
        }
    }
}

pub fn print_duplicates(
    duplicates: &[Duplicate],
    desired: &[RecipientReference],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(duplicates),
        OutputFormat::Table => {
            let mut builder = Builder::default();
            builder.push_record(["Kept", "Shadowed", "Shared key"]);
            for duplicate in duplicates {
                builder.push_record([
                    format!("#{} {}", duplicate.first, desired[duplicate.first]),
                    format!("#{} {}", duplicate.shadowed, desired[duplicate.shadowed]),
                    duplicate.key.to_string(),
                ]);
            }
            let table = builder.build().with(Style::rounded()).to_string();
            println!("{table}");
            Ok(())
        }
    }
}

pub fn print_diff(diff: &RecipientDiff) {
    if !diff.has_changes() {
        print_note("No recipient drift.");
        return;
    }
    for reference in &diff.added {
        eprintln!("  {} {}", "+".green(), reference);
    }
    for reference in &diff.removed {
        eprintln!("  {} {}", "-".red(), reference);
    }
}

fn format_details(details: Option<&RecipientDetails>) -> String {
    details
        .and_then(|d| serde_json::to_string(d).ok())
        .unwrap_or_else(|| "-".to_string())
}
