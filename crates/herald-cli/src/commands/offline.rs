use anyhow::{Context, Result};
use herald_core::{
    Matcher, ObservedRecipient, Pairer, Reconciler, RecipientReference, find_duplicates,
    sort_by_declaration,
};

use crate::cli::{CheckArgs, OutputFormat, PairArgs, ReconcileArgs};
use crate::files::read_json;
use crate::output::{print_duplicates, print_note, print_references, print_success};

pub fn reconcile(args: &ReconcileArgs, matcher: Matcher, format: OutputFormat) -> Result<()> {
    let observed: Vec<ObservedRecipient> = read_json(&args.observed)?;
    let desired: Vec<RecipientReference> = read_json(&args.desired)?;

    // Shadowed entries are reported only; reconcile still resolves them first-match.
    let duplicates = find_duplicates(&desired);
    if !duplicates.is_empty() {
        print_note(&format!(
            "{} desired entries are shadowed; run `herald check` for details",
            duplicates.len()
        ));
    }

    let outcome = Reconciler::new(matcher).reconcile_detailed(&observed, &desired);
    let recipients = if args.declaration_order {
        sort_by_declaration(outcome.recipients, &desired)
    } else {
        outcome.recipients
    };

    print_references(&recipients, format)?;
    print_note(&format!(
        "{} preserved, {} materialized, {} dropped",
        outcome.preserved, outcome.materialized, outcome.dropped
    ));
    Ok(())
}

pub fn pair(args: &PairArgs, matcher: Matcher, format: OutputFormat) -> Result<()> {
    let submitted: Vec<RecipientReference> = read_json(&args.submitted)?;
    let observed: Vec<ObservedRecipient> = read_json(&args.observed)?;

    let paired = Pairer::new(matcher)
        .pair(&submitted, &observed)
        .context("Remote response does not match the submitted recipients")?;
    print_references(&paired, format)
}

pub fn check(args: &CheckArgs, format: OutputFormat) -> Result<()> {
    let desired: Vec<RecipientReference> = read_json(&args.desired)?;
    let duplicates = find_duplicates(&desired);
    if duplicates.is_empty() {
        print_success(&format!("{} recipients, no duplicates", desired.len()));
        return Ok(());
    }
    print_duplicates(&duplicates, &desired, format)?;
    anyhow::bail!(
        "{} recipient reference(s) are shadowed by an earlier entry",
        duplicates.len()
    )
}
