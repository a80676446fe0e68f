use anyhow::Result;
use colored::Colorize;
use herald_client::{AlertKind, AlertRecipients, HeraldClient, refresh as refresh_alert};
use herald_core::{Matcher, Reconciler, RecipientReference, diff, sort_by_declaration};

use crate::cli::{OutputFormat, RefreshArgs};
use crate::files::{read_json_or_default, write_json};
use crate::output::{print_diff, print_observed, print_references, print_success};

pub async fn recipients(client: &HeraldClient, format: OutputFormat) -> Result<()> {
    let recipients = client.list_recipients().await?;
    print_observed(&recipients, format)
}

pub async fn refresh(
    client: &HeraldClient,
    args: &RefreshArgs,
    matcher: Matcher,
    format: OutputFormat,
) -> Result<()> {
    let kind = AlertKind::from(args.kind);
    let recorded: Vec<RecipientReference> = read_json_or_default(&args.state)?;
    let source = AlertRecipients::new(client, kind, &args.dataset, &args.id);

    let outcome = refresh_alert(&source, &recorded, &Reconciler::new(matcher)).await?;
    let refreshed = if args.declaration_order {
        sort_by_declaration(outcome.recipients, &recorded)
    } else {
        outcome.recipients
    };

    print_references(&refreshed, format)?;
    print_diff(&diff(&recorded, &refreshed));

    if args.write {
        write_json(&args.state, &refreshed)?;
        print_success(&format!(
            "Recorded {} recipients for {} {}",
            refreshed.len(),
            kind,
            args.id.cyan()
        ));
    }
    Ok(())
}
