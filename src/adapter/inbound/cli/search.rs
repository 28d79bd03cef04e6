//! Handler for the `search` command.

use std::path::Path;

use serde::Serialize;
use serde_json::json;
use tabled::Tabled;

use crate::adapter::inbound::cli::command::SearchArgs;
use crate::adapter::inbound::cli::{logging, operator, output};
use crate::error::Result;
use crate::port::inbound::operator::lookup::{BranchState, BranchStatus, Candidate, SearchReport};

#[derive(Tabled, Serialize)]
struct CandidateRow {
    #[tabled(rename = "ISBN")]
    isbn: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Authors")]
    authors: String,
}

#[derive(Tabled, Serialize)]
struct BranchRow {
    #[tabled(rename = "Branch")]
    branch: String,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "State")]
    state: String,
}

/// Search by title or ISBN-13 and show where the book can be borrowed.
///
/// A single hit (or an ISBN query) is checked at every branch; several hits
/// are listed so the user can repeat the search with an ISBN.
pub async fn execute(config_path: &Path, args: &SearchArgs) -> Result<()> {
    let config_toml = operator::read_config_toml(config_path)?;
    logging::init_command(&config_toml)?;
    let query = args.query.trim();
    let report = operator::operator().search(&config_toml, query).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "search",
            "query": query,
            "report": report,
        }));
        return Ok(());
    }

    match report {
        SearchReport::NoResults => output::warning(&format!("no results for '{query}'")),
        SearchReport::Candidates { candidates } => print_candidates(query, &candidates),
        SearchReport::Branches {
            isbn,
            title,
            branches,
        } => print_branches(&isbn, title.as_deref(), &branches),
    }
    Ok(())
}

fn print_candidates(query: &str, candidates: &[Candidate]) {
    output::section(&format!("{} candidates for '{query}'", candidates.len()));
    let rows: Vec<CandidateRow> = candidates
        .iter()
        .map(|candidate| CandidateRow {
            isbn: candidate.isbn.clone(),
            title: candidate.title.clone(),
            authors: candidate.authors.clone(),
        })
        .collect();
    output::table(&rows);
    output::hint("search again with an ISBN to see branch availability");
}

fn print_branches(isbn: &str, title: Option<&str>, branches: &[BranchStatus]) {
    let heading = title.map_or_else(|| isbn.to_string(), |title| format!("{title} ({isbn})"));
    output::section(&heading);

    let rows: Vec<BranchRow> = branches
        .iter()
        .map(|status| BranchRow {
            branch: status.name.clone(),
            code: status.code.clone(),
            state: describe(&status.state),
        })
        .collect();
    output::table(&rows);

    let available = branches.iter().filter(|b| b.state.is_available()).count();
    if available == 0 {
        output::warning("not available at any branch right now");
    } else {
        output::success(&format!("available at {available} branch(es)"));
    }
}

fn describe(state: &BranchState) -> String {
    match state {
        BranchState::Available => "✅ available".to_string(),
        BranchState::OnLoan => "❌ on loan".to_string(),
        BranchState::NotHeld => "📭 not held".to_string(),
        BranchState::Unknown(reason) => format!("❓ unknown ({reason})"),
    }
}
