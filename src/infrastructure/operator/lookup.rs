//! Lookup operator implementation.

use async_trait::async_trait;

use crate::application::{BranchAvailability, ItemState};
use crate::domain::CatalogId;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::catalog;
use crate::port::inbound::operator::lookup::{
    BranchState, BranchStatus, Candidate, LookupOperator, SearchReport,
};

use super::entry::Operator;

#[async_trait]
impl LookupOperator for Operator {
    async fn search(&self, config_toml: &str, query: &str) -> Result<SearchReport> {
        let config = Config::parse_toml(config_toml)?;
        let lookup = catalog::build_lookup_service(&config)?;
        let query = query.trim();

        if let Some(id) = CatalogId::parse_isbn13(query) {
            let branches = lookup.check_everywhere(&id).await;
            return Ok(branches_report(&id, None, &branches));
        }

        let hits = lookup.search(query, config.telegram.search_limit).await?;
        match hits.as_slice() {
            [] => Ok(SearchReport::NoResults),
            [only] => {
                let branches = lookup.check_everywhere(&only.id).await;
                Ok(branches_report(&only.id, Some(only.title.clone()), &branches))
            }
            many => Ok(SearchReport::Candidates {
                candidates: many
                    .iter()
                    .map(|hit| Candidate {
                        isbn: hit.id.to_string(),
                        title: hit.title.clone(),
                        authors: hit.authors.clone(),
                    })
                    .collect(),
            }),
        }
    }
}

fn branches_report(
    id: &CatalogId,
    title: Option<String>,
    results: &[BranchAvailability],
) -> SearchReport {
    SearchReport::Branches {
        isbn: id.to_string(),
        title,
        branches: results
            .iter()
            .map(|result| BranchStatus {
                name: result.branch.name.clone(),
                code: result.branch.code.to_string(),
                state: branch_state(result),
            })
            .collect(),
    }
}

fn branch_state(result: &BranchAvailability) -> BranchState {
    let state = match &result.result {
        Ok(availability) => ItemState::from(*availability),
        Err(e) => ItemState::Unknown(e.to_string()),
    };
    match state {
        ItemState::Available => BranchState::Available,
        ItemState::OnLoan => BranchState::OnLoan,
        ItemState::NotHeld => BranchState::NotHeld,
        ItemState::Unknown(reason) => BranchState::Unknown(reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Availability, Branch};
    use crate::error::QueryError;

    fn at_branch(result: std::result::Result<Availability, QueryError>) -> BranchAvailability {
        BranchAvailability {
            branch: Branch::new("141001", "Central Library"),
            result,
        }
    }

    #[test]
    fn branch_states_follow_availability() {
        assert_eq!(
            branch_state(&at_branch(Ok(Availability::new(true, true)))),
            BranchState::Available
        );
        assert_eq!(
            branch_state(&at_branch(Ok(Availability::new(true, false)))),
            BranchState::OnLoan
        );
        assert_eq!(
            branch_state(&at_branch(Ok(Availability::new(false, false)))),
            BranchState::NotHeld
        );
        assert_eq!(
            branch_state(&at_branch(Err(QueryError::Timeout))),
            BranchState::Unknown("catalog request timed out".into())
        );
    }
}
