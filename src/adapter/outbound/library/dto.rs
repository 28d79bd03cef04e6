//! Wire types for the Library Information Naru API.

use serde::Deserialize;

use crate::domain::Availability;
use crate::error::QueryError;
use crate::port::CatalogMatch;

/// `GET /srchBooks` response.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub response: SearchBody,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchBody {
    #[serde(default)]
    pub docs: Vec<DocWrapper>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DocWrapper {
    pub doc: BookDoc,
}

#[derive(Debug, Deserialize)]
pub struct BookDoc {
    #[serde(default)]
    pub bookname: String,
    #[serde(default)]
    pub authors: String,
    #[serde(default)]
    pub isbn13: String,
}

impl SearchResponse {
    /// Hits with a usable ISBN-13, in API order.
    pub fn into_matches(self) -> Result<Vec<CatalogMatch>, QueryError> {
        if let Some(error) = self.response.error {
            return Err(QueryError::UnexpectedResponse(error));
        }
        Ok(self
            .response
            .docs
            .into_iter()
            .filter(|wrapper| !wrapper.doc.isbn13.trim().is_empty())
            .map(|wrapper| {
                CatalogMatch::new(wrapper.doc.isbn13.trim(), wrapper.doc.bookname)
                    .with_authors(wrapper.doc.authors)
            })
            .collect())
    }
}

/// `GET /bookExist` response.
#[derive(Debug, Deserialize)]
pub struct ExistResponse {
    pub response: ExistBody,
}

#[derive(Debug, Deserialize)]
pub struct ExistBody {
    #[serde(default)]
    pub result: Option<ExistResult>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistResult {
    pub has_book: String,
    pub loan_available: String,
}

impl ExistResponse {
    pub fn into_availability(self) -> Result<Availability, QueryError> {
        if let Some(error) = self.response.error {
            return Err(QueryError::UnexpectedResponse(error));
        }
        let result = self
            .response
            .result
            .ok_or_else(|| QueryError::UnexpectedResponse("missing result".into()))?;
        Ok(Availability::new(
            parse_flag("hasBook", &result.has_book)?,
            parse_flag("loanAvailable", &result.loan_available)?,
        ))
    }
}

fn parse_flag(field: &str, value: &str) -> Result<bool, QueryError> {
    match value.trim() {
        "Y" | "y" => Ok(true),
        "N" | "n" => Ok(false),
        other => Err(QueryError::UnexpectedResponse(format!(
            "{field} = '{other}'"
        ))),
    }
}
