use crate::api::ChatApi;
use crate::document::{Document, ids};
use crate::models::SearchResponse;
use tracing::{debug, error};

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a username.";
pub const SEARCH_ERROR_MESSAGE: &str = "Error searching for user.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    EmptyQuery,
    Found { full_name: String },
    NotFound { message: String },
    Failed,
}

impl SearchOutcome {
    /// A response missing the field its branch needs is treated as a failure.
    pub fn from_response(response: SearchResponse) -> Self {
        match response {
            SearchResponse {
                success: true,
                user: Some(user),
                ..
            } => Self::Found {
                full_name: user.full_name,
            },
            SearchResponse {
                success: false,
                message: Some(message),
                ..
            } => Self::NotFound { message },
            _ => Self::Failed,
        }
    }

    /// The backend could not be reached or gave an unusable answer.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed)
    }

    pub fn markup(&self) -> String {
        match self {
            Self::EmptyQuery => paragraph(EMPTY_QUERY_MESSAGE),
            Self::Found { full_name } => paragraph(&format!("User found: {}", escape_html(full_name))),
            Self::NotFound { message } => paragraph(&escape_html(message)),
            Self::Failed => paragraph(SEARCH_ERROR_MESSAGE),
        }
    }
}

fn paragraph(inner: &str) -> String {
    format!("<p>{inner}</p>")
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Reads `searchInput`, queries the backend and writes the result into
/// `searchResults`. Returns `None` when either element is missing.
pub async fn search_user<D: Document + ?Sized>(api: &ChatApi, document: &mut D) -> Option<SearchOutcome> {
    if !document.has_element(ids::SEARCH_RESULTS) {
        debug!("search results container not present");
        return None;
    }
    let Some(raw) = document.value(ids::SEARCH_INPUT) else {
        debug!("search input not present");
        return None;
    };

    let query = raw.trim();
    let outcome = if query.is_empty() {
        SearchOutcome::EmptyQuery
    } else {
        match api.search_user(query).await {
            Ok(response) => SearchOutcome::from_response(response),
            Err(err) => {
                error!("user search failed: {err}");
                SearchOutcome::Failed
            }
        }
    };

    document.set_inner_html(ids::SEARCH_RESULTS, &outcome.markup());
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SearchUser;

    #[test]
    fn found_user_markup() {
        let outcome = SearchOutcome::from_response(SearchResponse {
            success: true,
            user: Some(SearchUser {
                full_name: "Ada Lovelace".to_string(),
            }),
            message: None,
        });
        assert_eq!(outcome.markup(), "<p>User found: Ada Lovelace</p>");
    }

    #[test]
    fn server_message_is_wrapped_verbatim() {
        let outcome = SearchOutcome::from_response(SearchResponse {
            success: false,
            user: None,
            message: Some("no such user".to_string()),
        });
        assert_eq!(outcome.markup(), "<p>no such user</p>");
    }

    #[test]
    fn incomplete_responses_fall_back_to_error() {
        let no_user = SearchResponse {
            success: true,
            user: None,
            message: None,
        };
        let no_message = SearchResponse {
            success: false,
            user: None,
            message: None,
        };
        assert_eq!(SearchOutcome::from_response(no_user), SearchOutcome::Failed);
        assert_eq!(SearchOutcome::from_response(no_message).markup(), "<p>Error searching for user.</p>");
    }

    #[test]
    fn server_text_is_escaped() {
        let outcome = SearchOutcome::NotFound {
            message: "<script>alert('x')</script>".to_string(),
        };
        assert_eq!(
            outcome.markup(),
            "<p>&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;</p>"
        );
    }

    #[test]
    fn only_failed_searches_count_as_failures() {
        assert!(SearchOutcome::Failed.is_failure());
        assert!(!SearchOutcome::EmptyQuery.is_failure());
        assert!(
            !SearchOutcome::NotFound {
                message: "no such user".to_string()
            }
            .is_failure()
        );
    }

    #[test]
    fn empty_query_prompt() {
        assert_eq!(SearchOutcome::EmptyQuery.markup(), "<p>Please enter a username.</p>");
    }
}
