//! Query policy configuration
//!
//! Behaviour that differs between deployments of the browser is selected
//! here at construction time instead of being hard-coded in the controller.

use serde::{Deserialize, Serialize};

/// What a blank (after trimming) search term means
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptySearchPolicy {
    /// Blank term is a local idle state; nothing is sent to the catalog
    #[default]
    TreatAsNoQuery,
    /// Blank term searches by the type keyword ("all", "movie", "series")
    FallbackToTypeKeyword,
}

/// Controller policy knobs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryPolicy {
    /// Handling of blank search terms
    pub empty_search: EmptySearchPolicy,
    /// Whether selecting a type filter jumps back to page 1
    pub reset_page_on_filter_change: bool,
    /// Whether `start()` evaluates the initial input immediately
    pub eager_initial_fetch: bool,
}

impl Default for QueryPolicy {
    fn default() -> Self {
        Self {
            empty_search: EmptySearchPolicy::TreatAsNoQuery,
            reset_page_on_filter_change: true,
            eager_initial_fetch: false,
        }
    }
}

impl QueryPolicy {
    /// Policy reproducing a browser that lists "all" titles on launch.
    pub fn browse_on_launch() -> Self {
        Self {
            empty_search: EmptySearchPolicy::FallbackToTypeKeyword,
            reset_page_on_filter_change: true,
            eager_initial_fetch: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_policy_default() {
        let policy = QueryPolicy::default();
        assert_eq!(policy.empty_search, EmptySearchPolicy::TreatAsNoQuery);
        assert!(policy.reset_page_on_filter_change);
        assert!(!policy.eager_initial_fetch);
    }

    #[test]
    fn test_query_policy_partial_deserialize() {
        let policy: QueryPolicy =
            serde_json::from_str(r#"{ "empty_search": "fallback_to_type_keyword" }"#).unwrap();
        assert_eq!(policy.empty_search, EmptySearchPolicy::FallbackToTypeKeyword);
        assert!(policy.reset_page_on_filter_change);
        assert!(!policy.eager_initial_fetch);
    }

    #[test]
    fn test_browse_on_launch() {
        let policy = QueryPolicy::browse_on_launch();
        assert!(policy.eager_initial_fetch);
        assert_eq!(policy.empty_search, EmptySearchPolicy::FallbackToTypeKeyword);
    }
}
