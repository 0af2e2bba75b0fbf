//! Page policy for list and scan calls.

/// Whether list/scan calls stop after the first page or follow continuation
/// tokens until the service reports no more results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PagePolicy {
    /// Retrieve a single page. A warning is logged when more pages exist.
    #[default]
    FirstPage,
    /// Follow continuation tokens until exhausted.
    AllPages,
}

impl PagePolicy {
    /// Builds the policy from the `--all-pages` flag.
    pub fn from_all_pages(all_pages: bool) -> Self {
        if all_pages {
            Self::AllPages
        } else {
            Self::FirstPage
        }
    }

    /// Returns true when another request should be issued for `next_token`.
    pub fn should_continue<T>(self, next_token: Option<&T>) -> bool {
        matches!(self, Self::AllPages) && next_token.is_some()
    }

    /// Returns true when results were cut short by this policy.
    pub fn truncated<T>(self, next_token: Option<&T>) -> bool {
        matches!(self, Self::FirstPage) && next_token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_page() {
        assert_eq!(PagePolicy::default(), PagePolicy::FirstPage);
    }

    #[test]
    fn test_from_all_pages() {
        assert_eq!(PagePolicy::from_all_pages(true), PagePolicy::AllPages);
        assert_eq!(PagePolicy::from_all_pages(false), PagePolicy::FirstPage);
    }

    #[test]
    fn test_first_page_never_continues() {
        let token = "next".to_string();
        assert!(!PagePolicy::FirstPage.should_continue(Some(&token)));
        assert!(PagePolicy::FirstPage.truncated(Some(&token)));
        assert!(!PagePolicy::FirstPage.truncated::<String>(None));
    }

    #[test]
    fn test_all_pages_continues_until_token_runs_out() {
        let token = "next".to_string();
        assert!(PagePolicy::AllPages.should_continue(Some(&token)));
        assert!(!PagePolicy::AllPages.should_continue::<String>(None));
        assert!(!PagePolicy::AllPages.truncated(Some(&token)));
    }
}
