//! URL admission policy
//!
//! Decides whether a candidate URL is eligible to ever be fetched. The check
//! is pure: no I/O, no side effects, deterministic for a given policy. The
//! frontier applies it both when links are discovered and again at dequeue.

use url::Url;

/// Keywords excluded by default; URLs containing any of them are skipped.
pub const DEFAULT_DENY_KEYWORDS: &[&str] = &["login", "userlogin"];

/// Admission policy for candidate URLs
///
/// Holds the configured keyword denylist. Checks take `&self` only, so a
/// policy can be shared across crawl workers if parallel fetching is ever
/// introduced.
#[derive(Debug, Clone)]
pub struct AdmissionPolicy {
    deny_keywords: Vec<String>,
}

impl AdmissionPolicy {
    /// Creates a policy with the given keyword denylist
    pub fn new(deny_keywords: Vec<String>) -> Self {
        Self { deny_keywords }
    }

    /// Returns whether a candidate URL may be fetched
    ///
    /// Rules, applied in order with the first failure deciding:
    ///
    /// 1. The candidate must parse as an absolute URL with an `http` or
    ///    `https` scheme. Malformed input is rejected, never an error.
    /// 2. The raw candidate string must not contain any denylist keyword.
    ///    Matching is case-sensitive substring search over the whole URL.
    pub fn is_admissible(&self, candidate: &str) -> bool {
        let parsed = match Url::parse(candidate) {
            Ok(url) => url,
            Err(_) => return false,
        };

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return false;
        }

        !self
            .deny_keywords
            .iter()
            .any(|keyword| candidate.contains(keyword.as_str()))
    }
}

impl Default for AdmissionPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_DENY_KEYWORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_url_admitted() {
        let policy = AdmissionPolicy::default();
        assert!(policy.is_admissible("https://x.com/page"));
        assert!(policy.is_admissible("http://x.com/page"));
    }

    #[test]
    fn test_malformed_url_rejected() {
        let policy = AdmissionPolicy::default();
        assert!(!policy.is_admissible("not a url"));
        assert!(!policy.is_admissible(""));
        assert!(!policy.is_admissible("/relative/path"));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let policy = AdmissionPolicy::default();
        assert!(!policy.is_admissible("ftp://x.com/file"));
        assert!(!policy.is_admissible("mailto:admin@x.com"));
        assert!(!policy.is_admissible("javascript:void(0)"));
    }

    #[test]
    fn test_deny_keyword_rejected() {
        let policy = AdmissionPolicy::default();
        assert!(!policy.is_admissible("https://x.com/userlogin/page"));
        assert!(!policy.is_admissible("https://x.com/login"));
    }

    #[test]
    fn test_keyword_matches_anywhere_in_url() {
        let policy = AdmissionPolicy::default();
        // Host, path, and query are all searched
        assert!(!policy.is_admissible("https://login.x.com/"));
        assert!(!policy.is_admissible("https://x.com/page?next=login"));
    }

    #[test]
    fn test_keyword_match_is_case_sensitive() {
        let policy = AdmissionPolicy::default();
        assert!(policy.is_admissible("https://x.com/LOGIN"));
    }

    #[test]
    fn test_custom_denylist() {
        let policy = AdmissionPolicy::new(vec!["signup".to_string()]);
        assert!(!policy.is_admissible("https://x.com/signup"));
        // Default keywords no longer apply
        assert!(policy.is_admissible("https://x.com/login"));
    }

    #[test]
    fn test_empty_denylist_admits_all_valid() {
        let policy = AdmissionPolicy::new(vec![]);
        assert!(policy.is_admissible("https://x.com/userlogin/page"));
    }

    #[test]
    fn test_deterministic() {
        let policy = AdmissionPolicy::default();
        let url = "https://x.com/page";
        assert_eq!(policy.is_admissible(url), policy.is_admissible(url));
    }
}
