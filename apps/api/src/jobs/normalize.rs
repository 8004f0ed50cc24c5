//! Reshapes a raw SerpApi payload into the fixed `Job` list returned by the proxy.

use tracing::{info, warn};

use crate::jobs::models::{Job, SerpApiJob, SerpApiResponse};

/// Maximum number of postings handed back to the client.
pub const MAX_JOBS: usize = 5;

/// Normalizes a provider payload.
///
/// A provider-reported `error` or an empty result set is not a failure: both
/// yield an empty list. Otherwise the first `MAX_JOBS` results are mapped in
/// provider order.
pub fn normalize_results(response: SerpApiResponse, query: &str) -> Vec<Job> {
    if let Some(error) = response.error.as_deref().filter(|e| !e.is_empty()) {
        warn!("SerpApi returned an error: {error}");
        return Vec::new();
    }

    let results = response.jobs_results.unwrap_or_default();
    if results.is_empty() {
        info!("No job results found from SerpApi for query: {query}");
        return Vec::new();
    }

    let jobs: Vec<Job> = results.into_iter().take(MAX_JOBS).map(to_job).collect();
    info!("Successfully transformed {} jobs.", jobs.len());
    jobs
}

fn to_job(job: SerpApiJob) -> Job {
    let link = resolve_link(&job);
    Job {
        title: job.title.unwrap_or_default(),
        company_name: job.company_name.unwrap_or_default(),
        location: job.location.unwrap_or_default(),
        link,
    }
}

/// apply_link → first related link → share_link. Empty strings are skipped.
fn resolve_link(job: &SerpApiJob) -> String {
    let related = job
        .related_links
        .as_ref()
        .and_then(|links| links.first())
        .and_then(|l| l.link.as_deref());

    [job.apply_link.as_deref(), related, job.share_link.as_deref()]
        .into_iter()
        .flatten()
        .find(|link| !link.is_empty())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::models::RelatedLink;

    fn posting(n: usize) -> SerpApiJob {
        SerpApiJob {
            title: Some(format!("Job {n}")),
            company_name: Some(format!("Company {n}")),
            location: Some("Bengaluru, Karnataka".to_string()),
            apply_link: Some(format!("https://apply.example/{n}")),
            related_links: None,
            share_link: None,
        }
    }

    fn response_with(count: usize) -> SerpApiResponse {
        SerpApiResponse {
            error: None,
            jobs_results: Some((0..count).map(posting).collect()),
        }
    }

    #[test]
    fn test_caps_at_five_and_preserves_order() {
        let jobs = normalize_results(response_with(7), "q");
        assert_eq!(jobs.len(), MAX_JOBS);
        let titles: Vec<&str> = jobs.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["Job 0", "Job 1", "Job 2", "Job 3", "Job 4"]);
    }

    #[test]
    fn test_fewer_than_five_returns_all() {
        for n in 1..=MAX_JOBS {
            assert_eq!(normalize_results(response_with(n), "q").len(), n);
        }
    }

    #[test]
    fn test_all_fields_populated() {
        let jobs = normalize_results(response_with(2), "q");
        for job in jobs {
            assert!(!job.title.is_empty());
            assert!(!job.company_name.is_empty());
            assert!(!job.location.is_empty());
            assert!(!job.link.is_empty());
        }
    }

    #[test]
    fn test_empty_results_yield_empty_list() {
        assert!(normalize_results(response_with(0), "q").is_empty());
    }

    #[test]
    fn test_missing_results_yield_empty_list() {
        assert!(normalize_results(SerpApiResponse::default(), "q").is_empty());
    }

    #[test]
    fn test_provider_error_yields_empty_list() {
        let mut response = response_with(3);
        response.error = Some("Google hasn't returned any results for this query.".to_string());
        assert!(normalize_results(response, "q").is_empty());
    }

    #[test]
    fn test_link_prefers_apply_link() {
        let mut job = posting(1);
        job.related_links = Some(vec![RelatedLink {
            link: Some("https://related.example".to_string()),
        }]);
        job.share_link = Some("https://share.example".to_string());
        assert_eq!(resolve_link(&job), "https://apply.example/1");
    }

    #[test]
    fn test_link_falls_back_to_first_related_link() {
        let mut job = posting(1);
        job.apply_link = None;
        job.related_links = Some(vec![
            RelatedLink {
                link: Some("https://related.example/first".to_string()),
            },
            RelatedLink {
                link: Some("https://related.example/second".to_string()),
            },
        ]);
        job.share_link = Some("https://share.example".to_string());
        assert_eq!(resolve_link(&job), "https://related.example/first");
    }

    #[test]
    fn test_link_falls_back_to_share_link() {
        let mut job = posting(1);
        job.apply_link = Some(String::new());
        job.related_links = Some(vec![]);
        job.share_link = Some("https://share.example".to_string());
        assert_eq!(resolve_link(&job), "https://share.example");
    }

    #[test]
    fn test_link_empty_when_no_candidates() {
        let mut job = posting(1);
        job.apply_link = None;
        assert_eq!(resolve_link(&job), "");
    }
}
