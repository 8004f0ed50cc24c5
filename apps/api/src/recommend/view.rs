//! What the recommendations panel shows for a given status and job list.

use crate::jobs::models::Job;
use crate::recommend::controller::Status;

pub const HEADING: &str = "Real Job Postings For You";
pub const SEARCHING_MESSAGE: &str = "Searching for real job postings...";
pub const NOT_FOUND_MESSAGE: &str = "Could not find relevant job postings at this time.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendationView {
    Searching,
    Listings(Vec<Job>),
    NotFound,
}

/// Pure mapping from controller state to view. Errors look the same as an empty result.
pub fn render(status: Status, jobs: &[Job]) -> RecommendationView {
    match status {
        Status::Loading => RecommendationView::Searching,
        Status::Idle if !jobs.is_empty() => RecommendationView::Listings(jobs.to_vec()),
        Status::Idle | Status::Error => RecommendationView::NotFound,
    }
}

impl RecommendationView {
    /// HTML fragment for the panel. All job text is escaped.
    pub fn to_html(&self) -> String {
        let mut html = format!("<section class=\"job-recommendations\"><h3>{HEADING}</h3>");

        match self {
            RecommendationView::Searching => {
                html.push_str(&format!("<p>{SEARCHING_MESSAGE}</p>"));
            }
            RecommendationView::NotFound => {
                html.push_str(&format!("<p>{NOT_FOUND_MESSAGE}</p>"));
            }
            RecommendationView::Listings(jobs) => {
                html.push_str("<div class=\"job-list\">");
                for job in jobs {
                    html.push_str(&format!(
                        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">\
                         <h4>{}</h4><p>{}</p><p>{}</p></a>",
                        escape_html(&job.link),
                        escape_html(&job.title),
                        escape_html(&job.company_name),
                        escape_html(&job.location),
                    ));
                }
                html.push_str("</div>");
            }
        }

        html.push_str("</section>");
        html
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str) -> Job {
        Job {
            title: title.to_string(),
            company_name: "Initech".to_string(),
            location: "Chennai, Tamil Nadu".to_string(),
            link: "https://apply.example/1?a=1&b=2".to_string(),
        }
    }

    #[test]
    fn test_loading_shows_searching_regardless_of_jobs() {
        assert_eq!(render(Status::Loading, &[]), RecommendationView::Searching);
        assert_eq!(render(Status::Loading, &[job("x")]), RecommendationView::Searching);
    }

    #[test]
    fn test_idle_with_jobs_lists_them() {
        let jobs = vec![job("a"), job("b")];
        assert_eq!(render(Status::Idle, &jobs), RecommendationView::Listings(jobs));
    }

    #[test]
    fn test_idle_empty_and_error_show_not_found() {
        assert_eq!(render(Status::Idle, &[]), RecommendationView::NotFound);
        assert_eq!(render(Status::Error, &[]), RecommendationView::NotFound);
        assert_eq!(render(Status::Error, &[job("stale")]), RecommendationView::NotFound);
    }

    #[test]
    fn test_html_escapes_job_text() {
        let html = RecommendationView::Listings(vec![job("<script>alert(1)</script>")]).to_html();
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("href=\"https://apply.example/1?a=1&amp;b=2\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_html_messages() {
        assert!(RecommendationView::Searching.to_html().contains(SEARCHING_MESSAGE));
        assert!(RecommendationView::NotFound.to_html().contains(NOT_FOUND_MESSAGE));
        assert!(RecommendationView::NotFound.to_html().contains(HEADING));
    }
}
