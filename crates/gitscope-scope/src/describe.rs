//! Human-readable descriptions for result cards

use chrono::{DateTime, NaiveDate};
use gitscope_api::{Code, Repository, User};

const DATE_FORMAT: &str = "%a %b %-d %Y";

/// Parses an ISO-8601 timestamp or date into a calendar date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    value
        .get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
}

/// Renders a timestamp as `Wed Jan 26 2011`, or `unknown`
pub fn format_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => date.format(DATE_FORMAT).to_string(),
        None => "unknown".to_string(),
    }
}

pub fn repository_description(repo: &Repository, today: NaiveDate) -> String {
    let mut text = String::new();
    if !repo.description.is_empty() {
        text.push_str(&repo.description);
        text.push_str("\n\n");
    }
    if !repo.language.is_empty() {
        text.push_str(&format!("Language: {}\n\n", repo.language));
    }
    text.push_str(&format!(
        "{} stargazers, {} watchers.\n\n",
        repo.stargazers_count, repo.watchers_count
    ));
    text.push_str(&format!("Created at {}\n", format_date(&repo.created_at)));
    match parse_date(&repo.pushed_at) {
        Some(pushed) => {
            let days = (today - pushed).num_days();
            text.push_str(&format!(
                "Last push {}, {} days ago.",
                pushed.format(DATE_FORMAT),
                days
            ));
        }
        None => text.push_str("Last push unknown."),
    }
    text.push_str(&format!("\n\nOpen issues: {}", repo.open_issues_count));
    text
}

pub fn user_description(user: &User) -> String {
    [
        user.company.as_str(),
        user.location.as_str(),
        user.bio.as_str(),
    ]
    .iter()
    .filter(|line| !line.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join("\n\n")
}

pub fn code_description(code: &Code) -> String {
    let mut text = format!("{}\n\nRepository: {}", code.path, code.repository.full_name);
    if !code.repository.language.is_empty() {
        text.push_str(&format!("\nLanguage: {}", code.repository.language));
    }
    text
}
