//! Query runner: one search request from query text to pushed results

use crate::department::Department;
use crate::describe;
use crate::reply::{CategorisedResult, Category, CategoryRenderer, SearchReply};
use crate::templates;
use chrono::{NaiveDate, Utc};
use gitscope_api::{CancelHandle, Client, ClientError};
use gitscope_core::{Config, GitscopeError, Result, SearchCache};

pub const EMPTY_CATEGORY_ID: &str = "empty";
pub const EMPTY_CATEGORY_TITLE: &str = "Nothing found";
pub const EMPTY_RESULT_URI: &str = "-1";
pub const EMPTY_RESULT_TITLE: &str = "Nothing here";
pub const EMPTY_RESULT_SUMMARY: &str =
    "I couldn't find any result. Please, check your connectivity and try again.";
pub const EMPTY_RESULT_DESCRIPTION: &str = "No results found";

/// What the host asked for
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub department: Department,
    /// `owner/name` scope for code searches
    pub repo: Option<String>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, department: Department) -> Self {
        Self {
            query: query.into(),
            department,
            repo: None,
        }
    }

    pub fn with_repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = Some(repo.into());
        self
    }
}

/// One running search
///
/// Owns its client, so [`SearchQuery::cancelled`] only affects this query.
pub struct SearchQuery {
    request: SearchRequest,
    config: Config,
    cache: SearchCache,
    client: Client,
    today: NaiveDate,
}

impl SearchQuery {
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built
    pub fn new(request: SearchRequest, config: &Config, cache: SearchCache) -> Result<Self> {
        let client = Client::new(config.api.clone())?;
        Ok(Self {
            request,
            config: config.clone(),
            cache,
            client,
            today: Utc::now().date_naive(),
        })
    }

    /// Fixes the date used for "days ago" text
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn request(&self) -> &SearchRequest {
        &self.request
    }

    pub fn cache(&self) -> &SearchCache {
        &self.cache
    }

    pub fn into_cache(self) -> SearchCache {
        self.cache
    }

    /// Cancels the pending request, if any
    pub fn cancelled(&self) {
        log::debug!("Query '{}' cancelled", self.request.query);
        self.client.cancel();
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.client.cancel_handle()
    }

    /// Trimmed query text, or the configured default when blank
    pub fn effective_query(&self) -> String {
        let trimmed = self.request.query.trim();
        if trimmed.is_empty() {
            self.config.search.default_query.clone()
        } else {
            trimmed.to_string()
        }
    }

    /// Runs the search and pushes results into `reply`
    ///
    /// # Errors
    ///
    /// Returns error if the search request fails. The message has already
    /// been reported through [`SearchReply::error`].
    pub fn run(&mut self, reply: &mut dyn SearchReply) -> Result<()> {
        let query = self.effective_query();
        log::info!(
            "Searching {} for '{}'",
            self.request.department.label(),
            query
        );

        let outcome = match self.request.department {
            Department::Repositories => self.run_repositories(&query, reply),
            Department::Users => self.run_users(&query, reply),
            Department::Code => self.run_code(&query, reply),
        };

        outcome.map_err(|e| {
            log::error!("Search for '{}' failed: {}", query, e);
            reply.error(&e.to_string());
            GitscopeError::from(e)
        })
    }

    fn run_repositories(
        &mut self,
        query: &str,
        reply: &mut dyn SearchReply,
    ) -> std::result::Result<(), ClientError> {
        let q = match self.config.settings.in_qualifier() {
            Some(qualifier) => format!("{query} {qualifier}"),
            None => query.to_string(),
        };
        let res = self.client.repositories(&q)?;
        if self.client.is_cancelled() {
            return Ok(());
        }
        if res.total_count == 0 {
            push_empty(reply);
            return Ok(());
        }

        let category = reply.register_category(
            Department::Repositories.id(),
            Department::Repositories.label(),
            "",
            CategoryRenderer::builtin(templates::REPOSITORY_TEMPLATE),
        );
        for repo in &res.repositories {
            let mut result = CategorisedResult::new(&category);
            result.set_uri(&repo.html_url);
            result.set_title(&repo.full_name);
            result.set_art(&repo.owner.avatar_url);
            result.set_attr(
                "description",
                describe::repository_description(repo, self.today),
            );
            result.set_attr("developer_uri", repo.owner.url.as_str());
            result.set_attr("new_issue_uri", issues_uri(&repo.html_url));
            if !reply.push(result) {
                return Ok(());
            }
        }

        let first = res.repositories.first().map(|r| r.full_name.as_str());
        self.cache.remember(query, first.filter(|name| !name.is_empty()));
        Ok(())
    }

    fn run_users(
        &mut self,
        query: &str,
        reply: &mut dyn SearchReply,
    ) -> std::result::Result<(), ClientError> {
        let res = self.client.users(query)?;
        if self.client.is_cancelled() {
            return Ok(());
        }
        if res.total_count == 0 {
            push_empty(reply);
            return Ok(());
        }

        let category = reply.register_category(
            Department::Users.id(),
            Department::Users.label(),
            "",
            CategoryRenderer::builtin(templates::USER_TEMPLATE),
        );
        for user in &res.users {
            let mut result = CategorisedResult::new(&category);
            result.set_uri(&user.html_url);
            result.set_title(user.display_name());
            result.set_art(&user.avatar_url);
            result.set_attr("description", describe::user_description(user));
            result.set_attr("developer_uri", user.html_url.as_str());
            if !reply.push(result) {
                return Ok(());
            }
        }

        self.cache.remember(query, None);
        Ok(())
    }

    fn run_code(
        &mut self,
        query: &str,
        reply: &mut dyn SearchReply,
    ) -> std::result::Result<(), ClientError> {
        let repo = self
            .request
            .repo
            .clone()
            .filter(|r| !r.trim().is_empty())
            .or_else(|| self.cache.repo.clone());
        if repo.is_none() {
            log::warn!("Code search without a repository scope");
        }

        let res = self.client.code(query, repo.as_deref())?;
        if self.client.is_cancelled() {
            return Ok(());
        }
        if res.total_count == 0 {
            push_empty(reply);
            return Ok(());
        }

        let category = reply.register_category(
            Department::Code.id(),
            Department::Code.label(),
            "",
            CategoryRenderer::builtin(templates::CODE_TEMPLATE),
        );
        for code in &res.codes {
            let mut result = CategorisedResult::new(&category);
            result.set_uri(&code.html_url);
            result.set_title(&code.path);
            result.set_art(&code.repository.owner.avatar_url);
            result.set_attr("description", describe::code_description(code));
            result.set_attr("developer_uri", code.repository.owner.url.as_str());
            result.set_attr("new_issue_uri", issues_uri(&code.repository.html_url));
            if !reply.push(result) {
                return Ok(());
            }
        }

        self.cache.remember(query, repo.as_deref());
        Ok(())
    }
}

/// `<html_url>/issues/new`, or empty when the repository has no URL
fn issues_uri(html_url: &str) -> String {
    if html_url.is_empty() {
        String::new()
    } else {
        format!("{}/issues/new", html_url.trim_end_matches('/'))
    }
}

fn push_empty(reply: &mut dyn SearchReply) {
    let category = reply.register_category(
        EMPTY_CATEGORY_ID,
        EMPTY_CATEGORY_TITLE,
        "",
        CategoryRenderer::builtin(templates::EMPTY_TEMPLATE),
    );
    let mut result = CategorisedResult::new(&category);
    result.set_uri(EMPTY_RESULT_URI);
    result.set_title(EMPTY_RESULT_TITLE);
    result.set_attr("summary", EMPTY_RESULT_SUMMARY);
    result.set_attr("description", EMPTY_RESULT_DESCRIPTION);
    reply.push(result);
}
