//! Typed search results
//!
//! Each entity is built in one shot from one JSON object. Every field is
//! coerced through [`crate::lenient`], so absent or mistyped keys leave the
//! field at `""`, `0` or `false`.

use crate::lenient;
use serde::{Deserialize, Serialize};

/// The account (user or organization) holding a repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Owner {
    #[serde(deserialize_with = "lenient::string")]
    pub login: String,
    #[serde(deserialize_with = "lenient::uint")]
    pub id: u64,
    #[serde(deserialize_with = "lenient::string")]
    pub avatar_url: String,
    /// Profile page (`html_url` in the API)
    #[serde(rename = "html_url", deserialize_with = "lenient::string")]
    pub url: String,
}

/// A user search match
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "lenient::uint")]
    pub id: u64,
    #[serde(deserialize_with = "lenient::string")]
    pub login: String,
    #[serde(deserialize_with = "lenient::string")]
    pub avatar_url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub html_url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub followers_url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub following_url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub gists_url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub starred_url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub organizations_url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub repos_url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub company: String,
    #[serde(deserialize_with = "lenient::string")]
    pub blog: String,
    #[serde(deserialize_with = "lenient::string")]
    pub location: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::boolean")]
    pub hireable: bool,
    #[serde(deserialize_with = "lenient::string")]
    pub bio: String,
    #[serde(deserialize_with = "lenient::uint")]
    pub public_repos: u32,
    #[serde(deserialize_with = "lenient::uint")]
    pub public_gists: u32,
    #[serde(deserialize_with = "lenient::uint")]
    pub followers: u32,
    #[serde(deserialize_with = "lenient::uint")]
    pub following: u32,
}

impl User {
    /// Display name, falling back to the login
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.login
        } else {
            &self.name
        }
    }
}

/// A repository search match
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Repository {
    #[serde(deserialize_with = "lenient::object")]
    pub owner: Owner,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub full_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::boolean")]
    pub private: bool,
    #[serde(deserialize_with = "lenient::boolean")]
    pub fork: bool,
    #[serde(deserialize_with = "lenient::string")]
    pub html_url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub language: String,
    #[serde(deserialize_with = "lenient::uint")]
    pub forks_count: u32,
    #[serde(deserialize_with = "lenient::uint")]
    pub stargazers_count: u32,
    #[serde(deserialize_with = "lenient::uint")]
    pub watchers_count: u32,
    #[serde(deserialize_with = "lenient::uint")]
    pub open_issues_count: u32,
    /// ISO-8601, kept verbatim
    #[serde(deserialize_with = "lenient::string")]
    pub created_at: String,
    /// ISO-8601, kept verbatim
    #[serde(deserialize_with = "lenient::string")]
    pub pushed_at: String,
}

/// A code search match inside one repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Code {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub path: String,
    #[serde(deserialize_with = "lenient::string")]
    pub html_url: String,
    #[serde(deserialize_with = "lenient::object")]
    pub repository: Repository,
}

/// A user search result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRes {
    #[serde(deserialize_with = "lenient::uint")]
    pub total_count: u32,
    #[serde(rename = "items", deserialize_with = "lenient::items")]
    pub users: Vec<User>,
}

/// A repository search result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryRes {
    #[serde(deserialize_with = "lenient::uint")]
    pub total_count: u32,
    #[serde(rename = "items", deserialize_with = "lenient::items")]
    pub repositories: Vec<Repository>,
}

/// A code search result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeRes {
    #[serde(deserialize_with = "lenient::uint")]
    pub total_count: u32,
    #[serde(rename = "items", deserialize_with = "lenient::items")]
    pub codes: Vec<Code>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lenient::from_document;
    use serde_json::json;

    #[test]
    fn test_empty_envelope() {
        let res: RepositoryRes = from_document(&json!({"total_count": 0, "items": []}));
        assert_eq!(res.total_count, 0);
        assert!(res.repositories.is_empty());
    }

    #[test]
    fn test_user_missing_keys_default() {
        let res: UserRes = from_document(&json!({
            "total_count": 1,
            "items": [{"login": "octocat"}]
        }));
        let user = &res.users[0];
        assert_eq!(user.login, "octocat");
        assert_eq!(user.id, 0);
        assert_eq!(user.bio, "");
        assert!(!user.hireable);
        assert_eq!(user.followers, 0);
        assert_eq!(user.display_name(), "octocat");
    }

    #[test]
    fn test_user_full_profile() {
        let res: UserRes = from_document(&json!({
            "total_count": 1,
            "items": [{
                "id": 1,
                "login": "octocat",
                "name": "The Octocat",
                "company": "GitHub",
                "blog": "https://github.blog",
                "location": "San Francisco",
                "email": null,
                "hireable": true,
                "bio": "mascot",
                "public_repos": 8,
                "public_gists": 8,
                "followers": 3938,
                "following": 9
            }]
        }));
        let user = &res.users[0];
        assert_eq!(user.display_name(), "The Octocat");
        assert_eq!(user.email, "");
        assert!(user.hireable);
        assert_eq!(user.followers, 3938);
        assert_eq!(user.public_repos, 8);
    }

    #[test]
    fn test_repository_maps_owner_and_private_flag() {
        let res: RepositoryRes = from_document(&json!({
            "total_count": 1,
            "items": [{
                "name": "Hello-World",
                "full_name": "octocat/Hello-World",
                "private": true,
                "owner": {
                    "login": "octocat",
                    "id": 1,
                    "avatar_url": "https://avatars.example.com/u/1",
                    "html_url": "https://github.com/octocat"
                },
                "stargazers_count": 80,
                "description": null,
                "language": null
            }]
        }));
        let repo = &res.repositories[0];
        assert!(repo.private);
        assert!(!repo.fork);
        assert_eq!(repo.owner.login, "octocat");
        assert_eq!(repo.owner.url, "https://github.com/octocat");
        assert_eq!(repo.stargazers_count, 80);
        assert_eq!(repo.description, "");
        assert_eq!(repo.language, "");
    }

    #[test]
    fn test_code_maps_nested_repository_owner() {
        let res: CodeRes = from_document(&json!({
            "total_count": 1,
            "items": [{
                "name": "lib.rs",
                "path": "src/lib.rs",
                "html_url": "https://github.com/alice/widgets/blob/main/src/lib.rs",
                "repository": {
                    "full_name": "alice/widgets",
                    "owner": {"login": "alice", "id": 7}
                }
            }]
        }));
        let code = &res.codes[0];
        assert_eq!(code.path, "src/lib.rs");
        assert_eq!(code.repository.full_name, "alice/widgets");
        assert_eq!(code.repository.owner.login, "alice");
        assert_eq!(code.repository.owner.id, 7);
    }

    #[test]
    fn test_code_with_malformed_repository_defaults() {
        let res: CodeRes = from_document(&json!({
            "total_count": "1",
            "items": [{"name": "a.rs", "repository": "alice/widgets"}]
        }));
        assert_eq!(res.total_count, 1);
        assert_eq!(res.codes[0].name, "a.rs");
        assert_eq!(res.codes[0].repository, Repository::default());
    }
}
