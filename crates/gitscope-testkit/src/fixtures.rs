//! JSON fixtures shaped like the search API's responses

use serde_json::{Value, json};

/// An owner object as embedded in repository items
pub fn owner_json(login: &str, id: u64) -> Value {
    json!({
        "login": login,
        "id": id,
        "avatar_url": format!("https://avatars.example.com/u/{id}"),
        "html_url": format!("https://github.com/{login}"),
        "type": "User",
    })
}

/// A repository item owned by `owner`
pub fn repository_json(owner: &str, name: &str) -> Value {
    json!({
        "id": 1296269,
        "name": name,
        "full_name": format!("{owner}/{name}"),
        "owner": owner_json(owner, 583231),
        "private": false,
        "fork": false,
        "html_url": format!("https://github.com/{owner}/{name}"),
        "description": format!("The {name} project"),
        "language": "Rust",
        "forks_count": 9,
        "stargazers_count": 80,
        "watchers_count": 80,
        "open_issues_count": 3,
        "created_at": "2011-01-26T19:01:12Z",
        "pushed_at": "2011-01-26T19:06:43Z",
        "score": 1.0,
    })
}

/// A user item as returned by user search
pub fn user_json(login: &str, id: u64) -> Value {
    json!({
        "login": login,
        "id": id,
        "avatar_url": format!("https://avatars.example.com/u/{id}"),
        "html_url": format!("https://github.com/{login}"),
        "followers_url": format!("https://api.github.com/users/{login}/followers"),
        "following_url": format!("https://api.github.com/users/{login}/following{{/other_user}}"),
        "gists_url": format!("https://api.github.com/users/{login}/gists{{/gist_id}}"),
        "starred_url": format!("https://api.github.com/users/{login}/starred{{/owner}}{{/repo}}"),
        "organizations_url": format!("https://api.github.com/users/{login}/orgs"),
        "repos_url": format!("https://api.github.com/users/{login}/repos"),
        "type": "User",
        "score": 1.0,
    })
}

/// A code match inside `owner/repo`
pub fn code_json(path: &str, owner: &str, repo: &str) -> Value {
    let name = path.rsplit('/').next().unwrap_or(path);
    json!({
        "name": name,
        "path": path,
        "sha": "d7212f9dee2dcc18f084d7df8f417b80846ded5a",
        "html_url": format!("https://github.com/{owner}/{repo}/blob/main/{path}"),
        "repository": repository_json(owner, repo),
        "score": 1.0,
    })
}

/// A search envelope around `items`, with `total_count` set to the item count
pub fn search_body(items: Vec<Value>) -> String {
    json!({
        "total_count": items.len(),
        "incomplete_results": false,
        "items": items,
    })
    .to_string()
}

/// An envelope with no results
pub fn empty_search_body() -> String {
    search_body(Vec::new())
}
