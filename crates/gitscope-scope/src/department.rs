use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Search kinds the host can switch between
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    #[default]
    Repositories,
    Users,
    Code,
}

impl Department {
    pub const ALL: [Department; 3] = [Department::Repositories, Department::Users, Department::Code];

    pub fn id(self) -> &'static str {
        match self {
            Department::Repositories => "repositories",
            Department::Users => "users",
            Department::Code => "code",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Department::Repositories => "Repositories",
            Department::Users => "Users",
            Department::Code => "Code",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "repositories" | "repos" | "repo" => Ok(Department::Repositories),
            "users" | "user" => Ok(Department::Users),
            "code" => Ok(Department::Code),
            other => Err(format!(
                "unknown department '{}' (expected repositories, users or code)",
                other
            )),
        }
    }
}
