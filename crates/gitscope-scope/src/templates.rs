//! Category renderer templates
//!
//! Each template is the JSON document the host uses to lay out a category.

/// Repository grid: medium cards with the owner's avatar as art
pub const REPOSITORY_TEMPLATE: &str = r#"{
    "schema-version": 1,
    "template": {
        "category-layout": "grid",
        "card-size": "medium",
        "overlay": true
    },
    "components": {
        "title": "title",
        "art": {
            "field": "art"
        },
        "overlay-color": "overlay"
    }
}"#;

/// User grid: small cards with avatars
pub const USER_TEMPLATE: &str = r#"{
    "schema-version": 1,
    "template": {
        "category-layout": "grid",
        "card-size": "small"
    },
    "components": {
        "title": "title",
        "art": {
            "field": "art",
            "aspect-ratio": 1.0
        }
    }
}"#;

/// Code matches: one row per file
pub const CODE_TEMPLATE: &str = r#"{
    "schema-version": 1,
    "template": {
        "category-layout": "vertical-journal",
        "card-layout": "horizontal",
        "card-size": "small"
    },
    "components": {
        "title": "title",
        "subtitle": "description",
        "mascot": "art"
    }
}"#;

/// Shown when a query returns nothing
pub const EMPTY_TEMPLATE: &str = r#"{
    "schema-version": 1,
    "template": {
        "category-layout": "grid",
        "card-size": "large"
    },
    "components": {
        "title": "title",
        "summary": "summary",
        "type": "type"
    }
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_are_valid_json() {
        for template in [
            REPOSITORY_TEMPLATE,
            USER_TEMPLATE,
            CODE_TEMPLATE,
            EMPTY_TEMPLATE,
        ] {
            let value: serde_json::Value = serde_json::from_str(template).unwrap();
            assert_eq!(value["schema-version"], 1);
            assert_eq!(value["components"]["title"], "title");
        }
    }
}
