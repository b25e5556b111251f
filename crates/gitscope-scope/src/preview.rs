//! Preview of a single result

use crate::reply::{CategorisedResult, ColumnLayout, PreviewReply, PreviewWidget};
use serde_json::{Value, json};

/// Layouts for 1, 2 and 3 columns
pub fn layouts() -> Vec<ColumnLayout> {
    vec![
        ColumnLayout::new().add_column(&["image", "header", "actions"]),
        ColumnLayout::new()
            .add_column(&["image"])
            .add_column(&["header", "actions"]),
        ColumnLayout::new()
            .add_column(&["image"])
            .add_column(&["header"])
            .add_column(&["actions"]),
    ]
}

pub fn widgets(result: &CategorisedResult) -> Vec<PreviewWidget> {
    let mut image = PreviewWidget::new("image", "image");
    image.add_attribute_mapping("source", "art");

    let mut header = PreviewWidget::new("header", "header");
    header.add_attribute_mapping("title", "title");
    header.add_attribute_mapping("subtitle", "description");

    let mut actions = PreviewWidget::new("actions", "actions");
    actions.add_attribute_value("actions", Value::Array(actions_for(result)));

    vec![image, header, actions]
}

fn actions_for(result: &CategorisedResult) -> Vec<Value> {
    let candidates = [
        ("open", "View", Some(result.uri.as_str())),
        ("open-developer", "View Developer", result.attr_str("developer_uri")),
        ("report-issue", "Report Issue", result.attr_str("new_issue_uri")),
    ];

    candidates
        .into_iter()
        .filter_map(|(id, label, uri)| {
            uri.filter(|u| !u.is_empty())
                .map(|uri| json!({ "id": id, "label": label, "uri": uri }))
        })
        .collect()
}

/// Registers layouts and pushes the widgets for `result`
///
/// Returns `false` if the host cancelled the preview.
pub fn build_preview(result: &CategorisedResult, reply: &mut dyn PreviewReply) -> bool {
    reply.register_layout(layouts());
    reply.push(widgets(result))
}
