use colored::Colorize;
use gitscope_scope::{
    CategorisedResult, CategoryRenderer, Category, ColumnLayout, PreviewReply, PreviewWidget,
    SearchReply,
};
use serde_json::Value;
use std::io::{self, Write};

pub fn print_json(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}

pub fn print_text(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}

/// Prints categories and results as they arrive
///
/// The first failed write stops the query: `push` returns `false` from then
/// on and the error is kept for [`TerminalReply::take_write_error`].
pub struct TerminalReply {
    out: Box<dyn Write>,
    first: Option<CategorisedResult>,
    write_error: Option<io::Error>,
}

impl Default for TerminalReply {
    fn default() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }
}

impl TerminalReply {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_writer(out: Box<dyn Write>) -> Self {
        Self {
            out,
            first: None,
            write_error: None,
        }
    }

    pub fn first(&self) -> Option<&CategorisedResult> {
        self.first.as_ref()
    }

    pub fn take_write_error(&mut self) -> Option<io::Error> {
        self.write_error.take()
    }

    fn write_line(&mut self, text: &str) -> bool {
        if self.write_error.is_some() {
            return false;
        }
        match writeln!(self.out, "{text}") {
            Ok(()) => true,
            Err(err) => {
                log::debug!("Stopping output: {}", err);
                self.write_error = Some(err);
                false
            }
        }
    }
}

impl SearchReply for TerminalReply {
    fn register_category(
        &mut self,
        id: &str,
        title: &str,
        icon: &str,
        renderer: CategoryRenderer,
    ) -> Category {
        self.write_line(&format!("{}", title.bold().underline()));
        Category::new(id, title, icon, renderer)
    }

    fn push(&mut self, result: CategorisedResult) -> bool {
        if !self.write_line(&render_result(&result)) {
            return false;
        }
        if self.first.is_none() {
            self.first = Some(result);
        }
        true
    }

    fn error(&mut self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }
}

fn render_result(result: &CategorisedResult) -> String {
    let mut text = format!("\n{}", result.title.green().bold());
    if !result.uri.is_empty() && result.uri != "-1" {
        text.push_str(&format!("\n  {}", result.uri.cyan()));
    }
    if let Some(summary) = result.attr_str("summary") {
        text.push_str(&format!("\n  {}", summary));
    }
    if let Some(description) = result.attr_str("description") {
        for line in description.lines().filter(|l| !l.is_empty()) {
            text.push_str(&format!("\n  {}", line.dimmed()));
        }
    }
    text
}

/// Prints one preview, resolving widget mappings against `result`
pub struct TerminalPreview<'a> {
    out: Box<dyn Write>,
    result: &'a CategorisedResult,
    write_error: Option<io::Error>,
}

impl<'a> TerminalPreview<'a> {
    pub fn new(result: &'a CategorisedResult) -> Self {
        Self::with_writer(result, Box::new(io::stdout()))
    }

    pub fn with_writer(result: &'a CategorisedResult, out: Box<dyn Write>) -> Self {
        Self {
            out,
            result,
            write_error: None,
        }
    }

    pub fn take_write_error(&mut self) -> Option<io::Error> {
        self.write_error.take()
    }

    fn render_widget(&self, widget: &PreviewWidget) -> Option<String> {
        let attributes = widget.resolve(self.result);
        match widget.widget_type.as_str() {
            "image" => attributes
                .get("source")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(|source| format!("Image: {}", source)),
            "header" => Some(render_header(
                attributes.get("title").and_then(Value::as_str),
                attributes.get("subtitle").and_then(Value::as_str),
            )),
            "actions" => attributes
                .get("actions")
                .and_then(Value::as_array)
                .map(|actions| render_actions(actions)),
            other => {
                log::warn!("Unknown widget type '{}'", other);
                None
            }
        }
    }
}

impl PreviewReply for TerminalPreview<'_> {
    fn register_layout(&mut self, layouts: Vec<ColumnLayout>) {
        log::debug!("Preview offers {} layouts", layouts.len());
    }

    fn push(&mut self, widgets: Vec<PreviewWidget>) -> bool {
        let mut text = format!("\n{}", "Preview".bold().underline());
        for widget in &widgets {
            if let Some(rendered) = self.render_widget(widget) {
                text.push('\n');
                text.push_str(&rendered);
            }
        }
        match writeln!(self.out, "{text}") {
            Ok(()) => true,
            Err(err) => {
                log::debug!("Stopping preview output: {}", err);
                self.write_error = Some(err);
                false
            }
        }
    }
}

fn render_header(title: Option<&str>, subtitle: Option<&str>) -> String {
    let mut text = title.unwrap_or_default().bold().to_string();
    if let Some(subtitle) = subtitle.filter(|s| !s.is_empty()) {
        text.push('\n');
        text.push_str(subtitle);
    }
    text
}

fn render_actions(actions: &[Value]) -> String {
    actions
        .iter()
        .filter_map(|action| {
            let label = action.get("label")?.as_str()?;
            let uri = action.get("uri")?.as_str()?;
            Some(format!("[{}] {}", label.yellow(), uri))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
