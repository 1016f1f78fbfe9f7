//! Output formatting for replies

use serde_json::Value;

use crate::assistant::Response;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Prints a reply as bare lines, or as one JSON object
    pub fn response(&self, response: &Response) {
        match self.format {
            OutputFormat::Text => {
                for fragment in &response.fragments {
                    println!("{}", fragment.text);
                }
            }
            OutputFormat::Json => println!("{}", to_json(response)),
        }
    }

    /// Prints a reply between divider lines, indented; JSON is unframed
    pub fn framed(&self, response: &Response, divider: &str) {
        match self.format {
            OutputFormat::Text => print!("{}", frame(response, divider)),
            OutputFormat::Json => self.response(response),
        }
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

/// JSON shape of a reply
pub fn to_json(response: &Response) -> Value {
    serde_json::json!({
        "kind": response.kind,
        "style": response.kind.style(),
        "text": response.text(),
        "fragments": response.fragments,
        "exit": response.exit,
    })
}

fn frame(response: &Response, divider: &str) -> String {
    let indent = "    ";
    let mut text = format!("{}{}\n", indent, divider);
    for fragment in &response.fragments {
        text.push_str(indent);
        text.push_str(&fragment.text);
        text.push('\n');
    }
    text.push_str(&format!("{}{}\n", indent, divider));
    text
}
