//! Show command: print the parsed header of a post.

use pelipost_core::frontmatter::{format_key, parse};
use pelipost_core::post::{DEFAULT_STATUS, is_recognized_post};
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use super::read_post_or_exit;
use crate::{OutputFormat, ShowArgs};

#[derive(Serialize)]
struct ShowOutput<'a> {
    path: String,
    recognized: bool,
    status: &'a str,
    metadata: &'a pelipost_core::frontmatter::Metadata,
    body_lines: usize,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

pub fn run(args: ShowArgs) {
    let content = read_post_or_exit(&args.file);
    let doc = parse(&content);
    let status = doc.metadata.status().unwrap_or(DEFAULT_STATUS);
    let body_lines = doc.body.lines().count();

    let format = if args.json { OutputFormat::Json } else { args.output };
    match format {
        OutputFormat::Json => {
            let out = ShowOutput {
                path: args.file.display().to_string(),
                recognized: is_recognized_post(&content),
                status,
                metadata: &doc.metadata,
                body_lines,
            };
            println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
        }
        OutputFormat::Quiet => {
            for (key, value) in doc.metadata.iter() {
                println!("{}: {}", format_key(key), value);
            }
        }
        OutputFormat::Table => {
            if doc.metadata.is_empty() {
                println!("(no metadata header)");
            } else {
                let rows: Vec<FieldRow> = doc
                    .metadata
                    .iter()
                    .map(|(key, value)| FieldRow {
                        field: format_key(key),
                        value: value.to_string(),
                    })
                    .collect();
                println!("{}", Table::new(rows).with(Style::rounded()));
            }
            println!("status: {status}");
            println!("body: {body_lines} lines");
        }
    }
}
