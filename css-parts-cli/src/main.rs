//! CSS part tokenizer CLI
//!
//! Reads a stylesheet, tokenizes it into parts, and prints a
//! human-readable summary, the JSON segment array, or the segment array
//! wrapped as a JavaScript module body for a build pipeline.

use anyhow::{Context, Result, bail};
use css_parts::{ParseOptions, Part, PartKind, Segment, parse_with};
use std::env;
use std::fs;
use std::process;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut json = false;
    let mut module = false;
    let mut css: Option<String> = None;
    let mut kinds: Option<Vec<PartKind>> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => json = true,
            "--module" => module = true,
            "--css" => {
                i += 1;
                let Some(text) = args.get(i) else { usage() };
                css = Some(text.clone());
            }
            "--matchers" => {
                i += 1;
                let Some(list) = args.get(i) else { usage() };
                let mut parsed = Vec::new();
                for name in list.split(',') {
                    match name.trim().parse::<PartKind>() {
                        Ok(kind) => parsed.push(kind),
                        Err(_) => bail!("unknown matcher '{name}'"),
                    }
                }
                kinds = Some(parsed);
            }
            path => {
                css = Some(
                    fs::read_to_string(path)
                        .with_context(|| format!("failed to read '{path}'"))?,
                );
            }
        }
        i += 1;
    }

    let Some(css) = css else { usage() };

    let options = kinds.map_or_else(ParseOptions::default, |kinds| ParseOptions { kinds });
    let segments = parse_with(&css, &options)?;

    if module {
        println!("module.exports = {};", serde_json::to_string(&segments)?);
    } else if json {
        println!("{}", serde_json::to_string_pretty(&segments)?);
    } else {
        print_summary(&segments);
    }

    Ok(())
}

fn usage() -> ! {
    eprintln!(
        "Usage: css-parts <file.css> [--json | --module] [--matchers selector,variable,property,url]"
    );
    eprintln!("       css-parts --css 'div {{ color: var(--x); }}'");
    process::exit(1);
}

fn print_summary(segments: &[Segment]) {
    let parts = segments.iter().filter(|s| s.as_part().is_some()).count();
    println!("{} segments, {parts} parts", segments.len());
    for segment in segments {
        match segment {
            Segment::Literal(text) => println!("  literal  {text:?}"),
            Segment::Part(part) => match part {
                Part::Selector { value } | Part::Url { value } => {
                    println!("  {:<8} {value:?}", part.kind());
                }
                Part::Variable { name, encode } => {
                    println!("  {:<8} --{name} (encode: {encode})", part.kind());
                }
                Part::Property { name, value } => {
                    println!("  {:<8} --{name}: {value}", part.kind());
                }
            },
        }
    }
}
