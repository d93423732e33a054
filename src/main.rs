//! wikifmt - wiki markup to HTML converter

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::process::ExitCode;

use clap::Parser;

use wikifmt::{Error, LinkMap, UrlPrefix};

#[derive(Parser)]
#[command(name = "wikifmt")]
#[command(version, about = "Convert wiki markup to HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    wikifmt page.txt page.html        Convert a file
    wikifmt page.txt                  Write HTML to stdout
    wikifmt -m links.json page.txt    Resolve links through a JSON table
    cat page.txt | wikifmt -          Read from stdin")]
struct Cli {
    /// Input file, or `-` for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (stdout if omitted)
    #[arg(value_name = "OUTPUT")]
    output: Option<String>,

    /// Base URL prepended to slugs without an explicit mapping
    #[arg(short = 'b', long, default_value = "/wiki/")]
    link_base: String,

    /// JSON file mapping page slugs to URLs
    #[arg(short = 'm', long, value_name = "FILE")]
    link_map: Option<String>,

    /// Fail on slugs missing from the link map
    #[arg(short, long, requires = "link_map")]
    strict: bool,

    /// Suppress the summary message
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> wikifmt::Result<()> {
    let text = read_input(&cli.input)?;
    let links = build_links(cli)?;

    let html = wikifmt::try_format(&text, |slug| links.resolve(slug))?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &html)?;
            if !cli.quiet {
                println!("{} -> {} ({} bytes)", cli.input, path, html.len());
            }
        }
        None => print!("{html}"),
    }

    Ok(())
}

fn read_input(input: &str) -> wikifmt::Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

fn build_links(cli: &Cli) -> wikifmt::Result<LinkMap> {
    let mut links = LinkMap::new();
    if !cli.strict {
        links = links.with_fallback(UrlPrefix::new(cli.link_base.clone()));
    }

    if let Some(path) = &cli.link_map {
        let data = fs::read_to_string(path)?;
        let entries: HashMap<String, String> =
            serde_json::from_str(&data).map_err(|e| Error::InvalidLinkMap(e.to_string()))?;
        for (slug, url) in entries {
            links.insert(slug, url);
        }
    }

    Ok(links)
}
