use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use feedloom::config::Config;
use feedloom::feed::{self, Feed};
use feedloom::util::strip_control_chars;

#[derive(Parser, Debug)]
#[command(
    name = "feedloom",
    version,
    about = "Parse RSS, RDF and Atom feeds from files or URLs"
)]
struct Args {
    /// Config file (defaults to ~/.config/feedloom/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the parsed feeds as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// List at most N items per feed
    #[arg(long, value_name = "N")]
    max_items: Option<usize>,

    /// Feed files, http(s) URLs, or `-` for stdin
    #[arg(value_name = "SOURCE", required = true)]
    sources: Vec<String>,
}

enum Source {
    Stdin,
    File(PathBuf),
    Url(String),
}

impl Source {
    fn classify(raw: &str) -> Self {
        if raw == "-" {
            Source::Stdin
        } else if raw.starts_with("http://") || raw.starts_with("https://") {
            Source::Url(raw.to_owned())
        } else {
            Source::File(PathBuf::from(raw))
        }
    }
}

fn parse_local(source: &Source) -> Result<Feed> {
    match source {
        Source::Stdin => {
            feed::parse_reader(std::io::stdin().lock()).context("Failed to parse feed from stdin")
        }
        Source::File(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open '{}'", path.display()))?;
            feed::parse_reader(BufReader::new(file))
                .with_context(|| format!("Failed to parse '{}'", path.display()))
        }
        Source::Url(_) => anyhow::bail!("URL sources are fetched, not read locally"),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config '{}'", path.display())),
        None => match Config::default_path() {
            Some(path) => Config::load(&path).context("Failed to load config"),
            None => Ok(Config::default()),
        },
    }
}

fn truncate_items(feed: &mut Feed, max: usize) {
    match feed {
        Feed::Rss(rss) => {
            if let Some(items) = rss.items.as_mut() {
                items.truncate(max);
            }
        }
        Feed::Atom(atom) => {
            if let Some(entries) = atom.entries.as_mut() {
                entries.truncate(max);
            }
        }
    }
}

fn item_titles(feed: &Feed) -> Vec<Option<&str>> {
    match feed {
        Feed::Rss(rss) => rss.items().iter().map(|item| item.title.as_deref()).collect(),
        Feed::Atom(atom) => atom
            .entries()
            .iter()
            .map(|entry| entry.title.as_deref())
            .collect(),
    }
}

fn print_summary(source: &str, feed: &Feed, max_items: Option<usize>) {
    let dialect = match feed {
        Feed::Rss(_) => "rss",
        Feed::Atom(_) => "atom",
    };
    println!("{} [{}]", strip_control_chars(source), dialect);
    println!(
        "  title: {}",
        strip_control_chars(feed.title().unwrap_or("(untitled)"))
    );
    if let Some(link) = feed.link() {
        println!("  link:  {}", strip_control_chars(link));
    }
    println!("  items: {}", feed.item_count());

    let titles = item_titles(feed);
    let shown = max_items.unwrap_or(titles.len());
    for title in titles.iter().take(shown) {
        println!("    - {}", strip_control_chars(title.unwrap_or("(untitled)")));
    }
    if titles.len() > shown {
        println!("    ... {} more", titles.len() - shown);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let options = config.fetch_options();

    let sources: Vec<Source> = args.sources.iter().map(|s| Source::classify(s)).collect();
    let mut outcomes: Vec<Option<Result<Feed>>> = sources
        .iter()
        .map(|source| match source {
            Source::Url(_) => None,
            local => Some(parse_local(local)),
        })
        .collect();

    let urls: Vec<(usize, String)> = sources
        .iter()
        .enumerate()
        .filter_map(|(idx, source)| match source {
            Source::Url(url) => Some((idx, url.clone())),
            _ => None,
        })
        .collect();

    if !urls.is_empty() {
        let client = feed::build_client(&options).context("Failed to build HTTP client")?;
        tracing::info!(count = urls.len(), "Fetching feeds");
        let fetched =
            feed::fetch_all(&client, urls.iter().map(|(_, url)| url.as_str()), &options).await;
        for ((idx, _), fetched) in urls.iter().zip(fetched) {
            let url = fetched.url;
            outcomes[*idx] = Some(
                fetched
                    .result
                    .with_context(|| format!("Failed to fetch '{url}'")),
            );
        }
    }

    let mut failures = 0usize;
    let mut json_out = Vec::with_capacity(outcomes.len());

    for (raw, outcome) in args.sources.iter().zip(outcomes) {
        let outcome = outcome.unwrap_or_else(|| Err(anyhow::anyhow!("Source was not processed")));
        match outcome {
            Ok(mut parsed) => {
                if args.json {
                    if let Some(max) = args.max_items {
                        truncate_items(&mut parsed, max);
                    }
                    json_out.push(json!({ "source": raw, "feed": parsed }));
                } else {
                    print_summary(raw, &parsed, args.max_items);
                }
            }
            Err(e) => {
                failures += 1;
                tracing::warn!(source = %raw, error = %e, "Source failed");
                if args.json {
                    json_out.push(json!({ "source": raw, "error": format!("{e:#}") }));
                } else {
                    eprintln!("{}: {:#}", strip_control_chars(raw), e);
                }
            }
        }
    }

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&json_out).context("Failed to serialize feeds")?;
        println!("{rendered}");
    }

    if failures > 0 {
        eprintln!("{failures} of {} sources failed", args.sources.len());
        std::process::exit(1);
    }
    Ok(())
}
