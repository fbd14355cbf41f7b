//! CLI consumer of `masthead_core`.
//!
//! # Responsibility
//! - Build a small sample model and print what the relationship queries say.
//! - Keep output deterministic so it can be diffed in quick sanity checks.

use clap::{Parser, Subcommand};
use log::info;
use masthead_core::{default_log_level, init_logging, AuthorId, MagazineId, Registry};

#[derive(Parser)]
#[command(name = "masthead", version, about = "Authors, magazines and their articles")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the sample model and report on it.
    Demo {
        /// Print the registry snapshot as JSON instead of a text report.
        #[arg(long)]
        json: bool,
        /// Absolute directory for rolling log files. No file logging if omitted.
        #[arg(long)]
        log_dir: Option<String>,
        /// trace|debug|info|warn|error. Defaults to the build-mode level.
        #[arg(long)]
        log_level: Option<String>,
    },
    /// Print the core crate version.
    Version,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    match cli.command {
        Command::Demo {
            json,
            log_dir,
            log_level,
        } => {
            if let Some(log_dir) = log_dir {
                let level = log_level.as_deref().unwrap_or(default_log_level());
                init_logging(level, &log_dir)?;
            }
            cmd_demo(json)
        }
        Command::Version => {
            println!("masthead_core version={}", masthead_core::core_version());
            Ok(())
        }
    }
}

fn cmd_demo(json: bool) -> Result<(), String> {
    let registry = sample_registry();
    info!(
        "event=demo_built module=cli status=ok authors={} magazines={} articles={}",
        registry.authors().len(),
        registry.magazines().len(),
        registry.articles().len()
    );

    if json {
        let rendered = serde_json::to_string_pretty(&registry.snapshot())
            .map_err(|err| format!("failed to render snapshot: {err}"))?;
        println!("{rendered}");
        return Ok(());
    }

    for author in registry.authors() {
        print_author(&registry, author.id());
    }
    for magazine in registry.magazines() {
        print_magazine(&registry, magazine.id());
    }
    match registry.top_publisher() {
        Some(top) => println!("top publisher: {}", magazine_label(&registry, top)),
        None => println!("top publisher: none"),
    }
    Ok(())
}

fn sample_registry() -> Registry {
    let mut registry = Registry::new();
    let jane = registry.add_author("Jane");
    let john = registry.add_author("John");
    let vogue = registry.add_magazine("Vogue", "Fashion");
    let wired = registry.add_magazine("Wired", "Technology");

    jane.add_article(&mut registry, vogue, "How to Dress Well");
    jane.add_article(&mut registry, vogue, "Spring Trends Ahead");
    jane.add_article(&mut registry, vogue, "Autumn Layering 101");
    jane.add_article(&mut registry, wired, "Gadgets for Stylists");
    john.add_article(&mut registry, wired, "Robots Are Coming");
    john.add_article(&mut registry, vogue, "Hi");
    registry
}

fn print_author(registry: &Registry, author: AuthorId) {
    let topics = author
        .topic_areas(registry)
        .map(|topics| topics.join(", "))
        .unwrap_or_else(|| "none".to_string());
    let magazines = author
        .magazines(registry)
        .into_iter()
        .map(|magazine| magazine_label(registry, magazine))
        .collect::<Vec<_>>()
        .join(", ");
    println!(
        "author {}: articles={} magazines=[{}] topics=[{}]",
        author_label(registry, author),
        author.articles(registry).len(),
        magazines,
        topics
    );
}

fn print_magazine(registry: &Registry, magazine: MagazineId) {
    let titles = magazine
        .article_titles(registry)
        .unwrap_or_default()
        .into_iter()
        .map(|title| title.unwrap_or("<untitled>"))
        .collect::<Vec<_>>()
        .join(" | ");
    let contributing = magazine
        .contributing_authors(registry)
        .unwrap_or_default()
        .into_iter()
        .map(|author| author_label(registry, author))
        .collect::<Vec<_>>()
        .join(", ");
    println!(
        "magazine {}: contributors={} contributing=[{}] titles=[{}]",
        magazine_label(registry, magazine),
        magazine.contributors(registry).len(),
        contributing,
        titles
    );
}

fn author_label(registry: &Registry, author: AuthorId) -> String {
    registry
        .author(author)
        .and_then(|entry| entry.name())
        .map(str::to_string)
        .unwrap_or_else(|| author.to_string())
}

fn magazine_label(registry: &Registry, magazine: MagazineId) -> String {
    registry
        .magazine(magazine)
        .map(|entry| format!("{} ({})", entry.name(), entry.category()))
        .unwrap_or_else(|| magazine.to_string())
}
