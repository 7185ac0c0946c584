use clap::{Parser, Subcommand};
use docsmith::nav::DocSummary;
use docsmith::resolver::SlugMap;
use docsmith::store::ContentStore;
use docsmith::{config, document, nav, output, resolver, sitemap};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docsmith")]
#[command(about = "Documentation site indexer")]
#[command(long_about = "\
Documentation site indexer

Your filesystem is the table of contents. Content files carry an optional
numeric ordering prefix that is stripped from all public identifiers and
used only for sort order.

Content structure:

  docs/
  ├── config.toml              # Site config (optional)
  ├── 01.intro.mdx             # Slug: intro
  ├── 02.setup.mdx             # Slug: setup
  ├── 03.components/           # Folder prefixes are stripped too
  │   ├── 01.button.mdx        # Slug: components/button
  │   └── 02.input-box.mdx     # Slug: components/input-box
  └── appendix.mdx             # No prefix = sorts after numbered siblings

Each file may begin with a YAML frontmatter block:

  ---
  title: Getting Started       # Falls back to the title-cased slug segment
  description: First steps     # Falls back to config default_description
  ---

Run 'docsmith gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "docs", global = true)]
    source: PathBuf,

    /// Output directory for generated artifacts (index.json, sitemap.xml)
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the content tree and write index.json
    Index,
    /// Print the flattened reading order, or the neighbors of one slug
    Nav {
        /// Show previous/next for this slug instead of the full order
        slug: Option<String>,
    },
    /// Load one document and print its metadata
    Show { slug: String },
    /// Write sitemap.xml for every resolvable slug
    Sitemap,
    /// Validate the content tree without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

/// Machine-readable index written by `docsmith index`.
#[derive(Serialize)]
struct IndexManifest<'a> {
    documents: &'a SlugMap,
    reading_order: &'a [DocSummary],
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Match by reference: the arms below still need `cli` for the global
    // --source/--output flags.
    match &cli.command {
        Command::Index => {
            let (store, _config) = open_store(&cli)?;
            let map = resolver::resolve(&store)?;
            let order = nav::sequence(&store)?;

            std::fs::create_dir_all(&cli.output)?;
            let manifest = IndexManifest {
                documents: &map,
                reading_order: &order,
            };
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(cli.output.join("index.json"), json)?;

            output::print_index(&map, store.extension());
        }
        Command::Nav { slug } => {
            let (store, _config) = open_store(&cli)?;
            let order = nav::sequence(&store)?;

            match slug {
                Some(slug) => {
                    let (previous, next) = nav::neighbors(&order, slug);
                    println!(
                        "Previous: {}",
                        previous.map_or("(none)", |d| d.slug.as_str())
                    );
                    println!("Next:     {}", next.map_or("(none)", |d| d.slug.as_str()));
                }
                None => output::print_reading_order(&order),
            }
        }
        Command::Show { slug } => {
            let (store, config) = open_store(&cli)?;
            let map = resolver::resolve(&store)?;

            match document::load(&store, &map, slug) {
                Ok(doc) => {
                    let description =
                        document::description_for(&doc.metadata, &config.default_description)
                            .to_string();
                    output::print_document(&doc, &description);
                }
                Err(document::LoadError::NotFound(slug)) => {
                    eprintln!("Not found: {slug}");
                    std::process::exit(1);
                }
                Err(err) => return Err(err.into()),
            }
        }
        Command::Sitemap => {
            let (store, config) = open_store(&cli)?;
            let map = resolver::resolve(&store)?;
            let entries = sitemap::emit_all(&map, &config, chrono::Utc::now());

            std::fs::create_dir_all(&cli.output)?;
            std::fs::write(cli.output.join("sitemap.xml"), sitemap::render_xml(&entries))?;

            output::print_sitemap(&entries);
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let (store, config) = open_store(&cli)?;
            let map = resolver::resolve(&store)?;

            // Ambiguity is caught by resolve; a load pass catches anything
            // else (unreadable files, bad encodings) before deploy time.
            for slug in map.keys() {
                let doc = document::load(&store, &map, slug)?;
                let _ = document::description_for(&doc.metadata, &config.default_description);
            }
            output::print_index(&map, store.extension());
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load the site config from the source tree and open a store over it.
fn open_store(cli: &Cli) -> Result<(ContentStore, config::SiteConfig), config::ConfigError> {
    let site_config = config::load_config(&cli.source)?;
    let store = ContentStore::new(&cli.source, &site_config.extension);
    Ok((store, site_config))
}
