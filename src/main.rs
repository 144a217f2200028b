use clap::{Parser, Subcommand};
use manualgen::{chapters, config, generate, output, toc};
use std::path::PathBuf;
use std::process::ExitCode;

fn version_string() -> &'static str {
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup — trivial, called exactly once
        Box::leak(format!("{} ({hash})", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "manualgen")]
#[command(about = "Docs-site generator for product manuals")]
#[command(long_about = "\
Docs-site generator for product manuals

The manual is the data source. A plain-text table of contents drives
task-driven example pages, and authored chapter files become the
education section. Output is VitePress-ready markdown plus JSON sidebar
descriptors.

Expected repository layout:

  docs/manual/
  ├── TOC.md                       # Numbered outline with task bullets
  └── chapters/
      ├── Chapter_01_Getting_Started.md
      └── Chapter_02_Billing.md

  website/docs/                    # Generated output lands here
  ├── examples/                    # One page per TOC section + index
  ├── education/                   # One page per chapter + index
  └── .vitepress/generated/        # Sidebar descriptor JSON

When the live docs/ tree is absent (e.g. running inside an exported site
copy), inputs are resolved from docs-site-export/ instead.

Run 'manualgen gen-config' to print a documented manualgen.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Repository root containing the manual and the website tree
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate example pages and sidebar from the manual TOC
    Examples,
    /// Sync manual chapters into the education section
    Chapters,
    /// Run both generators: examples, then chapters
    Build,
    /// Resolve and parse all inputs without writing anything
    Check,
    /// Print a stock manualgen.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config(&cli.root)?;

    match cli.command {
        Command::Examples => {
            let sections = generate::run(&cli.root, &config)?;
            output::print_examples_output(&sections, config.toc_label());
        }
        Command::Chapters => {
            let synced = chapters::run(&cli.root, &config)?;
            output::print_chapters_output(&synced);
        }
        Command::Build => {
            println!("==> Stage 1: Examples from {}", config.toc_label());
            let sections = generate::run(&cli.root, &config)?;
            output::print_examples_output(&sections, config.toc_label());

            println!("==> Stage 2: Chapter sync");
            let synced = chapters::run(&cli.root, &config)?;
            output::print_chapters_output(&synced);

            println!("==> Build complete");
        }
        Command::Check => {
            let sections = toc::load(&cli.root, &config)?;
            println!("TOC: {} sections", sections.len());
            let chapters = chapters::load(&cli.root, &config)?;
            println!("Chapters: {} files", chapters.len());
            println!("==> Inputs are valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
