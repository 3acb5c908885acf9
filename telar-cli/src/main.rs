use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use telar_render::render_html;
use telar_template::{DEFAULT_GRAMMAR, Grammar, TemplateParser};

#[derive(Parser)]
#[command(name = "telar", version, about = "Telar static template renderer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a template file to HTML.
    Render {
        /// Path to the template file
        input: PathBuf,
        /// Grammar definition to parse with (default: built-in grammar)
        #[arg(long)]
        grammar: Option<PathBuf>,
        /// Write output here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Parse a template and report the first syntax error, if any.
    Check {
        /// Path to the template file
        input: PathBuf,
        /// Grammar definition to parse with (default: built-in grammar)
        #[arg(long)]
        grammar: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Render {
            input,
            grammar,
            out,
        } => render_cmd(&input, grammar.as_deref(), out.as_deref()),
        Commands::Check { input, grammar } => check_cmd(&input, grammar.as_deref()),
    }
}

fn load_grammar(path: Option<&Path>) -> Result<Grammar> {
    let source = match path {
        Some(p) => {
            fs::read_to_string(p).with_context(|| format!("failed to read {}", p.display()))?
        }
        None => DEFAULT_GRAMMAR.to_string(),
    };
    Grammar::load(&source).context("failed to load grammar")
}

fn read_template(input: &Path) -> Result<String> {
    fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))
}

fn render_cmd(input: &Path, grammar: Option<&Path>, out: Option<&Path>) -> Result<()> {
    let grammar = load_grammar(grammar)?;
    let src = read_template(input)?;

    let parser = TemplateParser::new(&grammar);
    let compiled = parser.compile(&src)?;
    let html = render_html(&compiled.render(&()));

    match out {
        Some(p) => {
            fs::write(p, &html).with_context(|| format!("failed to write {}", p.display()))?
        }
        None => println!("{html}"),
    }
    Ok(())
}

fn check_cmd(input: &Path, grammar: Option<&Path>) -> Result<()> {
    let grammar = load_grammar(grammar)?;
    let src = read_template(input)?;

    let parser = TemplateParser::new(&grammar);
    parser.compile(&src)?;
    println!("{}: ok", input.display());
    Ok(())
}
