use anyhow::{Context, Result, bail};
use linemark_config::Config;
use linemark_engine::{RenderOptions, render_with};
use std::{
    env,
    io::Read,
    path::{Path, PathBuf},
    process,
};

const USAGE: &str = "\
Usage: linemark [OPTIONS] [FILE]

Renders a Markdown chat message to an HTML fragment on stdout.
Reads from stdin when FILE is omitted.

Options:
  --escape          Escape HTML special characters in text and URLs
  --config <PATH>   Load settings from PATH instead of the default location
  -h, --help        Show this help";

struct Args {
    input: Option<PathBuf>,
    escape: bool,
    config: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut input = None;
    let mut escape = false;
    let mut config = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{USAGE}");
                process::exit(0);
            }
            "--escape" => escape = true,
            "--config" => {
                let path = args.next().context("--config requires a path argument")?;
                config = Some(PathBuf::from(path));
            }
            other if other.starts_with('-') => bail!("unknown option: {other}\n{USAGE}"),
            other => {
                if input.is_some() {
                    bail!("only one input file may be given\n{USAGE}");
                }
                input = Some(PathBuf::from(other));
            }
        }
    }

    Ok(Args {
        input,
        escape,
        config,
    })
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn run() -> Result<()> {
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    }
    .unwrap_or_default();

    let opts = RenderOptions {
        escape_text: args.escape || config.escape_text,
    };

    let text = read_input(args.input.as_deref())?;
    println!("{}", render_with(&text, &opts));
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}
