use std::io::Read;

use anyhow::Context;
use clap::{Parser, Subcommand};
use requill_common::{id, json, logger, xml};

#[derive(Debug, Parser)]
#[command(name = "requill-common")]
#[command(about = "Payload formatting helpers for Requill debugging")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate unique identifiers
    Id {
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Hash text to a short deterministic key
    Hash { input: String },
    /// Pretty-print JSON read from stdin
    Json {
        #[arg(long, help = "Indent with two spaces")]
        indent: bool,
    },
    /// Pretty-print XML read from stdin
    Xml {
        #[arg(long, default_value_t = 2)]
        indent: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    match cli.command {
        Command::Id { count } => {
            for _ in 0..count {
                println!("{}", id::uuid());
            }
        }
        Command::Hash { input } => {
            println!("{}", id::simple_hash(&input));
        }
        Command::Json { indent } => {
            let input = read_stdin()?;
            match json::safe_parse_json(&input) {
                json::ParsedJson::Value(value) => {
                    println!("{}", json::stringify_json(&value, indent)?);
                }
                json::ParsedJson::Unchanged(_) => {
                    tracing::error!("stdin did not contain valid JSON");
                    eprintln!("❌ stdin did not contain valid JSON");
                    std::process::exit(1);
                }
            }
        }
        Command::Xml { indent } => {
            let input = read_stdin()?;
            let options = xml::XmlFormatOptions {
                indent_size: indent,
            };
            println!("{}", xml::format_xml(&input, &options).context("formatting XML")?);
        }
    }

    Ok(())
}

fn read_stdin() -> anyhow::Result<String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("reading stdin")?;
    Ok(input)
}
