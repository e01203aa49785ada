use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the views from src/inspect.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_INSPECTIONS: &[&str] = &["events", "treeviz", "stats"];

const OUTPUT_FORMATS: &[&str] = &["json", "text", "treeviz"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let input = Arg::new("input")
        .help("Input HTML file, or - for stdin")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath);

    let mut cmd = Command::new("richtext")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert HTML into Portable Text blocks")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List output formats and inspection views")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a richtext.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect how a document is lexed and converted")
                .arg(input.clone())
                .arg(
                    Arg::new("view")
                        .help("View to render")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_INSPECTIONS,
                        ))
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert HTML to an output format")
                .arg(input)
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Output format")
                        .value_parser(clap::builder::PossibleValuesParser::new(OUTPUT_FORMATS)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path")
                        .value_hint(ValueHint::FilePath),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "richtext", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "richtext", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "richtext", &outdir)?;

    Ok(())
}
