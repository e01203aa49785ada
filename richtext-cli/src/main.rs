// Command-line interface for richtext
//
// This binary converts HTML fragments (typically CMS body fields) into Portable Text,
// and offers a few inspection views for checking what the converter made of some markup.
//
// The conversion itself lives in richtext-babel. This crate reads input, loads
// configuration through richtext-config, picks an output format and writes the result.
//
// Converting:
//
// The output format comes from --to, else from the -o file extension, else from the
// `output.format` configuration key.
// Usage:
//  richtext <input> [--to <format>] [-o <file>]           - Convert (default)
//  richtext convert <input> [--to <format>] [-o <file>]   - Same as above (explicit)
//  richtext inspect <input> [<view>]                      - Inspect (defaults to "treeviz")
//  richtext --list-formats                                - List output formats and views
//
// Use "-" as the input to read from stdin.
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format.
// Example:
//  richtext post.html --extra-pretty false --extra-images false

mod inspect;

use clap::{Arg, ArgAction, Command, ValueHint};
use richtext_babel::{convert, FormatRegistry, InputLimit};
use richtext_config::{Loader, RichtextConfig};
use std::collections::HashMap;
use std::fs;
use std::io;
use tracing::debug;

const CONFIG_FILE: &str = "richtext.toml";

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key_opt {
            let has_value = args
                .get(i + 1)
                .is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                // No value, treat as boolean flag
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("richtext")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert HTML into Portable Text blocks")
        .long_about(
            "richtext turns loosely-formed HTML into Portable Text: blocks of styled\n\
            spans with link annotations, plus the list of images the markup referenced.\n\n\
            Commands:\n  \
            - convert: HTML to json, text or treeviz (default command)\n  \
            - inspect: View the lexer events or the converted tree\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            richtext post.html                          # Portable Text JSON on stdout\n  \
            richtext post.html --to text                # Plain text\n  \
            richtext post.html -o post.json             # Write JSON to a file\n  \
            cat post.html | richtext - --extra-pretty false\n  \
            richtext inspect post.html events           # Dump the event stream",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List output formats and inspection views")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a richtext.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect how a document is lexed and converted")
                .long_about(
                    "View a document at different stages of conversion.\n\n\
                    Views:\n  \
                    - events:   Lexer events, one per line\n  \
                    - treeviz:  Blocks, mark definitions and spans as a tree (default)\n  \
                    - stats:    JSON summary of blocks, spans, links and images\n\n\
                    Examples:\n  \
                    richtext inspect post.html            # Tree visualization (default)\n  \
                    richtext inspect post.html events     # Event stream",
                )
                .arg(
                    Arg::new("input")
                        .help("Input HTML file, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("view")
                        .help("View to render. Defaults to 'treeviz'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            inspect::AVAILABLE_INSPECTIONS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert HTML to an output format (default command)")
                .long_about(
                    "Convert an HTML document.\n\n\
                    Output formats:\n  \
                    - json:     Portable Text JSON (.json)\n  \
                    - text:     Plain text (.txt)\n  \
                    - treeviz:  Tree visualization (.tree)\n\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    richtext convert post.html                   # JSON to stdout\n  \
                    richtext convert post.html -o post.txt       # Format from extension\n  \
                    richtext post.html --to treeviz              # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input HTML file, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Output format (detected from -o, else taken from configuration)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .try_init();
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A first argument that is not a flag or subcommand is an input path
            if cleaned_args.len() > 1
                && (!cleaned_args[1].starts_with('-') || cleaned_args[1] == "-")
                && !["inspect", "convert", "help"].contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                fail("an input is required");
            };
            let view = sub_matches
                .get_one::<String>("view")
                .map(|s| s.as_str())
                .unwrap_or(inspect::DEFAULT_INSPECTION);
            handle_inspect_command(input, view, &config);
        }
        Some(("convert", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                fail("an input is required");
            };
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let to = resolve_target_format(
                sub_matches.get_one::<String>("to").map(|s| s.as_str()),
                output,
                &config,
            );
            handle_convert_command(input, &to, output, &extra_params, &config);
        }
        _ => fail("Unknown subcommand. Use --help for usage information."),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

/// Handle the inspect command
fn handle_inspect_command(input: &str, view: &str, config: &RichtextConfig) {
    let source = read_input(input, config);
    let output = inspect::execute_inspection(&source, view).unwrap_or_else(|e| {
        eprintln!("Inspection error: {e}");
        std::process::exit(1);
    });
    print!("{output}");
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &RichtextConfig,
) {
    let registry = FormatRegistry::default();

    if let Err(e) = registry.get(to) {
        fail(&e.to_string());
    }

    let source = read_input(input, config);
    let doc = convert(&source);
    debug!(
        blocks = doc.blocks.len(),
        images = doc.images.len(),
        format = to,
        "converted input"
    );

    let format_options = format_options_for(to, extra_params, config);
    let result = registry
        .serialize_with_options(&doc, to, &format_options)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{result}"),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Output formats:");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {name:<10}{}", format.description());
        }
    }

    println!("\nInspection views:");
    for view in inspect::AVAILABLE_INSPECTIONS {
        println!("  {view}");
    }
}

/// Pick the output format: explicit flag, then output file extension, then configuration.
fn resolve_target_format(to: Option<&str>, output: Option<&str>, config: &RichtextConfig) -> String {
    if let Some(to) = to {
        return to.to_string();
    }
    let registry = FormatRegistry::default();
    output
        .and_then(|path| registry.detect_format_from_filename(path))
        .unwrap_or_else(|| config.output.format.clone())
}

/// Options handed to the format. Configured JSON defaults apply to `json` only;
/// `--extra-*` values win over them.
fn format_options_for(
    to: &str,
    extra_params: &HashMap<String, String>,
    config: &RichtextConfig,
) -> HashMap<String, String> {
    let mut options = if to == "json" {
        config.output.format_options()
    } else {
        HashMap::new()
    };
    for (key, value) in extra_params {
        options.insert(key.clone(), value.clone());
    }
    options
}

fn read_input(input: &str, config: &RichtextConfig) -> String {
    let limit = InputLimit::from(&config.convert);
    let (bytes, source_name) = if input == "-" {
        let bytes = limit
            .read_capped(io::stdin().lock())
            .unwrap_or_else(|e| read_failed("stdin", e));
        (bytes, "stdin".to_string())
    } else {
        let file =
            fs::File::open(input).unwrap_or_else(|e| read_failed(&format!("file '{input}'"), e));
        if let Ok(meta) = file.metadata() {
            if meta.is_file() {
                let size = usize::try_from(meta.len()).unwrap_or(usize::MAX);
                if let Err(e) = limit.check_len(size) {
                    fail(&e.to_string());
                }
            }
        }
        let bytes = limit
            .read_capped(file)
            .unwrap_or_else(|e| read_failed(&format!("file '{input}'"), e));
        (bytes, format!("file '{input}'"))
    };

    if let Err(e) = limit.check_read(&bytes) {
        fail(&e.to_string());
    }
    debug!(bytes = bytes.len(), source = %source_name, "read input");
    String::from_utf8(bytes).unwrap_or_else(|e| read_failed(&source_name, e))
}

fn read_failed(source: &str, err: impl std::fmt::Display) -> ! {
    eprintln!("Error reading {source}: {err}");
    std::process::exit(1);
}

fn load_cli_config(explicit_path: Option<&str>) -> RichtextConfig {
    let loader = Loader::new().with_optional_file(CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Move configuration-level `--extra-*` flags into the config.
/// Format options (`pretty`, `images`) stay in `extra_params`.
fn apply_config_overrides(config: &mut RichtextConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["max-input-bytes", "max-bytes"]) {
        config.convert.max_input_bytes = raw.parse().unwrap_or_else(|_| {
            eprintln!("Invalid byte count '{raw}' for --extra-max-input-bytes");
            std::process::exit(1);
        });
    }
    if let Some(raw) = take_override(extra_params, &["include-images"]) {
        config.output.include_images = parse_bool_arg("include-images", &raw);
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
