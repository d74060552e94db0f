// Command-line interface for quire
//
// This binary exposes the quire-babel library on files: converting between formats, counting
// words and dumping the decoded document model.
//
// Usage:
//  quire <input> --to <format> [--from <format>] [--output <file>]          - Convert (default)
//  quire convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above
//  quire count <input> [--from <format>] [--sum | --sections | --json]      - Word counts
//  quire inspect <input> [--from <format>]                                  - Document model as JSON
//  quire --list-formats                                                     - List formats
//
// The source format is detected from the file extension unless --from is given.
//
// Extra Parameters:
//
// Parameters can be passed using --extra-<key> <value>. Keys containing a dot address the
// configuration (`--extra-word_count.case_sensitive true`); anything else is handed to the
// target format (`--extra-bold-marker __`).

mod logging;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use quire_babel::formats::markdown::MarkdownOptions;
use quire_babel::wordcount::{DocumentCount, WordCountOptions, WordCounter};
use quire_babel::{Document, FormatRegistry};
use quire_config::{Loader, QuireConfig, ValueKind, LOCAL_CONFIG_FILE};
use std::collections::HashMap;
use std::fmt::Display;
use std::fs;

const SUBCOMMANDS: &[&str] = &["convert", "count", "inspect", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            let has_value = args
                .get(i + 1)
                .is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
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

/// Split extra parameters into configuration overrides (dotted keys) and
/// format options.
fn split_extra_params(
    extra_params: HashMap<String, String>,
) -> (Vec<(String, String)>, HashMap<String, String>) {
    let (config, format): (HashMap<_, _>, HashMap<_, _>) = extra_params
        .into_iter()
        .partition(|(key, _)| key.contains('.'));
    let mut overrides: Vec<(String, String)> = config.into_iter().collect();
    overrides.sort();
    (overrides, format)
}

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn from_arg() -> Arg {
    Arg::new("from")
        .long("from")
        .help("Source format (auto-detected from file extension if not specified)")
        .value_hint(ValueHint::Other)
}

fn build_cli() -> Command {
    Command::new("quire")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert quire documents and count their words")
        .long_about(
            "quire converts documents between markdown and the editor's document model,\n\
            imports HTML and counts words.\n\n\
            Commands:\n  \
            - convert: Transform between document formats (default)\n  \
            - count:   Word frequencies, totals and per-section counts\n  \
            - inspect: Print the decoded document model as JSON\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass options.\n  \
            Dotted names override configuration keys, others go to the target format.\n\n\
            Examples:\n  \
            quire notes.md --to markdown --extra-bold-marker __\n  \
            quire clip.html --to markdown -o clip.md\n  \
            quire count notes.md --sections\n  \
            quire count notes.md --extra-word_count.count_numbers true",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a quire.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug events to stderr (QUIRE_LOG takes precedence)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between document formats (default command)")
                .long_about(
                    "Convert documents between different formats.\n\n\
                    Supported formats:\n  \
                    - markdown: headings, bold and italic (.md, .markdown, .txt)\n  \
                    - html:     import only (.html, .htm)\n  \
                    - rtf:      not implemented (.rtf)\n\n\
                    Output goes to stdout by default, or use -o to specify a file.",
                )
                .arg(input_arg())
                .arg(from_arg())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
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
        .subcommand(
            Command::new("count")
                .about("Count the words of a document")
                .long_about(
                    "Count words using the [word_count] configuration.\n\n\
                    Without flags, prints one `<count>\\t<word>` line per word,\n\
                    most frequent first.",
                )
                .arg(input_arg())
                .arg(from_arg())
                .arg(
                    Arg::new("sum")
                        .long("sum")
                        .help("Print only the total number of words")
                        .action(ArgAction::SetTrue)
                        .conflicts_with_all(["sections", "json"]),
                )
                .arg(
                    Arg::new("sections")
                        .long("sections")
                        .help("Print per-section totals, indented by heading level")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("json"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the per-section counts as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the decoded document model as JSON")
                .arg(input_arg())
                .arg(from_arg()),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    let (cleaned_args, extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
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

    logging::init(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let (overrides, format_options) = split_extra_params(extra_params);
    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        &overrides,
    );
    let registry = FormatRegistry::with_defaults()
        .with_markdown_options(MarkdownOptions::from(&config.markdown));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = required(sub_matches, "input");
            let from = source_format(&registry, sub_matches, input);
            let to = required(sub_matches, "to");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(&registry, input, &from, to, output, &format_options);
        }
        Some(("count", sub_matches)) => {
            let input = required(sub_matches, "input");
            let from = source_format(&registry, sub_matches, input);
            let mode = if sub_matches.get_flag("sum") {
                CountMode::Sum
            } else if sub_matches.get_flag("sections") {
                CountMode::Sections
            } else if sub_matches.get_flag("json") {
                CountMode::Json
            } else {
                CountMode::Words
            };
            handle_count_command(&registry, input, &from, mode, &config);
        }
        Some(("inspect", sub_matches)) => {
            let input = required(sub_matches, "input");
            let from = source_format(&registry, sub_matches, input);
            handle_inspect_command(&registry, input, &from);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn fail(message: impl Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(|s| s.as_str())
        .unwrap_or_else(|| fail(format!("missing required argument <{name}>")))
}

/// `--from` if given, otherwise detected from the input's extension.
fn source_format(registry: &FormatRegistry, matches: &ArgMatches, input: &str) -> String {
    if let Some(from) = matches.get_one::<String>("from") {
        return from.to_string();
    }
    registry
        .detect_format_from_filename(input)
        .unwrap_or_else(|| {
            fail(format!(
                "Could not detect format from filename '{input}'. Please specify --from explicitly"
            ))
        })
}

fn read_document(registry: &FormatRegistry, input: &str, from: &str) -> Document {
    let bytes =
        fs::read(input).unwrap_or_else(|e| fail(format!("reading file '{input}': {e}")));
    registry
        .parse_bytes(&bytes, from)
        .unwrap_or_else(|e| fail(e))
}

/// Handle the convert command
fn handle_convert_command(
    registry: &FormatRegistry,
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    format_options: &HashMap<String, String>,
) {
    // Validate formats exist before touching the file system
    if let Err(e) = registry.get(from) {
        fail(e);
    }
    if let Err(e) = registry.get(to) {
        fail(e);
    }

    let doc = read_document(registry, input, from);
    let text = registry
        .serialize_with_options(&doc, to, format_options)
        .unwrap_or_else(|e| fail(e));

    match output {
        Some(path) => {
            fs::write(path, text)
                .unwrap_or_else(|e| fail(format!("writing file '{path}': {e}")));
        }
        None => print!("{text}"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CountMode {
    Words,
    Sum,
    Sections,
    Json,
}

/// Handle the count command
fn handle_count_command(
    registry: &FormatRegistry,
    input: &str,
    from: &str,
    mode: CountMode,
    config: &QuireConfig,
) {
    let doc = read_document(registry, input, from);
    let counter = WordCounter::new(WordCountOptions::from(&config.word_count));

    match mode {
        CountMode::Sum => println!("{}", counter.sum_document(&doc)),
        CountMode::Words => print!("{}", render_frequencies(&counter.count_document(&doc))),
        CountMode::Sections => print!("{}", render_sections(&counter.count_document(&doc))),
        CountMode::Json => {
            let json = serde_json::to_string_pretty(&counter.count_document(&doc))
                .unwrap_or_else(|e| fail(e));
            println!("{json}");
        }
    }
}

/// One `<count>\t<word>` line per word, most frequent first.
fn render_frequencies(count: &DocumentCount) -> String {
    let mut words: Vec<(String, usize)> = count.frequencies().into_iter().collect();
    words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    words
        .iter()
        .map(|(word, n)| format!("{n}\t{word}\n"))
        .collect()
}

fn render_sections(count: &DocumentCount) -> String {
    let mut out = String::new();
    for (section, rollup) in count.sections.iter().zip(count.rollup_totals()) {
        let depth = section
            .level
            .map_or(0, |level| usize::from(level.get()) - 1);
        let title = if section.is_preamble() {
            "(preamble)"
        } else {
            section.heading.as_str()
        };
        out.push_str(&format!(
            "{}{title}: {} ({rollup} with subsections)\n",
            "  ".repeat(depth),
            section.total()
        ));
    }
    out.push_str(&format!("total: {}\n", count.total()));
    out
}

/// Handle the inspect command
fn handle_inspect_command(registry: &FormatRegistry, input: &str, from: &str) {
    let doc = read_document(registry, input, from);
    let json = serde_json::to_string_pretty(&doc).unwrap_or_else(|e| fail(e));
    println!("{json}");
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let Ok(format) = registry.get(&name) else {
            continue;
        };
        let direction = match (format.supports_parsing(), format.supports_serialization()) {
            (true, true) => "import, export",
            (true, false) => "import",
            (false, true) => "export",
            (false, false) => "not implemented",
        };
        println!(
            "  {name:<10} {direction:<16} .{}",
            format.file_extensions().join(", .")
        );
    }
}

fn load_cli_config(explicit_path: Option<&str>, overrides: &[(String, String)]) -> QuireConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let mut loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    for (key, raw) in overrides {
        loader = loader
            .set_override(key, override_value(key, raw))
            .unwrap_or_else(|err| fail(format!("invalid override --extra-{key}: {err}")));
    }
    loader
        .build()
        .unwrap_or_else(|err| fail(format!("Failed to load configuration: {err}")))
}

/// List-valued keys take comma separated values on the command line.
fn override_value(key: &str, raw: &str) -> ValueKind {
    if key == "word_count.excluded_styles" {
        let items: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect();
        ValueKind::from(items)
    } else {
        ValueKind::from(raw)
    }
}
