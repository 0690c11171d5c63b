//! # sqltab
//!
//! A CLI for rendering SQL query results as aligned text tables.
//!
//! ## Overview
//!
//! sqltab is built on top of sqltablib. It reads a query result as JSON (an
//! array of objects, or an array of arrays whose first element is the header)
//! and prints it as a bordered table, applying row limits and column width
//! truncation. It can also reflow SQL statements for reading.
//!
//! ## Usage
//!
//! ```bash
//! # Render a result file
//! sqltab render result.json
//!
//! # Read from stdin with box-drawing borders
//! cat result.json | sqltab render --unicode
//!
//! # Show at most 10 rows, no truncation of long values
//! sqltab render result.json --limit 10 --column-width 0
//!
//! # A single wide row without borders becomes a name/value listing
//! sqltab render row.json --no-borders
//!
//! # Emit the rendered lines as JSON
//! sqltab render result.json --output json
//!
//! # Reflow a statement
//! echo "select a, b from t where a = 1" | sqltab format-sql
//! ```

use std::io::Read;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use outstanding::cli::{App, CommandContext, HandlerResult, Output, RunResult};
use outstanding::Theme;
use serde::Serialize;
use sqltablib::{
    sql::classify, RenderConfig, RenderOptions, Renderer, ResultSet, SqlPrettyPrinter,
    StatementKind,
};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Include template at compile time
const TEXT_TEMPLATE: &str = include_str!("../templates/text.jinja");

/// Pre-rendered text for the terminal output modes
#[derive(Debug, Serialize)]
struct TextContext {
    text: String,
}

/// Structured view of a formatted statement
#[derive(Debug, Serialize)]
struct FormattedSql {
    kind: StatementKind,
    sql: String,
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("sqltab")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Render SQL query results as aligned text tables")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .default_value("warn")
                .help("Log filter (e.g. warn, debug, sqltablib=trace)"),
        )
        .subcommand(
            Command::new("render")
                .about("Render a JSON query result as a table")
                .arg(Arg::new("file").help("JSON input file (defaults to stdin)"))
                .arg(
                    Arg::new("config")
                        .long("config")
                        .help("JSON file with render settings"),
                )
                .arg(
                    Arg::new("fetch-size")
                        .long("fetch-size")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(i64))
                        .help("Rows per fetch, also the default display limit (0 = unlimited)"),
                )
                .arg(
                    Arg::new("max-rows")
                        .long("max-rows")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(i64))
                        .help("Maximum rows in a result (0 = unlimited)"),
                )
                .arg(
                    Arg::new("column-width")
                        .short('w')
                        .long("column-width")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(i64))
                        .help("Maximum characters per cell (0 = unlimited)"),
                )
                .arg(
                    Arg::new("limit")
                        .short('n')
                        .long("limit")
                        .value_parser(clap::value_parser!(usize))
                        .help("Rows to show for this render (0 = unlimited)"),
                )
                .arg(
                    Arg::new("unicode")
                        .short('u')
                        .long("unicode")
                        .action(ArgAction::SetTrue)
                        .help("Use box-drawing characters for borders"),
                )
                .arg(
                    Arg::new("no-borders")
                        .long("no-borders")
                        .action(ArgAction::SetTrue)
                        .help("Omit the outside borders"),
                )
                .arg(
                    Arg::new("no-message")
                        .long("no-message")
                        .action(ArgAction::SetTrue)
                        .help("Do not print the too-many-rows advisory"),
                )
                .arg(
                    Arg::new("line-break")
                        .long("line-break")
                        .value_parser(["lf", "crlf", "cr"])
                        .help("Line break ending each output line and joining multi-line values"),
                ),
        )
        .subcommand(
            Command::new("format-sql")
                .about("Reflow a SQL statement for reading")
                .arg(Arg::new("file").help("SQL input file (defaults to stdin)")),
        )
}

/// Initialize the tracing subscriber; logs go to stderr
fn init_logging(matches: &ArgMatches) -> anyhow::Result<()> {
    let level = matches
        .get_one::<String>("log-level")
        .map(|s| s.as_str())
        .unwrap_or("warn");
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))?;

    Ok(())
}

/// Read the input file, or stdin when no file (or `-`) is given
fn read_input(matches: &ArgMatches) -> anyhow::Result<String> {
    match matches.get_one::<String>("file").map(|s| s.as_str()) {
        Some(path) if path != "-" => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path))
        }
        _ => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

/// Build the render config: file (if any), then flags on top
fn build_config(matches: &ArgMatches) -> anyhow::Result<RenderConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => RenderConfig::from_file(path)?,
        None => RenderConfig::default(),
    };

    if let Some(&n) = matches.get_one::<i64>("fetch-size") {
        config.set_fetch_size(Some(n));
    }
    if let Some(&n) = matches.get_one::<i64>("max-rows") {
        config.set_max_rows(Some(n));
    }
    if let Some(&n) = matches.get_one::<i64>("column-width") {
        config.set_column_width_limit(Some(n));
    }
    if matches.get_flag("unicode") {
        config.set_use_unicode_borders(true);
    }
    if matches.get_flag("no-message") {
        config.set_show_too_many_rows_message(false);
    }
    if let Some(line_break) = matches.get_one::<String>("line-break") {
        config.set_line_break(match line_break.as_str() {
            "crlf" => "\r\n",
            "cr" => "\r",
            _ => "\n",
        });
    }

    Ok(config)
}

/// Build the per-call options from flags
fn build_options(matches: &ArgMatches) -> RenderOptions {
    let mut options = RenderOptions::new();
    if let Some(&limit) = matches.get_one::<usize>("limit") {
        options = options.limit(limit);
    }
    if matches.get_flag("no-borders") {
        options = options.outside_borders(false);
    }
    options
}

/// Handler for render command
fn render_handler(matches: &ArgMatches, ctx: &CommandContext) -> HandlerResult<serde_json::Value> {
    init_logging(matches)?;
    let config = build_config(matches)?;
    debug!(?config, "render settings");

    let input = read_input(matches)?;
    let value: serde_json::Value = serde_json::from_str(&input).context("input is not valid JSON")?;
    let result = ResultSet::from_json(value)?;

    let renderer = Renderer::new(config);
    let options = build_options(matches);

    // For JSON mode, return the rendered parts
    if ctx.output_mode.is_structured() {
        let table = renderer.render(&result, options);
        return Ok(Output::Render(serde_json::to_value(&table)?));
    }

    let mut buf = Vec::new();
    renderer.write_to(&result, options, &mut buf)?;
    let text = String::from_utf8(buf).context("rendered table is not valid UTF-8")?;

    Ok(Output::Render(serde_json::to_value(TextContext { text })?))
}

/// Handler for format-sql command
fn format_sql_handler(
    matches: &ArgMatches,
    ctx: &CommandContext,
) -> HandlerResult<serde_json::Value> {
    init_logging(matches)?;
    let input = read_input(matches)?;
    let sql = input.trim_end();
    let formatted = SqlPrettyPrinter::standard().pretty_print(sql)?;

    if ctx.output_mode.is_structured() {
        let view = FormattedSql {
            kind: classify(sql),
            sql: formatted,
        };
        return Ok(Output::Render(serde_json::to_value(&view)?));
    }

    Ok(Output::Render(serde_json::to_value(TextContext {
        text: format!("{}\n", formatted),
    })?))
}

fn main() -> ExitCode {
    let cmd = build_command();

    let result = App::builder()
        .theme(Theme::new())
        .command("render", render_handler, TEXT_TEMPLATE)
        .command("format-sql", format_sql_handler, TEXT_TEMPLATE)
        .run_to_string(cmd, std::env::args());

    match result {
        RunResult::Handled(output) => {
            if output.starts_with("Error:") {
                eprintln!("{}", output.trim_end());
                return ExitCode::FAILURE;
            }
            print!("{}", output);
            ExitCode::SUCCESS
        }
        RunResult::Binary(_, _) => ExitCode::SUCCESS,
        RunResult::NoMatch(_) => {
            // subcommand_required makes clap reject this before dispatch
            eprintln!("Error: no command given");
            ExitCode::FAILURE
        }
    }
}
