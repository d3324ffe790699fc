mod report;

use gradesize::{
    AttributeSet, Document, DocumentIndex, Error, Options, SizeScope, Span, extract_verbose_with,
    mention_rows_with_priors, write_table,
};
use std::io::{self, IsTerminal, Read};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let default = if std::env::var_os("GRADESIZE_DEBUG_RULES").is_some() { "gradesize=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

struct CliConfig {
    input: String,
    sections: Vec<Span>,
    options: Options,
    table: bool,
    color: bool,
}

fn run(config: CliConfig) -> Result<(), Error> {
    let document = Document::new("stdin", config.input).with_sections(config.sections)?;
    let mut store = DocumentIndex::new();
    let run = extract_verbose_with(&document, &mut store, &config.options);

    if config.table {
        let edge = config.options.config.mention_window_edge;
        let rows = mention_rows_with_priors(&document, &run.result.annotations, store.priors(), edge);
        write_table(&mut io::stdout().lock(), &rows)?;
    } else {
        report::print_run(&document, &run, config.color);
    }
    Ok(())
}

fn parse_args() -> Result<CliConfig, Error> {
    let mut input: Option<String> = None;
    let mut sections = Vec::new();
    let mut options = Options::default();
    let mut table = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("gradesize {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--table" => table = true,
            "--parallel" => options.parallel = true,
            "--section-sizes" => options.size_scope = SizeScope::Sections,
            "--only" => {
                let value = args.next().ok_or_else(|| invalid("--only expects a value"))?;
                options.attributes = parse_only(&value)?;
            }
            "--sections" => {
                let value = args.next().ok_or_else(|| invalid("--sections expects a value"))?;
                sections = parse_sections(&value)?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| invalid("--input expects a value"))?;
                set_input(&mut input, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_input(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--only=") => {
                options.attributes = parse_only(arg.trim_start_matches("--only="))?;
            }
            _ if arg.starts_with("--sections=") => {
                sections = parse_sections(arg.trim_start_matches("--sections="))?;
            }
            _ if arg.starts_with("--input=") => {
                set_input(&mut input, arg.trim_start_matches("--input=").to_string())?;
            }
            _ if arg.starts_with('-') => {
                return Err(invalid(format!("unknown option '{arg}'")));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_input(&mut input, rest)?;
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(invalid(format!("no input provided\n\n{}", help_text())));
    }

    Ok(CliConfig { input, sections, options, table, color })
}

fn invalid(msg: impl Into<String>) -> Error {
    Error::InvalidArgument(msg.into())
}

fn set_input(input: &mut Option<String>, value: String) -> Result<(), Error> {
    if input.is_some() {
        return Err(invalid("input provided multiple times"));
    }
    *input = Some(value);
    Ok(())
}

fn read_stdin_input() -> Result<String, Error> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn parse_only(value: &str) -> Result<AttributeSet, Error> {
    value.split(',').try_fold(AttributeSet::empty(), |set, name| match name.trim() {
        "grade" => Ok(set | AttributeSet::GRADE),
        "size" => Ok(set | AttributeSet::SIZE),
        other => Err(invalid(format!("unknown attribute '{other}' (expected grade or size)"))),
    })
}

/// `"0..120,120..300"` into spans.
fn parse_sections(value: &str) -> Result<Vec<Span>, Error> {
    value
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| -> Result<Span, Error> {
            let (start, end) = part
                .trim()
                .split_once("..")
                .ok_or_else(|| invalid(format!("invalid section '{part}' (expected START..END)")))?;
            let parse = |n: &str| n.parse::<usize>().map_err(|_| invalid(format!("invalid offset '{n}' in '{part}'")));
            Ok(Span::new(parse(start)?, parse(end)?))
        })
        .collect()
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "gradesize {version}

Nuclear grade and tumor size extraction for clinical text.

Usage:
  gradesize [OPTIONS] [--] <text...>
  gradesize [OPTIONS] --input <text>
  gradesize [OPTIONS] < report.txt

Options:
  -i, --input <text>         Document text. If omitted, reads remaining args
                             or stdin when no args are provided.
  --sections <spans>         Section byte spans, e.g. 0..120,121..300.
                             Default: the whole document is one section.
  --only <grade,size>        Run only the listed stages. Default: both.
  --section-sizes            Search sizes per section instead of over the
                             whole document.
  --parallel                 Scan sections on multiple threads (built with
                             the `parallel` feature).
  --table                    Print the pipe-separated mention table.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  RUST_LOG                   Log filter (e.g. gradesize=debug).
  GRADESIZE_DEBUG_RULES      When set and RUST_LOG is not, log at debug.

Exit codes:
  0  Success.
  1  I/O or document error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
