use serde::Serialize;
use std::io::Read;
use trailhead::{RankDir, SanitizeError};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Sanitize(SanitizeError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Sanitize(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<SanitizeError> for CliError {
    fn from(value: SanitizeError) -> Self {
        Self::Sanitize(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Sanitize,
    Build,
    Layout,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    direction: RankDir,
}

/// Graph summary printed by `build`.
#[derive(Serialize)]
struct BuildOut<'a> {
    nodes: usize,
    edges: usize,
    dropped_edges: Vec<&'a str>,
}

fn usage() -> &'static str {
    "trailhead-cli\n\
\n\
USAGE:\n\
  trailhead-cli [sanitize] [--pretty] [<path>|-]\n\
  trailhead-cli build [--pretty] [<path>|-]\n\
  trailhead-cli layout [--direction tb|lr] [--pretty] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - sanitize prints the canonical roadmap document recovered from the input.\n\
  - build prints a summary of the linked graph, including dropped edge ids.\n\
  - layout prints the positioned graph as JSON.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "sanitize" => args.command = Command::Sanitize,
            "build" => args.command = Command::Build,
            "layout" => args.command = Command::Layout,
            "--pretty" => args.pretty = true,
            "--direction" => {
                let Some(dir) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.direction = match dir.trim().to_ascii_lowercase().as_str() {
                    "tb" => RankDir::TB,
                    "lr" => RankDir::LR,
                    _ => return Err(CliError::Usage(usage())),
                };
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                while it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let document = trailhead::sanitize(&text)?;

    match args.command {
        Command::Sanitize => write_json(&document, args.pretty),
        Command::Build => {
            let graph = trailhead::build(&document);
            let out = BuildOut {
                nodes: graph.node_count(),
                edges: graph.edge_count(),
                dropped_edges: graph
                    .dropped_edges()
                    .iter()
                    .map(|edge| edge.id.as_str())
                    .collect(),
            };
            write_json(&out, args.pretty)
        }
        Command::Layout => {
            let graph = trailhead::build(&document);
            let laid = trailhead::layout(&graph, args.direction);
            write_json(&laid, args.pretty)
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err @ CliError::Sanitize(SanitizeError::NoJsonFound)) => {
            eprintln!("{err}");
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
