use radiant_core::{Record, distinct_jurisdictions, record::validate_records};
use radiant_layout::{ChildSort, LayoutConfig, SunburstSession};
use serde::Serialize;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Core(radiant_core::Error),
    Layout(radiant_layout::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Core(err) => write!(f, "{err}"),
            CliError::Layout(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<radiant_core::Error> for CliError {
    fn from(value: radiant_core::Error) -> Self {
        Self::Core(value)
    }
}

impl From<radiant_layout::Error> for CliError {
    fn from(value: radiant_layout::Error) -> Self {
        Self::Layout(value)
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
    Layout,
    Jurisdictions,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    jurisdiction: Option<String>,
    radius: Option<f64>,
    min_angle: Option<f64>,
    input_order: bool,
    pretty: bool,
}

fn usage() -> &'static str {
    "radiant-cli\n\
\n\
USAGE:\n\
  radiant-cli [layout] [--jurisdiction <name>] [--radius <r>] [--min-angle <radians>] [--input-order] [--pretty] [<path>|-]\n\
  radiant-cli jurisdictions [--pretty] [<path>|-]\n\
\n\
NOTES:\n\
  - Input is a JSON array of normalized records; if <path> is omitted or '-', it is read from stdin.\n\
  - layout prints the view state for one selection: wedges with angle/radius bounds,\n\
    colors, paths and tooltip metadata, or an explicit no-data status.\n\
  - Omitting --jurisdiction lays out all jurisdictions combined.\n\
  - jurisdictions prints the sorted distinct jurisdiction list.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "layout" => args.command = Command::Layout,
            "jurisdictions" => args.command = Command::Jurisdictions,
            "--pretty" => args.pretty = true,
            "--input-order" => args.input_order = true,
            "--jurisdiction" => {
                let Some(name) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.jurisdiction = Some(name.clone());
            }
            "--radius" => {
                let Some(r) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                let r = r.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
                if !(r.is_finite() && r > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
                args.radius = Some(r);
            }
            "--min-angle" => {
                let Some(m) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                let m = m.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
                if !(m.is_finite() && m >= 0.0) {
                    return Err(CliError::Usage(usage()));
                }
                args.min_angle = Some(m);
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
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
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
    println!();
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let records: Vec<Record> = serde_json::from_str(&text)?;
    validate_records(&records)?;

    match args.command {
        Command::Jurisdictions => write_json(&distinct_jurisdictions(&records), args.pretty),
        Command::Layout => {
            let mut config = LayoutConfig::default();
            if let Some(radius) = args.radius {
                config.radius = radius;
            }
            if let Some(min_angle) = args.min_angle {
                config.min_angle = min_angle;
            }
            if args.input_order {
                config.sort = ChildSort::InputOrder;
            }
            let mut session = SunburstSession::new(records, config);
            let state = session.select(args.jurisdiction.as_deref())?;
            write_json(state, args.pretty)
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
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
