//! Command line support for tourplot

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, trace};

use tourplot::{Error, RenderConfig, plot};

const EXIT_STATUS_HELP: &str = "Exit status: 0 on success, 1 when a record or the render \
configuration is invalid, 2 when not given 1 to 4 records (nothing is read then). The legacy \
plotting script exited with 0 after a wrong number of files.";

#[derive(Parser)]
#[command(version, about, author, long_about = None, after_help = EXIT_STATUS_HELP)]
/// Lay out solved tour records as a multi-panel figure plan (JSON on stdout)
///
/// Exits with status 2 on a wrong number of records.
struct Cli {
    #[arg(short, long, action=clap::ArgAction::Count)]
    verbose: u8,

    /// Render settings as JSON, e.g. '{"markers": false}'
    #[arg(long = "render-config", value_name = "RENDER_CONFIG")]
    render_config: Option<String>,

    /// Single line output instead of pretty printed JSON
    #[arg(long)]
    compact: bool,

    /// One to four records written by the tour solver
    #[arg(value_name = "RECORD")]
    records: Vec<PathBuf>,
}

const USAGE_EXIT_CODE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let tracing_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(std::io::stderr)
        .init();
    debug!("Verbose level: {}", cli.verbose);

    trace!("User given records: {:?}", cli.records);

    match run(&cli) {
        Ok(figure) => {
            println!("{figure}");
            ExitCode::SUCCESS
        }
        Err(err @ Error::Usage(_)) => {
            eprintln!("{err}");
            ExitCode::from(USAGE_EXIT_CODE)
        }
        Err(err) => {
            error!("Failed to build figure: {err:?}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> tourplot::Result<String> {
    let config = match &cli.render_config {
        Some(json) => RenderConfig::from_json(json)?,
        None => RenderConfig::default(),
    };
    trace!("Render configuration: {:?}", config);

    let figure = plot(&cli.records, &config)?;
    let json = if cli.compact {
        serde_json::to_string(&figure)
    } else {
        serde_json::to_string_pretty(&figure)
    };
    json.map_err(|err| Error::Undefined(format!("Failed to serialize figure: {err}")))
}
