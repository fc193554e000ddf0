use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;
use visitscope_core::cli::{self, Overrides, ReportFormat};
use visitscope_core::conf::DEFAULT_CONFIG_PATH;
use visitscope_core::logging::{LogFormat, default_log_format, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "visitscope",
    version,
    about = "Visitscope: access log analytics report and dashboard"
)]
struct Cli {
    /// Path to the visitscope config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Access log to analyze (overrides [log] path)
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    /// MaxMind city database (overrides [geoip] city_db)
    #[arg(long, global = true)]
    geoip_db: Option<PathBuf>,

    /// Diagnostic output format (default: pretty on a terminal, JSON otherwise)
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormatArg>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the analytics report (default)
    Report {
        #[arg(long, value_enum, default_value_t = FormatArg::Text)]
        format: FormatArg,
    },

    /// Run the dashboard web service
    Serve,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LogFormatArg {
    Pretty,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let log_format = match cli.log_format {
        Some(LogFormatArg::Pretty) => LogFormat::Pretty,
        Some(LogFormatArg::Json) => LogFormat::Json,
        None => default_log_format(),
    };
    init_logging(log_format);

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let overrides = Overrides {
        log: cli.log,
        geoip_db: cli.geoip_db,
    };
    let cfg = cli::resolve_config(&cli.config, overrides)?;

    match cli.command {
        Some(Command::Serve) => cli::run_serve(cfg),

        Some(Command::Report { format }) => {
            let format = match format {
                FormatArg::Text => ReportFormat::Text,
                FormatArg::Json => ReportFormat::Json,
            };
            cli::run_report(&cfg, format, std::io::stdout().is_terminal())
        }

        None => cli::run_report(&cfg, ReportFormat::Text, std::io::stdout().is_terminal()),
    }
}
