use clap::Parser;
use dnsforge_domain::{CliOverrides, Endpoint};
use fastrand::Rng;
use std::io;
use std::process::ExitCode;
use tracing::{error, info};

mod bootstrap;
mod di;
mod prompt;

#[derive(Parser)]
#[command(name = "dnsforge")]
#[command(version)]
#[command(about = "Builds raw IPv4/UDP/DNS query packets and sends them inside a lab network")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Target list file (one IPv4 address per line)
    #[arg(short = 't', long, value_name = "FILE")]
    targets: Option<String>,

    /// Source address written into the IPv4 header, optionally with :port
    #[arg(short = 's', long)]
    source: Option<String>,

    /// Source UDP port
    #[arg(short = 'p', long)]
    source_port: Option<u16>,

    /// Number of attempts
    #[arg(short = 'n', long)]
    attempts: Option<usize>,

    /// Length of the random label prepended to the base domain
    #[arg(long)]
    label_length: Option<usize>,

    /// Delay between attempts in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Base domain for generated hostnames
    #[arg(long)]
    base_domain: Option<String>,

    /// Seed for the run's random generator
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Prompt for source address, source port and attempt count
    #[arg(short = 'i', long)]
    interactive: bool,
}

impl Cli {
    fn overrides(&self) -> anyhow::Result<CliOverrides> {
        let (source_address, source_port) = match self.source.as_deref() {
            Some(raw) if raw.contains(':') => {
                let endpoint: Endpoint = raw.parse()?;
                (
                    Some(endpoint.addr.to_string()),
                    self.source_port.or(Some(endpoint.port)),
                )
            }
            Some(raw) => (Some(raw.to_string()), self.source_port),
            None => (None, self.source_port),
        };

        Ok(CliOverrides {
            source_address,
            source_port,
            attempts: self.attempts,
            label_length: self.label_length,
            delay_ms: self.delay_ms,
            base_domain: self.base_domain.clone(),
            targets_file: self.targets.clone(),
            seed: self.seed,
            log_level: self.log_level.clone(),
        })
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "dnsforge aborted");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = bootstrap::load_config(cli.config.as_deref(), cli.overrides()?)?;

    bootstrap::init_logging(&config.logging);
    bootstrap::log_config_source(cli.config.as_deref());

    if cli.interactive {
        let prompted = prompt::prompt_overrides(
            &mut io::stdin().lock(),
            &mut io::stdout(),
            &config.run,
        )?;
        if let Some(source) = prompted.source_address {
            config.run.source_address = source;
        }
        if let Some(port) = prompted.source_port {
            config.run.source_port = port;
        }
        if let Some(attempts) = prompted.attempts {
            config.run.attempts = attempts;
        }
    }

    let plan = config.run.to_plan()?;

    info!("Starting dnsforge v{}", env!("CARGO_PKG_VERSION"));
    info!(
        source = %plan.source,
        destination_port = plan.destination_port,
        attempts = plan.attempts,
        delay_ms = plan.delay.as_millis() as u64,
        base_domain = %plan.base_domain,
        "Run parameters"
    );

    let services = di::RunServices::new(&config);
    let targets = services.targets.load_targets().await?;

    let mut rng = config.run.seed.map(Rng::with_seed).unwrap_or_else(Rng::new);
    let report = services.run_queries.execute(&plan, &targets, &mut rng).await?;

    info!(
        attempts = report.attempts(),
        sent = report.sent(),
        failed = report.failed(),
        "Completed {} attempts",
        report.attempts()
    );

    Ok(())
}
