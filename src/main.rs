mod config;

use anyhow::{Context, Result};
use clap::Parser;
use config::{InspectConfig, OutputFormat, DEFAULT_CONFIG_FILE};
use sigma_reader::utils::hex;
use sigma_reader::{Layout, SigmaReader, Value};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sigma-inspect")]
#[command(about = "Decode Sigma-serialized values")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true, help = "Config file path")]
    config: Option<String>,
}

#[derive(clap::Args)]
struct DecodeArgs {
    #[arg(long, help = "Comma-separated field kinds, e.g. bool,vlq,bytes:4,long")]
    layout: Option<String>,

    #[arg(long, help = "Output as JSON")]
    json: bool,

    #[arg(long, help = "Fail if input bytes remain after the layout")]
    strict: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Decode hex input
    Decode {
        hex: String,
        #[command(flatten)]
        args: DecodeArgs,
    },
    /// Decode the raw bytes of a file
    DecodeFile {
        path: String,
        #[command(flatten)]
        args: DecodeArgs,
    },
    /// Write a default config file
    GenerateConfig {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE, help = "Config file path")]
        output: String,
    },
}

fn init_tracing(config: &InspectConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render(
    values: &[Value],
    layout: &Layout,
    reader: &SigmaReader<'_>,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let fields: Vec<_> = values.iter().map(Value::to_json).collect();
            let doc = serde_json::json!({
                "fields": fields,
                "consumed": reader.position(),
                "remaining": reader.remaining(),
            });
            Ok(serde_json::to_string_pretty(&doc)?)
        }
        OutputFormat::Text => {
            let lines: Vec<String> = values
                .iter()
                .zip(layout.fields())
                .enumerate()
                .map(|(i, (value, kind))| format!("{:>3} {:<10} {}", i, kind.to_string(), value))
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

/// Decodes `bytes` with the requested layout and returns the rendered output
fn decode(bytes: &[u8], args: DecodeArgs, config: &InspectConfig) -> Result<String> {
    let layout_text = args
        .layout
        .or_else(|| config.default_layout.clone())
        .context("no layout given (use --layout or set default_layout in the config)")?;
    let layout: Layout = layout_text.parse()?;
    let format = if args.json { OutputFormat::Json } else { config.output };

    let mut reader = SigmaReader::new(bytes);
    info!(len = reader.len(), fields = layout.fields().len(), "decoding");

    let values = layout.decode(&mut reader)?;
    if args.strict || config.require_consumed {
        reader.ensure_consumed()?;
    }

    render(&values, &layout, &reader, format)
}

fn run(command: Commands, config: &InspectConfig) -> Result<()> {
    let output = match command {
        Commands::Decode { hex: input, args } => {
            let bytes = hex::decode(&input)?;
            decode(&bytes, args, config)?
        }
        Commands::DecodeFile { path, args } => {
            let bytes = std::fs::read(&path).with_context(|| format!("failed to read {}", path))?;
            decode(&bytes, args, config)?
        }
        Commands::GenerateConfig { output } => {
            InspectConfig::default().save(&output)?;
            info!("Wrote default config to {}", output);
            return Ok(());
        }
    };
    println!("{}", output);
    Ok(())
}

/// generate-config writes the file, so there is nothing to load yet
fn load_config(command: &Commands, config_path: Option<&str>) -> Result<InspectConfig> {
    match command {
        Commands::GenerateConfig { .. } => Ok(InspectConfig::default()),
        _ => InspectConfig::load(config_path),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.command, cli.config.as_deref())?;
    init_tracing(&config);

    run(cli.command, &config)
}
