use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use workshop_template::{generate, layout_json, usage_text, TemplateConfig, DEFAULT_OUTPUT};

/// Generate the reference template for The Workshop background art.
#[derive(Parser, Debug)]
#[command(name = "workshop-template", version, about)]
struct Cli {
    /// Output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// TrueType font to try before the system candidates
    #[arg(long, value_name = "PATH")]
    font: Option<PathBuf>,

    /// Use the built-in bitmap font only
    #[arg(long, conflicts_with = "font")]
    bitmap_font: bool,

    /// Print the region table as JSON and exit
    #[arg(long)]
    print_layout: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.print_layout {
        println!("{}", layout_json().context("serializing layout")?);
        return Ok(());
    }

    let config = TemplateConfig {
        output: cli.output,
        font: cli.font,
        bitmap_font: cli.bitmap_font,
    };
    generate(&config).with_context(|| format!("creating {}", config.output.display()))?;
    print!("{}", usage_text(&config.output));
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("workshop-template: {:#}", e);
        std::process::exit(1);
    }
}
