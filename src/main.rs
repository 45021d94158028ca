use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use color_remover::docs::render_doc;
use color_remover::models::RecolorConfig;
use color_remover::services::process_image;

#[derive(Parser)]
#[command(name = "color-remover")]
#[command(about = "Replace or strip colors in PNG, JPEG and GIF images")]
#[command(
    arg_required_else_help = true,
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    recolor: RecolorArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Print Markdown documentation for this tool
    Doc {
        /// Document title
        #[arg(long, default_value = "Color Remover Tool")]
        title: String,

        /// Include a table of contents
        #[arg(long)]
        toc: bool,
    },
}

#[derive(Args)]
struct RecolorArgs {
    /// Input image file (PNG, JPG or GIF)
    #[arg(required = true)]
    input: Option<PathBuf>,

    /// Output image file (format follows the extension)
    #[arg(required = true)]
    output: Option<PathBuf>,

    /// Color to remove, as R,G,B (e.g. "255,0,0") or hex (e.g. "#ff0000")
    #[arg(short = 's', long = "target-color", value_name = "COLOR")]
    target_color: Option<String>,

    /// Color to replace with, as R,G,B or hex [default: 255,255,255]
    #[arg(
        short = 'r',
        long = "replacement-color",
        visible_alias = "replace",
        value_name = "COLOR"
    )]
    replacement_color: Option<String>,

    /// Keep only black and white pixels, replace every other color
    #[arg(short = 'b', long = "bw-only", visible_alias = "bw")]
    bw_only: bool,

    /// Largest per-channel difference still counted as a match (0-255)
    #[arg(
        short = 't',
        long,
        default_value_t = 30,
        allow_negative_numbers = true,
        value_name = "N"
    )]
    tolerance: i64,

    /// Log processing details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Doc { title, toc }) => {
            println!("{}", render_doc(&title, toc));
            Ok(())
        }
        None => run_recolor_command(cli.recolor),
    }
}

/// Recolor one image file into another
fn run_recolor_command(args: RecolorArgs) -> anyhow::Result<()> {
    let default_filter = if args.verbose {
        "color_remover=debug"
    } else {
        "color_remover=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let (Some(input), Some(output)) = (args.input, args.output) else {
        anyhow::bail!("INPUT and OUTPUT are required");
    };

    let config = RecolorConfig::from_args(
        args.target_color.as_deref(),
        args.replacement_color.as_deref(),
        args.bw_only,
        args.tolerance,
    )?;

    let report = process_image(&input, &output, &config)
        .with_context(|| format!("Failed to process {}", input.display()))?;

    println!(
        "Processed {} -> {} ({} of {} pixels replaced)",
        input.display(),
        output.display(),
        report.stats.replaced,
        report.stats.total
    );

    Ok(())
}
