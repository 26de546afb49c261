use civic_complaint_lab::client;
use civic_complaint_lab::dataset;
use civic_complaint_lab::inspect;
use civic_complaint_lab::labels::LabelMap;
use civic_complaint_lab::utils;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "civic-complaint-lab",
    about = "Synthetic civic-complaint datasets and inference server probes",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a labeled CSV of synthetic complaints
    Generate {
        /// Number of complaints to generate
        #[arg(long, default_value_t = dataset::DEFAULT_SAMPLE_COUNT)]
        count: usize,
        /// Destination CSV file
        #[arg(long, default_value = "data/complaints.csv")]
        output: PathBuf,
        /// Seed for a reproducible dataset
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Validate a complaint CSV and write a plain-text debug report
    Inspect {
        /// Complaint CSV to read
        #[arg(long, default_value = "data/complaints.csv")]
        input: PathBuf,
        /// Report file
        #[arg(long, default_value = "debug_output.txt")]
        output: PathBuf,
    },
    /// Write the class index -> "<department> | <priority>" mapping
    LabelMap {
        /// Complaint CSV to read
        #[arg(long, default_value = "data/complaints.csv")]
        input: PathBuf,
        /// JSON mapping file
        #[arg(long, default_value = "model/label_mapping.json")]
        output: PathBuf,
    },
    /// Send one complaint to the classifier server
    Predict {
        /// Classifier endpoint
        #[arg(long, default_value = client::DEFAULT_PREDICT_URL)]
        url: String,
        /// Complaint text to classify
        #[arg(long, default_value = client::SAMPLE_COMPLAINT)]
        text: String,
    },
    /// Upload one image to the fake image detector server
    DetectFake {
        /// Image file to upload
        image: PathBuf,
        /// Fake image detector endpoint
        #[arg(long, default_value = client::DEFAULT_DETECT_URL)]
        url: String,
    },
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(level)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Commands::Generate {
            count,
            output,
            seed,
        } => {
            info!(count, ?output, ?seed, "starting generate");
            let records = match seed {
                Some(seed) => dataset::generate(count, &mut StdRng::seed_from_u64(seed)),
                None => dataset::generate(count, &mut rand::thread_rng()),
            };
            dataset::write_csv(&output, &records)?;
            let summary = utils::GenerationSummary::from_records(&records);
            utils::print_summary(&summary, &output);
        }
        Commands::Inspect { input, output } => {
            info!(?input, ?output, "starting inspect");
            inspect::write_report(&input, &output)?;
        }
        Commands::LabelMap { input, output } => {
            info!(?input, ?output, "starting label-map");
            let rows = dataset::read_raw(&input)?;
            let map = LabelMap::fit(&rows)
                .with_context(|| format!("cannot build label mapping from {}", input.display()))?;
            map.write_json(&output)?;
            println!("{} classes written to {}", map.len(), output.display());
        }
        Commands::Predict { url, text } => {
            let reply = client::build_client().and_then(|c| client::predict(&c, &url, &text));
            match reply {
                Ok(reply) => client::report_prediction(&reply, &mut io::stdout().lock())?,
                Err(e) => {
                    warn!(url = %url, err = %e, "prediction request failed");
                    println!("Error: {e:#}");
                }
            }
        }
        Commands::DetectFake { image, url } => {
            println!("Sending {} to {}...", image.display(), url);
            let reply = client::build_client()
                .and_then(|c| client::detect_fake_image(&c, &url, &image));
            match reply {
                Ok(reply) => client::report_detection(&reply, &mut io::stdout().lock())?,
                Err(e) => {
                    warn!(url = %url, err = %e, "fake detection request failed");
                    println!("Error: {e:#}");
                }
            }
        }
    }

    Ok(())
}
