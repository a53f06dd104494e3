use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use possum_core::{FeatureRecord, RawObservation};
use possum_model::{OnnxClassifier, predict};

mod about;
mod display;

#[derive(Parser)]
#[command(name = "possum", version, about = "Possum population classifier")]
struct Cli {
    #[command(subcommand)]
    page: Page,
}

/// The two pages of the interface, dispatched once per invocation.
#[derive(Subcommand)]
enum Page {
    /// Enter specimen measurements and predict the population.
    Predict(PredictArgs),
    /// Describe the model and its feature schema.
    About,
}

/// Measurement inputs, with the same defaults and bounds as the input form.
#[derive(Args)]
struct PredictArgs {
    /// Path to the exported ONNX model artifact.
    #[arg(long, default_value = "possum_model.onnx")]
    model: PathBuf,

    /// Trapping site.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(0..=7))]
    site: i64,

    /// Specimen sex.
    #[arg(long, default_value = "male", value_parser = ["male", "female"])]
    sex: String,

    /// Head length (hdlngth).
    #[arg(long, default_value_t = 95.0)]
    hdlngth: f32,

    /// Skull width (skullw).
    #[arg(long, default_value_t = 55.0)]
    skullw: f32,

    /// Total length (totlngth).
    #[arg(long, default_value_t = 900.0)]
    totlngth: f32,

    /// Tail length (taill).
    #[arg(long, default_value_t = 360.0)]
    taill: f32,

    /// Foot length (footlgth).
    #[arg(long, default_value_t = 80.0)]
    footlgth: f32,

    /// Ear conch length (earconch).
    #[arg(long, default_value_t = 45.0)]
    earconch: f32,

    /// Eye width (eye).
    #[arg(long, default_value_t = 15.0)]
    eye: f32,

    /// Chest girth (chest).
    #[arg(long, default_value_t = 180.0)]
    chest: f32,

    /// Belly girth (belly).
    #[arg(long, default_value_t = 140.0)]
    belly: f32,

    /// Print the outcome as JSON instead of styled text.
    #[arg(long)]
    json: bool,
}

impl PredictArgs {
    fn observation(&self) -> RawObservation {
        RawObservation {
            site: self.site,
            sex: self.sex.clone(),
            hdlngth: self.hdlngth,
            skullw: self.skullw,
            totlngth: self.totlngth,
            taill: self.taill,
            footlgth: self.footlgth,
            earconch: self.earconch,
            eye: self.eye,
            chest: self.chest,
            belly: self.belly,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::debug!("possum v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    match cli.page {
        Page::Predict(args) => run_predict(&args),
        Page::About => {
            about::print_about();
            Ok(())
        }
    }
}

fn run_predict(args: &PredictArgs) -> anyhow::Result<()> {
    let record = FeatureRecord::assemble(&args.observation())?;

    // Artifact load failures are fatal; a rejected record is not.
    let mut classifier = OnnxClassifier::load(&args.model)?;
    let outcome = predict(&mut classifier, &record)?;

    if args.json {
        display::print_json(&record, &outcome)?;
    } else {
        display::print_outcome(&outcome);
    }
    Ok(())
}
