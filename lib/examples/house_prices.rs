//! House price prediction from area.
//!
//! Trains on the built-in six-house dataset (or a CSV file with `area,price`
//! columns) and prints the predicted price for one area.
//!
//! Run with:
//! ```text
//! RUST_LOG=info cargo run --example house_prices -- --area 110
//! cargo run --example house_prices -- --data houses.csv --config trainer.json --parallel
//! ```

use clap::Parser;
use gradfit::{
    backend::RayonBackend,
    dataset::{houses, load_csv},
    pipeline::{self, TrainedModel},
    trainer::{Trainer, TrainerConfig},
    FitError,
};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Predict a house price from its area with gradient-descent linear regression")]
struct Args {
    /// CSV file with `area,price` columns. Defaults to the built-in dataset.
    #[arg(long)]
    data: Option<PathBuf>,

    /// JSON file with `epochs` and `learning_rate`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the configured number of epochs.
    #[arg(long)]
    epochs: Option<usize>,

    /// Overrides the configured learning rate.
    #[arg(long)]
    learning_rate: Option<f64>,

    /// Area (m²) to predict a price for.
    #[arg(long, default_value_t = 110.0)]
    area: f64,

    /// Sum gradients on the rayon thread pool.
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<(), FitError> {
    env_logger::init();
    let args = Args::parse();

    let samples = match &args.data {
        Some(path) => load_csv(path)?,
        None => houses(),
    };
    info!("loaded {} samples", samples.len());

    let mut config = match &args.config {
        Some(path) => TrainerConfig::load(path)?,
        None => TrainerConfig::default(),
    };
    if let Some(epochs) = args.epochs {
        config.epochs = epochs;
    }
    if let Some(lr) = args.learning_rate {
        config.learning_rate = lr;
    }

    let builder = Trainer::builder().config(config);
    let model: TrainedModel = if args.parallel {
        let trainer = builder.backend(RayonBackend::new()).build()?;
        pipeline::fit_with(&trainer, &samples)?
    } else {
        pipeline::fit_with(&builder.build()?, &samples)?
    };

    println!("=== Trained model ===");
    println!("{}", model.params());

    let price = model.predict_raw(args.area).round() as i64;
    println!(
        "Predicted price for a house of {} m²: €{}",
        args.area, price
    );
    Ok(())
}
