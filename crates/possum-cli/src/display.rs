//! Rendering of prediction outcomes: styled text or JSON.

use possum_core::FeatureRecord;
use possum_model::Prediction;

/// Print a prediction outcome as styled text.
///
/// Successful labels go to stdout; rejections are user-visible failures and
/// go to stderr, but neither aborts the process.
pub fn print_outcome(outcome: &Prediction) {
    match outcome {
        Prediction::Population(population) => {
            println!("Predicted population: {population}");
        }
        Prediction::Rejected(message) => {
            eprintln!("Prediction failed: {message}");
        }
    }
}

/// Print the assembled record and outcome as a JSON object.
pub fn print_json(record: &FeatureRecord, outcome: &Prediction) -> anyhow::Result<()> {
    let value = match outcome {
        Prediction::Population(population) => serde_json::json!({
            "status": "ok",
            "population": population.as_str(),
            "record": record,
        }),
        Prediction::Rejected(message) => serde_json::json!({
            "status": "rejected",
            "error": message,
            "record": record,
        }),
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
