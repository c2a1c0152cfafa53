// Print the full smoothing trace for a CSV history (date,value) or, with no
// argument, for the built-in eight-point reference series.
use chrono::{Duration, TimeZone, Utc};
use seasonal_forecast::core::{parse_timestamp, TimeSeries};
use seasonal_forecast::models::exponential::{HoltWinters, SmoothingParams};
use seasonal_forecast::models::Forecaster;
use std::fs::File;
use std::io::{BufRead, BufReader};

fn load_csv(path: &str) -> Result<TimeSeries, Box<dyn std::error::Error>> {
    let reader = BufReader::new(File::open(path)?);

    let mut timestamps = Vec::new();
    let mut values = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if i == 0 {
            continue; // Skip header
        }

        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() >= 2 {
            let ts = parse_timestamp(parts[0])
                .ok_or_else(|| format!("line {}: bad timestamp `{}`", i + 1, parts[0]))?;
            timestamps.push(ts);
            values.push(parts[1].trim().parse::<f64>()?);
        }
    }

    Ok(TimeSeries::univariate(timestamps, values)?)
}

fn reference_series() -> Result<TimeSeries, Box<dyn std::error::Error>> {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let values = vec![10.0, 20.0, 30.0, 40.0, 12.0, 22.0, 32.0, 42.0];
    let timestamps = (0..values.len())
        .map(|i| base + Duration::weeks(i as i64))
        .collect();
    Ok(TimeSeries::univariate(timestamps, values)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ts = match std::env::args().nth(1) {
        Some(path) => load_csv(&path)?,
        None => reference_series()?,
    };

    println!("Loaded {} observations", ts.len());
    println!();

    let mut model = HoltWinters::new(SmoothingParams::default());
    model.fit(&ts)?;
    let params = model.params();

    println!("=== HoltWinters (multiplicative) ===");
    println!(
        "  alpha: {:.4}  beta: {:.4}  gamma: {:.4}  m: {}",
        params.alpha, params.beta, params.gamma, params.season_length
    );
    println!();

    println!("{:>4} {:>16} {:>16} {:>16}", "t", "actual", "smoothed", "trend");
    let fitted = model.fitted_values().unwrap_or_default();
    let trend = model.trend().unwrap_or_default();
    for (t, ((y, f), b)) in ts.values().iter().zip(fitted).zip(trend).enumerate() {
        println!("{:>4} {:>16.10} {:>16.10} {:>16.10}", t, y, f, b);
    }
    println!();

    println!("Seasonal Components:");
    if let Some(seasonals) = model.seasonals() {
        for (i, s) in seasonals.as_slice().iter().enumerate() {
            println!("  s[{}] = {:.10}", i, s);
        }
    }
    println!();

    let forecast = model.predict_timestamped(10, Duration::days(7))?;
    println!("Forecast:");
    for obs in forecast.to_observations()? {
        println!("  {}  {:.10}", obs.timestamp.to_rfc3339(), obs.value);
    }

    Ok(())
}
