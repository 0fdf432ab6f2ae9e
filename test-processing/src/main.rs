use std::{env, error::Error, fs, path::Path};
use math::Vector;
use processing::{true_intervals, Calibrator, DEFAULT_IMMOBILITY_THRESHOLD};

static RESULTS_DIR: &str = "analysis";

/// Runs the offset calibration on a tumble test recording.
/// 
/// Usage: `test-processing <csv> [sampling_rate] [n_static_positions] [immobility_threshold]`
/// 
/// The input CSV has a header row followed by `time,ax,ay,az,gx,gy,gz` records, acceleration in
/// g and angular velocity in deg/s. Results end up in `analysis/<csv name>/`.
/// 
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err("Expected CSV file to read tumble test data from".into());
    }
    let sampling_rate = parse_arg(&args, 2, 300.0)?;
    let n_static_positions = parse_arg(&args, 3, 3)?;
    let immobility_threshold = parse_arg(&args, 4, DEFAULT_IMMOBILITY_THRESHOLD)?;

    // Every input CSV file gets its own folder in the results directory.
    let in_path = Path::new(&args[1]);
    let name = in_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or("Input path has no file name")?;
    let out_dir = format!("{}/{}", RESULTS_DIR, name);
    fs::create_dir_all(&out_dir)?;

    let mut acc = Vec::new();
    let mut gyr = Vec::new();
    let mut times = Vec::new();
    let mut reader = csv::Reader::from_path(in_path)?;
    for result in reader.deserialize::<Vec<f64>>() {
        let record = result?;
        if record.len() < 7 {
            return Err(format!("Expected 7 columns, found {}", record.len()).into());
        }
        times.push(record[0]);
        acc.push(Vector::new(record[1], record[2], record[3]));
        gyr.push(Vector::new(record[4], record[5], record[6]));
    }
    log::info!("Read {} samples from {}", acc.len(), in_path.display());

    let mut calibrator = Calibrator::with_settings(sampling_rate, n_static_positions)?;
    let fit = calibrator.compute_offsets(&acc, &gyr, immobility_threshold)?;

    let mut offsets_file = csv::Writer::from_path(format!("{}/{}", out_dir, "offsets.csv"))?;
    offsets_file.write_record(["sensor", "x", "y", "z"])?;
    for (sensor, offsets) in [("acc", fit.acc_offsets), ("gyr", fit.gyr_offsets)] {
        offsets_file.serialize((sensor, offsets.x, offsets.y, offsets.z))?;
    }
    offsets_file.flush()?;

    let mut immobility_file = csv::Writer::from_path(format!("{}/{}", out_dir, "immobility.csv"))?;
    immobility_file.write_record(["time", "is_immobile"])?;
    for (time, is_immobile) in times.iter().zip(&calibrator.immobility) {
        immobility_file.serialize((time, u8::from(*is_immobile)))?;
    }
    immobility_file.flush()?;

    println!("acc offsets: {:?}", fit.acc_offsets);
    println!("gyr offsets: {:?}", fit.gyr_offsets);
    println!(
        "residual: {:e} ({} of {} immobility periods used)",
        fit.residual, fit.selected.len(), true_intervals(&calibrator.immobility).len()
    );
    Ok(())
}

fn parse_arg<T>(args: &[String], index: usize, default: T) -> Result<T, Box<dyn Error>>
where
    T: std::str::FromStr,
    T::Err: Error + 'static,
{
    match args.get(index) {
        Some(arg) => Ok(arg.parse::<T>()?),
        None => Ok(default),
    }
}
