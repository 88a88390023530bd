use std::{env, fs, path::{Path, PathBuf}};
use quaternion::{EulerAngles, Quaternion};

mod error;
use error::AppError;

static RESULTS_DIR: &str = "analysis";

static HEADER: [&str; 17] = [
    "w", "x", "y", "z", "norm", "phi", "theta", "psi",
    "m00", "m01", "m02", "m10", "m11", "m12", "m20", "m21", "m22",
];

#[derive(Debug, PartialEq)]
struct Options
{
    input: PathBuf,

    /// Folder that receives one sub folder of results per input file.
    results_dir: PathBuf,

    /// Write Euler angles in degrees instead of radians.
    degrees: bool,
}

#[derive(Debug, Default)]
struct Summary
{
    processed: usize,
    skipped: usize,
}

fn parse_args(args: &[String]) -> Result<Options, AppError> {
    let mut input = None;
    let mut degrees = false;
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--degrees" => degrees = true,
            path if input.is_none() => input = Some(PathBuf::from(path)),
            _ => return Err(AppError::Usage),
        }
    }
    Ok(Options {
        input: input.ok_or(AppError::Usage)?,
        results_dir: PathBuf::from(RESULTS_DIR),
        degrees,
    })
}

/// First four columns of a record are read as `w,x,y,z`, anything after that is ignored.
///
fn parse_record(record: &[f32], line: u64) -> Result<Quaternion, AppError> {
    match record {
        [w, x, y, z, ..] => Ok(Quaternion::new(*w, *x, *y, *z)),
        _ => Err(AppError::Record { line, found: record.len() }),
    }
}

fn output_row(q: &Quaternion, degrees: bool) -> [f32; 17] {
    let mut angles = EulerAngles::from(q);
    if degrees {
        angles = angles.to_degrees();
    }
    let m = q.rotation_matrix();
    [
        q.w, q.x, q.y, q.z, q.norm(), angles.phi, angles.theta, angles.psi,
        m[0][0], m[0][1], m[0][2], m[1][0], m[1][1], m[1][2], m[2][0], m[2][1], m[2][2],
    ]
}

fn output_dir(results_dir: &Path, in_path: &Path) -> PathBuf {
    // Every input CSV file gets its own folder in the results directory.
    let name = in_path.file_stem().and_then(|stem| stem.to_str()).unwrap_or("input");
    results_dir.join(name)
}

fn run(options: &Options) -> Result<Summary, AppError> {
    let out_dir = output_dir(&options.results_dir, &options.input);
    fs::create_dir_all(&out_dir)?;

    // Rows may be ragged, short ones are reported by `parse_record` with their line number.
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(&options.input)?;
    let mut writer = csv::Writer::from_path(out_dir.join("orientation.csv"))?;
    writer.write_record(HEADER)?;

    let mut summary = Summary::default();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let values: Vec<f32> = record.deserialize(None)?;
        let q = parse_record(&values, line)?;

        if q.norm2() == 0.0 {
            log::warn!("Skipping line {}, quaternion {:?} has zero norm", line, q);
            summary.skipped += 1;
            continue;
        }

        let row = output_row(&q, options.degrees);
        log::debug!("{}: {:?}", line, row);
        writer.write_record(row.iter().map(|value| value.to_string()))?;
        summary.processed += 1;
    }
    writer.flush()?;

    log::info!(
        "Wrote {} rows to {} ({} skipped)",
        summary.processed, out_dir.join("orientation.csv").display(), summary.skipped
    );
    Ok(summary)
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let result = parse_args(&args).and_then(|options| run(&options));
    if let Err(err) = result {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
