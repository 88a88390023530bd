use core::{error::Error, fmt};
use std::io;


#[derive(Debug)]
pub enum AppError
{
    Usage,
    Io(io::Error),
    Csv(csv::Error),
    Record { line: u64, found: usize },
}

impl Error for AppError {}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Usage => write!(f, "Expected CSV file to read quaternions from, usage: test-quaternion <input.csv> [--degrees]"),
            Self::Io(err) => write!(f, "IO error: {}", err),
            Self::Csv(err) => write!(f, "CSV error: {}", err),
            Self::Record { line, found } => write!(f, "Record on line {} has {} columns, expected at least 4 (w,x,y,z)", line, found),
        }
    }
}

impl From<io::Error> for AppError
{
    fn from(err: io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<csv::Error> for AppError
{
    fn from(err: csv::Error) -> Self {
        AppError::Csv(err)
    }
}
