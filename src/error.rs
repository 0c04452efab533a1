use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    AccessError {
        path: PathBuf,
        inner: io::Error,
    },
    CsvError(csv::Error),
    SerdeError {
        path: PathBuf,
        inner: serde_json::Error,
    },
    PlotError {
        path: PathBuf,
        message: String,
    },
    EmptyDataset,
    InputClosed,
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AccessError { path, inner } => {
                write!(f, "Failed to access file {:?}: {}", path, inner)
            }
            Error::CsvError(inner) => write!(f, "Failed to read the dataset: {}", inner),
            Error::SerdeError { path, inner } => write!(
                f,
                "Failed to read or write file {:?} due to serialization error: {}",
                path, inner
            ),
            Error::PlotError { path, message } => {
                write!(f, "Failed to draw plot {:?}: {}", path, message)
            }
            Error::EmptyDataset => write!(f, "The dataset has no columns"),
            Error::InputClosed => write!(f, "Input closed before a column was selected"),
            Error::Io(inner) => write!(f, "I/O error: {}", inner),
        }
    }
}

impl StdError for Error {
    fn description(&self) -> &str {
        match self {
            Error::AccessError { .. } => "AccessError",
            Error::CsvError(_) => "CsvError",
            Error::SerdeError { .. } => "SerdeError",
            Error::PlotError { .. } => "PlotError",
            Error::EmptyDataset => "EmptyDataset",
            Error::InputClosed => "InputClosed",
            Error::Io(_) => "Io",
        }
    }

    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::AccessError { inner, .. } => Some(inner),
            Error::CsvError(inner) => Some(inner),
            Error::SerdeError { inner, .. } => Some(inner),
            Error::Io(inner) => Some(inner),
            Error::PlotError { .. } | Error::EmptyDataset | Error::InputClosed => None,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(other: csv::Error) -> Error {
        Error::CsvError(other)
    }
}

impl From<io::Error> for Error {
    fn from(other: io::Error) -> Error {
        Error::Io(other)
    }
}

pub type Result<T> = ::std::result::Result<T, Error>;

pub(crate) fn log_error(e: &Error) {
    tracing::error!("{}", e);
}
