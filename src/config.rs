//! Runtime configuration.
//!
//! There is no configuration file and there are no command-line flags: the defaults below can
//! only be overridden through the environment.
//!
//! - `HOUSING_OUTLIERS_DATASET`: path of the CSV dataset
//! - `HOUSING_OUTLIERS_HOME`: directory the plots are written to
//! - `HOUSING_OUTLIERS_DEBUG`: when set, each report is also dumped as JSON next to its plot
//! - `HOUSING_OUTLIERS_LOG`: log filter, read by the binary

use std::env;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;

use crate::stats::TUKEY_COEF;

pub const DATASET_ENV: &str = "HOUSING_OUTLIERS_DATASET";
pub const HOME_ENV: &str = "HOUSING_OUTLIERS_HOME";
pub const DEBUG_ENV: &str = "HOUSING_OUTLIERS_DEBUG";
pub const LOG_ENV: &str = "HOUSING_OUTLIERS_LOG";

/// Figure size in pixels
pub const PLOT_SIZE: (u32, u32) = (1600, 800);

lazy_static! {
    static ref DEBUG_ENABLED: bool = env::var_os(DEBUG_ENV).is_some();
    static ref DEFAULT_DATASET: PathBuf = match env::var_os(DATASET_ENV) {
        Some(value) => PathBuf::from(value),
        None => PathBuf::from("california_housing.csv"),
    };
    static ref DEFAULT_OUTPUT_DIRECTORY: PathBuf = {
        // Set the default output directory to `target/housing-outliers` unless the user
        // overrides it
        match env::var_os(HOME_ENV) {
            Some(value) => PathBuf::from(value),
            None => PathBuf::from("target").join("housing-outliers"),
        }
    };
}

pub fn debug_enabled() -> bool {
    *DEBUG_ENABLED
}

/// Settings for one run of the application
#[derive(Clone, Debug)]
pub struct Config {
    dataset: PathBuf,
    output_directory: PathBuf,
    coef: f64,
    plot_size: (u32, u32),
    debug: bool,
    colored: bool,
}

impl Default for Config {
    /// Reads the environment; colours are only used when stdout is a terminal
    fn default() -> Config {
        Config {
            dataset: DEFAULT_DATASET.clone(),
            output_directory: DEFAULT_OUTPUT_DIRECTORY.clone(),
            coef: TUKEY_COEF,
            plot_size: PLOT_SIZE,
            debug: debug_enabled(),
            colored: atty::is(atty::Stream::Stdout),
        }
    }
}

impl Config {
    /// Changes the CSV file the dataset is loaded from
    pub fn dataset<P: AsRef<Path>>(mut self, path: P) -> Config {
        self.dataset = path.as_ref().to_owned();
        self
    }

    /// Changes the directory the plots (and debug dumps) are written to
    pub fn output_directory<P: AsRef<Path>>(mut self, path: P) -> Config {
        self.output_directory = path.as_ref().to_owned();
        self
    }

    /// Changes the fence coefficient
    ///
    /// # Panics
    ///
    /// Panics if `coef` is negative or `NaN`
    pub fn coef(mut self, coef: f64) -> Config {
        assert!(coef >= 0.);

        self.coef = coef;
        self
    }

    pub fn plot_size(mut self, size: (u32, u32)) -> Config {
        self.plot_size = size;
        self
    }

    /// Also dump each report as JSON
    pub fn debug(mut self, enabled: bool) -> Config {
        self.debug = enabled;
        self
    }

    /// Colour the terminal output
    pub fn colored(mut self, enabled: bool) -> Config {
        self.colored = enabled;
        self
    }

    pub fn dataset_path(&self) -> &Path {
        &self.dataset
    }

    pub fn output_directory_path(&self) -> &Path {
        &self.output_directory
    }

    pub fn coefficient(&self) -> f64 {
        self.coef
    }

    pub fn size(&self) -> (u32, u32) {
        self.plot_size
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }
}
