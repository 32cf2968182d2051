//! Distance, mean speed and calorie estimates for running, sports walking
//! and swimming, computed from raw sensor packages.

pub mod cli;
pub mod error;
pub mod reader;
pub mod report;
pub mod training;
pub mod types;
pub mod utils;

pub use error::PackageError;
pub use reader::{default_packages, load_packages, read_package};
pub use report::run;
pub use training::{Running, SportsWalking, Swimming, Training};
pub use types::{InfoMessage, Package, Reading, TrainingKind};
