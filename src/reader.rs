use crate::dlog;
use crate::error::PackageError;
use crate::training::{Running, SportsWalking, Swimming, Training};
use crate::types::{Package, TrainingKind};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Build the workout matching `code` from positional sensor data.
///
/// Layouts:
/// - `SWM`: action, duration, weight, length_pool, count_pool
/// - `RUN`: action, duration, weight
/// - `WLK`: action, duration, weight, height
pub fn read_package(code: &str, data: &[f64]) -> Result<Box<dyn Training>, PackageError> {
    let kind: TrainingKind = code.parse()?;

    let training: Box<dyn Training> = match (kind, data) {
        (TrainingKind::Swimming, &[action, duration, weight, length_pool, count_pool]) => Box::new(
            Swimming::new(action, duration, weight, length_pool, count_pool),
        ),
        (TrainingKind::Running, &[action, duration, weight]) => {
            Box::new(Running::new(action, duration, weight))
        }
        (TrainingKind::SportsWalking, &[action, duration, weight, height]) => {
            Box::new(SportsWalking::new(action, duration, weight, height))
        }
        _ => {
            return Err(PackageError::ParameterCount {
                kind,
                expected: kind.param_count(),
                actual: data.len(),
            });
        }
    };

    dlog!("read_package kind={kind} params={}", data.len());
    Ok(training)
}

/// Packages processed when no input file is given.
#[must_use]
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Read a JSON array of packages from `path`.
pub fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let display = path.display();
    let text = fs::read_to_string(path).with_context(|| format!("Reading packages: {display}"))?;
    let packages: Vec<Package> =
        serde_json::from_str(&text).with_context(|| format!("Parsing packages JSON: {display}"))?;

    tracing::info!(path = %path.display(), packages = packages.len(), "loaded packages");
    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_each_code() {
        for p in default_packages() {
            let t = read_package(&p.code, &p.data).unwrap();
            assert_eq!(t.kind().code(), p.code);
        }
    }

    #[test]
    fn walking_reads_positional_height() {
        let t = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(t.kind(), TrainingKind::SportsWalking);
        assert!((t.reading().weight - 75.0).abs() < 1e-12);
        assert!((t.spent_calories() - 157.5).abs() < 1e-9);
    }

    #[test]
    fn variant_fields_follow_position() {
        // 50 m pool, 30 laps in 0.5 h
        let swm = read_package("SWM", &[100.0, 0.5, 60.0, 50.0, 30.0]).unwrap();
        assert!((swm.mean_speed() - 3.0).abs() < 1e-9);

        // speed 20 km/h: 400 / 150 floors to 2, 400 / 250 floors to 1
        let steps = 20_000.0 / crate::training::LEN_STEP;
        let short = read_package("WLK", &[steps, 1.0, 70.0, 150.0]).unwrap();
        let tall = read_package("WLK", &[steps, 1.0, 70.0, 250.0]).unwrap();
        assert!((short.spent_calories() - (0.035 + 2.0 * 0.029) * 70.0 * 60.0).abs() < 1e-9);
        assert!((tall.spent_calories() - (0.035 + 0.029) * 70.0 * 60.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_code_fails() {
        for code in ["", "XYZ", "swm", "RUN "] {
            let err = read_package(code, &[1.0, 1.0, 1.0]).err();
            assert_eq!(err, Some(PackageError::UnknownWorkoutType(code.to_string())));
        }
    }

    #[test]
    fn wrong_arity_fails() {
        let err = read_package("SWM", &[720.0, 1.0, 80.0]).err();
        assert_eq!(
            err,
            Some(PackageError::ParameterCount {
                kind: TrainingKind::Swimming,
                expected: 5,
                actual: 3,
            })
        );
        assert!(read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]).is_err());
    }

    #[test]
    fn negative_values_are_accepted() {
        let t = read_package("RUN", &[15000.0, -1.0, 75.0]).unwrap();
        assert!(t.mean_speed() < 0.0);
    }
}
