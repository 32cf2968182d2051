//! Workout variants and their distance, speed and calorie formulas.
//!
//! Coefficients are empirical and kept as fixed data.

use crate::types::{InfoMessage, Reading, TrainingKind};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;
/// Metres covered by one step.
pub const LEN_STEP: f64 = 0.65;

/// Base contract shared by every workout.
///
/// Variants must supply [`Training::spent_calories`]; distance and mean speed
/// are derived from the reading.
pub trait Training {
    fn kind(&self) -> TrainingKind;

    fn reading(&self) -> &Reading;

    /// Metres covered by one action (step or stroke).
    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in km.
    fn distance(&self) -> f64 {
        self.reading().action * self.len_step() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.reading().duration
    }

    /// Calories burned in kcal.
    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.kind(),
            duration: self.reading().duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    reading: Reading,
}

impl Running {
    const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_SPEED_SHIFT: f64 = 20.0;

    #[must_use]
    pub const fn new(action: f64, duration: f64, weight: f64) -> Self {
        Self {
            reading: Reading {
                action,
                duration,
                weight,
            },
        }
    }
}

impl Training for Running {
    fn kind(&self) -> TrainingKind {
        TrainingKind::Running
    }

    fn reading(&self) -> &Reading {
        &self.reading
    }

    fn spent_calories(&self) -> f64 {
        let r = &self.reading;
        (Self::CALORIES_SPEED_MULTIPLIER * self.mean_speed() - Self::CALORIES_SPEED_SHIFT)
            * r.weight
            / M_IN_KM
            * r.duration
            * MIN_IN_H
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    reading: Reading,
    /// Centimetres.
    height: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    #[must_use]
    pub const fn new(action: f64, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            reading: Reading {
                action,
                duration,
                weight,
            },
            height,
        }
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> TrainingKind {
        TrainingKind::SportsWalking
    }

    fn reading(&self) -> &Reading {
        &self.reading
    }

    fn spent_calories(&self) -> f64 {
        let r = &self.reading;
        // Whole units of speed²/height only.
        let speed_height = (self.mean_speed().powi(2) / self.height).floor();
        (Self::CALORIES_WEIGHT_MULTIPLIER * r.weight
            + speed_height * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * r.weight)
            * r.duration
            * MIN_IN_H
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    reading: Reading,
    /// Metres.
    length_pool: f64,
    count_pool: f64,
}

impl Swimming {
    /// Metres covered by one stroke.
    pub const LEN_STEP: f64 = 1.38;
    const CALORIES_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    #[must_use]
    pub const fn new(
        action: f64,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: f64,
    ) -> Self {
        Self {
            reading: Reading {
                action,
                duration,
                weight,
            },
            length_pool,
            count_pool,
        }
    }
}

impl Training for Swimming {
    fn kind(&self) -> TrainingKind {
        TrainingKind::Swimming
    }

    fn reading(&self) -> &Reading {
        &self.reading
    }

    fn len_step(&self) -> f64 {
        Self::LEN_STEP
    }

    /// Pool laps, not strokes, give the speed.
    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool / M_IN_KM / self.reading.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::CALORIES_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.reading.weight
    }
}
