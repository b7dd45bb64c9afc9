//! Text input and the committed pressure.

use tracing::{info, warn};

use crate::error::InputError;
use crate::pressure::Pressure;

/// Receives every successfully committed pressure.
pub trait PressureObserver {
    fn pressure_committed(&mut self, pressure: Pressure);
}

/// Holds the raw text the user is typing and the last committed pressure.
///
/// The raw text is never validated while it is edited; only `commit`
/// checks it, and only a successful commit changes the pressure.
#[derive(Debug, Clone, Default)]
pub struct InputController {
    raw: String,
    pressure: Pressure,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pressure(pressure: Pressure) -> Self {
        Self {
            raw: String::new(),
            pressure,
        }
    }

    pub fn raw_input(&self) -> &str {
        &self.raw
    }

    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    pub fn set_raw_input(&mut self, text: impl Into<String>) {
        self.raw = text.into();
    }

    /// Append typed text, dropping control characters.
    pub fn push_str(&mut self, text: &str) {
        self.raw.extend(text.chars().filter(|c| !c.is_control()));
    }

    pub fn pop_char(&mut self) -> Option<char> {
        self.raw.pop()
    }

    /// Validate the raw text and, if it holds a pressure, store it and tell
    /// `observer`. On error nothing changes.
    pub fn commit(&mut self, observer: &mut dyn PressureObserver) -> Result<Pressure, InputError> {
        match Pressure::parse(&self.raw) {
            Ok(pressure) => {
                info!(%pressure, "pressure committed");
                self.pressure = pressure;
                observer.pressure_committed(pressure);
                Ok(pressure)
            }
            Err(err) => {
                warn!(input = %self.raw, error = %err, "rejected pressure input");
                Err(err)
            }
        }
    }
}
