use crate::error::{ConfigError, Result};

/// Logical canvas height of the upstream character dataset.
///
/// Raw stroke coordinates grow upward from `y = 0`; screen space is
/// obtained by flipping against this height.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 900.0;

/// Canvas parameters for converting raw dataset coordinates to screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasConfig {
    height: f64,
}

impl CanvasConfig {
    /// Creates a new canvas configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `height` is not finite or not positive.
    pub fn new(height: f64) -> Result<Self> {
        if !height.is_finite() || height <= 0.0 {
            return Err(ConfigError::InvalidHeight(height).into());
        }
        Ok(Self { height })
    }

    /// Returns the canvas height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::StrokeError;

    #[test]
    fn default_is_dataset_canvas() {
        let config = CanvasConfig::default();
        assert!((config.height() - 900.0).abs() < f64::EPSILON);
    }

    #[test]
    fn new_with_valid_height() {
        let config = CanvasConfig::new(1024.0).unwrap();
        assert!((config.height() - 1024.0).abs() < f64::EPSILON);
    }

    #[test]
    fn new_with_zero_height_fails() {
        let result = CanvasConfig::new(0.0);
        assert!(matches!(
            result,
            Err(StrokeError::Config(ConfigError::InvalidHeight(_)))
        ));
    }

    #[test]
    fn new_with_negative_height_fails() {
        assert!(CanvasConfig::new(-900.0).is_err());
    }

    #[test]
    fn new_with_nan_height_fails() {
        assert!(CanvasConfig::new(f64::NAN).is_err());
        assert!(CanvasConfig::new(f64::INFINITY).is_err());
    }
}
