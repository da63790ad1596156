use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;
use tb_core::DragReconciler;
use tb_core::drag::DEFAULT_ACTIVATION_DISTANCE;

pub const MIN_ACTIVATION_DISTANCE_PX: f64 = 0.0;
pub const MAX_ACTIVATION_DISTANCE_PX: f64 = 50.0;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Pointer travel before a press turns into a drag
    pub activation_distance_px: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            activation_distance_px: DEFAULT_ACTIVATION_DISTANCE,
        }
    }
}

impl DragConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_ACTIVATION_DISTANCE_PX..=MAX_ACTIVATION_DISTANCE_PX)
            .contains(&self.activation_distance_px)
        {
            return Err(ConfigError::config(format!(
                "drag.activation_distance_px must be {}-{}, got {}",
                MIN_ACTIVATION_DISTANCE_PX, MAX_ACTIVATION_DISTANCE_PX, self.activation_distance_px
            )));
        }
        Ok(())
    }

    pub fn reconciler(&self) -> DragReconciler {
        DragReconciler::new(self.activation_distance_px)
    }
}
