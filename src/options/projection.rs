use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FlycamError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Projection", inline)]
#[serde(default)]
/// Clip planes shared by perspective and orthographic projections.
pub struct ProjectionOptions {
    /// Near clipping plane distance.
    #[schemars(title = "Near Clip", range(min = 0.001, max = 10.0))]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(title = "Far Clip", range(min = 1.0, max = 100_000.0))]
    pub zfar: f32,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            znear: 0.01,
            zfar: 1000.0,
        }
    }
}

impl ProjectionOptions {
    /// Require `0 < znear < zfar`, both finite.
    pub fn validate(&self) -> Result<(), FlycamError> {
        let ok = self.znear.is_finite()
            && self.zfar.is_finite()
            && self.znear > 0.0
            && self.zfar > self.znear;
        if ok {
            Ok(())
        } else {
            Err(FlycamError::InvalidClipPlanes {
                znear: self.znear,
                zfar: self.zfar,
            })
        }
    }
}
