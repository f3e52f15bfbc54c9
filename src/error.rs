//! Crate-level error types.

use std::fmt;

/// Errors produced by the flycam crate.
#[derive(Debug)]
pub enum FlycamError {
    /// Vertical field of view outside the open interval (0, 180) degrees.
    InvalidFov(f32),
    /// Aspect ratio that is not a positive finite number.
    InvalidAspectRatio(f32),
    /// Clip planes with `znear <= 0` or `zfar <= znear`.
    InvalidClipPlanes {
        /// Near clipping plane distance.
        znear: f32,
        /// Far clipping plane distance.
        zfar: f32,
    },
    /// Camera position and target coincide, leaving no view direction.
    DegenerateView,
    /// Up vector is zero or parallel to the view direction.
    ParallelUp,
    /// Controller or projection option outside its valid range.
    InvalidOption(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for FlycamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFov(fovy) => {
                write!(f, "field of view {fovy} is outside (0, 180) degrees")
            }
            Self::InvalidAspectRatio(aspect) => {
                write!(f, "aspect ratio {aspect} must be positive and finite")
            }
            Self::InvalidClipPlanes { znear, zfar } => {
                write!(f, "invalid clip planes: near {znear}, far {zfar}")
            }
            Self::DegenerateView => {
                write!(f, "camera position and target coincide")
            }
            Self::ParallelUp => {
                write!(f, "up vector is zero or parallel to the view direction")
            }
            Self::InvalidOption(msg) => write!(f, "invalid option: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for FlycamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FlycamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
