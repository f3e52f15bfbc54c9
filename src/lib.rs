// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Free-fly 3D camera controller for real-time render loops.
//!
//! Each frame, keyboard, mouse-motion, and mouse-wheel input is sampled into
//! a [`input::FrameInput`], applied to a [`camera::Camera`] by the
//! [`camera::CameraController`], and the [`camera::ProjectionBuilder`]
//! derives the projection matrix the renderer draws with.
//!
//! # Key entry points
//!
//! - [`camera::CameraController::update`] - move, look, and zoom one frame
//! - [`camera::ProjectionBuilder::build_projection`] - perspective or
//!   orthographic projection
//! - [`input::KeyboardMouseSampler`] - folds raw events into frame snapshots
//! - [`options::Options`] - TOML-backed configuration
//!
//! # Example
//!
//! ```
//! use flycam::camera::{Camera, CameraController, ProjectionBuilder};
//! use flycam::input::FrameInput;
//!
//! let mut camera = Camera::default();
//! let controller = CameraController::default();
//! let input = FrameInput {
//!     move_forward: 1.0,
//!     ..FrameInput::idle(1.0 / 60.0)
//! };
//! controller.update(&mut camera, &input);
//!
//! let projection = ProjectionBuilder::default()
//!     .build_projection(&camera, 16.0 / 9.0)
//!     .unwrap();
//! assert!(projection.is_finite());
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use error::FlycamError;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
