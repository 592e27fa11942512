//! # Secant Sampler
//! ## Watching a derivative appear one secant at a time
//!
//! Samples a function over the integer domain `0..size`, takes the secant slope between every pair
//! of neighbouring points, and turns the interior slopes into tangent-like line overlays that can be
//! plotted next to the curve.
//!
//! ```rust
//! use secant_sampler::sampler::{Sample, DEFAULT_SIZE};
//!
//! let sample = Sample::<f64>::parabola(DEFAULT_SIZE).unwrap();
//! assert_eq!(sample.range()[9], 162.0);
//! assert_eq!(sample.slopes().len(), 9);
//! assert_eq!(sample.overlays(DEFAULT_SIZE).count(), 7);
//! ```
//!
//! # Core Concepts
//! - The **domain** is `0, 1, ..., size - 1`, the **range** is `f` applied to it.
//!     - The default function is [`sampler::parabola`], `f(x) = 2x²`
//! - A **slope** is the secant between two neighbouring points, `(f(x2) - f(x1)) / (x2 - x1)`
//!     - There is one fewer slope than there are points
//! - An **overlay** is the line `m·x - m` for the slope `m` at index `i`, drawn against the domain shifted right by `i`
//!     - Overlays exist for `i` in `1..=size-3`
//!
//! # Implementation Details
//!
//! Sequences are `nalgebra` vectors, so every step is elementwise arithmetic.
//! Plotting (the `plotting` feature, on by default) goes through the `plotters` crate and writes PNG files.
//!
//! # Testing utilities
//!
//! Float comparison macros live in [`test`]: [`assert_close!`], [`assert_all_close!`], [`assert_secants!`].
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::needless_range_loop)] // The worst clippy lint
#![allow(clippy::cast_precision_loss)]
#![cfg_attr(docsrs, feature(doc_cfg))]


#[cfg(feature = "plotting")]
#[cfg_attr(docsrs, doc(cfg(feature = "plotting")))]
pub mod plotting;

pub mod display;
pub mod error;
pub mod sampler;
pub mod value;

pub use sampler::{Overlay, Overlays, Sample};

pub use nalgebra;
