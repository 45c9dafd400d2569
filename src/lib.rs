#![cfg_attr(not(test), no_std)]

//! Small, allocation-free 2D/3D vector types with pitch/yaw direction
//! conversions.
//!
//! Every type is generic over its element type. Arithmetic only needs the
//! matching `core::ops` trait on the element, so integer vectors work for
//! `%`, ordering, `dot` and `cross`. Lengths, normalization and angles need
//! [`num_traits::Float`].
//!
//! # Example
//!
//! ```rust
//! use vecmath::{Vector2, Vector3};
//!
//! let mut cell = Vector2::new(7, -3);
//! cell %= Vector2::new(4, 4);
//! assert_eq!(cell, Vector2::new(3, -3));
//!
//! let up = Vector3::new(1, 0, 0).cross(&Vector3::new(0, 0, -1));
//! assert_eq!(up, Vector3::new(0, 1, 0));
//! assert!(Vector3::new(0, 0, 9) < up);
//! ```
//!
//! See [`angle`] for the pitch/yaw conversions.
//!
//! # Features
//!
//! - `std` (default): float math from the platform.
//! - `libm`: pure-Rust float math for targets without `std`.
//! - `ufmt`, `defmt`: derive `uDebug` and `defmt::Format` on all types.
//!
//! Everything that needs [`num_traits::Float`] (`length`, `normalized`,
//! `normalize`, `try_normalized`, `angle` and the [`angle`] module) is only
//! compiled when `std` or `libm` is enabled. With neither, integer and float
//! vectors keep their arithmetic, `%`, ordering, `square_length`, `dot` and
//! `cross`.

#[cfg(any(feature = "std", feature = "libm"))]
pub mod angle;
mod pitch_yaw;
mod vector2;
mod vector3;

#[cfg(any(feature = "std", feature = "libm"))]
pub use angle::{pitch_yaw_from_vector3, vector2_from_angle, vector3_from_pitch_yaw};
pub use pitch_yaw::PitchYaw;
pub use vector2::Vector2;
pub use vector3::Vector3;

pub type F32x2 = Vector2<f32>;
pub type F32x3 = Vector3<f32>;
pub type F64x2 = Vector2<f64>;
pub type F64x3 = Vector3<f64>;
