//! Projectile model.
//!
//! The model is a small, pure function so that fitting, sampling and plotting
//! code all evaluate the same formula.

pub mod kinematics;

pub use kinematics::*;
