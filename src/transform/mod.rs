//! Image transforms that commute with share reconstruction.

pub mod downscale;

pub use downscale::downscale;
