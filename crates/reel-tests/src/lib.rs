//! Integration test crate for Reel.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It drives the carousel end to end with simulated media.

#[cfg(test)]
mod support;

#[cfg(test)]
mod scenario;

#[cfg(test)]
mod readiness;

#[cfg(test)]
mod loading;
