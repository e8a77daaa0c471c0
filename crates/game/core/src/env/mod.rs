//! Sources of nondeterminism injected into the simulation.
//!
//! The simulation never reaches for ambient entropy. Hosts pass a
//! [`RandomSource`] when building a simulation so that spawn sequences are
//! reproducible from a seed or scripted outright in tests.
mod rng;

pub use rng::{FnSource, PcgRng, RandomSource, ScriptedRng};
