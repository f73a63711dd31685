#![cfg_attr(unix, doc = include_str!("../README.md"))]
#![cfg_attr(windows, doc = include_str!("..\\README.md"))]

// Apply the `no_std` attribute unconditionally, to require explicit conditional `use` of
// non-`core` items.
#![no_std]
// Our workspace ensures that unstable Rust features are denied by default.  But allow if our
// package-feature "anticipate" is activated.
#![cfg_attr(feature = "anticipate", allow(unstable_features))]
// When our package-feature "anticipate" is activated, use `core::error::Error` even if it hasn't
// been detected as stable.
#![cfg_attr(
    all(feature = "anticipate", not(rust_lib_feature = "error_in_core")),
    feature(error_in_core)
)]
// Warn about this one but avoid annoying hits for dev-dependencies.
#![cfg_attr(test, allow(unused_crate_dependencies))]


#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;


pub mod domain;
pub use domain::{
    Discrete,
    Domain,
    Greatest,
    Least,
    Measure,
    Step,
};

pub mod errors;
pub use errors::ArgumentError;

#[cfg(feature = "alloc")]
pub mod guard;

#[cfg(feature = "alloc")]
mod collection;

pub mod range;
pub use range::{
    ContinuousRange,
    DiscreteRange,
    Range,
};

pub mod interval;
pub use interval::{
    Endpoint,
    EndpointType,
    Interval,
};
