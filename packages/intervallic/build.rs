//! Set `cfg` options according to probing which features are enabled in the Rust compiler,
//! language, and library, without reference to versions of Rust.
//!
//! This detects when previously-unstable features become stabilized, based on feature presence
//! and not on Rust version.  This lets `core::error::Error` be used as soon as it is available,
//! without a `std` dependency.


fn main()
{
    cfg_rust_features::emit!(["error_in_core"]).unwrap();
}
