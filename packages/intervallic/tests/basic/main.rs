#![cfg(test)] // Satisfy the `clippy::tests_outside_test_module` lint.
#![cfg_attr(test, allow(unused_crate_dependencies))]
#![allow(
    non_snake_case,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc
)]

mod range
{
    mod continuous;
    mod discrete;
}

mod interval;


#[cfg(feature = "chrono")]
mod date_time;
