//! Example applications for the Planform framework.
//!
//! See the `examples/` directory; each example is run with
//! `cargo run --example <name>`.
