//! Property test suite entry point.

mod filter_properties;
