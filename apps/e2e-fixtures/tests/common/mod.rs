#![allow(dead_code)]

// tests/common/mod.rs

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    test_support::load_test_env();
    test_support::logging::init();
}
