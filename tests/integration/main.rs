//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that drives the whole `AppService`
//! against mock adapters on a simulated clock.  All tests run on the host
//! with no real hardware required.

mod mock_hw;
mod relay_loop_tests;
mod shutdown_tests;
