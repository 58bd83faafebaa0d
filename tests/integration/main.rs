//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the governor against
//! mock ports.  All tests run on the host with no real vehicle attached.

mod governor_tests;
mod mock_ports;
mod shared_tests;
