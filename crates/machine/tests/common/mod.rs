//! Shared test infrastructure.


use zhost_core::Config;
use zhost_core::soc::Machine;

use mocks::sink::CaptureSink;

/// Builds a machine over a capturing console sink.
///
/// Returns the machine together with a handle to the sink so tests can
/// assert on emitted bytes and flush counts after the run.
pub fn test_machine(config: &Config) -> (Machine, CaptureSink) {
    let sink = CaptureSink::new();
    let machine = Machine::new(config, Box::new(sink.clone()));
    (machine, sink)
}
