//! Fuzz target: `SystemConfig::from_json`
//!
//! Feeds arbitrary bytes to the config parser and verifies:
//! - No panics under any input
//! - Every config it accepts also passes `validate()`
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use libfuzzer_sys::fuzz_target;
use relayloop::config::SystemConfig;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    if let Ok(config) = SystemConfig::from_json(text) {
        assert_eq!(config.validate(), Ok(()));
    }
});
