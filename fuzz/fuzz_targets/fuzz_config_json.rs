//! Fuzz target: `SystemConfig::from_json`
//!
//! Any document that parses must also pass validation, and must survive a
//! postcard round-trip unchanged.
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use intersection::config::SystemConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    let Ok(config) = SystemConfig::from_json(text) else {
        return;
    };
    assert!(config.validate().is_ok());

    if let Ok(bytes) = config.to_bytes() {
        assert_eq!(SystemConfig::from_bytes(&bytes), Ok(config));
    }
});
