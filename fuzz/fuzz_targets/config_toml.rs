#![no_main]

use hitit::config::types::ConfigFile;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(config) = toml::from_str::<ConfigFile>(input) {
            if let Some(timeout) = config.timeout.as_ref() {
                let _ = timeout.to_duration();
            }
        }
    }
});
