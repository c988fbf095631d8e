#![no_main]

use clap::Parser;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let mut args = Vec::new();
        args.push("hitit".to_owned());
        for token in input.split_whitespace().take(64) {
            args.push(token.to_owned());
        }
        let arg_refs: Vec<&str> = args.iter().map(|value| value.as_str()).collect();
        if let Ok(parsed) = hitit::args::RunArgs::try_parse_from(arg_refs) {
            debug_assert!(parsed.rate.get() > 0);
            debug_assert!(parsed.seconds.get() > 0);
            debug_assert!(!parsed.request_timeout.is_zero());
        }
    }
});
