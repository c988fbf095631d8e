#![no_main]

use hitit::stats::Statistics;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let samples: Vec<f64> = data
        .chunks_exact(4)
        .filter_map(|chunk| <[u8; 4]>::try_from(chunk).ok())
        .map(|bytes| f64::from(u32::from_le_bytes(bytes)))
        .collect();

    match Statistics::from_samples(&samples) {
        Ok(stats) => {
            debug_assert!(stats.min <= stats.median && stats.median <= stats.max);
            debug_assert!(stats.min <= stats.mean && stats.mean <= stats.max);
            debug_assert_eq!(stats.count, samples.len());
            debug_assert_eq!(stats.std_dev.is_none(), samples.len() == 1);
            debug_assert!(stats.modes.windows(2).all(|pair| pair[0] < pair[1]));
        }
        Err(_) => debug_assert!(samples.is_empty()),
    }
});
