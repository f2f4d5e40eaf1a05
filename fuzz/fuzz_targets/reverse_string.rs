#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|s: &str| {
    let reversed = samplecalc::reverse_string(s);
    assert_eq!(samplecalc::reverse_string(&reversed), s);
});
