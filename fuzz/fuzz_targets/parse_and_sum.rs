#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &str| {
    // Must never panic; a reported segment must be where its span says
    if let Err(err) = samplecalc::parse_and_sum(input) {
        assert_eq!(&input[err.span.range()], err.segment);
        let _ = samplecalc::diagnostics::render_parse_error(input, &err);
    }
});
