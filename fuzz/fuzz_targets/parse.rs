#![no_main]

use libfuzzer_sys::fuzz_target;
use logtypes_core::LogFloat;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(value) = text.parse::<LogFloat>() {
        // display must parse back to the same bits
        let reparsed: LogFloat = value.to_string().parse().expect("display form parses");
        assert!(
            reparsed.log().to_bits() == value.log().to_bits()
                || (reparsed.is_nan() && value.is_nan())
        );
    }
});
