#![no_main]

use libfuzzer_sys::fuzz_target;
use derascii::decode::parse_element;
use derascii::structure::is_fully_structured;

fuzz_target!(|data: &[u8]| {
    // A single definite length element is structured iff it covers all
    // of the data.
    if let Ok((element, rest)) = parse_element(data) {
        assert_eq!(element.consumed() + rest.len(), data.len());
        if !element.is_indefinite() && rest.is_empty() {
            assert!(is_fully_structured(data));
        }
        if !element.is_indefinite() && is_fully_structured(data) {
            assert!(is_fully_structured(rest));
        }
    }
    else {
        assert!(data.is_empty() || !is_fully_structured(data));
    }
});
