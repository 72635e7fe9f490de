#![no_main]

use libfuzzer_sys::fuzz_target;
use derascii::{disassemble, Disassembler, Options};

fuzz_target!(|data: &[u8]| {
    let text = disassemble(data);
    assert_eq!(text, disassemble(data));
    assert!(data.is_empty() || text.ends_with('\n'));

    let shallow = Disassembler::new(Options::new().with_max_depth(2));
    let text = shallow.disassemble(data);
    assert!(text.lines().all(|line| !line.starts_with("        ")));
});
