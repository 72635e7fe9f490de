//! Tests for the disassembler.
#![cfg(test)]

use proptest::prelude::*;
use crate::format::Hex;
use crate::options::Options;
use super::*;

fn lines(data: &[u8]) -> Vec<String> {
    disassemble(data).lines().map(Into::into).collect()
}

fn lines_with(options: Options, data: &[u8]) -> Vec<String> {
    Disassembler::new(options).disassemble(data)
        .lines().map(Into::into).collect()
}

/// Returns the minimal content octets of an INTEGER with the given value.
fn integer_content(value: i64) -> Vec<u8> {
    let mut res = value.to_be_bytes().to_vec();
    while res.len() > 1 && (
        (res[0] == 0x00 && res[1] & 0x80 == 0)
        || (res[0] == 0xff && res[1] & 0x80 != 0)
    ) {
        res.remove(0);
    }
    res
}

fn encode_integer(value: i64) -> Vec<u8> {
    let content = integer_content(value);
    let mut res = vec![0x02, content.len() as u8];
    res.extend_from_slice(&content);
    res
}

/// Checks that a line is one of the forms of the textual rendering.
fn is_grammar_line(line: &str) -> bool {
    let line = line.trim_start_matches("  ");
    if line.starts_with(' ') || line.is_empty() {
        return false
    }
    let is_hex = |s: &str| {
        s.len() >= 2 && s.starts_with('`') && s.ends_with('`')
            && s[1..s.len() - 1].bytes().all(|ch| {
                ch.is_ascii_digit() || (b'a'..=b'f').contains(&ch)
            })
    };
    line == "}"
        || line.starts_with("# ")
        || is_hex(line)
        || (line.len() >= 2 && line.starts_with('"') && line.ends_with('"'))
        || line.ends_with(" {}")
        || line.ends_with(" {")
        || line.ends_with(" `80`")
        || (line.contains(" { ") && line.ends_with(" }"))
}


//------------ Scenarios -----------------------------------------------------

#[test]
fn integer() {
    assert_eq!(lines(b"\x02\x01\x05"), ["INTEGER { 5 }"]);
    assert_eq!(lines(b"\x02\x01\xff"), ["INTEGER { -1 }"]);
    assert_eq!(lines(b"\x02\x03\xfe\x79\x60"), ["INTEGER { -100000 }"]);
    assert_eq!(lines(b"\x02\x03\x01\x86\xa1"), ["INTEGER { `0186a1` }"]);
    assert_eq!(lines(b"\x02\x02\x00\x05"), ["INTEGER { `0005` }"]);
    assert_eq!(lines(b"\x02\x00"), ["INTEGER {}"]);
}

#[test]
fn boolean() {
    assert_eq!(lines(b"\x01\x01\x00"), ["BOOLEAN { FALSE }"]);
    assert_eq!(lines(b"\x01\x01\xff"), ["BOOLEAN { TRUE }"]);
    assert_eq!(lines(b"\x01\x01\x7f"), ["BOOLEAN { `7f` }"]);
    assert_eq!(lines(b"\x01\x02\x00\x00"), ["BOOLEAN { `0000` }"]);
}

#[test]
fn sequence() {
    assert_eq!(
        lines(b"\x30\x03\x02\x01\x05"),
        ["SEQUENCE {", "  INTEGER { 5 }", "}"]
    );
    assert_eq!(lines(b"\x30\x00"), ["SEQUENCE {}"]);
    assert_eq!(
        lines(b"\x30\x07\x31\x03\x02\x01\x05\x05\x00"),
        ["SEQUENCE {", "  SET {", "    INTEGER { 5 }", "  }", "  NULL {}", "}"]
    );
}

#[test]
fn indefinite_length() {
    assert_eq!(
        lines(b"\x30\x80\x02\x01\x05\x00\x00"),
        ["SEQUENCE `80`", "  INTEGER { 5 }", "`0000`"]
    );
    assert_eq!(
        lines(b"\x30\x80\x30\x80\x02\x01\x05\x00\x00\x00\x00"),
        [
            "SEQUENCE `80`",
            "  SEQUENCE `80`",
            "    INTEGER { 5 }",
            "  `0000`",
            "`0000`",
        ]
    );
    // Values after the end-of-contents marker continue at the outer level.
    assert_eq!(
        lines(b"\x30\x80\x00\x00\x05\x00"),
        ["SEQUENCE `80`", "`0000`", "NULL {}"]
    );
    // A missing end-of-contents marker just ends the block.
    assert_eq!(
        lines(b"\x30\x80\x02\x01\x05"),
        ["SEQUENCE `80`", "  INTEGER { 5 }"]
    );
}

#[test]
fn end_of_contents_outside_indefinite() {
    assert_eq!(lines(b"\x00\x00"), ["[UNIVERSAL 0 PRIMITIVE] {}"]);
}

#[test]
fn nested_octet_string() {
    assert_eq!(
        lines(b"\x04\x03\x02\x01\x05"),
        ["OCTET_STRING {", "  INTEGER { 5 }", "}"]
    );
    assert_eq!(lines(b"\x04\x05hello"), ["OCTET_STRING { \"hello\" }"]);
    assert_eq!(lines(b"\x04\x02\x01\x02"), ["OCTET_STRING { `0102` }"]);
}

#[test]
fn bit_string() {
    assert_eq!(
        lines(b"\x03\x04\x00\x02\x01\x05"),
        ["BIT_STRING {", "  `00`", "  INTEGER { 5 }", "}"]
    );
    assert_eq!(lines(b"\x03\x02\x00\xff"), ["BIT_STRING { `00ff` }"]);
    assert_eq!(lines(b"\x03\x01\x00"), ["BIT_STRING { `00` }"]);
    // Non-zero unused bits prevent nesting.
    assert_eq!(
        lines(b"\x03\x04\x01\x02\x01\x05"), ["BIT_STRING { `01020105` }"]
    );
}

#[test]
fn object_identifier() {
    assert_eq!(
        lines(b"\x06\x09\x2a\x86\x48\x86\xf7\x0d\x01\x01\x0b"),
        ["# sha256WithRSAEncryption", "OBJECT_IDENTIFIER { 1.2.840.113549.1.1.11 }"]
    );
    assert_eq!(
        lines(b"\x06\x03\x2b\x06\x01"), ["OBJECT_IDENTIFIER { 1.3.6.1 }"]
    );
    assert_eq!(lines(b"\x06\x01\x80"), ["OBJECT_IDENTIFIER { `80` }"]);
    // Arcs beyond 32 bits can't be read back and stay a literal.
    assert_eq!(
        lines(b"\x06\x06\x2b\x90\x80\x80\x80\x00"),
        ["OBJECT_IDENTIFIER { `2b9080808000` }"]
    );
    assert_eq!(
        lines(b"\x06\x06\x2b\x8f\xff\xff\xff\x7f"),
        ["OBJECT_IDENTIFIER { 1.3.4294967295 }"]
    );
}

#[test]
fn tag_names() {
    assert_eq!(lines(b"\x80\x01\x41"), ["[0 PRIMITIVE] { \"A\" }"]);
    assert_eq!(
        lines(b"\xa0\x03\x02\x01\x05"), ["[0] {", "  INTEGER { 5 }", "}"]
    );
    assert_eq!(lines(b"\x24\x00"), ["[OCTET_STRING CONSTRUCTED] {}"]);
    assert_eq!(lines(b"\x10\x00"), ["[SEQUENCE PRIMITIVE] {}"]);
    assert_eq!(lines(b"\x5f\x1f\x00"), ["[APPLICATION 31 PRIMITIVE] {}"]);
    assert_eq!(lines(b"\x0c\x02hi"), ["UTF8String { \"hi\" }"]);
}

#[test]
fn unparsable_data() {
    assert_eq!(lines(b"\x1f\x05\x00"), ["`1f0500`"]);
    assert_eq!(lines(b"\x02\x01\x05\xff"), ["INTEGER { 5 }", "`ff`"]);
    assert_eq!(
        lines(b"\x30\x04\x02\x01\x05\xff"),
        ["SEQUENCE {", "  INTEGER { 5 }", "  `ff`", "}"]
    );
    assert_eq!(lines(b"this is text"), ["\"this is text\""]);
    assert_eq!(lines(b""), Vec::<String>::new());
}

#[test]
fn options() {
    assert_eq!(
        lines_with(Options::new().with_integer_cutoff(10), b"\x02\x01\x0b"),
        ["INTEGER { `0b` }"]
    );
    assert_eq!(
        lines_with(
            Options::new().with_printable_threshold(0.), b"\x04\x02\x00\x41"
        ),
        ["OCTET_STRING { \"\\x00A\" }"]
    );
    assert_eq!(lines(b"\x04\x02\x00\x41"), ["OCTET_STRING { `0041` }"]);
}

#[test]
fn depth_guard() {
    let options = Options::new().with_max_depth(1);
    assert_eq!(
        lines_with(options, b"\x30\x05\x30\x03\x02\x01\x05"),
        ["SEQUENCE {", "  SEQUENCE {", "    `020105`", "  }", "}"]
    );
    assert_eq!(
        lines_with(options, b"\x30\x80\x30\x80\x02\x01\x05\x00\x00\x00\x00"),
        [
            "SEQUENCE `80`",
            "  SEQUENCE `80`",
            "    `02010500000000`",
        ]
    );

    // No nesting into primitive content at the maximum depth.
    let options = Options::new().with_max_depth(0);
    assert_eq!(
        lines_with(options, b"\x04\x03\x02\x01\x05"),
        ["OCTET_STRING { `020105` }"]
    );
    assert_eq!(
        lines_with(options, b"\x03\x04\x00\x02\x01\x05"),
        ["BIT_STRING { `00020105` }"]
    );
}

#[test]
fn deep_nesting_is_bounded() {
    let mut data = Vec::new();
    for _ in 0..200 {
        data.extend_from_slice(b"\x30\x80");
    }
    let text = disassemble(&data);
    assert!(text.lines().all(is_grammar_line));
    assert!(
        text.lines().count() <= Options::DEFAULT_MAX_DEPTH + 2
    );
}


//------------ Properties ----------------------------------------------------

proptest! {
    #[test]
    fn small_integers_are_decimal(value in -100_000i64..=100_000) {
        prop_assert_eq!(
            disassemble(&encode_integer(value)),
            format!("INTEGER {{ {} }}\n", value)
        );
    }

    #[test]
    fn large_integers_are_hex(
        value in prop_oneof![i64::MIN..-100_000i64, 100_001i64..=i64::MAX]
    ) {
        prop_assert_eq!(
            disassemble(&encode_integer(value)),
            format!("INTEGER {{ {} }}\n", Hex(&integer_content(value)))
        );
    }

    #[test]
    fn arbitrary_data(data in proptest::collection::vec(any::<u8>(), 0..128)) {
        let text = disassemble(&data);
        prop_assert_eq!(&text, &disassemble(&data));
        for line in text.lines() {
            prop_assert!(is_grammar_line(line), "bad line {:?}", line);
        }
        let opened = text.lines().filter(|line| line.ends_with(" {")).count();
        let closed = text.lines().filter(|line| {
            line.trim_start() == "}"
        }).count();
        prop_assert_eq!(opened, closed);
    }

    #[test]
    fn nested_sequences(depth in 0usize..100) {
        let mut data = b"\x05\x00".to_vec();
        for _ in 0..depth {
            let mut outer = vec![0x30];
            // Keep the length in the long form where necessary.
            if data.len() < 0x80 {
                outer.push(data.len() as u8);
            }
            else {
                outer.extend_from_slice(&[0x81, data.len() as u8]);
            }
            outer.extend_from_slice(&data);
            data = outer;
        }
        let text = disassemble(&data);
        for line in text.lines() {
            prop_assert!(is_grammar_line(line), "bad line {:?}", line);
        }
    }
}
