//! Tests for the hexlist module.

use super::*;

fn token(text: &str) -> Token<'_> {
    Token {
        index: 0,
        offset: 0,
        text,
    }
}

#[test]
fn test_tokenize_offsets() {
    let tokens: Vec<_> = tokenize("ff,0a,3").collect();
    assert_eq!(tokens.len(), 3);

    assert_eq!(tokens[0].text, "ff");
    assert_eq!(tokens[0].offset, 0);

    assert_eq!(tokens[1].text, "0a");
    assert_eq!(tokens[1].index, 1);
    assert_eq!(tokens[1].offset, 3);

    assert_eq!(tokens[2].text, "3");
    assert_eq!(tokens[2].offset, 6);
}

#[test]
fn test_tokenize_empty_input_yields_one_blank_token() {
    let tokens: Vec<_> = tokenize("").collect();
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is_blank());
}

#[test]
fn test_parse_token_accepted_forms() {
    assert_eq!(parse_token(&token("0")).unwrap(), 0x00);
    assert_eq!(parse_token(&token("ff")).unwrap(), 0xff);
    assert_eq!(parse_token(&token("FF")).unwrap(), 0xff);
    assert_eq!(parse_token(&token("a")).unwrap(), 0x0a);
    assert_eq!(parse_token(&token("0x7f")).unwrap(), 0x7f);
    assert_eq!(parse_token(&token("0X7F")).unwrap(), 0x7f);
    assert_eq!(parse_token(&token("+10")).unwrap(), 0x10);
    assert_eq!(parse_token(&token("-0")).unwrap(), 0x00);
    assert_eq!(parse_token(&token(" 3a\r\n")).unwrap(), 0x3a);
    assert_eq!(parse_token(&token("000ff")).unwrap(), 0xff);
}

#[test]
fn test_parse_token_rejects_non_hex() {
    for text in ["zz", "", "   ", "0x", "-", "+", "f f", "0xg1", "--1", "1_0", "ÿ"] {
        match parse_token(&token(text)) {
            Err(HexBinError::Parse { token, .. }) => assert_eq!(token, text.trim()),
            other => panic!("expected parse error for {:?}, got {:?}", text, other),
        }
    }
}

#[test]
fn test_parse_token_rejects_out_of_range() {
    for text in ["100", "256", "-1", "-ff", "ffffffffffffffffffffffff"] {
        match parse_token(&token(text)) {
            Err(HexBinError::Range { token, .. }) => assert_eq!(token, text),
            other => panic!("expected range error for {:?}, got {:?}", text, other),
        }
    }
}

#[test]
fn test_errors_carry_trimmed_token_text() {
    match decode("00, zz \n", TrailingSeparator::Allow) {
        Err(HexBinError::Parse { token, offset, .. }) => {
            assert_eq!(token, "zz");
            assert_eq!(offset, 3);
        }
        other => panic!("expected parse error, got {:?}", other),
    }

    match decode("00,\t1ff ", TrailingSeparator::Allow) {
        Err(HexBinError::Range { token, .. }) => assert_eq!(token, "1ff"),
        other => panic!("expected range error, got {:?}", other),
    }
}

#[test]
fn test_decode_preserves_order() {
    let bytes = decode("00,61,73,6d,01,00,00,00", TrailingSeparator::Allow).unwrap();
    assert_eq!(bytes, vec![0x00, 0x61, 0x73, 0x6d, 0x01, 0x00, 0x00, 0x00]);
}

#[test]
fn test_decode_length_matches_token_count() {
    let text = "1,2,3,4,5,6,7,8,9,a,b,c";
    let bytes = decode(text, TrailingSeparator::Reject).unwrap();
    assert_eq!(bytes.len(), text.split(',').count());
}

#[test]
fn test_decode_trailing_separator() {
    assert_eq!(
        decode("ff,0a,3,", TrailingSeparator::Allow).unwrap(),
        vec![0xff, 0x0a, 0x03]
    );
    assert_eq!(
        decode("ff,0a,3,\n", TrailingSeparator::Allow).unwrap(),
        vec![0xff, 0x0a, 0x03]
    );

    match decode("ff,0a,3,", TrailingSeparator::Reject) {
        Err(HexBinError::Parse { index, offset, .. }) => {
            assert_eq!(index, 3);
            assert_eq!(offset, 8);
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_decode_empty_input() {
    assert!(decode("", TrailingSeparator::Allow).unwrap().is_empty());
    assert!(decode(" \n", TrailingSeparator::Allow).unwrap().is_empty());
    assert!(matches!(
        decode("", TrailingSeparator::Reject),
        Err(HexBinError::Parse { index: 0, .. })
    ));
}

#[test]
fn test_decode_blank_token_in_middle_is_error() {
    // Only one trailing blank token is forgiven
    assert!(matches!(
        decode("ff,,00", TrailingSeparator::Allow),
        Err(HexBinError::Parse { index: 1, offset: 3, .. })
    ));
    assert!(matches!(
        decode("ff,,", TrailingSeparator::Allow),
        Err(HexBinError::Parse { index: 1, .. })
    ));
}

#[test]
fn test_decode_reports_first_bad_token() {
    assert!(matches!(
        decode("zz,01", TrailingSeparator::Allow),
        Err(HexBinError::Parse { index: 0, .. })
    ));
    assert!(matches!(
        decode("256,00", TrailingSeparator::Allow),
        Err(HexBinError::Range { index: 0, .. })
    ));
    assert!(matches!(
        decode("00,01,1ff", TrailingSeparator::Allow),
        Err(HexBinError::Range { index: 2, .. })
    ));
}

#[test]
fn test_decode_multiline_dump() {
    let text = "00,61,73,6d,\n01,00,00,00,\n";
    let bytes = decode(text, TrailingSeparator::Allow).unwrap();
    assert_eq!(bytes, b"\0asm\x01\0\0\0");
}

#[test]
fn test_encode_options() {
    let bytes = [0x00, 0x0a, 0xab, 0xff];

    assert_eq!(encode(&bytes, &EncodeOptions::default()), "00,0a,ab,ff");
    assert_eq!(
        encode(
            &bytes,
            &EncodeOptions {
                case: LetterCase::Upper,
                zero_pad: true
            }
        ),
        "00,0A,AB,FF"
    );
    assert_eq!(
        encode(
            &bytes,
            &EncodeOptions {
                case: LetterCase::Lower,
                zero_pad: false
            }
        ),
        "0,a,ab,ff"
    );
    assert_eq!(encode(&[], &EncodeOptions::default()), "");
}

#[test]
fn test_round_trip_all_byte_values() {
    let bytes: Vec<u8> = (0..=255).collect();

    for case in [LetterCase::Lower, LetterCase::Upper] {
        for zero_pad in [true, false] {
            let text = encode(&bytes, &EncodeOptions { case, zero_pad });
            let decoded = decode(&text, TrailingSeparator::Reject).unwrap();
            assert_eq!(decoded, bytes, "case {:?}, zero_pad {}", case, zero_pad);
        }
    }
}
