use crate::{
    DecodeError,
    nmea0183::{Decoder, checksum, hex_byte},
    nmea_content::SentenceId,
};

const GGA: &[u8] =
    b"$GPGGA,092751.000,5321.6802,N,00630.3371,W,1,8,1.03,61.7,M,55.3,M,,*75\r\n";

fn split(sentence: &[u8]) -> Result<SentenceId, DecodeError> {
    Decoder::default()
        .split(sentence)
        .map(|frame| frame.sentence_id)
}

#[test]
fn test_checksum_mismatch() {
    assert_eq!(
        split(b"$GPGGA,092751.000,5321.6802,N,00630.3371,W,1,8,1.03,61.7,M,55.3,M,,*??\r\n"),
        Err(DecodeError::Checksum {
            expected: 0x75,
            found: 0x00
        })
    );
    assert_eq!(
        split(b"$GPGGA,092751.000,5321.6802,N,00630.3371,W,1,8,1.03,61.7,M,55.3,M,,*FF\r\n"),
        Err(DecodeError::Checksum {
            expected: 0x75,
            found: 0xFF
        })
    );
    assert_eq!(
        split(b"$GPGGA,092751.000,5321.6802,N,00630.3371,W,1,8,1.03,61.7,M,55.3,M,,*7?\r\n"),
        Err(DecodeError::Checksum {
            expected: 0x75,
            found: 0x70
        })
    );
}

#[test]
fn test_checksum_lowercase() {
    assert_eq!(
        split(b"$GPZDA,201530.00,04,07,2002,00,00*60\r\n"),
        Ok(SentenceId::ZDA)
    );
    assert_eq!(
        split(b"$GPGLL,4916.45,N,12311.12,W,225444,A,*1d\r\n"),
        Ok(SentenceId::GLL)
    );
}

#[test]
fn test_checksum_single_digit() {
    assert_eq!(
        split(b"$GPGGA,*7\0"),
        Err(DecodeError::Checksum {
            expected: 0x7A,
            found: 0x70
        })
    );
    assert_eq!(
        split(b"$GPGGA,*7"),
        Err(DecodeError::Checksum {
            expected: 0x7A,
            found: 0x70
        })
    );
    assert_eq!(split(b"$GPGGA,AK*7"), Err(DecodeError::Footer));
    assert_eq!(split(b"$GPGGA,*"), Err(DecodeError::Truncated));
}

#[test]
fn test_corrupted_byte() {
    let star = GGA.len() - 5;

    for position in 1..GGA.len() {
        let mut corrupted = GGA.to_vec();
        corrupted[position] ^= 0x01;

        let expected = match position {
            3..=5 => Err(DecodeError::Unsupported),
            p if p < star => Err(DecodeError::Checksum {
                expected: 0x74,
                found: 0x75,
            }),
            p if p == star => Err(DecodeError::Truncated),
            p if p == star + 1 => Err(DecodeError::Checksum {
                expected: 0x75,
                found: 0x65,
            }),
            p if p == star + 2 => Err(DecodeError::Checksum {
                expected: 0x75,
                found: 0x74,
            }),
            _ => Err(DecodeError::Footer),
        };

        assert_eq!(
            split(&corrupted),
            expected,
            "corrupted byte {position}: {:?}",
            corrupted.escape_ascii().to_string()
        );
    }
}

#[test]
fn test_helpers() {
    assert_eq!(checksum(b"GPZDA,201530.00,04,07,2002,00,00"), 0x60);
    assert_eq!(checksum(b"GPGGA,"), 0x7A);
    assert_eq!(hex_byte(b"7Fxyz"), Ok((&b"xyz"[..], 0x7F)));
    assert_eq!(hex_byte(b"zz"), Ok((&b""[..], 0x00)));
    assert_eq!(hex_byte(b"7"), Ok((&b""[..], 0x70)));
    assert!(hex_byte(b"").is_err());
}
