use crate::{
    DecodeError,
    nmea0183::{Decoder, checksum, until_nul},
    nmea_content::{SentenceId, TalkerId},
};

const GGA: &[u8] =
    b"$GPGGA,092751.000,5321.6802,N,00630.3371,W,1,8,1.03,61.7,M,55.3,M,,*75\r\n";

fn split(sentence: &[u8]) -> Result<SentenceId, DecodeError> {
    Decoder::default()
        .split(sentence)
        .map(|frame| frame.sentence_id)
}

#[test]
fn test_split_ok() {
    let frame = Decoder::default().split(GGA).unwrap();

    assert_eq!(frame.talker_id, TalkerId(*b"GP"));
    assert_eq!(frame.sentence_id, SentenceId::GGA);
    assert_eq!(frame.fields.len(), 14);
    assert_eq!(frame.fields.get(0), b"092751.000");
    assert_eq!(frame.fields.get(13), b"");
}

#[test]
fn test_header() {
    let cases: [&[u8]; 4] = [
        b"?GPGGA,092751.000,5321.6802,N,00630.3371,W,1,8,1.03,61.7,M,55.3,M,,*75\r\n",
        b"",
        b"GPGGA*75\r\n",
        b" $GPGGA*75\r\n",
    ];

    for input in cases {
        assert_eq!(
            split(input),
            Err(DecodeError::Header),
            "input: {:?}",
            input.escape_ascii().to_string()
        );
    }
}

#[test]
fn test_truncated() {
    let cases: [&[u8]; 9] = [
        b"$",
        b"$G",
        b"$GP",
        b"$GPGG",
        b"$GPGGA",
        b"$GPGGA,092751.000,5321.6802,N,0063",
        b"$GPGGA,092751.000\r\n",
        b"$GPGGA,*",
        b"$GPGGA,092751.000,5321.6802,N,00630.3371,W,1,8,1.03,61.7,M,55.3,M,,",
    ];

    for input in cases {
        assert_eq!(
            split(input),
            Err(DecodeError::Truncated),
            "input: {:?}",
            input.escape_ascii().to_string()
        );
    }
}

#[test]
fn test_unsupported() {
    let cases: [&[u8]; 4] = [
        b"$PGRME,15.0,M,22.5,M,15.0,M*1B\r\n",
        b"$GPGSV,3,1,11,03,03,111,00*74\r\n",
        b"$GPgga,092751.000*75\r\n",
        b"$GP*75\r\n",
    ];

    for input in cases {
        assert_eq!(
            split(input),
            Err(DecodeError::Unsupported),
            "input: {:?}",
            input.escape_ascii().to_string()
        );
    }
}

#[test]
fn test_nul_terminated_buffer() {
    let mut buffer = [0u8; 128];
    let sentence = b"$GPZDA,201530.00,04,07,2002,00,00*60\r\n";
    buffer[..sentence.len()].copy_from_slice(sentence);

    assert_eq!(split(&buffer), Ok(SentenceId::ZDA));
    assert_eq!(split(b"$GPZDA,2015\0,04*60\r\n"), Err(DecodeError::Truncated));
    assert_eq!(split(b"$GP\0ZDA"), Err(DecodeError::Truncated));
}

#[test]
fn test_field_limit() {
    let mut sentence = b"$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K".to_vec();
    for _ in 0..40 {
        sentence.extend_from_slice(b",X");
    }
    let cc = checksum(&sentence[1..]);
    sentence.extend_from_slice(format!("*{cc:02X}\r\n").as_bytes());

    let frame = Decoder::default().split(&sentence).unwrap();
    assert_eq!(frame.fields.len(), crate::MAX_FIELDS);
    assert_eq!(frame.fields.get(7), b"K");
}

#[test]
fn test_until_nul() {
    assert_eq!(until_nul(b"abc\0def"), b"abc");
    assert_eq!(until_nul(b"abc"), b"abc");
}
