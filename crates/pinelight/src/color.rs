use crate::exit::{CliError, USAGE};

/// Parse `RRGGBB` or `RRGGBBAA` hex (leading `#` optional) into RGBA bytes.
/// A missing alpha channel defaults to fully opaque.
pub fn parse_rgba(input: &str) -> Result<[u8; 4], CliError> {
    let hex = input.strip_prefix('#').unwrap_or(input);
    let bad =
        || CliError::new(USAGE, format!("invalid color '{input}' (expected RRGGBB[AA] hex)"));

    if hex.len() != 6 && hex.len() != 8 {
        return Err(bad());
    }
    let mut channels = [0u8; 4];
    channels[3] = 0xFF;
    for (i, channel) in hex.as_bytes().chunks(2).enumerate() {
        let pair = std::str::from_utf8(channel).map_err(|_| bad())?;
        channels[i] = u8::from_str_radix(pair, 16).map_err(|_| bad())?;
    }
    Ok(channels)
}

/// Pack RGB channels into the `0xRRGGBB` value the strip protocol expects.
pub fn pack_rgb(rgba: [u8; 4]) -> u64 {
    (u64::from(rgba[0]) << 16) | (u64::from(rgba[1]) << 8) | u64::from(rgba[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(parse_rgba("ff8000").unwrap(), [0xFF, 0x80, 0x00, 0xFF]);
    }

    #[test]
    fn parses_eight_digit_hex_with_alpha() {
        assert_eq!(parse_rgba("#10203040").unwrap(), [0x10, 0x20, 0x30, 0x40]);
    }

    #[test]
    fn rejects_wrong_length_and_bad_digits() {
        assert!(parse_rgba("fff").is_err());
        assert!(parse_rgba("gghhii").is_err());
        assert!(parse_rgba("").is_err());
    }

    #[test]
    fn packs_rgb_dropping_alpha() {
        assert_eq!(pack_rgb([0xAB, 0xCD, 0xEF, 0x80]), 0xABCDEF);
    }
}
