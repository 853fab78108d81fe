//! Document number template: `090/ND/<3 digits>/BPKAD`

/// Fixed part in front of the sequence
pub const NOMOR_PREFIX: &str = "090/ND/";
/// Fixed part after the sequence
pub const NOMOR_SUFFIX: &str = "/BPKAD";
/// Width of the user supplied sequence
pub const SEQUENCE_WIDTH: usize = 3;

/// Left-pad a sequence with zeros to the template width.
///
/// Longer input is returned unchanged.
pub fn pad_sequence(sequence: &str) -> String {
    format!("{:0>width$}", sequence.trim(), width = SEQUENCE_WIDTH)
}

/// Assemble the full document number from the stored sequence
pub fn full_number(sequence: &str) -> String {
    format!("{}{}{}", NOMOR_PREFIX, pad_sequence(sequence), NOMOR_SUFFIX)
}

/// Whether the input is exactly a 3-digit sequence
pub fn is_valid_sequence(sequence: &str) -> bool {
    sequence.len() == SEQUENCE_WIDTH && sequence.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_number() {
        assert_eq!(full_number("112"), "090/ND/112/BPKAD");
        assert_eq!(full_number("7"), "090/ND/007/BPKAD");
    }

    #[test]
    fn test_pad_keeps_long_input() {
        assert_eq!(pad_sequence("1234"), "1234");
        assert_eq!(pad_sequence("45"), "045");
    }

    #[test]
    fn test_sequence_validation() {
        assert!(is_valid_sequence("001"));
        assert!(!is_valid_sequence("01"));
        assert!(!is_valid_sequence("0a1"));
        assert!(!is_valid_sequence("1000"));
    }
}
