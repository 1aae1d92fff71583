use crate::error::{FlashnotesError, Result};
use crate::registry::HELP_USAGE;

/// Split a raw input line into its command word and the verbatim argument string.
///
/// The line is trimmed first. The arguments keep their own leading whitespace, so
/// `"add  q/x"` yields `("add", "  q/x")`.
pub fn split_command(input: &str) -> Result<(&str, &str)> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FlashnotesError::MalformedInput { usage: HELP_USAGE });
    }
    Ok(match trimmed.find(char::is_whitespace) {
        Some(at) => trimmed.split_at(at),
        None => (trimmed, ""),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn bare_word() {
        assert_eq!(split_command("help").unwrap(), ("help", ""));
    }

    #[test]
    fn arguments_keep_leading_space() {
        assert_eq!(
            split_command("  add q/What? a/That  ").unwrap(),
            ("add", " q/What? a/That")
        );
        assert_eq!(split_command("delete\t2").unwrap(), ("delete", "\t2"));
    }

    #[test]
    fn blank_input_is_malformed() {
        for input in ["", "   ", "\n\t"] {
            let err = split_command(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedInput);
            assert!(err.to_string().contains("help"));
        }
    }

    #[test]
    fn words_are_not_case_folded() {
        assert_eq!(split_command("HELP").unwrap().0, "HELP");
    }
}
