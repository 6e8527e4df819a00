use crate::error::EmbeddingError;

/// Parse one `<token> <f1> ... <fD>` line of a vector file.
///
/// Surrounding whitespace is trimmed and fields are split on single spaces,
/// so a doubled space yields an empty field and fails to parse. Blank lines
/// yield `None`. `line_no` is only used for error reporting.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<(&str, Vec<f32>)>, EmbeddingError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let mut fields = line.split(' ');
    let token = fields.next().unwrap_or_default();
    let vector = fields
        .enumerate()
        .map(|(col, field)| {
            field.parse::<f32>().map_err(|err| {
                EmbeddingError::format(
                    line_no,
                    format!("component {} of '{}' ({:?}): {}", col + 1, token, field, err),
                )
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if vector.is_empty() {
        return Err(EmbeddingError::format(
            line_no,
            format!("token '{}' has no vector components", token),
        ));
    }
    Ok(Some((token, vector)))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_line_splits_token_and_vector() {
        let (token, vector) = parse_line("the 0.1 -0.2 3e-1", 1).unwrap().unwrap();
        assert_eq!(token, "the");
        assert_eq!(vector, vec![0.1, -0.2, 0.3]);
    }

    #[test]
    fn test_parse_line_trims_whitespace() {
        let (token, vector) = parse_line("  cat 1 2\t\r", 1).unwrap().unwrap();
        assert_eq!(token, "cat");
        assert_eq!(vector, vec![1.0, 2.0]);
    }

    #[test]
    fn test_parse_line_blank_is_none() {
        assert!(parse_line("", 1).unwrap().is_none());
        assert!(parse_line("   \t", 1).unwrap().is_none());
    }

    #[test]
    fn test_parse_line_bad_number() {
        match parse_line("dog 0.1 zero 0.3", 7) {
            Err(EmbeddingError::Format { line, message }) => {
                assert_eq!(line, 7);
                assert!(message.contains("component 2"));
            }
            other => panic!("expected format error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_line_double_space_is_an_error() {
        assert!(parse_line("dog 0.1  0.3", 1).is_err());
    }

    #[test]
    fn test_parse_line_token_only_is_an_error() {
        assert!(parse_line("lonely", 3).is_err());
    }

    #[test]
    fn test_parse_line_keeps_punctuation_tokens() {
        let (token, _) = parse_line(", 0.5 0.5", 1).unwrap().unwrap();
        assert_eq!(token, ",");
    }
}
