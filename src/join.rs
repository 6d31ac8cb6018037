//! Join engine: concatenates a range of lines into one physical line with a
//! glue string between them.

/// Join extracted lines with glue. The first line is kept verbatim; every
/// following line is trimmed first (it only carries source indentation).
/// All embedded line terminators are stripped from the result.
pub fn join_lines(lines: &[String], glue: &str) -> String {
    let mut joined = String::new();
    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            joined.push_str(line.trim());
        } else {
            joined.push_str(line);
        }
        if index < lines.len() - 1 {
            joined.push_str(glue);
        }
    }

    joined.chars().filter(|&c| c != '\n' && c != '\r').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_join_two_lines_with_glue() {
        let result = join_lines(&lines(&["  foo\n", "  bar\n"]), ", ");
        // First line keeps its indentation, second is trimmed
        assert_eq!(result, "  foo, bar");
    }

    #[test]
    fn test_join_empty_glue() {
        assert_eq!(join_lines(&lines(&["a\n", "b\n", "c\n"]), ""), "abc");
    }

    #[test]
    fn test_join_strips_all_terminators() {
        let result = join_lines(&lines(&["a\n", "\n", "b\n"]), "-");
        assert_eq!(result, "a--b");
    }

    #[test]
    fn test_join_no_trailing_glue() {
        assert_eq!(join_lines(&lines(&["a\n", "b\n"]), ";"), "a;b");
    }
}
