// ----------------------------------------------------------------------------
// Source line

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    idx: usize,
    raw: String,
    code: String,
}

impl Line {
    pub fn new(idx: usize, raw: &str) -> Self {
        let code = match raw.split_once("//") {
            Some((code, _comment)) => code,
            None => raw,
        };
        Self {
            idx,
            raw: raw.to_string(),
            code: code.trim().to_string(),
        }
    }
    pub fn no(&self) -> usize {
        self.idx + 1
    }
    pub fn raw(&self) -> &str {
        &self.raw
    }
    pub fn code(&self) -> &str {
        &self.code
    }
}

/// Drop blank and comment-only lines, keeping the source line index.
pub fn filter(source: &str) -> Vec<Line> {
    source
        .lines()
        .enumerate()
        .map(|(idx, raw)| Line::new(idx, raw))
        .filter(|line| !line.code.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_blank_and_comment_lines() {
        let src = "// header\n\n   \n@2\n  // indented\nD=A\n";
        let lines = filter(src);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].code(), "@2");
        assert_eq!(lines[0].no(), 4);
        assert_eq!(lines[1].code(), "D=A");
        assert_eq!(lines[1].no(), 6);
    }

    #[test]
    fn strips_inline_comment() {
        let line = Line::new(0, "  D=M   // load x");
        assert_eq!(line.code(), "D=M");
        assert_eq!(line.raw(), "  D=M   // load x");
    }

    #[test]
    fn handles_crlf() {
        let lines = filter("@1\r\n0;JMP\r\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].code(), "0;JMP");
    }

    #[test]
    fn empty_source() {
        assert!(filter("").is_empty());
        assert!(filter("// only\n\n// comments\n").is_empty());
    }
}
