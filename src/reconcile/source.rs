/// A file's text split into lines, remembering how to join them back.
///
/// Line terminators are stripped so markers and blank-line checks see plain
/// text; [`SourceText::render`] restores the file's newline style and its
/// trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub lines: Vec<String>,
    newline: &'static str,
    trailing_newline: bool,
}

impl SourceText {
    pub fn parse(content: &str) -> Self {
        let newline = if content.contains("\r\n") { "\r\n" } else { "\n" };
        Self {
            lines: content.lines().map(String::from).collect(),
            newline,
            trailing_newline: content.ends_with('\n'),
        }
    }

    /// Join `lines` using this file's newline conventions.
    pub fn render(&self, lines: &[String]) -> String {
        let mut out = lines.join(self.newline);
        if self.trailing_newline && !lines.is_empty() {
            out.push_str(self.newline);
        }
        out
    }
}
