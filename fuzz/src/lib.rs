use arbitrary::Arbitrary;

/// Wrapper enum for generating arbitrary `.lng` input lines.
#[derive(Arbitrary, Debug)]
pub enum Line {
    /// A `:`-prefixed label line.
    Label(String),
    /// A message content line.
    Content(String),
    /// A `.` block-end line.
    End,
}

/// Render generated lines as `.lng` text.
pub fn render(lines: &[Line]) -> String {
    let mut text = String::new();
    for line in lines {
        match line {
            Line::Label(name) => text.push_str(&format!(":{name}\n")),
            Line::Content(content) => text.push_str(&format!("{content}\n")),
            Line::End => text.push_str(".\n"),
        }
    }
    text
}
