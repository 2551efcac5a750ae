use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BOLD: Regex = Regex::new(r"\*\*(.+?)\*\*").unwrap();
    static ref ITALIC: Regex = Regex::new(r"\*(.+?)\*").unwrap();
    static ref LINK: Regex = Regex::new(r"\[(.+?)\]\(.+?\)").unwrap();
    static ref HEADING: Regex = Regex::new(r"(?m)^#+\s+").unwrap();
    static ref BULLET: Regex = Regex::new(r"(?m)^\s*[-*]\s+").unwrap();
}

/// Reduce the digest's markdown dialect to plain text: unwrap bold and
/// italics, keep link text only, drop heading markers, and turn list
/// markers into a bullet character.
pub fn markdown_to_plain_text(markdown: &str) -> String {
    let text = BOLD.replace_all(markdown, "$1");
    let text = ITALIC.replace_all(&text, "$1");
    let text = LINK.replace_all(&text, "$1");
    let text = HEADING.replace_all(&text, "");
    let text = BULLET.replace_all(&text, "• ");

    text.into_owned()
}
