pub mod layout;
pub mod people_page;
pub mod person_link;

pub use layout::*;
pub use people_page::*;
pub use person_link::*;

/// Escape text for use in HTML element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
