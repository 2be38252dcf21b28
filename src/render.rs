//! Turns replies into deliverable text messages.
//!
//! Chat hosts cap the size of a single message, so every rendered page is split into
//! messages of at most [`MESSAGE_LIMIT`] characters. Splits prefer line boundaries, then
//! list separators, and only cut inside a word when one item alone is over the limit.

use crate::commands::Reply;
use crate::page::Page;

/// Characters allowed in one delivered message.
pub const MESSAGE_LIMIT: usize = 2000;

const EMPTY_VALUE: &str = "None";

pub fn render_page(page: &Page) -> String {
    let mut lines = vec![format!("**{}**", page.title)];
    if let Some(url) = &page.thumbnail {
        lines.push(url.clone());
    }
    for section in &page.sections {
        let value = section.value();
        let value = if value.is_empty() { EMPTY_VALUE } else { value.as_str() };
        if section.inline {
            lines.push(format!("__{}__: {}", section.name, value));
        } else {
            lines.push(format!("__{}__", section.name));
            lines.push(value.to_string());
        }
    }
    lines.join("\n")
}

/// Renders a reply as the messages to deliver, in order.
pub fn render_reply(reply: &Reply) -> Vec<String> {
    match reply {
        Reply::Text(text) => split_message(text, MESSAGE_LIMIT),
        Reply::Pages(pages) => pages
            .iter()
            .flat_map(|page| split_message(&render_page(page), MESSAGE_LIMIT))
            .collect(),
    }
}

/// Splits `text` into pieces of at most `limit` characters.
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let mut messages = Vec::new();
    let mut current = MessageBuffer::default();

    for line in text.split('\n') {
        if current.fits(line, limit) {
            current.push_line(line);
            continue;
        }
        if let Some(done) = current.take() {
            messages.push(done);
        }
        if char_len(line) <= limit {
            current.push_line(line);
        } else {
            let mut pieces = split_long_line(line, limit);
            // The tail of an oversized line may still share a message with what follows.
            if let Some(last) = pieces.pop() {
                messages.extend(pieces);
                current.push_line(&last);
            }
        }
    }
    if let Some(done) = current.take() {
        messages.push(done);
    }
    messages.retain(|message| !message.is_empty());
    messages
}

#[derive(Default)]
struct MessageBuffer {
    text: String,
    chars: usize,
    started: bool,
}

impl MessageBuffer {
    fn fits(&self, line: &str, limit: usize) -> bool {
        let separator = usize::from(self.started);
        self.chars + separator + char_len(line) <= limit
    }

    fn push_line(&mut self, line: &str) {
        if self.started {
            self.text.push('\n');
            self.chars += 1;
        }
        self.text.push_str(line);
        self.chars += char_len(line);
        self.started = true;
    }

    fn take(&mut self) -> Option<String> {
        if !self.started {
            return None;
        }
        let done = std::mem::take(&mut self.text);
        self.chars = 0;
        self.started = false;
        Some(done)
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Splits one line at `", "` boundaries, cutting items only when they alone exceed `limit`.
///
/// Joining the pieces with `", "` gives back the line, empty items included.
fn split_long_line(line: &str, limit: usize) -> Vec<String> {
    const SEPARATOR: &str = ", ";
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;
    let mut has_item = false;

    for item in line.split(SEPARATOR) {
        let item_chars = char_len(item);
        let joined = if has_item {
            current_chars + SEPARATOR.len() + item_chars
        } else {
            item_chars
        };
        if joined <= limit {
            if has_item {
                current.push_str(SEPARATOR);
            }
            current.push_str(item);
            current_chars = joined;
            has_item = true;
            continue;
        }
        if has_item {
            pieces.push(std::mem::take(&mut current));
        }
        if item_chars <= limit {
            current.push_str(item);
            current_chars = item_chars;
        } else {
            let chars: Vec<char> = item.chars().collect();
            let mut last = String::new();
            for chunk in chars.chunks(limit) {
                if !last.is_empty() {
                    pieces.push(std::mem::take(&mut last));
                }
                last = chunk.iter().collect();
            }
            current_chars = char_len(&last);
            current = last;
        }
        has_item = true;
    }
    if has_item {
        pieces.push(current);
    }
    pieces
}
