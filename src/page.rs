//! Structured reply pages and the chunker that keeps them size-bounded.

/// How the items of a section are joined when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `", "`-separated on one line.
    Inline,
    /// One item per line.
    Lines,
}

impl Layout {
    pub fn separator(self) -> &'static str {
        match self {
            Layout::Inline => ", ",
            Layout::Lines => "\n",
        }
    }
}

/// A named block inside a page.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub name: String,
    pub items: Vec<String>,
    pub layout: Layout,
    /// Whether a host that supports columns may place this section beside its neighbours.
    pub inline: bool,
}

impl Section {
    pub fn list(name: &str, items: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            items,
            layout: Layout::Inline,
            inline: false,
        }
    }

    pub fn lines(name: &str, items: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            items,
            layout: Layout::Lines,
            inline: false,
        }
    }

    pub fn text(name: &str, value: impl Into<String>) -> Self {
        Self::lines(name, vec![value.into()])
    }

    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }

    pub fn value(&self) -> String {
        self.items.join(self.layout.separator())
    }
}

/// One self-contained unit of output: a title plus ordered sections.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub title: String,
    pub thumbnail: Option<String>,
    pub sections: Vec<Section>,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            thumbnail: None,
            sections: Vec::new(),
        }
    }

    pub fn with_thumbnail(mut self, url: Option<&str>) -> Self {
        self.thumbnail = url.map(str::to_string);
        self
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.name == name)
    }
}

/// Splits `items` into consecutive chunks of at most `cap` items, numbered from 1.
///
/// Chunk boundaries fall on item boundaries and order is preserved. A zero cap is
/// treated as one item per chunk.
pub fn paginate<T>(items: &[T], cap: usize) -> impl Iterator<Item = (usize, &[T])> {
    items
        .chunks(cap.max(1))
        .enumerate()
        .map(|(index, chunk)| (index + 1, chunk))
}
