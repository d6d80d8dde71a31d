/// A parsed message: a sequence of elements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    pub elements: Vec<Element>,
}

impl Message {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Literal text, already unescaped.
    Literal(String),
    /// `{name}`
    Argument(String),
    /// `{name, number}`, `{name, date, short}`, ...
    Formatted {
        name: String,
        kind: FormatKind,
        style: Option<String>,
    },
    /// `{name, plural, ...}` and `{name, selectordinal, ...}`
    Plural {
        name: String,
        kind: PluralKind,
        offset: i64,
        options: Vec<MessageOption>,
    },
    /// `{name, select, ...}`
    Select {
        name: String,
        options: Vec<MessageOption>,
    },
    /// `#` inside a plural option.
    Pound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    Number,
    Date,
    Time,
}

impl FormatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatKind::Number => "number",
            FormatKind::Date => "date",
            FormatKind::Time => "time",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralKind {
    Cardinal,
    Ordinal,
}

impl PluralKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PluralKind::Cardinal => "plural",
            PluralKind::Ordinal => "selectordinal",
        }
    }
}

/// One `selector {message}` branch of a plural or select argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageOption {
    /// `=0`, `one`, `other`, `male`, ...
    pub selector: String,
    pub value: Message,
}
