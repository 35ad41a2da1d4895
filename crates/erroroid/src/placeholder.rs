//! Reserved placeholder tokens.

/// How a positional slot renders its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// Any displayable value (the error or message).
    Display,
    /// A string (file path, function name).
    Str,
    /// A signed integer (line number).
    Int,
}

impl SlotKind {
    /// Format spec appended after the slot index in a rewritten template.
    pub fn spec(self) -> &'static str {
        match self {
            SlotKind::Display => "",
            SlotKind::Str => ":s",
            SlotKind::Int => ":d",
        }
    }
}

/// One of the four reserved tokens a format template may contain.
///
/// # Examples
///
/// ```
/// use erroroid::{Placeholder, SlotKind};
///
/// assert_eq!(Placeholder::Line.token(), "#line");
/// assert_eq!(Placeholder::Line.slot_kind(), SlotKind::Int);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Placeholder {
    /// `#err`: the error or message being annotated.
    #[display("#err")]
    Error,
    /// `#file`: absolute path of the calling source file.
    #[display("#file")]
    File,
    /// `#line`: line number of the call.
    #[display("#line")]
    Line,
    /// `#func`: short name of the calling function.
    #[display("#func")]
    Function,
}

impl Placeholder {
    /// All placeholders, in the order values are captured.
    pub const ALL: [Placeholder; 4] = [
        Placeholder::Error,
        Placeholder::File,
        Placeholder::Function,
        Placeholder::Line,
    ];

    /// Literal token text.
    pub fn token(self) -> &'static str {
        match self {
            Placeholder::Error => "#err",
            Placeholder::File => "#file",
            Placeholder::Line => "#line",
            Placeholder::Function => "#func",
        }
    }

    /// Kind of slot this placeholder compiles to.
    pub fn slot_kind(self) -> SlotKind {
        match self {
            Placeholder::Error => SlotKind::Display,
            Placeholder::File | Placeholder::Function => SlotKind::Str,
            Placeholder::Line => SlotKind::Int,
        }
    }
}
