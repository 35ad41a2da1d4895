//! Format template compilation and rendering.

use crate::{Placeholder, SlotKind};
use derive_getters::Getters;
use std::fmt::{self, Write};

/// A placeholder found in a template, with the byte offset of its first occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct TokenPosition {
    /// Byte offset of the token in the source template.
    offset: usize,
    /// Which placeholder sits there.
    placeholder: Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(usize),
}

/// A value handed to [`CompiledFormat::render`] for one positional slot.
#[derive(Clone, Copy)]
pub enum Arg<'a> {
    /// Rendered through its `Display` impl.
    Display(&'a dyn fmt::Display),
    /// Rendered verbatim.
    Str(&'a str),
    /// Rendered as a decimal integer.
    Int(i64),
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Display(value) => f.debug_tuple("Display").field(&value.to_string()).finish(),
            Arg::Str(value) => f.debug_tuple("Str").field(value).finish(),
            Arg::Int(value) => f.debug_tuple("Int").field(value).finish(),
        }
    }
}

impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Display(value) => fmt::Display::fmt(value, f),
            Arg::Str(value) => f.write_str(value),
            Arg::Int(value) => write!(f, "{}", value),
        }
    }
}

/// A format template compiled into positional slots.
///
/// Compilation finds the first occurrence of each reserved token, orders the
/// tokens by where they appear and replaces each one with a numbered slot. The
/// ordering tells the renderer which captured value goes into which slot, so
/// placeholders may appear in any order in the template.
///
/// Tokens are matched as plain substrings. There is no escaping: `#line` inside
/// literal text is a placeholder. A token that appears more than once is only
/// substituted at its first occurrence; later copies stay literal. A token that
/// does not appear gets no slot.
///
/// # Examples
///
/// ```
/// use erroroid::{CompiledFormat, Placeholder};
///
/// let compiled = CompiledFormat::compile("[#line] #err at #file");
/// assert_eq!(compiled.template(), "[{0:d}] {1} at {2:s}");
///
/// let order: Vec<_> = compiled.ordering().iter().map(|t| *t.placeholder()).collect();
/// assert_eq!(order, vec![Placeholder::Line, Placeholder::Error, Placeholder::File]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledFormat {
    source: String,
    template: String,
    ordering: Vec<TokenPosition>,
    segments: Vec<Segment>,
}

impl CompiledFormat {
    /// Compile a template.
    pub fn compile(source: impl Into<String>) -> Self {
        let source = source.into();

        let mut ordering: Vec<TokenPosition> = Placeholder::ALL
            .iter()
            .filter_map(|&placeholder| {
                source
                    .find(placeholder.token())
                    .map(|offset| TokenPosition { offset, placeholder })
            })
            .collect();
        ordering.sort_by_key(|position| position.offset);

        // Tokens all start with '#' and contain no other '#', so no two can overlap.
        let mut segments = Vec::with_capacity(ordering.len() * 2 + 1);
        let mut cursor = 0;
        for (slot, position) in ordering.iter().enumerate() {
            if position.offset > cursor {
                segments.push(Segment::Literal(source[cursor..position.offset].to_string()));
            }
            segments.push(Segment::Slot(slot));
            cursor = position.offset + position.placeholder.token().len();
        }
        if cursor < source.len() {
            segments.push(Segment::Literal(source[cursor..].to_string()));
        }

        let template = rewrite(&segments, &ordering);

        tracing::trace!(
            source = %source,
            template = %template,
            slots = ordering.len(),
            "Compiled format template"
        );

        Self {
            source,
            template,
            ordering,
            segments,
        }
    }

    /// The template as it was written.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The rewritten template with numbered slots (`{0}`, `{1:s}`, `{2:d}`).
    ///
    /// This is a descriptive slot notation, not a `format!` string: `:s` marks
    /// a string slot, `:d` an integer slot, and a bare `{N}` a display slot.
    /// Literal braces are doubled so they cannot be mistaken for slots.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Placeholders present in the template, in slot order.
    pub fn ordering(&self) -> &[TokenPosition] {
        &self.ordering
    }

    /// Number of positional slots.
    pub fn slot_count(&self) -> usize {
        self.ordering.len()
    }

    /// Kind of each slot, in slot order.
    pub fn slot_kinds(&self) -> impl Iterator<Item = SlotKind> + '_ {
        self.ordering
            .iter()
            .map(|position| position.placeholder.slot_kind())
    }

    /// Render with one argument per slot.
    ///
    /// A slot without a matching argument renders as nothing.
    pub fn render(&self, args: &[Arg<'_>]) -> String {
        let mut out = String::with_capacity(self.source.len() + 64);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(slot) => {
                    if let Some(arg) = args.get(*slot) {
                        let _ = write!(out, "{}", arg);
                    }
                }
            }
        }
        out
    }
}

fn rewrite(segments: &[Segment], ordering: &[TokenPosition]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                for c in text.chars() {
                    match c {
                        '{' => out.push_str("{{"),
                        '}' => out.push_str("}}"),
                        c => out.push(c),
                    }
                }
            }
            Segment::Slot(slot) => {
                let kind = ordering[*slot].placeholder.slot_kind();
                let _ = write!(out, "{{{}{}}}", slot, kind.spec());
            }
        }
    }
    out
}
