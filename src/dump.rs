//! Line-oriented rendering of a list.
//!
//! A dump is one line per slot, framed by start and end markers:
//!
//! ```text
//! START LIST
//! G
//! D
//! I
//! [empty]
//! END LIST
//! ```
//!
//! Values appear MRU to LRU using their `Display` form, followed by one
//! placeholder per unused slot, so a dump always has `capacity + 2` lines.
//! The markers can be changed with [`DumpStyle`].

use std::borrow::Cow;
use std::fmt::{self, Display};
use std::io;

use crate::ds::intrusive_list::{ListEntry, Traverse};
use crate::traits::ReadOnlyList;

pub const LIST_START: &str = "START LIST";
pub const LIST_END: &str = "END LIST";
pub const EMPTY_SLOT: &str = "[empty]";

static DEFAULT_STYLE: DumpStyle = DumpStyle {
    start: Cow::Borrowed(LIST_START),
    end: Cow::Borrowed(LIST_END),
    empty: Cow::Borrowed(EMPTY_SLOT),
};

/// Marker lines used when rendering a list.
///
/// # Example
///
/// ```
/// use lrulist::dump::{Dump, DumpStyle};
/// use lrulist::list::LruList;
///
/// let mut list = LruList::new(2);
/// list.insert(7);
///
/// let style = DumpStyle::default().with_empty("-");
/// let text = Dump::new(list.traverse()).with_style(&style).to_string();
/// assert_eq!(text, "START LIST\n7\n-\nEND LIST\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpStyle {
    start: Cow<'static, str>,
    end: Cow<'static, str>,
    empty: Cow<'static, str>,
}

impl DumpStyle {
    pub fn with_start(mut self, start: impl Into<Cow<'static, str>>) -> Self {
        self.start = start.into();
        self
    }

    pub fn with_end(mut self, end: impl Into<Cow<'static, str>>) -> Self {
        self.end = end.into();
        self
    }

    pub fn with_empty(mut self, empty: impl Into<Cow<'static, str>>) -> Self {
        self.empty = empty.into();
        self
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    pub fn empty(&self) -> &str {
        &self.empty
    }
}

impl Default for DumpStyle {
    fn default() -> Self {
        DEFAULT_STYLE.clone()
    }
}

/// `Display` adapter that renders a traversal in the dump format.
///
/// Formatting does not consume the traversal; a `Dump` can be printed any
/// number of times.
pub struct Dump<'a, T> {
    entries: Traverse<'a, T>,
    style: &'a DumpStyle,
}

impl<'a, T> Dump<'a, T> {
    pub fn new(entries: Traverse<'a, T>) -> Self {
        Self {
            entries,
            style: &DEFAULT_STYLE,
        }
    }

    pub fn with_style(mut self, style: &'a DumpStyle) -> Self {
        self.style = style;
        self
    }
}

impl<T: Display> Display for Dump<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.style.start)?;
        for entry in self.entries.clone() {
            match entry {
                ListEntry::Occupied(value) => writeln!(f, "{value}")?,
                ListEntry::Empty => writeln!(f, "{}", self.style.empty)?,
            }
        }
        writeln!(f, "{}", self.style.end)
    }
}

/// Returns a `Display` adapter for `list` with the default markers.
///
/// # Example
///
/// ```
/// use lrulist::dump::dump;
/// use lrulist::list::LruList;
///
/// let mut list = LruList::new(3);
/// list.insert("C");
/// list.insert("D");
/// assert_eq!(
///     dump(&list).to_string(),
///     "START LIST\nD\nC\n[empty]\nEND LIST\n"
/// );
/// ```
pub fn dump<L, T>(list: &L) -> Dump<'_, T>
where
    L: ReadOnlyList<T> + ?Sized,
{
    Dump::new(list.traverse())
}

/// Writes `list` to `out` in the dump format.
pub fn write_list<W, L, T>(out: &mut W, list: &L) -> io::Result<()>
where
    W: io::Write + ?Sized,
    L: ReadOnlyList<T> + ?Sized,
    T: Display,
{
    write!(out, "{}", dump(list))
}

/// Writes `list` to `out` using custom markers.
pub fn write_list_with_style<W, L, T>(out: &mut W, list: &L, style: &DumpStyle) -> io::Result<()>
where
    W: io::Write + ?Sized,
    L: ReadOnlyList<T> + ?Sized,
    T: Display,
{
    write!(out, "{}", dump(list).with_style(style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{IndexedLruList, LruList};

    #[test]
    fn empty_list_prints_only_placeholders() {
        let list: LruList<&str> = LruList::new(2);
        assert_eq!(
            dump(&list).to_string(),
            "START LIST\n[empty]\n[empty]\nEND LIST\n"
        );
    }

    #[test]
    fn full_list_prints_no_placeholders() {
        let mut list = IndexedLruList::new(2);
        list.insert(1);
        list.insert(2);
        assert_eq!(dump(&list).to_string(), "START LIST\n2\n1\nEND LIST\n");
    }

    #[test]
    fn line_count_is_capacity_plus_two() {
        let mut list = LruList::new(5);
        list.insert('a');
        list.insert('b');
        assert_eq!(dump(&list).to_string().lines().count(), 7);
    }

    #[test]
    fn dump_can_be_formatted_twice() {
        let mut list = LruList::new(2);
        list.insert(1);
        let adapter = dump(&list);
        assert_eq!(adapter.to_string(), adapter.to_string());
    }

    #[test]
    fn write_list_to_buffer() {
        let mut list = LruList::new(2);
        list.insert("x");
        let mut out = Vec::new();
        write_list(&mut out, &list).unwrap();
        assert_eq!(out, b"START LIST\nx\n[empty]\nEND LIST\n");
    }

    #[test]
    fn custom_style_replaces_markers() {
        let mut list = LruList::new(2);
        list.insert(3);
        let style = DumpStyle::default()
            .with_start("begin")
            .with_end("end")
            .with_empty(String::from("."));
        let mut out = Vec::new();
        write_list_with_style(&mut out, &list, &style).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "begin\n3\n.\nend\n");
        assert_eq!(style.start(), "begin");
        assert_eq!(style.empty(), ".");
    }
}
