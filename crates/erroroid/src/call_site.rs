//! Call-site capture.
//!
//! A [`CallSite`] is the file, line and function an annotation came from. The
//! [`call_site!`](crate::call_site) macro builds one at the place it is
//! expanded, so wrapping it in another macro (as [`annotate!`](crate::annotate)
//! does) still records the outermost invocation: `file!()` and `line!()` always
//! report the first macro invocation that led to the expansion.

use derive_getters::Getters;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where an annotation was made.
///
/// # Examples
///
/// ```
/// use erroroid::CallSite;
///
/// let site = CallSite::new("/x/y.rs", 10, "handler");
/// assert_eq!(site.to_string(), "/x/y.rs:10 @handler");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct CallSite {
    /// Absolute path of the source file.
    file: String,
    /// Line number of the call.
    line: u32,
    /// Short name of the enclosing function.
    function: String,
}

impl CallSite {
    /// Build a call site from already-resolved parts.
    pub fn new(file: impl Into<String>, line: u32, function: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            function: function.into(),
        }
    }

    /// Build a call site from compiler-provided metadata.
    ///
    /// Used by [`call_site!`](crate::call_site); `function_path` is the type
    /// name of a helper fn item declared at the call site, `manifest_dir` the
    /// calling crate's `CARGO_MANIFEST_DIR`.
    #[doc(hidden)]
    pub fn capture(
        file: &'static str,
        line: u32,
        module_path: &'static str,
        function_path: &'static str,
        manifest_dir: &'static str,
    ) -> Self {
        Self {
            file: resolve_source_path(file, manifest_dir)
                .to_string_lossy()
                .into_owned(),
            line,
            function: short_function_name(function_path, module_path).to_string(),
        }
    }

    /// The source file as a path.
    pub fn path(&self) -> &Path {
        Path::new(&self.file)
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} @{}", self.file, self.line, self.function)
    }
}

/// Capture the [`CallSite`] of the place this macro is expanded.
///
/// # Examples
///
/// ```
/// fn load_settings() -> erroroid::CallSite {
///     erroroid::call_site!()
/// }
///
/// fn main() {
///     let site = load_settings();
///     assert_eq!(site.function(), "load_settings");
///     assert!(site.path().is_absolute());
/// }
/// ```
#[macro_export]
macro_rules! call_site {
    () => {{
        fn __erroroid_here() {}
        $crate::CallSite::capture(
            ::core::file!(),
            ::core::line!(),
            ::core::module_path!(),
            ::std::any::type_name_of_val(&__erroroid_here),
            ::core::env!("CARGO_MANIFEST_DIR"),
        )
    }};
}

/// Make `file!()` output absolute without touching the filesystem.
///
/// Cargo passes workspace members to rustc relative to the workspace root and
/// standalone packages relative to the package root. The workspace root is the
/// ancestor `A` of the manifest directory for which `manifest_dir == A/rel` and
/// `file` starts with `rel`; the farthest such ancestor wins. With no match the
/// file is taken as package-relative.
pub(crate) fn resolve_source_path(file: &str, manifest_dir: &str) -> PathBuf {
    let path = Path::new(file);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let manifest_dir = Path::new(manifest_dir);
    manifest_dir
        .ancestors()
        .skip(1)
        .filter(|root| {
            manifest_dir
                .strip_prefix(root)
                .is_ok_and(|rel| path.starts_with(rel))
        })
        .last()
        .map_or_else(|| manifest_dir.join(path), |root| root.join(path))
}

/// Reduce a helper fn's type name to the short name of its enclosing function.
///
/// The trailing helper segment and the module path are dropped along with any
/// closure or async frames. Of what remains only the first segment is kept, so
/// `Type::method` becomes `Type` and `<Type as Trait>::method` becomes `Type`.
pub(crate) fn short_function_name<'a>(function_path: &'a str, module_path: &str) -> &'a str {
    let mut segments = top_level_segments(function_path);
    segments.pop();

    let module: Vec<&str> = module_path.split("::").collect();
    let in_module = segments.len() >= module.len()
        && segments.iter().zip(&module).all(|(segment, part)| segment == part);
    let skip = if in_module { module.len() } else { 0 };

    let first = segments
        .iter()
        .skip(skip)
        .copied()
        .find(|segment| !segment.starts_with("{{"));

    match first {
        Some(segment) if segment.starts_with('<') => qualified_self_type(segment),
        Some(segment) => strip_generics(segment),
        None => {
            let fallback = segments.last().copied().unwrap_or(function_path);
            strip_generics(fallback)
        }
    }
}

/// Split on `::` outside of angle brackets.
fn top_level_segments(path: &str) -> Vec<&str> {
    let bytes = path.as_bytes();
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                segments.push(&path[start..i]);
                i += 2;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    segments.push(&path[start..]);
    segments
}

/// `<a::Type<T> as a::Trait>` -> `Type`
fn qualified_self_type(segment: &str) -> &str {
    let inner = segment
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .unwrap_or(segment);
    let self_type = inner.split(" as ").next().unwrap_or(inner);
    let last = top_level_segments(self_type)
        .last()
        .copied()
        .unwrap_or(self_type);
    strip_generics(last)
}

fn strip_generics(segment: &str) -> &str {
    segment.find('<').map_or(segment, |i| &segment[..i])
}
