use std::collections::HashMap;

/// Content type used when an extension has no entry.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

const BUILTIN: [(&str, &str); 5] = [
    ("html", "text/html; charset=UTF-8"),
    ("css", "text/css"),
    ("png", "image/png"),
    ("jpg", "image/jpg"),
    ("gif", "image/gif"),
];

/// Read-only extension to content-type table.
///
/// Keys are stored lowercase without the dot; lookups lowercase the extension
/// first.
#[derive(Debug, Clone)]
pub struct MimeTypes {
    types: HashMap<String, String>,
}

impl MimeTypes {
    /// The built-in table extended with `extra`. Entries in `extra` replace
    /// built-in ones with the same extension.
    pub fn with_extra<I, K, V>(extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut types: HashMap<String, String> = BUILTIN
            .iter()
            .map(|(ext, ty)| (ext.to_string(), ty.to_string()))
            .collect();

        for (ext, ty) in extra {
            let ext = ext.as_ref().trim_start_matches('.').to_ascii_lowercase();
            types.insert(ext, ty.into());
        }

        Self { types }
    }

    /// Content type for an extension, falling back to
    /// [`DEFAULT_MIME_TYPE`]. An empty extension always falls back.
    pub fn lookup(&self, extension: &str) -> &str {
        self.types
            .get(extension.to_ascii_lowercase().as_str())
            .map(String::as_str)
            .unwrap_or(DEFAULT_MIME_TYPE)
    }
}

impl Default for MimeTypes {
    fn default() -> Self {
        Self::with_extra(std::iter::empty::<(&str, String)>())
    }
}
