use std::ffi::OsStr;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    error::ContentTypeError,
    table::{DEFAULT_BINARY_CONTENT_TYPE, DEFAULT_TEXT_CONTENT_TYPE, EXTENSION_TO_CONTENT_TYPE},
};

/// What to return when a filename has no known extension
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fallback {
    /// `application/octet-stream`
    #[default]
    Binary,

    /// `text/plain`
    Text,
}

impl Fallback {
    /// Maps the `treat_as_binary` flag to a fallback
    pub const fn from_binary_flag(treat_as_binary: bool) -> Self {
        if treat_as_binary {
            Fallback::Binary
        } else {
            Fallback::Text
        }
    }

    pub const fn content_type(self) -> &'static str {
        match self {
            Fallback::Binary => DEFAULT_BINARY_CONTENT_TYPE,
            Fallback::Text => DEFAULT_TEXT_CONTENT_TYPE,
        }
    }
}

/// Resolves filenames, paths and bare extensions to content types.
///
/// A resolver only carries its fallback, so it is `Copy` and can be shared freely between threads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Resolver {
    fallback: Fallback,
}

impl Resolver {
    pub const fn new() -> Self {
        Resolver {
            fallback: Fallback::Binary,
        }
    }

    pub const fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    pub const fn fallback(&self) -> Fallback {
        self.fallback
    }

    /// Returns the content type for the given filename, path or extension.
    ///
    /// Unknown, missing or empty extensions resolve to this resolver's fallback.
    pub fn resolve<F: AsRef<OsStr>>(&self, filename: F) -> &'static str {
        let filename = filename.as_ref().to_string_lossy();
        match lookup_str(&filename) {
            Some(content_type) => content_type,
            None => {
                let fallback = self.fallback.content_type();
                debug!("No content type known for `{filename}`, falling back to {fallback}");
                fallback
            }
        }
    }

    /// Returns the content type for the given filename without applying a fallback
    pub fn lookup<F: AsRef<OsStr>>(&self, filename: F) -> Option<&'static str> {
        lookup(filename)
    }
}

impl From<&Config> for Resolver {
    fn from(config: &Config) -> Self {
        Resolver::new().with_fallback(config.fallback)
    }
}

/// Returns the content type for `filename`.
///
/// `filename` may be a full path, a filename or a bare extension with or without its leading dot.
/// Only the text after the last `.` is used, so `archive.tar.gz` resolves as `gz`. When nothing
/// matches, `treat_as_binary` picks between `application/octet-stream` and `text/plain`.
///
/// Fails only when no filename is given at all; an empty string is accepted and falls back.
pub fn get_content_type<F: AsRef<OsStr>>(
    filename: Option<F>,
    treat_as_binary: bool,
) -> Result<&'static str, ContentTypeError> {
    let Some(filename) = filename else {
        return Err(ContentTypeError::missing_filename());
    };

    let resolver = Resolver::new().with_fallback(Fallback::from_binary_flag(treat_as_binary));
    Ok(resolver.resolve(filename))
}

/// Same as [`get_content_type`] with a binary fallback, for callers that always have a filename
pub fn content_type<F: AsRef<OsStr>>(filename: F) -> &'static str {
    Resolver::new().resolve(filename)
}

/// Same as [`get_content_type`] with a text fallback, for callers that always have a filename
pub fn content_type_or_text<F: AsRef<OsStr>>(filename: F) -> &'static str {
    Resolver::new().with_fallback(Fallback::Text).resolve(filename)
}

/// Returns the matching content type, or `None` if the extension is unknown
pub fn lookup<F: AsRef<OsStr>>(filename: F) -> Option<&'static str> {
    lookup_str(&filename.as_ref().to_string_lossy())
}

/// Returns the raw candidate extension: everything after the last `.`, or the whole input if it
/// has no dot at all.
pub fn extension_of(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(index) => &filename[index + 1..],
        None => filename,
    }
}

fn lookup_str(filename: &str) -> Option<&'static str> {
    let extension = extension_of(filename).to_lowercase();
    trace!("Looking up extension `{extension}` for `{filename}`");
    EXTENSION_TO_CONTENT_TYPE.get(&extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("photo.jpg"), "jpg");
        assert_eq!(extension_of("archive.tar.gz"), "gz");
        assert_eq!(extension_of(".gitignore"), "gitignore");
        assert_eq!(extension_of(".JPG"), "JPG");
        assert_eq!(extension_of("jpg"), "jpg");
        assert_eq!(extension_of("trailing."), "");
        assert_eq!(extension_of(""), "");
    }

    #[test]
    fn test_fallback_from_binary_flag() {
        assert_eq!(Fallback::from_binary_flag(true), Fallback::Binary);
        assert_eq!(Fallback::from_binary_flag(false), Fallback::Text);
        assert_eq!(Fallback::Binary.content_type(), "application/octet-stream");
        assert_eq!(Fallback::Text.content_type(), "text/plain");
    }

    #[test]
    fn test_resolver_fallback() {
        let binary = Resolver::new();
        let text = Resolver::new().with_fallback(Fallback::Text);

        assert_eq!(binary.fallback(), Fallback::Binary);
        assert_eq!(text.fallback(), Fallback::Text);
        assert_eq!(binary.resolve("file.xyz123"), "application/octet-stream");
        assert_eq!(text.resolve("file.xyz123"), "text/plain");
        assert_eq!(text.resolve("photo.jpg"), "image/jpeg");
        assert_eq!(text.lookup("file.xyz123"), None);
    }

    #[test]
    fn test_trailing_dot_falls_back() {
        assert_eq!(content_type("file."), "application/octet-stream");
        assert_eq!(content_type_or_text("file."), "text/plain");
    }

    #[test]
    fn test_missing_filename() {
        let error = get_content_type(None::<&str>, true).unwrap_err();
        assert!(matches!(error, ContentTypeError::InvalidArgument { .. }));
    }
}
