//! Resolve filenames, paths and bare extensions to MIME content types.
//!
//! ```
//! use content_types::{get_content_type, shortcuts};
//!
//! assert_eq!(get_content_type(Some("photo.JPG"), true).unwrap(), shortcuts::JPG);
//! assert_eq!(get_content_type(Some("notes.xyz123"), false).unwrap(), "text/plain");
//! ```

pub mod config;
pub mod error;
pub mod resolver;
pub mod shortcuts;
pub mod table;

pub use config::{Config, LogLevel};
pub use error::ContentTypeError;
pub use resolver::{
    Fallback, Resolver, content_type, content_type_or_text, extension_of, get_content_type, lookup,
};
pub use table::{
    DEFAULT_BINARY_CONTENT_TYPE, DEFAULT_TEXT_CONTENT_TYPE, EXTENSION_TO_CONTENT_TYPE,
    ExtensionTable,
};
