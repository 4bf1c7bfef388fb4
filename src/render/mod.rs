//! The shared request serialization engine.
//!
//! Every concrete target implements [`Codegen`] on top of the same three
//! pieces: the option sanitizer, the request normalizer, and the body-mode
//! dispatcher. A target contributes its [`SyntaxDescriptor`], its option
//! schema, and the final snippet assembly, nothing else.

pub mod body;
pub mod escape;
pub mod syntax;

pub use body::{
    BodyFragment, FILE_CONTENTS_PLACEHOLDER, FormFile, canonicalize_json, guess_content_type,
    is_json_content_type, render_body,
};
pub use escape::{escape, escape_opt, percent_encode};
pub use syntax::SyntaxDescriptor;

use serde_json::Value;

use crate::error::Result;
use crate::options::OptionSpec;
use crate::request::RequestDescriptor;

/// A snippet generator for one target language/library.
///
/// Conversions are pure: no I/O, no shared state, safe to call from any
/// number of threads.
pub trait Codegen: Send + Sync {
    /// The wire name of this target, e.g. `python-requests`
    fn name(&self) -> &'static str;

    /// The options this renderer recognizes
    fn options_schema(&self) -> &[OptionSpec];

    /// Convert a request description into a snippet. `options` may be any
    /// JSON value; invalid entries are replaced by schema defaults.
    fn convert(&self, request: &RequestDescriptor, options: &Value) -> Result<String>;
}
