//! snipgen turns normalized HTTP request descriptions into ready-to-run
//! code snippets for a set of target languages and libraries.
//!
//! The pipeline is the same for every target: a [`request::RequestDescriptor`]
//! is normalized, the caller's options are sanitized against the target's
//! published schema, the body is rendered into a language-neutral
//! [`render::BodyFragment`], and a [`render::Codegen`] implementation
//! assembles the final snippet text.
//!
//! ```no_run
//! use snipgen::targets::{CodegenRegistry, Target};
//! use snipgen::request::RequestDescriptor;
//!
//! # fn main() -> snipgen::Result<()> {
//! let request: RequestDescriptor = serde_json::from_str(
//!     r#"{"method": "GET", "url": "https://postman-echo.com/get"}"#,
//! )?;
//! let registry = CodegenRegistry::new();
//! let codegen = registry.get(Target::Curl)?;
//! let snippet = codegen.convert(&request, &serde_json::json!({}))?;
//! println!("{snippet}");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod input;
pub mod options;
pub mod render;
pub mod request;
pub mod targets;

pub use error::{Error, Result};
pub use render::Codegen;
pub use targets::{CodegenRegistry, Target};
