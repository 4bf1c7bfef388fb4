//! Concrete snippet targets and the registry that serves them

pub mod curl;
pub mod go_native;
pub mod node_fetch;
pub mod python_requests;
pub mod ruby_nethttp;

pub use curl::CurlCodegen;
pub use go_native::GoNativeCodegen;
pub use node_fetch::NodeFetchCodegen;
pub use python_requests::PythonRequestsCodegen;
pub use ruby_nethttp::RubyNetHttpCodegen;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::render::Codegen;

/// Supported snippet targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Curl,
    PythonRequests,
    GoNative,
    NodeFetch,
    RubyNetHttp,
}

impl Target {
    /// Get the display name for this target
    pub fn display_name(&self) -> &'static str {
        match self {
            Target::Curl => "cURL",
            Target::PythonRequests => "Python (requests)",
            Target::GoNative => "Go (net/http)",
            Target::NodeFetch => "JavaScript (fetch)",
            Target::RubyNetHttp => "Ruby (Net::HTTP)",
        }
    }

    /// Get the file extension snippets of this target conventionally use
    pub fn file_extension(&self) -> &'static str {
        match self {
            Target::Curl => "sh",
            Target::PythonRequests => "py",
            Target::GoNative => "go",
            Target::NodeFetch => "js",
            Target::RubyNetHttp => "rb",
        }
    }

    /// Get all supported targets
    pub fn all() -> Vec<Target> {
        vec![
            Target::Curl,
            Target::PythonRequests,
            Target::GoNative,
            Target::NodeFetch,
            Target::RubyNetHttp,
        ]
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Curl => write!(f, "curl"),
            Target::PythonRequests => write!(f, "python-requests"),
            Target::GoNative => write!(f, "go-native"),
            Target::NodeFetch => write!(f, "node-fetch"),
            Target::RubyNetHttp => write!(f, "ruby-nethttp"),
        }
    }
}

impl FromStr for Target {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "curl" => Ok(Target::Curl),
            "python-requests" | "python" | "requests" => Ok(Target::PythonRequests),
            "go-native" | "go" | "golang" => Ok(Target::GoNative),
            "node-fetch" | "node" | "fetch" | "js-fetch" => Ok(Target::NodeFetch),
            "ruby-nethttp" | "ruby" | "nethttp" => Ok(Target::RubyNetHttp),
            _ => Err(Error::UnknownTarget(s.to_string())),
        }
    }
}

/// Registry that manages the available snippet generators
pub struct CodegenRegistry {
    codegens: HashMap<Target, Arc<dyn Codegen>>,
}

impl CodegenRegistry {
    /// Create a new registry with every built-in target
    pub fn new() -> Self {
        let mut codegens: HashMap<Target, Arc<dyn Codegen>> = HashMap::new();
        codegens.insert(Target::Curl, Arc::new(CurlCodegen));
        codegens.insert(Target::PythonRequests, Arc::new(PythonRequestsCodegen));
        codegens.insert(Target::GoNative, Arc::new(GoNativeCodegen));
        codegens.insert(Target::NodeFetch, Arc::new(NodeFetchCodegen));
        codegens.insert(Target::RubyNetHttp, Arc::new(RubyNetHttpCodegen));
        Self { codegens }
    }

    /// Register a custom codegen for a target
    pub fn register(&mut self, target: Target, codegen: Arc<dyn Codegen>) {
        self.codegens.insert(target, codegen);
    }

    /// Get the codegen for a specific target
    pub fn get(&self, target: Target) -> Result<Arc<dyn Codegen>> {
        tracing::debug!("looking up codegen for target: {target}");
        self.codegens
            .get(&target)
            .cloned()
            .ok_or_else(|| Error::UnknownTarget(target.to_string()))
    }

    /// Check if a target has a registered codegen
    pub fn has_codegen(&self, target: Target) -> bool {
        self.codegens.contains_key(&target)
    }

    /// Get all supported targets
    pub fn supported_targets(&self) -> Vec<Target> {
        let mut targets: Vec<_> = self.codegens.keys().copied().collect();
        targets.sort_by_key(|t| t.to_string());
        targets
    }
}

impl Default for CodegenRegistry {
    fn default() -> Self {
        Self::new()
    }
}
