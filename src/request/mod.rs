//! Request domain: descriptor types, URL model, and normalization

pub mod normalize;
pub mod types;
pub mod url;

pub use normalize::{NormalizedRequest, PLACEHOLDER_FILE_PATH, flatten_formdata, normalize};
pub use types::{
    BodyDescriptor, FileBody, FileSource, FormParam, FormParamKind, GraphqlBody, Header,
    RequestDescriptor, UrlEncodedParam,
};
pub use url::{QueryParam, UrlAuth, UrlParts};
