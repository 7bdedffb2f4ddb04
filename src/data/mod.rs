//! External provider integrations.
//!
//! - species lookup (`species`)
//! - description translation (`translation`) and its outcome hook (`observer`)
//! - the HTTP capability both use (`transport`)

pub mod observer;
pub mod species;
pub mod translation;
pub mod transport;

pub use observer::*;
pub use species::SpeciesFetcher;
pub use translation::{DescriptionTranslator, StyleEndpoints};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method, ReqwestTransport, TransportError};
