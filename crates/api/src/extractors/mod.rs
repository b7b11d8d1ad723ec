//! Custom Axum extractors.

pub mod caller;
pub mod path;
pub mod validated_json;

pub use caller::Caller;
pub use path::Path;
pub use validated_json::ValidatedJson;
