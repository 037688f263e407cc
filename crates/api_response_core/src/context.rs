use serde::{Deserialize, Serialize};

/// Invocation data the builder needs from the hosting runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Unique id of the invocation, echoed back in the correlation header.
    pub request_id: String,
}

impl RequestContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }
}
