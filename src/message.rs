use serde::{Deserialize, Serialize};

/// Events emitted by the harness towards the server
pub mod client_message {
    use super::*;

    pub const STRING_TO_SERVER: &str = "string to server";

    /// Builds the payload for [`STRING_TO_SERVER`]: the prompt text as a
    /// single JSON string. Empty input is sent as the empty string, not
    /// suppressed.
    pub fn string_payload(text: &str) -> serde_json::Value {
        serde_json::Value::String(text.to_owned())
    }

    pub const STRUCT_TO_SERVER: &str = "struct to server";

    /// Record sent on [`STRUCT_TO_SERVER`]. The values are fixed sample
    /// data; the server only cares about the shape.
    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
    pub struct SampleRecord {
        pub field1: String,
        pub field2: i64,
    }

    impl SampleRecord {
        pub fn sample() -> Self {
            Self {
                field1: "value1".to_owned(),
                field2: 123,
            }
        }
    }
}

/// Events the server pushes to the harness. Payload shapes are
/// unconstrained; the harness logs them without decoding.
pub mod server_message {
    pub const STRING_TO_CLIENT: &str = "string to client";
    pub const STRUCT_TO_CLIENT: &str = "struct to client";
}
