use serde::{Deserialize, Serialize};

/// Single-payload envelope: `{ "data": ... }`.
///
/// Detail and catalog endpoints wrap their payload this way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}
