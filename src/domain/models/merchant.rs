use serde::{Deserialize, Serialize};

/// Directory entry for the merchant selection control. The id doubles as the
/// key into the per-merchant reserved-slot mapping.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Merchant {
    pub id: String,
    pub name: String,
}
