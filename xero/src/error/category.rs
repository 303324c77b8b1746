use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

/// The coarse class an [`ApiError`](super::ApiError) belongs to.
///
/// Callers that only care about the kind of failure (retry the request, show
/// a "not found" page, fix their code) can branch on this instead of matching
/// every variant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCategory {
    /// The API answered with something the client could not use.
    Response,
    /// The requested record does not exist.
    NotFound,
    /// The calling code used the client incorrectly.
    ClientMisuse,
    /// A business rule of the accounting domain was violated.
    BusinessRule,
}
