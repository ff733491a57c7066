//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Chat participant role.
///
/// Serializes in the lowercase form chat completion APIs expect.
///
/// # Examples
///
/// ```
/// use reelcraft_core::Role;
///
/// assert_eq!(Role::User.as_ref(), "user");
/// assert_eq!(format!("{}", Role::User), "user");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// User messages are from the human
    User,
}
