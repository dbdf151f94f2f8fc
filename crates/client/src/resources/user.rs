use serde::Deserialize;

use slotbook_core::models::user::PublicProfile;

use crate::error::ApiError;
use crate::ApiClient;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProfilePayload {
    Wrapped { user: PublicProfile },
    Bare(PublicProfile),
}

/// Public display data of a master; `master` may be the UUID or the
/// public-page reference.
pub async fn public_profile(client: &ApiClient, master: &str) -> Result<PublicProfile, ApiError> {
    let payload: ProfilePayload = client.get_json(&format!("/api/user/public/{master}")).await?;
    Ok(match payload {
        ProfilePayload::Wrapped { user } => user,
        ProfilePayload::Bare(profile) => profile,
    })
}
