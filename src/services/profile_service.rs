use crate::error::AppError;
use crate::models::{ErrorResult, ProfileView};
use crate::services::api_client::ApiClient;
use crate::services::token_store;
use rusqlite::Connection;

/// Loads what the profile screen shows
///
/// Without a stored token no request is made. Profile and impact are fetched
/// together and both must succeed.
pub async fn load_profile_view(conn: &Connection, client: &ApiClient) -> ProfileView {
    let token = match token_store::load_token(conn) {
        Ok(Some(token)) => token,
        Ok(None) => {
            log::debug!("No session token, showing signed-out profile");
            return ProfileView::Unauthenticated;
        }
        Err(e) => return failed(e),
    };

    let (profile, impact) = tokio::join!(client.fetch_profile(&token), client.fetch_impact(&token));
    match (profile, impact) {
        (Ok(profile), Ok(impact)) => ProfileView::Loaded { profile, impact },
        (Err(e), _) | (_, Err(e)) => failed(e),
    }
}

fn failed(e: AppError) -> ProfileView {
    log::error!("Failed to load profile: {}", e);
    ProfileView::Failed(ErrorResult::new(e.user_message()).with_details(e.to_string()))
}
