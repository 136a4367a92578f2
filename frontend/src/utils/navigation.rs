use crate::api::ApiError;

/// Id the edit form treats as "create a new user".
pub const NEW_USER_ID: &str = "0";

pub fn unified_user_form_url(id: &str) -> String {
    format!("/UnifiedSystemUser?ID={}&startingRecNo=1&roleFilter=", id)
}

/// Full page navigation; the form lives outside this app's router.
#[cfg(target_arch = "wasm32")]
pub fn navigate_to(url: &str) -> Result<(), ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::unknown("No window object"))?;
    window
        .location()
        .set_href(url)
        .map_err(|_| ApiError::unknown(format!("Failed to navigate to {}", url)))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn navigate_to(url: &str) -> Result<(), ApiError> {
    log::info!("navigate to {}", url);
    Ok(())
}
