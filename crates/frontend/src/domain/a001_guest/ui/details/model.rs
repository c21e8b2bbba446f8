use crate::shared::api_utils::{api_url, path_segment};
use contracts::domain::a001_guest::{GuestDto, GuestFieldUpdate};
use gloo_net::http::Request;

/// Fetch guest by ID
pub async fn fetch_guest(id: &str) -> Result<GuestDto, String> {
    let url = api_url(&format!("/guests/{}", path_segment(id)));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.status() == 404 {
        return Err("Huésped no encontrado".to_string());
    }
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<GuestDto>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Persist a single field of a guest
pub async fn patch_guest_field(id: &str, update: &GuestFieldUpdate) -> Result<(), String> {
    let url = api_url(&format!("/guests/{}", path_segment(id)));
    log::debug!("PATCH {} field={}", url, update.field);

    let response = Request::patch(&url)
        .json(update)
        .map_err(|e| format!("Failed to serialize: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(if body.trim().is_empty() {
            format!("HTTP {}", response.status())
        } else {
            format!("HTTP {}: {}", response.status(), body.trim())
        });
    }
    Ok(())
}
