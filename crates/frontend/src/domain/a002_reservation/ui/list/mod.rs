use crate::shared::api_utils::api_url;
use crate::shared::icons::icon;
use contracts::domain::a001_guest::GuestId;
use contracts::domain::a002_reservation::{ReservationDto, ReservationQuery, ReservationView};
use contracts::domain::common::AggregateId;
use gloo_net::http::Request;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor, Spinner};

fn badge_color(variant: &str) -> BadgeColor {
    match variant {
        "success" => BadgeColor::Success,
        "warning" => BadgeColor::Warning,
        "error" => BadgeColor::Danger,
        "primary" => BadgeColor::Brand,
        _ => BadgeColor::Subtle,
    }
}

async fn fetch_reservations(guest_id: &str) -> Result<Vec<ReservationView>, String> {
    let query = ReservationQuery {
        guest_id: Some(GuestId::from_string(guest_id)?),
        status: None,
    };
    let qs = serde_qs::to_string(&query).map_err(|e| format!("Failed to build query: {}", e))?;
    let url = api_url(&format!("/reservations?{}", qs));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    let items: Vec<ReservationDto> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    // One malformed date should not hide the rest of the stays
    Ok(items
        .into_iter()
        .filter_map(|dto| {
            let code = dto.code.clone();
            ReservationView::from_dto(dto)
                .map_err(|e| log::warn!("skipping reservation {}: {}", code, e))
                .ok()
        })
        .collect())
}

/// Reservations of one guest, read-only.
#[component]
pub fn GuestReservations(#[prop(into)] guest_id: String) -> impl IntoView {
    let (items, set_items) = signal::<Vec<ReservationView>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_reservations(&guest_id).await {
            Ok(v) => {
                set_items.set(v);
                set_error.set(None);
            }
            Err(e) => set_error.set(Some(e)),
        }
        set_loading.set(false);
    });

    view! {
        <div class="reservations">
            <Show when=move || loading.get()>
                <Spinner />
            </Show>
            {move || error.get().map(|e| view! {
                <div class="alert alert--error">{format!("Error al cargar reservas: {}", e)}</div>
            })}
            <Show when=move || !loading.get() && error.get().is_none() && items.with(|v| v.is_empty())>
                <p class="inline-edit__empty">"Sin reservas"</p>
            </Show>
            <ul class="reservations__list">
                <For
                    each=move || items.get()
                    key=|r| r.id.to_string()
                    children=move |r| {
                        view! {
                            <li class="reservations__item">
                                {icon("bed")}
                                <span class="reservations__code">{r.code.clone()}</span>
                                <span class="reservations__room">{format!("Hab. {}", r.room)}</span>
                                <span class="reservations__stay">{r.stay_label()}</span>
                                <span class="reservations__occupancy">{r.occupancy_label()}</span>
                                <Badge appearance=BadgeAppearance::Tint color=badge_color(r.badge_variant())>
                                    {r.status_label()}
                                </Badge>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_color_maps_status_variants() {
        assert!(matches!(badge_color("success"), BadgeColor::Success));
        assert!(matches!(badge_color("error"), BadgeColor::Danger));
        assert!(matches!(badge_color("neutral"), BadgeColor::Subtle));
        assert!(matches!(badge_color("unknown"), BadgeColor::Subtle));
    }
}
