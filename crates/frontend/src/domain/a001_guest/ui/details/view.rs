use super::view_model::GuestDetailsViewModel;
use crate::domain::a002_reservation::ui::list::GuestReservations;
use crate::shared::icons::icon;
use crate::shared::inline_edit::{ListField, NestedField, ScalarField, TagsField};
use crate::shared::modal::SuccessModal;
use contracts::domain::a001_guest::{GuestField, GuestFieldShape};
use contracts::shared::inline_edit::{Record, EMPTY_PLACEHOLDER};
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor, Card, Flex, FlexGap, Spinner};

/// Fields grouped as they appear on the page.
const SECTIONS: &[(&str, &[GuestField])] = &[
    (
        "Datos personales",
        &[
            GuestField::FirstName,
            GuestField::LastName,
            GuestField::Nationality,
            GuestField::IsVip,
        ],
    ),
    (
        "Contacto",
        &[GuestField::Email, GuestField::Phone, GuestField::Address],
    ),
    (
        "Documentación",
        &[GuestField::DocumentType, GuestField::DocumentNumber],
    ),
    (
        "Estancia",
        &[
            GuestField::EmergencyContact,
            GuestField::Companions,
            GuestField::Preferences,
            GuestField::Notes,
        ],
    ),
];

fn emergency_contact_summary(record: Record) -> String {
    let get = |key: &str| record.get(key).map(|v| v.trim()).unwrap_or_default();
    let name = get("name");
    if name.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }
    let mut summary = name.to_string();
    if !get("relationship").is_empty() {
        summary.push_str(&format!(" ({})", get("relationship")));
    }
    if !get("phone").is_empty() {
        summary.push_str(&format!(" · {}", get("phone")));
    }
    summary
}

/// One field row: the renderer selected by the field's shape plus its error.
fn field_row(vm: GuestDetailsViewModel, field: GuestField) -> AnyView {
    let editor = vm.editor(field);
    let value = vm.committed(field);
    let label = field.label();
    let on_edit = Callback::new(move |_: ()| vm.edit(field));
    let on_change = Callback::new(move |patch| vm.change(field, patch));
    let on_save = Callback::new(move |_: ()| vm.save(field));
    let on_cancel = Callback::new(move |_: ()| vm.cancel(field));

    let renderer = match field.shape() {
        GuestFieldShape::Scalar(kind) => view! {
            <ScalarField
                label=label
                kind=kind
                value=value
                is_editing=editor.is_editing()
                edit_value=editor.edit_value()
                on_change=on_change
                on_edit=on_edit
                on_save=on_save
                on_cancel=on_cancel
                is_updating=editor.is_updating()
                disabled=editor.is_disabled()
            />
        }
        .into_any(),
        GuestFieldShape::Nested(fields) => {
            let formatter = match field {
                GuestField::EmergencyContact => Some(Callback::new(emergency_contact_summary)),
                _ => None,
            };
            view! {
                <NestedField
                    label=label
                    fields=fields
                    value=value
                    is_editing=editor.is_editing()
                    edit_value=editor.edit_value()
                    on_change=on_change
                    on_edit=on_edit
                    on_save=on_save
                    on_cancel=on_cancel
                    is_updating=editor.is_updating()
                    disabled=editor.is_disabled()
                    formatter=formatter
                />
            }
            .into_any()
        }
        GuestFieldShape::List(config) => view! {
            <ListField
                label=label
                config=config
                value=value
                is_editing=editor.is_editing()
                edit_value=editor.edit_value()
                on_change=on_change
                on_edit=on_edit
                on_save=on_save
                on_cancel=on_cancel
                is_updating=editor.is_updating()
                disabled=editor.is_disabled()
            />
        }
        .into_any(),
        GuestFieldShape::Tags => view! {
            <TagsField
                label=label
                value=value
                is_editing=editor.is_editing()
                edit_value=editor.edit_value()
                on_change=on_change
                on_edit=on_edit
                on_save=on_save
                on_cancel=on_cancel
                is_updating=editor.is_updating()
                disabled=editor.is_disabled()
                placeholder="Almohada extra, planta alta"
            />
        }
        .into_any(),
    };

    let error = editor.error();
    view! {
        <div class="guest-field" data-field=field.key()>
            {renderer}
            {move || error.get().map(|e| view! { <p class="form__error" role="alert">{e}</p> })}
        </div>
    }
    .into_any()
}

#[component]
pub fn GuestDetails(#[prop(into)] id: String) -> impl IntoView {
    let vm = GuestDetailsViewModel::new();
    vm.load(id.clone());

    let title = move || {
        vm.guest
            .with(|g| g.as_ref().map(|g| g.full_name()))
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "Huésped".to_string())
    };
    let is_vip = move || {
        vm.guest
            .with(|g| g.as_ref().and_then(|g| g.is_vip.as_bool()))
            .unwrap_or(false)
    };

    view! {
        <div class="guest-details">
            <div class="guest-details__header">
                {icon("guest")}
                <h1 class="guest-details__title">{title}</h1>
                <Show when=is_vip>
                    <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Warning>
                        "VIP"
                    </Badge>
                </Show>
                <Show when=move || vm.loading.get()>
                    <Spinner />
                </Show>
            </div>

            {move || vm.error.get().map(|e| view! {
                <div class="alert alert--error" role="alert">{e}</div>
            })}

            <Flex vertical=true gap=FlexGap::Large>
                {SECTIONS
                    .iter()
                    .map(|(title, fields)| view! {
                        <section class="guest-details__section">
                            <Card>
                                <h2 class="guest-details__section-title">{*title}</h2>
                                {fields.iter().map(|field| field_row(vm, *field)).collect_view()}
                            </Card>
                        </section>
                    })
                    .collect_view()}
                <section class="guest-details__section">
                    <Card>
                        <h2 class="guest-details__section-title">"Reservas"</h2>
                        <GuestReservations guest_id=id />
                    </Card>
                </section>
            </Flex>

            {move || vm.saved.get().map(|message| view! {
                <SuccessModal
                    message=message
                    on_close=Callback::new(move |_: ()| vm.saved.set(None))
                />
            })}
        </div>
    }
}
