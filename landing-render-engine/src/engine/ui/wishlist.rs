use bevy::prelude::*;

use super::{theme, ModalState};
use crate::engine::leads::form::{FieldFocus, FormStatus, SubmitLeadEvent, WishlistForm};
use crate::engine::locale::translator::TranslationKey;

/// Modal container for the wishlist form.
#[derive(Component)]
pub struct WishlistRoot;

/// A clickable input field; the payload is the field it focuses.
#[derive(Component)]
pub struct WishlistField(pub FieldFocus);

/// The text inside an input field, showing the typed value.
#[derive(Component)]
pub struct WishlistFieldText(pub FieldFocus);

/// One-line status area under the fields.
#[derive(Component)]
pub struct WishlistStatusText;

#[derive(Component)]
pub struct WishlistSubmit;

#[derive(Component)]
pub struct WishlistClose;

fn field_row(
    panel: &mut ChildSpawnerCommands,
    focus: FieldFocus,
    label_key: &str,
) {
    panel.spawn((
        Text::default(),
        TranslationKey::new(label_key),
        TextFont::from_font_size(13.0),
        TextColor(theme::TEXT_MUTED),
    ));
    panel
        .spawn((
            Button,
            WishlistField(focus),
            Node {
                width: Val::Percent(100.0),
                padding: UiRect::axes(Val::Px(12.0), Val::Px(10.0)),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(theme::BACKGROUND),
            BorderColor(theme::BORDER),
            BorderRadius::all(Val::Px(6.0)),
        ))
        .with_children(|field| {
            field.spawn((
                WishlistFieldText(focus),
                Text::default(),
                TextFont::from_font_size(15.0),
                TextColor(theme::TEXT_PRIMARY),
            ));
        });
}

pub fn spawn_wishlist(mut commands: Commands) {
    commands
        .spawn((
            WishlistRoot,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                left: Val::Px(0.0),
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                display: Display::None,
                ..default()
            },
            BackgroundColor(theme::OVERLAY),
            GlobalZIndex(30),
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        width: Val::Px(420.0),
                        padding: UiRect::all(Val::Px(28.0)),
                        border: UiRect::all(Val::Px(1.0)),
                        row_gap: Val::Px(10.0),
                        ..default()
                    },
                    BackgroundColor(theme::SURFACE),
                    BorderColor(theme::BORDER),
                    BorderRadius::all(Val::Px(12.0)),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::default(),
                        TranslationKey::new("wishlist.title"),
                        TextFont::from_font_size(24.0),
                        TextColor(theme::TEXT_PRIMARY),
                    ));
                    panel.spawn((
                        Text::default(),
                        TranslationKey::new("wishlist.subtitle"),
                        TextFont::from_font_size(14.0),
                        TextColor(theme::TEXT_MUTED),
                    ));

                    field_row(panel, FieldFocus::Name, "wishlist.nameLabel");
                    field_row(panel, FieldFocus::Email, "wishlist.emailLabel");

                    panel.spawn((
                        WishlistStatusText,
                        Text::default(),
                        TranslationKey::new(""),
                        TextFont::from_font_size(13.0),
                        TextColor(theme::TEXT_MUTED),
                    ));

                    panel
                        .spawn(Node {
                            column_gap: Val::Px(12.0),
                            margin: UiRect::top(Val::Px(8.0)),
                            ..default()
                        })
                        .with_children(|row| {
                            row.spawn((
                                Button,
                                WishlistSubmit,
                                Node {
                                    padding: UiRect::axes(Val::Px(20.0), Val::Px(10.0)),
                                    border: UiRect::all(Val::Px(1.0)),
                                    ..default()
                                },
                                BackgroundColor(theme::ACCENT),
                                BorderColor(theme::ACCENT),
                                BorderRadius::all(Val::Px(6.0)),
                            ))
                            .with_children(|button| {
                                button.spawn((
                                    Text::default(),
                                    TranslationKey::new("wishlist.submit"),
                                    TextFont::from_font_size(15.0),
                                    TextColor(theme::BACKGROUND),
                                ));
                            });
                            row.spawn((
                                Button,
                                WishlistClose,
                                Node {
                                    padding: UiRect::axes(Val::Px(20.0), Val::Px(10.0)),
                                    border: UiRect::all(Val::Px(1.0)),
                                    ..default()
                                },
                                BorderColor(theme::BORDER),
                                BorderRadius::all(Val::Px(6.0)),
                            ))
                            .with_children(|button| {
                                button.spawn((
                                    Text::default(),
                                    TranslationKey::new("wishlist.close"),
                                    TextFont::from_font_size(15.0),
                                    TextColor(theme::TEXT_MUTED),
                                ));
                            });
                        });
                });
        });
}

/// Show or hide the modal. Closing arms the form's delayed reset; an
/// in-flight submission keeps running and lands its result unseen.
pub fn sync_wishlist_visibility(
    modal_state: Res<ModalState>,
    mut was_open: Local<bool>,
    mut roots: Query<&mut Node, With<WishlistRoot>>,
    mut form: ResMut<WishlistForm>,
) {
    if !modal_state.is_changed() {
        return;
    }
    for mut node in &mut roots {
        node.display = if modal_state.wishlist_open {
            Display::Flex
        } else {
            Display::None
        };
    }
    if *was_open && !modal_state.wishlist_open {
        form.schedule_reset();
    }
    *was_open = modal_state.wishlist_open;
}

pub fn close_wishlist(
    buttons: Query<&Interaction, (Changed<Interaction>, With<WishlistClose>)>,
    mut modal_state: ResMut<ModalState>,
) {
    for interaction in &buttons {
        if *interaction == Interaction::Pressed {
            modal_state.wishlist_open = false;
        }
    }
}

/// Clicking a field moves the keyboard focus there. Clicking anything
/// after a failure returns the form to an editable state.
pub fn focus_fields(
    fields: Query<(&Interaction, &WishlistField), Changed<Interaction>>,
    mut form: ResMut<WishlistForm>,
) {
    for (interaction, field) in &fields {
        if *interaction == Interaction::Pressed {
            form.retry();
            form.focus = field.0;
        }
    }
}

pub fn submit_wishlist(
    buttons: Query<&Interaction, (Changed<Interaction>, With<WishlistSubmit>)>,
    mut events: EventWriter<SubmitLeadEvent>,
) {
    for interaction in &buttons {
        if *interaction == Interaction::Pressed {
            events.write(SubmitLeadEvent);
        }
    }
}

/// Mirror the form state into the modal: field values with a caret on
/// the focused one, highlighted borders and the status line.
pub fn sync_form_views(
    form: Res<WishlistForm>,
    mut field_texts: Query<(&WishlistFieldText, &mut Text)>,
    mut field_borders: Query<(&WishlistField, &mut BorderColor)>,
    mut status: Query<
        (&mut TranslationKey, &mut TextColor),
        With<WishlistStatusText>,
    >,
) {
    if !form.is_changed() {
        return;
    }

    for (field, mut text) in &mut field_texts {
        let value = match field.0 {
            FieldFocus::Name => &form.name,
            FieldFocus::Email => &form.email,
        };
        text.0 = if form.focus == field.0 && form.status != FormStatus::Submitting {
            format!("{value}_")
        } else {
            value.clone()
        };
    }

    for (field, mut border) in &mut field_borders {
        *border = if form.focus == field.0 {
            BorderColor(theme::ACCENT)
        } else {
            BorderColor(theme::BORDER)
        };
    }

    for (mut key, mut color) in &mut status {
        let (next_key, next_color) = match form.status {
            FormStatus::Idle => ("".to_string(), theme::TEXT_MUTED),
            FormStatus::Submitting => ("wishlist.submitting".to_string(), theme::TEXT_MUTED),
            FormStatus::Success => ("wishlist.success".to_string(), theme::SUCCESS),
            FormStatus::Error => (form.error_message.clone(), theme::ERROR),
        };
        key.0 = next_key;
        *color = TextColor(next_color);
    }
}
