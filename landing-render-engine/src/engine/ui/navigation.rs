use bevy::prelude::*;
use content::tuning::NAV_CONDENSE_OFFSET;

use super::sections::PageAction;
use super::{theme, Site};
use crate::engine::locale::translator::{LocaleState, TranslationKey};
use crate::engine::systems::scrolling::PageScroll;

/// The fixed bar pinned to the top of the viewport.
#[derive(Component)]
pub struct NavBar;

/// Full-screen menu overlay, hidden until toggled.
#[derive(Component)]
pub struct NavMenuRoot;

/// Buttons that open or close the menu overlay.
#[derive(Component)]
pub struct MenuToggle;

/// A link inside the menu overlay. Carries a scroll action too.
#[derive(Component)]
pub struct NavMenuLink;

/// The language switcher button.
#[derive(Component)]
pub struct LanguageToggle;

/// Its label, showing the locale a press would switch to.
#[derive(Component)]
pub struct LanguageToggleLabel;

/// Whether the menu overlay is showing. Not a modal: the page still
/// scrolls underneath.
#[derive(Resource, Default)]
pub struct NavMenu {
    pub open: bool,
}

pub fn spawn_navigation(mut commands: Commands, site: Res<Site>, locale: Res<LocaleState>) {
    // The pinned bar.
    commands
        .spawn((
            NavBar,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                left: Val::Px(0.0),
                width: Val::Percent(100.0),
                padding: UiRect::axes(Val::Px(32.0), Val::Px(20.0)),
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::NONE),
            GlobalZIndex(10),
        ))
        .with_children(|bar| {
            bar.spawn((
                Text::new("MedVault AI"),
                TextFont::from_font_size(20.0),
                TextColor(theme::ACCENT),
            ));
            bar.spawn(Node {
                column_gap: Val::Px(12.0),
                align_items: AlignItems::Center,
                ..default()
            })
            .with_children(|controls| {
                controls
                    .spawn((
                        Button,
                        LanguageToggle,
                        Node {
                            padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                            border: UiRect::all(Val::Px(1.0)),
                            ..default()
                        },
                        BorderColor(theme::BORDER),
                        BorderRadius::all(Val::Px(4.0)),
                    ))
                    .with_children(|button| {
                        button.spawn((
                            LanguageToggleLabel,
                            Text::default(),
                            TranslationKey::new(locale.current.toggled().label_key()),
                            TextFont::from_font_size(14.0),
                            TextColor(theme::TEXT_PRIMARY),
                        ));
                    });
                controls
                    .spawn((
                        Button,
                        MenuToggle,
                        Node {
                            padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                            border: UiRect::all(Val::Px(1.0)),
                            ..default()
                        },
                        BorderColor(theme::BORDER),
                        BorderRadius::all(Val::Px(4.0)),
                    ))
                    .with_children(|button| {
                        button.spawn((
                            Text::default(),
                            TranslationKey::new("nav.menu"),
                            TextFont::from_font_size(14.0),
                            TextColor(theme::TEXT_PRIMARY),
                        ));
                    });
            });
        });

    // The full-screen overlay the menu button reveals.
    commands
        .spawn((
            NavMenuRoot,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                left: Val::Px(0.0),
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(20.0),
                display: Display::None,
                ..default()
            },
            BackgroundColor(theme::OVERLAY),
            GlobalZIndex(15),
        ))
        .with_children(|menu| {
            for item in &site.0.nav {
                menu.spawn((
                    Button,
                    NavMenuLink,
                    PageAction::ScrollTo(item.target),
                    Node {
                        padding: UiRect::axes(Val::Px(24.0), Val::Px(8.0)),
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                    BorderColor(Color::NONE),
                ))
                .with_children(|link| {
                    link.spawn((
                        Text::default(),
                        TranslationKey::new(item.label),
                        TextFont::from_font_size(28.0),
                        TextColor(theme::TEXT_PRIMARY),
                    ));
                });
            }
            menu.spawn((
                Button,
                MenuToggle,
                Node {
                    margin: UiRect::top(Val::Px(32.0)),
                    padding: UiRect::axes(Val::Px(24.0), Val::Px(8.0)),
                    border: UiRect::all(Val::Px(1.0)),
                    ..default()
                },
                BorderColor(theme::BORDER),
                BorderRadius::all(Val::Px(4.0)),
            ))
            .with_children(|button| {
                button.spawn((
                    Text::default(),
                    TranslationKey::new("nav.close"),
                    TextFont::from_font_size(16.0),
                    TextColor(theme::TEXT_MUTED),
                ));
            });
        });
}

pub fn toggle_menu(
    toggles: Query<&Interaction, (Changed<Interaction>, With<MenuToggle>)>,
    mut menu: ResMut<NavMenu>,
) {
    for interaction in &toggles {
        if *interaction == Interaction::Pressed {
            menu.open = !menu.open;
        }
    }
}

/// A pressed menu link closes the overlay; the shared page-action
/// handler performs the scroll itself.
pub fn close_menu_on_link(
    links: Query<&Interaction, (Changed<Interaction>, With<NavMenuLink>)>,
    mut menu: ResMut<NavMenu>,
) {
    for interaction in &links {
        if *interaction == Interaction::Pressed {
            menu.open = false;
        }
    }
}

pub fn apply_menu_visibility(
    menu: Res<NavMenu>,
    mut roots: Query<&mut Node, With<NavMenuRoot>>,
) {
    if !menu.is_changed() {
        return;
    }
    for mut node in &mut roots {
        node.display = if menu.open {
            Display::Flex
        } else {
            Display::None
        };
    }
}

pub fn toggle_language(
    toggles: Query<&Interaction, (Changed<Interaction>, With<LanguageToggle>)>,
    mut locale: ResMut<LocaleState>,
) {
    for interaction in &toggles {
        if *interaction == Interaction::Pressed {
            locale.toggle();
        }
    }
}

/// Point the switcher label at the locale a press would activate.
/// Runs before the translated-text refresh so the new key is resolved
/// in the same frame.
pub fn update_language_toggle(
    locale: Res<LocaleState>,
    mut labels: Query<&mut TranslationKey, With<LanguageToggleLabel>>,
) {
    if !locale.is_changed() || locale.is_added() {
        return;
    }
    for mut key in &mut labels {
        key.0 = locale.current.toggled().label_key().to_string();
    }
}

/// Condense the bar once the page moves: tighter padding over a solid
/// surface instead of floating transparent.
pub fn condense_navigation(
    scroll: Res<PageScroll>,
    mut condensed: Local<bool>,
    mut bars: Query<(&mut Node, &mut BackgroundColor), With<NavBar>>,
) {
    let should_condense = scroll.offset > NAV_CONDENSE_OFFSET;
    if should_condense == *condensed {
        return;
    }
    *condensed = should_condense;
    for (mut node, mut background) in &mut bars {
        if should_condense {
            node.padding = UiRect::axes(Val::Px(32.0), Val::Px(10.0));
            *background = BackgroundColor(theme::SURFACE.with_alpha(0.92));
        } else {
            node.padding = UiRect::axes(Val::Px(32.0), Val::Px(20.0));
            *background = BackgroundColor(Color::NONE);
        }
    }
}
