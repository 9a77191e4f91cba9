use std::time::Duration;

use bevy::prelude::*;
use content::tuning::CAROUSEL_INTERVAL_SECS;

use super::{theme, ModalState, Site};
use crate::engine::locale::translator::TranslationKey;

/// Carousel position and its auto-advance timer. The index always
/// wraps; there is no terminal frame.
#[derive(Resource)]
pub struct Carousel {
    pub index: usize,
    timer: Timer,
}

impl Default for Carousel {
    fn default() -> Self {
        Self {
            index: 0,
            timer: Timer::from_seconds(CAROUSEL_INTERVAL_SECS, TimerMode::Repeating),
        }
    }
}

impl Carousel {
    pub fn advance(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
    }

    pub fn retreat(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + len - 1) % len;
        }
    }

    /// Manual navigation restarts the auto-advance interval so the
    /// chosen frame gets its full dwell time.
    pub fn step(&mut self, direction: i8, len: usize) {
        if direction >= 0 {
            self.advance(len);
        } else {
            self.retreat(len);
        }
        self.timer.reset();
    }

    /// Advances the timer; returns true when it fires.
    pub fn tick(&mut self, delta: Duration, len: usize) -> bool {
        if self.timer.tick(delta).just_finished() {
            self.advance(len);
            true
        } else {
            false
        }
    }
}

/// Modal container for the gallery.
#[derive(Component)]
pub struct GalleryRoot;

#[derive(Component)]
pub struct GalleryImage;

#[derive(Component)]
pub struct GalleryCategoryBadge;

#[derive(Component)]
pub struct GalleryTitle;

#[derive(Component)]
pub struct GalleryDescription;

#[derive(Component)]
pub struct GalleryCounter;

/// Prev/next arrows; the payload is the step direction.
#[derive(Component)]
pub struct GalleryStep(pub i8);

#[derive(Component)]
pub struct GalleryClose;

pub fn spawn_gallery(mut commands: Commands) {
    commands
        .spawn((
            GalleryRoot,
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
            GlobalZIndex(20),
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        width: Val::Px(520.0),
                        padding: UiRect::all(Val::Px(24.0)),
                        border: UiRect::all(Val::Px(1.0)),
                        row_gap: Val::Px(12.0),
                        ..default()
                    },
                    BackgroundColor(theme::SURFACE),
                    BorderColor(theme::BORDER),
                    BorderRadius::all(Val::Px(12.0)),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        GalleryCategoryBadge,
                        Text::default(),
                        TranslationKey::new("gallery.categories.onboarding"),
                        TextFont::from_font_size(12.0),
                        TextColor(theme::ACCENT),
                    ));
                    panel.spawn((
                        GalleryImage,
                        ImageNode::default(),
                        Node {
                            width: Val::Px(220.0),
                            height: Val::Px(440.0),
                            border: UiRect::all(Val::Px(1.0)),
                            ..default()
                        },
                        BorderColor(theme::BORDER),
                        BorderRadius::all(Val::Px(16.0)),
                    ));
                    panel.spawn((
                        GalleryTitle,
                        Text::default(),
                        TranslationKey::new("Welcome Screen"),
                        TextFont::from_font_size(22.0),
                        TextColor(theme::TEXT_PRIMARY),
                    ));
                    panel.spawn((
                        GalleryDescription,
                        Text::default(),
                        TranslationKey::new(""),
                        TextFont::from_font_size(14.0),
                        TextColor(theme::TEXT_MUTED),
                    ));
                    panel
                        .spawn(Node {
                            column_gap: Val::Px(24.0),
                            align_items: AlignItems::Center,
                            margin: UiRect::top(Val::Px(8.0)),
                            ..default()
                        })
                        .with_children(|controls| {
                            controls
                                .spawn((
                                    Button,
                                    GalleryStep(-1),
                                    Node {
                                        padding: UiRect::axes(Val::Px(16.0), Val::Px(6.0)),
                                        border: UiRect::all(Val::Px(1.0)),
                                        ..default()
                                    },
                                    BorderColor(theme::BORDER),
                                    BorderRadius::all(Val::Px(4.0)),
                                ))
                                .with_children(|button| {
                                    button.spawn((
                                        Text::new("<"),
                                        TextFont::from_font_size(16.0),
                                        TextColor(theme::TEXT_PRIMARY),
                                    ));
                                });
                            controls.spawn((
                                GalleryCounter,
                                Text::new("1 / 1"),
                                TextFont::from_font_size(13.0),
                                TextColor(theme::TEXT_FAINT),
                            ));
                            controls
                                .spawn((
                                    Button,
                                    GalleryStep(1),
                                    Node {
                                        padding: UiRect::axes(Val::Px(16.0), Val::Px(6.0)),
                                        border: UiRect::all(Val::Px(1.0)),
                                        ..default()
                                    },
                                    BorderColor(theme::BORDER),
                                    BorderRadius::all(Val::Px(4.0)),
                                ))
                                .with_children(|button| {
                                    button.spawn((
                                        Text::new(">"),
                                        TextFont::from_font_size(16.0),
                                        TextColor(theme::TEXT_PRIMARY),
                                    ));
                                });
                        });
                    panel
                        .spawn((
                            Button,
                            GalleryClose,
                            Node {
                                margin: UiRect::top(Val::Px(8.0)),
                                padding: UiRect::axes(Val::Px(20.0), Val::Px(6.0)),
                                border: UiRect::all(Val::Px(1.0)),
                                ..default()
                            },
                            BorderColor(theme::BORDER),
                            BorderRadius::all(Val::Px(4.0)),
                        ))
                        .with_children(|button| {
                            button.spawn((
                                Text::default(),
                                TranslationKey::new("gallery.close"),
                                TextFont::from_font_size(14.0),
                                TextColor(theme::TEXT_MUTED),
                            ));
                        });
                });
        });
}

pub fn sync_gallery_visibility(
    modal_state: Res<ModalState>,
    mut roots: Query<&mut Node, With<GalleryRoot>>,
) {
    if !modal_state.is_changed() {
        return;
    }
    for mut node in &mut roots {
        node.display = if modal_state.gallery_open {
            Display::Flex
        } else {
            Display::None
        };
    }
}

pub fn close_gallery(
    buttons: Query<&Interaction, (Changed<Interaction>, With<GalleryClose>)>,
    mut modal_state: ResMut<ModalState>,
) {
    for interaction in &buttons {
        if *interaction == Interaction::Pressed {
            modal_state.gallery_open = false;
        }
    }
}

pub fn step_gallery(
    buttons: Query<(&Interaction, &GalleryStep), Changed<Interaction>>,
    site: Res<Site>,
    mut carousel: ResMut<Carousel>,
) {
    for (interaction, step) in &buttons {
        if *interaction == Interaction::Pressed {
            carousel.step(step.0, site.0.gallery.len());
        }
    }
}

/// Auto-advance while the gallery is open.
pub fn tick_carousel(
    time: Res<Time>,
    modal_state: Res<ModalState>,
    site: Res<Site>,
    mut carousel: ResMut<Carousel>,
) {
    if !modal_state.gallery_open {
        return;
    }
    carousel.tick(time.delta(), site.0.gallery.len());
}

/// Point the view at the current gallery entry whenever the index
/// moves. Keys are rewritten in place; the translator picks them up.
pub fn sync_gallery_view(
    carousel: Res<Carousel>,
    site: Res<Site>,
    asset_server: Res<AssetServer>,
    mut badges: Query<
        &mut TranslationKey,
        (
            With<GalleryCategoryBadge>,
            Without<GalleryTitle>,
            Without<GalleryDescription>,
        ),
    >,
    mut titles: Query<
        &mut TranslationKey,
        (With<GalleryTitle>, Without<GalleryDescription>),
    >,
    mut descriptions: Query<&mut TranslationKey, With<GalleryDescription>>,
    mut counters: Query<&mut Text, With<GalleryCounter>>,
    mut images: Query<&mut ImageNode, With<GalleryImage>>,
) {
    if !carousel.is_changed() {
        return;
    }
    let Some(item) = site.0.gallery.get(carousel.index) else {
        return;
    };

    for mut key in &mut badges {
        key.0 = item.category.translation_key().to_string();
    }
    for mut key in &mut titles {
        key.0 = item.title.to_string();
    }
    for mut key in &mut descriptions {
        key.0 = item.description.to_string();
    }
    for mut counter in &mut counters {
        counter.0 = format!("{} / {}", carousel.index + 1, site.0.gallery.len());
    }
    for mut image in &mut images {
        image.image = asset_server.load(item.image);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_advance_wraps_past_the_last_index() {
        let mut carousel = Carousel::default();
        let len = 15;
        let interval = Duration::from_secs_f32(CAROUSEL_INTERVAL_SECS);

        let mut seen = Vec::new();
        for _ in 0..len + 2 {
            carousel.tick(interval, len);
            seen.push(carousel.index);
        }
        assert_eq!(&seen[..4], &[1, 2, 3, 4]);
        assert_eq!(seen[len - 1], 0);
        assert_eq!(seen[len], 1);
    }

    #[test]
    fn timer_only_fires_on_the_interval() {
        let mut carousel = Carousel::default();
        assert!(!carousel.tick(Duration::from_secs_f32(CAROUSEL_INTERVAL_SECS / 2.0), 5));
        assert_eq!(carousel.index, 0);
        assert!(carousel.tick(Duration::from_secs_f32(CAROUSEL_INTERVAL_SECS / 2.0), 5));
        assert_eq!(carousel.index, 1);
    }

    #[test]
    fn manual_steps_wrap_in_both_directions() {
        let mut carousel = Carousel::default();
        carousel.step(-1, 15);
        assert_eq!(carousel.index, 14);
        carousel.step(1, 15);
        assert_eq!(carousel.index, 0);
    }

    #[test]
    fn empty_gallery_never_moves() {
        let mut carousel = Carousel::default();
        carousel.advance(0);
        carousel.retreat(0);
        assert_eq!(carousel.index, 0);
    }
}
