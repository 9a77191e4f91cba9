use bevy::prelude::*;
use content::site::{PageSectionId, Pillar, SiteContent};
use content::tuning::DOWNLOAD_PACKAGE_URL;

use super::{theme, ModalState, Site};
use crate::engine::locale::translator::TranslationKey;
use crate::engine::systems::scrolling::PageScroll;

/// Marker for the scrolled page container. The scroll systems translate
/// this node; everything below it moves with the page.
#[derive(Component)]
pub struct PageRoot;

/// What a page button does when pressed.
#[derive(Component, Clone, Copy)]
pub enum PageAction {
    OpenWishlist,
    OpenGallery,
    OpenDownload,
    ScrollTo(PageSectionId),
}

/// Stacked section heights in viewport-height units, in document order.
/// The first four entries are full-viewport so the section observer's
/// anchors line up with them exactly.
pub const SECTION_HEIGHTS_VH: &[(PageSectionId, f32)] = &[
    (PageSectionId::Hero, 100.0),
    (PageSectionId::Pillar(0), 100.0),
    (PageSectionId::Pillar(1), 100.0),
    (PageSectionId::Pillar(2), 100.0),
    (PageSectionId::Stats, 60.0),
    (PageSectionId::UseCases, 120.0),
    (PageSectionId::Insights, 90.0),
    (PageSectionId::Download, 80.0),
    (PageSectionId::Footer, 60.0),
];

/// Total page height in viewport-height units.
pub fn page_height_vh() -> f32 {
    SECTION_HEIGHTS_VH.iter().map(|(_, height)| height).sum()
}

/// Page-space top of the given section, in viewport-height units.
pub fn section_top_vh(target: PageSectionId) -> f32 {
    let mut top = 0.0;
    for (section, height) in SECTION_HEIGHTS_VH {
        if *section == target {
            return top;
        }
        top += height;
    }
    top
}

fn section_node(height_vh: f32) -> Node {
    Node {
        width: Val::Percent(100.0),
        height: Val::Vh(height_vh),
        flex_direction: FlexDirection::Column,
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        padding: UiRect::axes(Val::Px(48.0), Val::Px(24.0)),
        row_gap: Val::Px(16.0),
        ..default()
    }
}

/// Text node whose content comes from the locale catalogs. Literals
/// from the content record act as their own key.
fn translated(key: &str, size: f32, color: Color) -> impl Bundle {
    (
        Text::default(),
        TranslationKey::new(key),
        TextFont::from_font_size(size),
        TextColor(color),
    )
}

fn action_button(action: PageAction, filled: bool) -> impl Bundle {
    (
        Button,
        action,
        Node {
            padding: UiRect::axes(Val::Px(24.0), Val::Px(12.0)),
            border: UiRect::all(Val::Px(1.0)),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(if filled { theme::ACCENT } else { Color::NONE }),
        BorderColor(if filled { theme::ACCENT } else { theme::BORDER }),
        BorderRadius::all(Val::Px(6.0)),
    )
}

/// Spawns the whole page column. Runs once when loading finishes.
pub fn spawn_page(mut commands: Commands, site: Res<Site>) {
    let site = &site.0;
    commands
        .spawn((
            PageRoot,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                left: Val::Px(0.0),
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                ..default()
            },
        ))
        .with_children(|page| {
            for (section, height) in SECTION_HEIGHTS_VH {
                match section {
                    PageSectionId::Hero => spawn_hero(page, site, *height),
                    PageSectionId::Pillar(index) => {
                        if let Some(pillar) = site.pillars.get(*index) {
                            spawn_pillar(page, pillar, *index, *height);
                        }
                    }
                    PageSectionId::Stats => spawn_stats(page, site, *height),
                    PageSectionId::UseCases => spawn_use_cases(page, site, *height),
                    PageSectionId::Insights => spawn_insights(page, site, *height),
                    PageSectionId::Download => spawn_download(page, *height),
                    PageSectionId::Footer => spawn_footer(page, site, *height),
                }
            }
        });
}

fn spawn_hero(page: &mut ChildSpawnerCommands, site: &SiteContent, height: f32) {
    page.spawn(section_node(height)).with_children(|hero| {
        hero.spawn(translated("hero.badge", 14.0, theme::ACCENT));
        hero.spawn(translated(site.hero.headline, 48.0, theme::TEXT_PRIMARY));
        hero.spawn(translated(site.hero.subhead, 18.0, theme::TEXT_MUTED));
        hero.spawn(Node {
            column_gap: Val::Px(16.0),
            margin: UiRect::top(Val::Px(24.0)),
            ..default()
        })
        .with_children(|row| {
            row.spawn(action_button(PageAction::OpenWishlist, true))
                .with_children(|button| {
                    button.spawn(translated(site.hero.primary_cta, 16.0, theme::BACKGROUND));
                });
            row.spawn(action_button(
                PageAction::ScrollTo(PageSectionId::Pillar(0)),
                false,
            ))
            .with_children(|button| {
                button.spawn(translated(site.hero.secondary_cta, 16.0, theme::TEXT_PRIMARY));
            });
        });
    });
}

fn spawn_pillar(page: &mut ChildSpawnerCommands, pillar: &Pillar, index: usize, height: f32) {
    let accent = theme::parse_hex(pillar.color_hex);
    page.spawn(section_node(height)).with_children(|section| {
        section.spawn((
            Text::new(format!("0{}", index + 1)),
            TextFont::from_font_size(14.0),
            TextColor(theme::TEXT_FAINT),
        ));
        section.spawn(translated(pillar.title, 36.0, accent));
        section.spawn(translated(pillar.subtitle, 20.0, theme::TEXT_MUTED));
        for line in &pillar.description {
            section.spawn(translated(line, 16.0, theme::TEXT_MUTED));
        }
        section
            .spawn(action_button(PageAction::OpenGallery, false))
            .with_children(|button| {
                button.spawn(translated(pillar.cta, 16.0, accent));
            });
    });
}

fn spawn_stats(page: &mut ChildSpawnerCommands, site: &SiteContent, height: f32) {
    page.spawn(section_node(height)).with_children(|section| {
        section
            .spawn(Node {
                column_gap: Val::Px(48.0),
                ..default()
            })
            .with_children(|row| {
                for stat in &site.stats {
                    row.spawn(Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        row_gap: Val::Px(8.0),
                        ..default()
                    })
                    .with_children(|card| {
                        card.spawn(translated(stat.value, 32.0, theme::ACCENT));
                        card.spawn(translated(stat.label, 14.0, theme::TEXT_MUTED));
                    });
                }
            });
    });
}

fn spawn_use_cases(page: &mut ChildSpawnerCommands, site: &SiteContent, height: f32) {
    page.spawn(section_node(height)).with_children(|section| {
        section.spawn(translated("useCases.title", 32.0, theme::TEXT_PRIMARY));
        section
            .spawn(Node {
                flex_wrap: FlexWrap::Wrap,
                justify_content: JustifyContent::Center,
                column_gap: Val::Px(24.0),
                row_gap: Val::Px(24.0),
                max_width: Val::Px(1100.0),
                ..default()
            })
            .with_children(|grid| {
                for case in &site.use_cases {
                    grid.spawn((
                        Node {
                            flex_direction: FlexDirection::Column,
                            width: Val::Px(320.0),
                            padding: UiRect::all(Val::Px(20.0)),
                            border: UiRect::all(Val::Px(1.0)),
                            row_gap: Val::Px(8.0),
                            ..default()
                        },
                        BackgroundColor(theme::SURFACE),
                        BorderColor(theme::BORDER),
                        BorderRadius::all(Val::Px(8.0)),
                    ))
                    .with_children(|card| {
                        card.spawn(translated(case.title, 18.0, theme::TEXT_PRIMARY));
                        card.spawn(translated(case.description, 14.0, theme::TEXT_MUTED));
                    });
                }
            });
    });
}

fn spawn_insights(page: &mut ChildSpawnerCommands, site: &SiteContent, height: f32) {
    page.spawn(section_node(height)).with_children(|section| {
        section.spawn(translated("insights.title", 32.0, theme::TEXT_PRIMARY));
        section
            .spawn(Node {
                column_gap: Val::Px(24.0),
                ..default()
            })
            .with_children(|row| {
                for insight in &site.insights {
                    row.spawn((
                        Node {
                            flex_direction: FlexDirection::Column,
                            width: Val::Px(320.0),
                            padding: UiRect::all(Val::Px(20.0)),
                            border: UiRect::all(Val::Px(1.0)),
                            row_gap: Val::Px(8.0),
                            ..default()
                        },
                        BackgroundColor(theme::SURFACE),
                        BorderColor(theme::BORDER),
                        BorderRadius::all(Val::Px(8.0)),
                    ))
                    .with_children(|card| {
                        card.spawn(translated(insight.tag, 12.0, theme::ACCENT));
                        card.spawn(translated(insight.title, 18.0, theme::TEXT_PRIMARY));
                        card.spawn((
                            Text::new(insight.date),
                            TextFont::from_font_size(12.0),
                            TextColor(theme::TEXT_FAINT),
                        ));
                    });
                }
            });
    });
}

fn spawn_download(page: &mut ChildSpawnerCommands, height: f32) {
    page.spawn(section_node(height)).with_children(|section| {
        section.spawn(translated("download.title", 32.0, theme::TEXT_PRIMARY));
        section.spawn(translated("download.subtitle", 16.0, theme::TEXT_MUTED));
        section
            .spawn(Node {
                column_gap: Val::Px(16.0),
                margin: UiRect::top(Val::Px(16.0)),
                ..default()
            })
            .with_children(|row| {
                row.spawn(action_button(PageAction::OpenDownload, true))
                    .with_children(|button| {
                        button.spawn(translated("download.cta", 16.0, theme::BACKGROUND));
                    });
                row.spawn(action_button(PageAction::OpenWishlist, false))
                    .with_children(|button| {
                        button.spawn(translated("download.wishlistCta", 16.0, theme::TEXT_PRIMARY));
                    });
            });
    });
}

fn spawn_footer(page: &mut ChildSpawnerCommands, site: &SiteContent, height: f32) {
    page.spawn((section_node(height), BackgroundColor(theme::SURFACE)))
        .with_children(|section| {
            section
                .spawn(Node {
                    column_gap: Val::Px(64.0),
                    ..default()
                })
                .with_children(|row| {
                    for column in &site.footer.links {
                        row.spawn(Node {
                            flex_direction: FlexDirection::Column,
                            row_gap: Val::Px(6.0),
                            ..default()
                        })
                        .with_children(|list| {
                            list.spawn(translated(column.category, 14.0, theme::TEXT_PRIMARY));
                            for item in &column.items {
                                list.spawn(translated(item, 13.0, theme::TEXT_MUTED));
                            }
                        });
                    }
                });
            section.spawn(translated(site.footer.blurb, 14.0, theme::TEXT_MUTED));
            section.spawn((
                Text::new(format!(
                    "{}  {}  {}",
                    site.footer.copyright, site.footer.team, site.footer.email
                )),
                TextFont::from_font_size(12.0),
                TextColor(theme::TEXT_FAINT),
            ));
        });
}

/// Runs pressed page buttons. Scroll targets come from the layout
/// table, so moving a section keeps its nav links honest.
pub fn handle_page_actions(
    buttons: Query<(&Interaction, &PageAction), Changed<Interaction>>,
    mut modal_state: ResMut<ModalState>,
    mut scroll: ResMut<PageScroll>,
) {
    for (interaction, action) in &buttons {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match action {
            PageAction::OpenWishlist => {
                modal_state.wishlist_open = true;
            }
            PageAction::OpenGallery => {
                modal_state.gallery_open = true;
            }
            PageAction::OpenDownload => {
                open_download_package();
            }
            PageAction::ScrollTo(target) => {
                if !modal_state.any_open() {
                    scroll.scroll_to_vh(section_top_vh(*target));
                }
            }
        }
    }
}

/// Opens the release package in a new browser tab. On native there is
/// no tab to open, so the link is logged instead.
fn open_download_package() {
    info!("Download package requested: {DOWNLOAD_PACKAGE_URL}");
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            warn!("Download requested without a window");
            return;
        };
        if window
            .open_with_url_and_target(DOWNLOAD_PACKAGE_URL, "_blank")
            .is_err()
        {
            warn!("Browser refused to open the download URL");
        }
    }
}

/// Border highlight on hover. Limited to page-action buttons; modal
/// fields and menu links manage their own borders.
pub fn button_hover_feedback(
    mut buttons: Query<
        (&Interaction, &mut BorderColor),
        (
            Changed<Interaction>,
            With<PageAction>,
            Without<crate::engine::ui::navigation::NavMenuLink>,
        ),
    >,
) {
    for (interaction, mut border) in &mut buttons {
        *border = match interaction {
            Interaction::Hovered | Interaction::Pressed => BorderColor(theme::ACCENT),
            Interaction::None => BorderColor(theme::BORDER),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_four_sections_fill_the_viewport() {
        let heights: Vec<f32> = SECTION_HEIGHTS_VH
            .iter()
            .take(4)
            .map(|(_, height)| *height)
            .collect();
        assert_eq!(heights, vec![100.0, 100.0, 100.0, 100.0]);
    }

    #[test]
    fn section_tops_accumulate_in_document_order() {
        assert_eq!(section_top_vh(PageSectionId::Hero), 0.0);
        assert_eq!(section_top_vh(PageSectionId::Pillar(0)), 100.0);
        assert_eq!(section_top_vh(PageSectionId::Stats), 400.0);
        assert!(section_top_vh(PageSectionId::Footer) < page_height_vh());
    }

    #[test]
    fn page_height_covers_every_section() {
        let total: f32 = SECTION_HEIGHTS_VH.iter().map(|(_, h)| h).sum();
        assert_eq!(page_height_vh(), total);
        assert!(page_height_vh() > 700.0);
    }
}
