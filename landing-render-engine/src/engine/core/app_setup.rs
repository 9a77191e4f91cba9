use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::core::app_state::{AppState, LoadingProgress, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::leads::form::{
    RelayOutcomeQueue, SubmitLeadEvent, WishlistForm, dispatch_lead_submissions,
    poll_relay_outcomes, tick_form_reset,
};
use crate::engine::locale::translator::{
    CatalogAsset, LocaleState, fill_new_translations, poll_catalogs, refresh_translated_text,
    start_catalog_loading,
};
use crate::engine::scene::backdrop::{rotate_backdrop, setup_backdrop};
use crate::engine::scene::particles::{
    morph_particles, rotate_particle_cloud, setup_particles, tint_particles,
};
use crate::engine::systems::fps_tracking::{fps_text_update_system, spawn_fps_overlay};
use crate::engine::systems::scrolling::{
    ActiveSection, PageScroll, apply_page_scroll, handle_scroll_input, observe_sections,
    sync_viewport_metrics,
};
use crate::engine::ui::gallery::{
    Carousel, close_gallery, spawn_gallery, step_gallery, sync_gallery_view,
    sync_gallery_visibility, tick_carousel,
};
use crate::engine::ui::navigation::{
    NavMenu, apply_menu_visibility, close_menu_on_link, condense_navigation, spawn_navigation,
    toggle_language, toggle_menu, update_language_toggle,
};
use crate::engine::ui::sections::{button_hover_feedback, handle_page_actions, spawn_page};
use crate::engine::ui::text_input::handle_text_input;
use crate::engine::ui::wishlist::{
    close_wishlist, focus_fields, spawn_wishlist, submit_wishlist, sync_form_views,
    sync_wishlist_visibility,
};
use crate::engine::ui::{ModalState, Site, theme};

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::leads::form::ActiveRelay;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers the locale catalogs as loadable JSON assets.
        .add_plugins(JsonAssetPlugin::<CatalogAsset>::new(&["json"]));

    // Resources and events, available before any system runs.
    app.insert_resource(ClearColor(theme::BACKGROUND))
        .insert_resource(LocaleState::detect())
        .init_resource::<Site>()
        .init_resource::<LoadingProgress>()
        .init_resource::<ActiveSection>()
        .init_resource::<PageScroll>()
        .init_resource::<ModalState>()
        .init_resource::<NavMenu>()
        .init_resource::<Carousel>()
        .init_resource::<WishlistForm>()
        .init_resource::<RelayOutcomeQueue>()
        .add_event::<SubmitLeadEvent>();

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.init_resource::<ActiveRelay>();
    }

    // The scene and catalog loading start immediately; the page itself
    // waits for the catalogs so its first frame is already translated.
    app.add_systems(
        Startup,
        (
            setup_backdrop,
            setup_particles,
            start_catalog_loading,
            spawn_fps_overlay,
        ),
    )
    .add_systems(
        Update,
        (poll_catalogs, transition_to_running)
            .chain()
            .run_if(in_state(AppState::Loading)),
    )
    .add_systems(
        OnEnter(AppState::Running),
        (spawn_page, spawn_navigation, spawn_gallery, spawn_wishlist),
    );

    // Scroll pipeline: metrics, input, observation, then layout.
    app.add_systems(
        Update,
        (
            sync_viewport_metrics,
            handle_scroll_input,
            observe_sections,
            apply_page_scroll,
        )
            .chain()
            .run_if(in_state(AppState::Running)),
    );

    // Scene animation runs in every state so the backdrop moves during
    // loading too.
    app.add_systems(
        Update,
        (morph_particles, rotate_particle_cloud, tint_particles, rotate_backdrop),
    );

    // Page chrome and modals.
    app.add_systems(
        Update,
        (
            handle_page_actions,
            button_hover_feedback,
            toggle_menu,
            close_menu_on_link,
            apply_menu_visibility,
            toggle_language,
            condense_navigation,
            step_gallery,
            close_gallery,
            tick_carousel,
            sync_gallery_visibility,
            focus_fields,
            submit_wishlist,
            close_wishlist,
            handle_text_input,
            sync_wishlist_visibility,
        )
            .run_if(in_state(AppState::Running)),
    );

    // Lead relay round trip.
    app.add_systems(
        Update,
        (dispatch_lead_submissions, poll_relay_outcomes, tick_form_reset)
            .chain()
            .run_if(in_state(AppState::Running)),
    );

    // View sync rewrites translation keys, so it must land before the
    // fill pass resolves them.
    app.add_systems(
        Update,
        (
            sync_gallery_view,
            update_language_toggle,
            sync_form_views,
            fill_new_translations,
            refresh_translated_text,
        )
            .chain()
            .run_if(in_state(AppState::Running)),
    );

    app.add_systems(Update, fps_text_update_system);

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
