use bevy::prelude::*;

/// Application lifecycle states. The page composer only spawns once the
/// translation catalogs have settled, so the first painted frame already
/// carries resolved strings.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States, Resource)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

#[derive(Resource, Default)]
pub struct LoadingProgress {
    /// Every locale catalog has either loaded or failed terminally.
    pub catalogs_settled: bool,
}

pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.catalogs_settled {
        println!("→ Transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
