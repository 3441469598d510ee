use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::assets::scene_settings::SceneSettings;
use crate::engine::core::app_state::{AppState, FpsText, HudText, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::settings_loader::{SettingsLoader, load_settings_system, start_loading};
use crate::engine::loading::texture_config::configure_loaded_textures;
use crate::engine::loading::texture_loader::check_texture_loading;
use crate::engine::systems::fps_tracking::{fps_text_update_system, hud_text_update_system};
use crate::engine::systems::frame_loop::SceneLoopPlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SceneSettings as a loadable asset type from `*.settings.json` files.
        .add_plugins(JsonAssetPlugin::<SceneSettings>::new(&["settings.json"]))
        .insert_resource(ClearColor(Color::BLACK));

    app.add_plugins(SceneLoopPlugin);

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<SettingsLoader>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                load_settings_system,
                check_texture_loading,
                configure_loaded_textures,
                transition_to_running,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            Update,
            (fps_text_update_system, hud_text_update_system).run_if(in_state(AppState::Running)),
        );

    app
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    println!("Mars Rovers: W/S drive, A/D turn, arrows + R/F move camera, C toggles chase");
    create_native_overlays(&mut commands);
}

fn create_native_overlays(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
            parent.spawn((
                Text::new("Loading..."),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                HudText,
            ));
        });
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
