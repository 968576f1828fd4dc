mod camera;
mod constants;
mod input;
mod scene;
mod ui;
mod world;

use bevy::{diagnostic::FrameTimeDiagnosticsPlugin, prelude::*, window::PresentMode};
use bevy_inspector_egui::{bevy_egui::EguiPlugin, DefaultInspectorConfigPlugin};
use clap::Parser;
use constants::{BINDS_FILE, DEFAULT_ASSETS_FOLDER};
use input::{data::SceneAction, keyboard::get_bindings};
use scene::AppState;
use seascape_shared::config::{SeascapeConfig, DEFAULT_CONFIG_FILE};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::PathBuf};

#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(long, value_enum, default_value_t = AppState::Ocean, help = "Scene to open first")]
    scene: AppState,

    #[arg(short, long, help = "Path to the RON config file, defaults to ./seascape.ron")]
    config: Option<PathBuf>,

    #[arg(
        short,
        long,
        help = "Allows overriding of the asset folder path, defaults to ../data"
    )]
    assets_folder_path: Option<String>,

    #[arg(long)]
    width: Option<f32>,

    #[arg(long)]
    height: Option<f32>,

    #[arg(long, help = "Open the resource inspector on start")]
    inspector: bool,
}

impl Args {
    fn apply_overrides(&self, config: &mut SeascapeConfig) {
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        if self.inspector {
            config.debug.show_inspector = true;
        }
    }
}

#[derive(Resource, Serialize, Deserialize)]
pub struct KeyMap {
    #[serde(default = "input::keyboard::default_key_map")]
    pub map: BTreeMap<SceneAction, Vec<KeyCode>>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            map: input::keyboard::default_key_map(),
        }
    }
}

fn main() {
    let args = Args::parse();

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let mut config = SeascapeConfig::load_or_default(&config_path);
    args.apply_overrides(&mut config);

    let binds_path = config_path
        .parent()
        .map(|dir| dir.join(BINDS_FILE))
        .unwrap_or_else(|| PathBuf::from(BINDS_FILE));

    let assets_folder_path = args
        .assets_folder_path
        .clone()
        .unwrap_or_else(|| DEFAULT_ASSETS_FOLDER.to_string());

    println!(
        "Starting seascape in the {:?} scene with assets from {}",
        args.scene, assets_folder_path
    );

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(AssetPlugin {
                file_path: assets_folder_path,
                ..Default::default()
            })
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: config.window.title.clone(),
                    resolution: (config.window.width, config.window.height).into(),
                    present_mode: PresentMode::AutoVsync,
                    // Only used on the web: render into the page's canvas and
                    // follow its size
                    canvas: Some(config.window.canvas.clone()),
                    fit_canvas_to_parent: true,
                    prevent_default_event_handling: false,
                    ..default()
                }),
                ..default()
            }),
    )
    .add_plugins(FrameTimeDiagnosticsPlugin::default());

    app.add_plugins(EguiPlugin {
        enable_multipass_for_primary_context: false,
    })
    .add_plugins(DefaultInspectorConfigPlugin);

    app.insert_resource(get_bindings(&binds_path))
        .insert_resource(config)
        .add_plugins((
            world::WorldPlugin,
            camera::OrbitCameraPlugin,
            scene::ScenePlugin {
                initial: args.scene,
            },
            ui::UiPlugin,
        ))
        .run();
}
