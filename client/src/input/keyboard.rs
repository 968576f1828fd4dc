use crate::{input::data::SceneAction, KeyMap};
use bevy::prelude::*;
use ron::from_str;
use seascape_shared::config::{write_ron, ConfigError};
use std::{collections::BTreeMap, fs, path::Path};

fn write_keybindings_to_path(key_map: &KeyMap, binds_path: &Path) -> Result<(), ConfigError> {
    write_ron(key_map, binds_path)
}

pub fn is_action_just_pressed(
    action: SceneAction,
    keyboard_input: &ButtonInput<KeyCode>,
    key_map: &KeyMap,
) -> bool {
    key_map
        .map
        .get(&action)
        .is_some_and(|key_codes| keyboard_input.any_just_pressed(key_codes.iter().copied()))
}

pub fn get_action_keys(action: SceneAction, key_map: &KeyMap) -> Vec<KeyCode> {
    key_map.map.get(&action).cloned().unwrap_or_default()
}

pub(crate) fn default_key_map() -> BTreeMap<SceneAction, Vec<KeyCode>> {
    let mut map = BTreeMap::new();
    map.insert(SceneAction::NextScene, vec![KeyCode::Tab]);
    map.insert(SceneAction::ToggleInspector, vec![KeyCode::F3]);
    map.insert(SceneAction::ToggleHud, vec![KeyCode::F1]);
    map
}

/// Reads the key map at `binds_path`, writing the defaults there when it is
/// missing or unreadable.
pub fn get_bindings(binds_path: &Path) -> KeyMap {
    if let Ok(content) = fs::read_to_string(binds_path) {
        match from_str::<KeyMap>(&content) {
            Ok(key_map) => return key_map,
            Err(e) => warn!("Invalid keybindings at {:?}: {}", binds_path, e),
        }
    }

    let key_map = KeyMap::default();
    if let Err(e) = write_keybindings_to_path(&key_map, binds_path) {
        error!(
            "Failed to create default keybindings file at {:?}: {}",
            binds_path, e
        );
    }
    key_map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_cover_every_action() {
        let key_map = KeyMap::default();
        for action in [
            SceneAction::NextScene,
            SceneAction::ToggleInspector,
            SceneAction::ToggleHud,
        ] {
            assert!(!get_action_keys(action, &key_map).is_empty());
        }
    }

    #[test]
    fn test_just_pressed_uses_map() {
        let key_map = KeyMap::default();
        let mut input = ButtonInput::<KeyCode>::default();
        assert!(!is_action_just_pressed(SceneAction::NextScene, &input, &key_map));

        input.press(KeyCode::Tab);
        assert!(is_action_just_pressed(SceneAction::NextScene, &input, &key_map));
        assert!(!is_action_just_pressed(SceneAction::ToggleHud, &input, &key_map));
    }

    #[test]
    fn test_missing_bindings_are_written() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(crate::constants::BINDS_FILE);

        let key_map = get_bindings(&path);
        assert_eq!(key_map.map, default_key_map());
        assert!(path.exists());

        // A customised file is read back as-is
        let mut custom = KeyMap::default();
        custom.map.insert(SceneAction::NextScene, vec![KeyCode::KeyN]);
        write_keybindings_to_path(&custom, &path).expect("write");
        assert_eq!(
            get_action_keys(SceneAction::NextScene, &get_bindings(&path)),
            vec![KeyCode::KeyN]
        );
    }

    #[test]
    fn test_unwritable_bindings_fall_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, "").expect("write");
        let path = blocker.join(crate::constants::BINDS_FILE);

        assert!(matches!(
            write_keybindings_to_path(&KeyMap::default(), &path),
            Err(ConfigError::Write(_))
        ));
        assert_eq!(get_bindings(&path).map, default_key_map());
    }
}
