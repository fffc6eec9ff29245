use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use hudcontroller_util::clock::now_us;
use hudcontroller_util::lua::install;
use hudcontroller_util::sandbox::Sandbox;
use hudcontroller_util::storage::{remove_file, rename_file};
use mlua::Lua;

const MARKER: &str = "HudController";

// Lay out <tmp>/game/reframework/data/HudController plus a file outside the sandbox
fn setup_game_dir() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("game/reframework/data");
    fs::create_dir_all(root.join(MARKER)).unwrap();
    fs::create_dir_all(root.join("OtherMod")).unwrap();
    fs::write(dir.path().join("game/secret.txt"), "secret").unwrap();
    (dir, root)
}

fn lua_for(root: &Path) -> Lua {
    let lua = Lua::new();
    let sandbox = Sandbox::new(root, MARKER).unwrap();
    install(&lua, "hudcontroller_util", Arc::new(sandbox)).unwrap();
    lua
}

#[test]
fn test_rename_scenario() {
    let (_dir, root) = setup_game_dir();
    fs::write(root.join("HudController/old.txt"), "presets").unwrap();
    let lua = lua_for(&root);

    let ok: bool = lua
        .load(r#"return hudcontroller_util.rename("HudController/old.txt", "HudController/new.txt")"#)
        .eval()
        .unwrap();

    assert!(ok);
    assert!(!root.join("HudController/old.txt").exists());
    assert_eq!(
        fs::read_to_string(root.join("HudController/new.txt")).unwrap(),
        "presets"
    );
}

#[test]
fn test_remove_outside_sandbox_touches_nothing() {
    let (dir, root) = setup_game_dir();
    let lua = lua_for(&root);

    let ok: bool = lua
        .load(r#"return hudcontroller_util.remove("../../secret.txt")"#)
        .eval()
        .unwrap();

    assert!(!ok);
    assert!(dir.path().join("game/secret.txt").exists());

    let ok: bool = lua
        .load(r#"return hudcontroller_util.remove("../../etc/passwd")"#)
        .eval()
        .unwrap();
    assert!(!ok);
}

#[test]
fn test_remove_sends_file_to_trash() {
    let (_dir, root) = setup_game_dir();
    fs::write(root.join("HudController/stale_layout.json"), "{}").unwrap();
    let lua = lua_for(&root);

    let ok: bool = lua
        .load(r#"return hudcontroller_util.remove("HudController/stale_layout.json") == true"#)
        .eval()
        .unwrap();

    assert!(ok);
    assert!(!root.join("HudController/stale_layout.json").exists());
    assert!(root.join(MARKER).is_dir());
}

#[test]
fn test_remove_missing_file_returns_false() {
    let (_dir, root) = setup_game_dir();
    let lua = lua_for(&root);

    let ok: bool = lua
        .load(r#"return hudcontroller_util.remove("HudController/missing.txt")"#)
        .eval()
        .unwrap();
    assert!(!ok);
}

#[test]
fn test_other_mod_directory_is_off_limits() {
    let (_dir, root) = setup_game_dir();
    fs::write(root.join("OtherMod/config.json"), "{}").unwrap();
    let sandbox = Sandbox::new(&root, MARKER).unwrap();

    assert!(
        rename_file(
            &sandbox,
            Some("OtherMod/config.json"),
            Some("OtherMod/moved.json")
        )
        .is_err()
    );
    assert!(remove_file(&sandbox, Some("OtherMod/config.json")).is_err());
    assert!(root.join("OtherMod/config.json").exists());
}

#[test]
fn test_rename_with_one_invalid_side_does_not_mutate() {
    let (dir, root) = setup_game_dir();
    fs::write(root.join("HudController/a.txt"), "a").unwrap();
    let lua = lua_for(&root);

    let (to_outside, from_outside): (bool, bool) = lua
        .load(
            r#"return hudcontroller_util.rename("HudController/a.txt", "../../HudController_a.txt"),
                      hudcontroller_util.rename("../../secret.txt", "HudController/secret.txt")"#,
        )
        .eval()
        .unwrap();

    assert!(!to_outside);
    assert!(!from_outside);
    assert!(root.join("HudController/a.txt").exists());
    assert!(dir.path().join("game/secret.txt").exists());
    assert!(!root.join("HudController/secret.txt").exists());
}

#[test]
fn test_rename_into_new_subdirectory_fails_cleanly() {
    let (_dir, root) = setup_game_dir();
    fs::write(root.join("HudController/a.txt"), "a").unwrap();
    let sandbox = Sandbox::new(&root, MARKER).unwrap();

    assert!(
        rename_file(
            &sandbox,
            Some("HudController/a.txt"),
            Some("HudController/missing_dir/a.txt")
        )
        .is_err()
    );
    assert!(root.join("HudController/a.txt").exists());
}

#[test]
fn test_clock_measures_sleep() {
    let first = now_us();
    thread::sleep(Duration::from_millis(10));
    let second = now_us();
    assert!(second - first >= 10_000.0);
}
