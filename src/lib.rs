//! HudController utility plugin
//!
//! Native plugin that gives the HudController Lua scripts a sandboxed
//! `rename`, a recycle-bin `remove` and a microsecond clock.

use log::{error, info, warn};
use mlua::ffi::lua_State;
use std::sync::OnceLock;

pub mod bridge;
pub mod clock;
pub mod config;
pub mod error;
pub mod host;
pub mod lua;
pub mod sandbox;
pub mod storage;

use bridge::{Bridge, ScriptStateListener};
use config::PluginConfig;
use error::BridgeError;
use host::abi::{PluginInitializeFn, PluginInitializeParam};
use host::{HostApi, setup_logging};
use sandbox::Sandbox;

static BRIDGE: OnceLock<Bridge<HostApi>> = OnceLock::new();

const _: PluginInitializeFn = reframework_plugin_initialize;

unsafe extern "C" fn on_lua_state_created(state: *mut lua_State) {
    if let Some(bridge) = BRIDGE.get() {
        bridge.on_state_created(state);
    }
}

unsafe extern "C" fn on_lua_state_destroyed(state: *mut lua_State) {
    if let Some(bridge) = BRIDGE.get() {
        bridge.on_state_destroyed(state);
    }
}

/// Plugin entry point called once by the host loader.
///
/// Always reports success; setup failures are logged instead.
///
/// # Safety
/// `param` must be null or point to the host's initialize parameter block.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn reframework_plugin_initialize(
    param: *const PluginInitializeParam,
) -> bool {
    if let Err(e) = unsafe { initialize(param) } {
        error!("Plugin initialization failed: {}", e);
    }
    true
}

unsafe fn initialize(param: *const PluginInitializeParam) -> Result<(), BridgeError> {
    let host = unsafe { HostApi::from_param(param) };

    let (config, config_error) = match PluginConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (PluginConfig::default(), Some(e)),
    };

    let host_api = host.as_ref().ok().map(|(api, _)| *api);
    if let Err(e) = setup_logging(host_api, config.level_filter()) {
        warn!("Logger already installed: {}", e);
    }
    if let Some(e) = config_error {
        warn!("Failed to load configuration, using defaults: {}", e);
    }

    let (host, version) = host?;
    if let Some(version) = version {
        info!(
            "Host plugin API {}.{}.{} ({})",
            version.major,
            version.minor,
            version.patch,
            version.game_name.as_deref().unwrap_or("unknown game")
        );
    }

    let sandbox = Sandbox::from_current_dir(&config)?;
    info!(
        "Sandbox root: {} (namespace {})",
        sandbox.root().display(),
        sandbox.marker()
    );

    BRIDGE
        .set(Bridge::new(host, sandbox, config.table_name))
        .map_err(|_| BridgeError::AlreadyInitialized)?;

    host.register_state_callbacks(on_lua_state_created, on_lua_state_destroyed)?;
    info!("Registered Lua state callbacks");
    Ok(())
}
