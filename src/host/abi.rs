//! FFI ABI definitions for the host plugin interface.
//!
//! Mirrors the C structs the host passes to `reframework_plugin_initialize`.
//! Field order must match the host header; only the prefix of the function
//! table this plugin reads is declared, the rest is never touched.

use mlua::ffi::lua_State;
use std::ffi::{c_char, c_int, c_void};

/// Callback invoked by the host when a Lua state is created.
pub type LuaStateCreatedCb = unsafe extern "C" fn(state: *mut lua_State);

/// Callback invoked by the host right before a Lua state is destroyed.
pub type LuaStateDestroyedCb = unsafe extern "C" fn(state: *mut lua_State);

/// Registers a state-created callback; returns whether the host accepted it.
pub type OnLuaStateCreatedFn = unsafe extern "C" fn(cb: LuaStateCreatedCb) -> bool;

/// Registers a state-destroyed callback; returns whether the host accepted it.
pub type OnLuaStateDestroyedFn = unsafe extern "C" fn(cb: LuaStateDestroyedCb) -> bool;

/// Acquires or releases the host's Lua lock.
pub type LuaLockUnlockFn = unsafe extern "C" fn();

/// printf-style logger exported by the host.
pub type LogFn = unsafe extern "C" fn(format: *const c_char, ...);

/// Plugin API version reported by the host.
#[repr(C)]
pub struct PluginVersion {
    pub major: c_int,
    pub minor: c_int,
    pub patch: c_int,
    /// Game identifier (null-terminated, may be null)
    pub game_name: *const c_char,
}

/// Host function table (prefix).
#[repr(C)]
pub struct PluginFunctions {
    pub on_initialized: *const c_void,
    pub on_lua_state_created: Option<OnLuaStateCreatedFn>,
    pub on_lua_state_destroyed: Option<OnLuaStateDestroyedFn>,
    pub on_present: *const c_void,
    pub on_pre_application_entry: *const c_void,
    pub on_post_application_entry: *const c_void,
    pub lock_lua: Option<LuaLockUnlockFn>,
    pub unlock_lua: Option<LuaLockUnlockFn>,
    pub on_device_reset: *const c_void,
    pub on_message: *const c_void,
    pub log_error: Option<LogFn>,
    pub log_warn: Option<LogFn>,
    pub log_info: Option<LogFn>,
}

/// Parameter block passed to the plugin entry point.
#[repr(C)]
pub struct PluginInitializeParam {
    pub reframework_module: *mut c_void,
    pub version: *const PluginVersion,
    pub functions: *const PluginFunctions,
    pub renderer_data: *const c_void,
    pub sdk: *const c_void,
}

/// Type signature of the exported entry point.
pub type PluginInitializeFn = unsafe extern "C" fn(param: *const PluginInitializeParam) -> bool;
