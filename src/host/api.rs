//! Safe wrapper over the host function table.

use log::Level;
use std::ffi::{CStr, CString};
use std::ptr::NonNull;

use super::abi::{
    LogFn, LuaStateCreatedCb, LuaStateDestroyedCb, PluginFunctions, PluginInitializeParam,
};
use crate::error::HostError;

/// Access to the host's Lua lock.
///
/// Implemented by [`HostApi`] for the real host; tests provide their own.
pub trait ScriptHost: Send + Sync {
    fn lock_scripts(&self);
    fn unlock_scripts(&self);
}

/// RAII guard holding the host's Lua lock
pub struct ScriptLock<'a, H: ScriptHost + ?Sized> {
    host: &'a H,
}

impl<'a, H: ScriptHost + ?Sized> ScriptLock<'a, H> {
    pub fn acquire(host: &'a H) -> Self {
        host.lock_scripts();
        Self { host }
    }
}

impl<H: ScriptHost + ?Sized> Drop for ScriptLock<'_, H> {
    fn drop(&mut self) {
        self.host.unlock_scripts();
    }
}

/// Host API version as reported at load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostVersion {
    pub major: i32,
    pub minor: i32,
    pub patch: i32,
    pub game_name: Option<String>,
}

/// Handle to the host function table
#[derive(Clone, Copy)]
pub struct HostApi {
    functions: NonNull<PluginFunctions>,
}

// The host keeps the function table alive and immutable for the whole process.
unsafe impl Send for HostApi {}
unsafe impl Sync for HostApi {}

impl HostApi {
    /// Reads the function table out of the host's parameter block.
    ///
    /// # Safety
    /// `param` must be null or point to a valid parameter block whose function
    /// table outlives the plugin.
    pub unsafe fn from_param(
        param: *const PluginInitializeParam,
    ) -> Result<(Self, Option<HostVersion>), HostError> {
        let param = unsafe { param.as_ref() }.ok_or(HostError::NullParam)?;
        let functions =
            NonNull::new(param.functions.cast_mut()).ok_or(HostError::NullFunctions)?;

        let version = unsafe { param.version.as_ref() }.map(|v| HostVersion {
            major: v.major,
            minor: v.minor,
            patch: v.patch,
            game_name: c_str_to_string(v.game_name),
        });

        Ok((Self { functions }, version))
    }

    fn functions(&self) -> &PluginFunctions {
        unsafe { self.functions.as_ref() }
    }

    /// Registers the two Lua lifecycle callbacks with the host
    pub fn register_state_callbacks(
        &self,
        created: LuaStateCreatedCb,
        destroyed: LuaStateDestroyedCb,
    ) -> Result<(), HostError> {
        let table = self.functions();

        let register_created = table
            .on_lua_state_created
            .ok_or(HostError::Rejected("on_lua_state_created"))?;
        if !unsafe { register_created(created) } {
            return Err(HostError::Rejected("on_lua_state_created"));
        }

        let register_destroyed = table
            .on_lua_state_destroyed
            .ok_or(HostError::Rejected("on_lua_state_destroyed"))?;
        if !unsafe { register_destroyed(destroyed) } {
            return Err(HostError::Rejected("on_lua_state_destroyed"));
        }

        Ok(())
    }

    pub fn has_logging(&self) -> bool {
        let table = self.functions();
        table.log_info.is_some() || table.log_warn.is_some() || table.log_error.is_some()
    }

    fn log_fn(&self, level: Level) -> Option<LogFn> {
        let table = self.functions();
        match level {
            Level::Error => table.log_error,
            Level::Warn => table.log_warn,
            Level::Info | Level::Debug | Level::Trace => table.log_info,
        }
    }

    /// Writes one line to the host log. Returns `false` if the host has no logger for `level`.
    pub fn log(&self, level: Level, message: &str) -> bool {
        let Some(log_fn) = self.log_fn(level) else {
            return false;
        };
        let line = string_to_c_string(message);
        unsafe { log_fn(c"%s".as_ptr(), line.as_ptr()) };
        true
    }
}

impl ScriptHost for HostApi {
    fn lock_scripts(&self) {
        if let Some(lock) = self.functions().lock_lua {
            unsafe { lock() }
        }
    }

    fn unlock_scripts(&self) {
        if let Some(unlock) = self.functions().unlock_lua {
            unsafe { unlock() }
        }
    }
}

/// Safely converts a C string pointer to a Rust `String`.
///
/// Returns `None` if the pointer is null.
pub fn c_str_to_string(ptr: *const std::ffi::c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
}

/// Converts a Rust string to a `CString`, dropping interior NUL bytes.
pub fn string_to_c_string(s: &str) -> CString {
    CString::new(s.replace('\0', "")).unwrap_or_default()
}
