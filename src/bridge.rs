//! Plugin context
//!
//! Owns the sandbox and the host handle, and tracks which Lua state the
//! utility table currently lives in. The state pointer belongs to the host:
//! it is only read or written under the host's Lua lock and is never freed here.

use log::{debug, error, info, warn};
use mlua::Lua;
use mlua::ffi::lua_State;
use std::ptr::{self, NonNull};
use std::sync::Arc;
use std::sync::atomic::{AtomicPtr, Ordering};

use crate::error::{BridgeError, HostError};
use crate::host::{ScriptHost, ScriptLock};
use crate::sandbox::Sandbox;

/// Receives Lua state lifecycle notifications from the host.
pub trait ScriptStateListener {
    fn on_state_created(&self, state: *mut lua_State);
    fn on_state_destroyed(&self, state: *mut lua_State);
}

pub struct Bridge<H: ScriptHost> {
    host: H,
    sandbox: Arc<Sandbox>,
    table_name: String,
    state: AtomicPtr<lua_State>,
}

impl<H: ScriptHost> Bridge<H> {
    pub fn new(host: H, sandbox: Sandbox, table_name: impl Into<String>) -> Self {
        Self {
            host,
            sandbox: Arc::new(sandbox),
            table_name: table_name.into(),
            state: AtomicPtr::new(ptr::null_mut()),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// The live Lua state, if the host has one
    pub fn current_state(&self) -> Option<NonNull<lua_State>> {
        let _lock = ScriptLock::acquire(&self.host);
        NonNull::new(self.state.load(Ordering::Acquire))
    }

    fn install(&self, state: *mut lua_State) -> Result<(), BridgeError> {
        if state.is_null() {
            return Err(HostError::NullState.into());
        }
        let lua = unsafe { Lua::init_from_ptr(state) };
        crate::lua::install(&lua, &self.table_name, Arc::clone(&self.sandbox))?;
        Ok(())
    }
}

impl<H: ScriptHost> ScriptStateListener for Bridge<H> {
    fn on_state_created(&self, state: *mut lua_State) {
        let _lock = ScriptLock::acquire(&self.host);

        let previous = self.state.swap(state, Ordering::AcqRel);
        if !previous.is_null() && previous != state {
            warn!("Replacing Lua state {:p} that was never destroyed", previous);
        }

        match self.install(state) {
            Ok(()) => info!("Installed {} into Lua state {:p}", self.table_name, state),
            Err(e) => error!("Failed to install {}: {}", self.table_name, e),
        }
    }

    fn on_state_destroyed(&self, state: *mut lua_State) {
        let _lock = ScriptLock::acquire(&self.host);

        match self.state.compare_exchange(
            state,
            ptr::null_mut(),
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => info!("Lua state {:p} destroyed", state),
            Err(current) => debug!(
                "Ignoring destroy of Lua state {:p}, tracking {:p}",
                state, current
            ),
        }
    }
}
