//! Lua bindings
//!
//! Builds the utility table scripts see. Every function returns a plain value;
//! failures come back as `false` and never raise a Lua error.

use mlua::{Lua, Table, Value};
use std::sync::Arc;

use crate::clock;
use crate::error::handlers::to_script_result;
use crate::sandbox::Sandbox;
use crate::storage;

/// Extracts a path argument. Anything but a UTF-8 string counts as missing.
fn path_arg(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => s.to_str().ok().map(|s| str::to_owned(&s)),
        _ => None,
    }
}

/// Creates the `rename` / `remove` / `now_us` table
pub fn create_table(lua: &Lua, sandbox: Arc<Sandbox>) -> mlua::Result<Table> {
    let table = lua.create_table()?;

    let rename_sandbox = Arc::clone(&sandbox);
    let rename = lua.create_function(move |_, (old, new): (Value, Value)| {
        let old = path_arg(&old);
        let new = path_arg(&new);
        let result = storage::rename_file(&rename_sandbox, old.as_deref(), new.as_deref());
        Ok(to_script_result("rename", result))
    })?;

    let remove_sandbox = sandbox;
    let remove = lua.create_function(move |_, path: Value| {
        let path = path_arg(&path);
        let result = storage::remove_file(&remove_sandbox, path.as_deref());
        Ok(to_script_result("remove", result))
    })?;

    let now_us = lua.create_function(|_, ()| Ok(clock::now_us()))?;

    table.set("rename", rename)?;
    table.set("remove", remove)?;
    table.set("now_us", now_us)?;
    Ok(table)
}

/// Installs the utility table into the state's globals under `table_name`
pub fn install(lua: &Lua, table_name: &str, sandbox: Arc<Sandbox>) -> mlua::Result<()> {
    let table = create_table(lua, sandbox)?;
    lua.globals().set(table_name, table)
}
