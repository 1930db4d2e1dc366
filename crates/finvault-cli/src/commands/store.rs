//! `store` subcommands over the encrypted file store.

use secrecy::ExposeSecret;
use serde_json::Value;

use crate::app::{with_password_retry, AppContext};
use crate::cli::StoreCommand;
use crate::errors::CliError;
use crate::helpers::{is_interactive, prompt_new_password, value_or_stdin};

pub fn handle_store(ctx: &AppContext, command: &StoreCommand) -> anyhow::Result<()> {
    match command {
        StoreCommand::Set {
            key,
            value,
            json,
            no_input,
        } => handle_set(ctx, key, value.clone(), *json, *no_input),
        StoreCommand::Get { key, no_input } => handle_get(ctx, key, *no_input),
        StoreCommand::Remove { key } => handle_remove(ctx, key),
        StoreCommand::List { json } => handle_list(ctx, *json),
        StoreCommand::Clear => handle_clear(ctx),
    }
}

fn handle_set(
    ctx: &AppContext,
    key: &str,
    value: Option<String>,
    json: bool,
    no_input: bool,
) -> anyhow::Result<()> {
    let raw = value_or_stdin(value, "value")?;
    let value = if json {
        serde_json::from_str::<Value>(&raw)
            .map_err(|e| CliError::invalid_input(format!("Value is not valid JSON: {}", e)))?
    } else {
        Value::String(raw)
    };

    let mut store = ctx.open_store()?;
    let password = prompt_new_password(is_interactive(no_input))?;
    store.set_item(key, &value, password.expose_secret())?;

    if !ctx.quiet() {
        println!("Stored {}", key);
    }
    Ok(())
}

fn handle_get(ctx: &AppContext, key: &str, no_input: bool) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    if !store.contains_key(key)? {
        return Err(missing_key(key).into());
    }
    let value: Value = with_password_retry(is_interactive(no_input), |password| {
        store.get_required(key, password)
    })?;
    match value {
        Value::String(text) => println!("{}", text),
        other => println!("{}", serde_json::to_string_pretty(&other)?),
    }
    Ok(())
}

fn handle_remove(ctx: &AppContext, key: &str) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    if !store.remove_item(key)? {
        return Err(missing_key(key).into());
    }
    if !ctx.quiet() {
        println!("Removed {}", key);
    }
    Ok(())
}

fn handle_list(ctx: &AppContext, json: bool) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let keys = store.keys()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&keys)?);
        return Ok(());
    }
    if keys.is_empty() {
        if !ctx.quiet() {
            println!("No keys stored.");
        }
        return Ok(());
    }
    for key in keys {
        println!("{}", key);
    }
    Ok(())
}

fn handle_clear(ctx: &AppContext) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let count = store.keys()?.len();
    store.clear()?;
    if !ctx.quiet() {
        println!("Removed {} key{}", count, if count == 1 { "" } else { "s" });
    }
    Ok(())
}

fn missing_key(key: &str) -> CliError {
    CliError::not_found(
        format!("No value stored under \"{}\".", key),
        "Hint: run `finvault store list` to see stored keys.",
    )
}
