//! `encrypt`, `decrypt` and `hash`.

use secrecy::ExposeSecret;

use finvault_core::FinvaultError;

use crate::app::{with_password_retry, AppContext};
use crate::cli::{DecryptArgs, EncryptArgs, HashArgs};
use crate::helpers::{is_interactive, prompt_new_password, value_or_stdin};

pub fn handle_encrypt(ctx: &AppContext, args: &EncryptArgs) -> anyhow::Result<()> {
    let plaintext = value_or_stdin(args.text.clone(), "plaintext")?;
    let cipher = ctx.cipher()?;
    let password = prompt_new_password(is_interactive(args.no_input))?;
    let blob = cipher.encrypt(plaintext.as_bytes(), password.expose_secret())?;
    println!("{}", blob);
    Ok(())
}

pub fn handle_decrypt(ctx: &AppContext, args: &DecryptArgs) -> anyhow::Result<()> {
    let blob = value_or_stdin(args.blob.clone(), "blob")?;
    let cipher = ctx.cipher()?;
    let bytes = with_password_retry(is_interactive(args.no_input), |password| {
        cipher.decrypt(blob.trim(), password)
    })?;
    let plaintext = String::from_utf8(bytes).map_err(|_| {
        FinvaultError::Validation("Decrypted value is not UTF-8".to_string())
    })?;
    println!("{}", plaintext);
    Ok(())
}

pub fn handle_hash(args: &HashArgs) -> anyhow::Result<()> {
    let input = value_or_stdin(args.text.clone(), "input")?;
    println!("{}", finvault_core::crypto::hash(input.as_bytes()));
    Ok(())
}
