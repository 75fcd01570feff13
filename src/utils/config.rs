/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads `env_var` and parses its trimmed value as `T`
///
/// Falls back to `default` when the variable is unset. An unparsable value is
/// logged at `error` level and also falls back to `default`.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.trim().parse::<T>().unwrap_or_else(|_| {
            error!("Ignoring unparsable {}={:?}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

