#[cfg(test)]
pub mod common;

#[cfg(test)]
mod config_from_env;
