//! Cross-crate scenarios for `stowr`. Everything here only builds under `cargo test`.

#[cfg(test)]
mod fleet;
#[cfg(test)]
mod stowage;
#[cfg(test)]
mod utils;
