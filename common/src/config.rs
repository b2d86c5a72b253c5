#[derive(Debug, Default, Clone, Copy)]
pub struct Config {
    /// Skips the banner line at startup.
    pub no_banner: bool,
    /// Output reduction level.
    ///
    /// `0` prints everything, `1` drops headers and info events, `2` only
    /// keeps warnings and errors.
    pub quiet: u8,
}
