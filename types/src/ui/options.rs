/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Skip card motion: swaps happen without enter/exit/snap-back effects.
    pub reduced_motion: bool,
}
