/// Reaction to a failed surface texture acquisition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Configure the surface again and retry once.
    Reconfigure,
    /// Drop this frame.
    SkipFrame,
    Fatal,
}
