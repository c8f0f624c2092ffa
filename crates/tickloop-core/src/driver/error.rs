use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoopError {
    /// No host was available to schedule animation frames on.
    #[error(
        "no animation-frame host is installed on this thread; \
         tickloop needs a frame host to drive it, use a process supervisor for headless work instead"
    )]
    NoFrameHost,
}
