use tracing::debug;

/// Single seam to the platform's history machinery. The controller calls
/// `suppress_exit` on every back signal, so the shell never actually
/// navigates away while the game is running.
pub trait NavigationGateway {
    /// Re-push a neutral history entry in place of the one the platform
    /// just popped.
    fn suppress_exit(&mut self);
}

/// Console shell gateway. A terminal has no history stack to re-push; the
/// interception itself (the signal never reaching process exit) is the
/// whole job.
#[derive(Debug, Default)]
pub struct ConsoleGateway;

impl NavigationGateway for ConsoleGateway {
    fn suppress_exit(&mut self) {
        debug!("back signal intercepted, exit suppressed");
    }
}
