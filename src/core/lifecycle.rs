//=========================================================================
// App Lifecycle
//=========================================================================
//
// Mobile application lifecycle events and the action each one triggers.
//
// Mobile OSes announce backgrounding in two steps (will/did). Audio and
// input are paused on the *will* edge so nothing plays after the app has
// left the screen, and resumed on the *did* edge of foregrounding so
// nothing plays before the surface is back.
//
//=========================================================================

//=== LifecycleEvent ======================================================

/// Application lifecycle notification from the host OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// The OS is terminating the app.
    Terminating,

    /// The OS reports memory pressure.
    LowMemory,

    /// The app is about to be backgrounded.
    WillEnterBackground,

    /// The app has been backgrounded.
    DidEnterBackground,

    /// The app is about to return to the foreground.
    WillEnterForeground,

    /// The app is back in the foreground.
    DidEnterForeground,

    /// The user or OS requested quit.
    Quit,
}

//=== LifecycleAction =====================================================

/// Shell hook to invoke in response to a lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleAction {
    Pause,
    Resume,
    LowMemory,
}

impl LifecycleEvent {
    /// Hook to run for this event; `None` for events that are only logged.
    pub fn action(self) -> Option<LifecycleAction> {
        match self {
            Self::LowMemory => Some(LifecycleAction::LowMemory),
            Self::WillEnterBackground => Some(LifecycleAction::Pause),
            Self::DidEnterForeground => Some(LifecycleAction::Resume),
            Self::Terminating
            | Self::DidEnterBackground
            | Self::WillEnterForeground
            | Self::Quit => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
