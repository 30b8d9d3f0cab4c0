//=========================================================================
// Audio Backend
//=========================================================================
//
// Seam to the engine's audio mixer. The shell only needs to stop and
// restart playback around lifecycle transitions and to ask for cache
// trimming on memory pressure; mixing itself stays in the engine.
//
//=========================================================================

//=== AudioBackend ========================================================

/// Audio mixer controlled by the platform shell.
pub trait AudioBackend: Send {
    /// Opens the output device. Failure is logged by the shell, never fatal.
    fn open(&mut self) -> Result<(), String> {
        Ok(())
    }

    /// Closes the output device.
    fn close(&mut self) {}

    /// Pauses music and every effect channel.
    fn pause_all(&mut self);

    /// Resumes music and every effect channel.
    fn resume_all(&mut self);

    /// Drops cached samples that can be reloaded later.
    fn trim_caches(&mut self) {}
}

//=== SilentAudio =========================================================

/// Backend for hosts without audio (tests, headless runs).
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioBackend for SilentAudio {
    fn pause_all(&mut self) {}

    fn resume_all(&mut self) {}
}
