//! Step pacing.

/// Something that decides when the next step happens.
///
/// Drivers call [`Strobe::wait`] once before every step. The strobe may
/// block (a keypress, a timer) or return immediately.
pub trait Strobe {
    /// Block until the next step is due.
    ///
    /// Returns `false` when the driver should stop stepping.
    fn wait(&mut self) -> bool;
}

impl<S: Strobe + ?Sized> Strobe for Box<S> {
    fn wait(&mut self) -> bool {
        (**self).wait()
    }
}
