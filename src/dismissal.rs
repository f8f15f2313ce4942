//! Open/closed state for the help panel, with click-outside dismissal.
//!
//! While the panel is open the controller holds a registration obtained from a
//! [`ListenerHost`]. The registration is released by dropping it, which happens
//! on every path out of the open state, including dropping the controller.

/// Something that can register a global outside-interaction listener.
///
/// The returned registration must detach the listener when dropped.
pub trait ListenerHost {
    type Registration;

    fn attach(&self) -> Self::Registration;
}

/// Decides whether an interaction target belongs to the anchor region
/// (the toggle control plus the panel).
pub trait AnchorRegion<T: ?Sized> {
    fn contains(&self, target: &T) -> bool;
}

/// Help panel state machine.
pub struct DismissalController<H: ListenerHost> {
    host: H,
    /// `Some` exactly while the panel is open.
    registration: Option<H::Registration>,
}

impl<H: ListenerHost> DismissalController<H> {
    /// Starts closed, with no listener attached.
    pub fn new(host: H) -> Self {
        Self {
            host,
            registration: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.registration.is_some()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Opens the panel. No-op when already open.
    pub fn open(&mut self) {
        if self.registration.is_none() {
            log::debug!("Help panel opened");
            self.registration = Some(self.host.attach());
        }
    }

    /// Closes the panel. No-op when already closed.
    pub fn close(&mut self) {
        if self.registration.take().is_some() {
            log::debug!("Help panel closed");
        }
    }

    /// Handles a pointer press anywhere in the application.
    ///
    /// Closes the panel when it is open and `target` lies outside `anchor`.
    /// Without an anchor containment cannot be decided and the state is kept.
    /// Returns `true` if the panel was closed.
    pub fn handle_pointer_down<T, A>(&mut self, target: &T, anchor: Option<&A>) -> bool
    where
        T: ?Sized,
        A: AnchorRegion<T> + ?Sized,
    {
        if !self.is_open() {
            return false;
        }
        let Some(anchor) = anchor else {
            log::debug!("Pointer down with no anchor region, keeping help panel open");
            return false;
        };
        if anchor.contains(target) {
            return false;
        }
        log::debug!("Pointer down outside help panel");
        self.close();
        true
    }
}
