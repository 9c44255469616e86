use super::{Component, Components};
use crate::error::Result;
use crate::hal::button::ButtonInterface;
use crate::sync::Shared;
use std::thread;
use std::time::Duration;

/// A push button.
pub struct Button<B: ?Sized> {
    identifier: usize,
    backend: Shared<B>,
}

impl<B: ButtonInterface + ?Sized> Button<B> {
    /// Interval between polls while waiting for a press.
    pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

    pub fn new(identifier: usize, backend: Shared<B>) -> Self {
        Self { identifier, backend }
    }

    /// Whether the button is pressed right now.
    pub fn is_pressed(&self) -> Result<bool> {
        self.backend.lock().get_button_state(self.identifier)
    }

    /// Block until the button is pressed.
    ///
    /// The backend is only locked for each poll, so the rest of the board
    /// stays usable while waiting.
    pub fn wait_until_pressed(&self) -> Result<()> {
        while !self.is_pressed()? {
            thread::sleep(Self::POLL_INTERVAL);
        }
        Ok(())
    }
}

impl<B: ButtonInterface + ?Sized> Component for Button<B> {
    const KIND: Components = Components::BUTTON;

    fn interface_name() -> &'static str {
        "ButtonInterface"
    }

    fn identifier(&self) -> usize {
        self.identifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::shared;
    use std::sync::mpsc;

    /// Reports "pressed" after a fixed number of polls.
    struct MockButtonDriver {
        polls_until_pressed: usize,
        polls: usize,
    }

    impl ButtonInterface for MockButtonDriver {
        fn get_button_state(&mut self, _identifier: usize) -> Result<bool> {
            self.polls += 1;
            Ok(self.polls > self.polls_until_pressed)
        }
    }

    #[test]
    fn wait_until_pressed_polls_backend() {
        let driver = shared(MockButtonDriver {
            polls_until_pressed: 3,
            polls: 0,
        });
        let button = Button::new(0, driver.clone());

        button.wait_until_pressed().unwrap();
        assert_eq!(driver.lock().polls, 4);
        assert!(button.is_pressed().unwrap());
    }

    #[test]
    fn backend_is_free_while_waiting() {
        let driver = shared(MockButtonDriver {
            polls_until_pressed: usize::MAX,
            polls: 0,
        });
        let button = Button::new(0, driver.clone());
        let waiter = thread::spawn(move || button.wait_until_pressed());

        let (done, finished) = mpsc::channel();
        let other = driver.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(100));
            drop(other.lock());
            done.send(()).unwrap();
        });
        finished
            .recv_timeout(Duration::from_secs(2))
            .expect("backend stayed locked during the wait");

        driver.lock().polls_until_pressed = 0;
        waiter.join().unwrap().unwrap();
    }
}
