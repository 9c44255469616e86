//! A text console standing in for hardware.
//!
//! Writes to a simulated board are reported as lines of text and reads are
//! answered by whoever is at the console. Input is read on its own thread,
//! so output and non-blocking polls never wait behind a pending prompt.

use crate::error::{Error, Result};
use crate::sync::SpinLock;
use std::io::{self, BufRead, BufReader, Write};
use std::str::FromStr;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Mutex, PoisonError, TryLockError};
use std::thread;

pub struct Console {
    lines: Mutex<Receiver<String>>,
    output: SpinLock<Box<dyn Write + Send>>,
}

impl Console {
    /// # Errors
    ///
    /// `Io` if the input thread cannot be started.
    pub fn new(
        input: impl BufRead + Send + 'static,
        output: impl Write + Send + 'static,
    ) -> Result<Self> {
        let (sender, lines) = mpsc::channel();
        thread::Builder::new()
            .name("console-input".to_string())
            .spawn(move || forward_lines(input, sender))?;

        Ok(Self {
            lines: Mutex::new(lines),
            output: SpinLock::new(Box::new(output)),
        })
    }

    /// A console on the process's standard input and output.
    pub fn stdio() -> Result<Self> {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }

    /// Report something that happened to a simulated component.
    pub fn info(&self, descriptor: &str, message: &str) -> Result<()> {
        let mut output = self.output.lock();
        writeln!(output, "{descriptor}: {message}")?;
        output.flush()?;
        Ok(())
    }

    /// Prompt until the answer parses as a `T`.
    ///
    /// # Errors
    ///
    /// `Communication` if the input closes first.
    pub fn read<T: FromStr>(&self, descriptor: &str, prompt: &str) -> Result<T> {
        loop {
            {
                let mut output = self.output.lock();
                write!(output, "{descriptor}: {prompt}: ")?;
                output.flush()?;
            }

            let answer = self.next_line(descriptor, prompt)?;
            match answer.parse() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    writeln!(
                        self.output.lock(),
                        "Unable to construct a {} from {:?}",
                        std::any::type_name::<T>(),
                        answer
                    )?;
                }
            }
        }
    }

    /// Take the next entered line without waiting for one.
    ///
    /// Gives `None` while nothing has been entered, or while a prompt is
    /// waiting for its answer.
    ///
    /// # Errors
    ///
    /// `Communication` once the input has closed.
    pub fn poll_line(&self) -> Result<Option<String>> {
        let lines = match self.lines.try_lock() {
            Ok(lines) => lines,
            Err(TryLockError::WouldBlock) => return Ok(None),
            Err(TryLockError::Poisoned(e)) => e.into_inner(),
        };
        match lines.try_recv() {
            Ok(line) => Ok(Some(line)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => {
                Err(Error::Communication("Console input closed".into()))
            }
        }
    }

    fn next_line(&self, descriptor: &str, prompt: &str) -> Result<String> {
        let lines = self.lines.lock().unwrap_or_else(PoisonError::into_inner);
        lines.recv().map_err(|_| {
            Error::Communication(format!(
                "Console input closed while waiting for {descriptor}: {prompt}"
            ))
        })
    }
}

fn forward_lines(input: impl BufRead, lines: Sender<String>) {
    for line in input.lines() {
        match line {
            Ok(line) => {
                if lines.send(line.trim().to_owned()).is_err() {
                    return;
                }
            }
            Err(e) => {
                log::warn!("Console input failed: {}", e);
                return;
            }
        }
    }
}
