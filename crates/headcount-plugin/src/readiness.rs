// File: crates/headcount-plugin/src/readiness.rs
// Summary: One-shot dependency readiness gate, awaited with a bounded timeout.
// Notes:
// - The loader runs once on its own thread and reports through a bounded(1)
//   channel. The first outcome is cached; later waits return immediately.
// - A timeout leaves the gate pending so the next update can wait again; a
//   loader that exits without reporting (panic) fails the gate for good.

use std::thread;
use std::time::Duration;

use crossbeam_channel::{self as channel, RecvTimeoutError};

use crate::error::PluginError;

/// Work that must finish before the first render (fonts, assets, backends).
pub type DependencyLoader = Box<dyn FnOnce() -> Result<(), String> + Send + 'static>;

pub const DEFAULT_READY_TIMEOUT: Duration = Duration::from_secs(5);

/// Loader for hosts with nothing to prepare.
pub fn no_dependencies() -> DependencyLoader {
    Box::new(|| Ok(()))
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum State {
    Pending,
    Ready,
    Failed(String),
}

pub struct Readiness {
    rx: Option<channel::Receiver<Result<(), String>>>,
    state: State,
}

impl Readiness {
    /// A gate that is already open.
    pub fn ready() -> Self {
        Self { rx: None, state: State::Ready }
    }

    /// Run `loader` on a background thread; the gate opens when it returns `Ok`.
    pub fn spawn(loader: DependencyLoader) -> Self {
        let (tx, rx) = channel::bounded(1);
        let spawned = thread::Builder::new()
            .name("dependency-loader".to_string())
            .spawn(move || {
                let outcome = loader();
                // receiver may already be gone if the plugin was dropped
                let _ = tx.send(outcome);
            });
        match spawned {
            Ok(_) => Self { rx: Some(rx), state: State::Pending },
            Err(e) => Self { rx: None, state: State::Failed(format!("could not start loader thread: {e}")) },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state == State::Ready
    }

    /// Block until the loader reports or `timeout` elapses.
    pub fn wait(&mut self, timeout: Duration) -> Result<(), PluginError> {
        match &self.state {
            State::Ready => return Ok(()),
            State::Failed(msg) => return Err(PluginError::DependencyFailed(msg.clone())),
            State::Pending => {}
        }
        let Some(rx) = self.rx.as_ref() else {
            self.state = State::Failed("no loader attached".to_string());
            return Err(PluginError::DependencyFailed("no loader attached".to_string()));
        };
        match rx.recv_timeout(timeout) {
            Ok(Ok(())) => {
                log::debug!("dependencies ready");
                self.state = State::Ready;
                self.rx = None;
                Ok(())
            }
            Ok(Err(msg)) => {
                log::error!("dependency loading failed: {msg}");
                self.state = State::Failed(msg.clone());
                self.rx = None;
                Err(PluginError::DependencyFailed(msg))
            }
            Err(RecvTimeoutError::Timeout) => {
                log::warn!("dependencies still loading after {timeout:?}");
                Err(PluginError::NotReady { waited: timeout })
            }
            Err(RecvTimeoutError::Disconnected) => {
                let msg = "loader exited without reporting".to_string();
                self.state = State::Failed(msg.clone());
                self.rx = None;
                Err(PluginError::DependencyFailed(msg))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_gate_never_blocks() {
        let mut gate = Readiness::ready();
        assert!(gate.is_ready());
        gate.wait(Duration::ZERO).unwrap();
    }

    #[test]
    fn loader_success_opens_gate_once() {
        let mut gate = Readiness::spawn(no_dependencies());
        gate.wait(Duration::from_secs(5)).unwrap();
        assert!(gate.is_ready());
        // cached
        gate.wait(Duration::ZERO).unwrap();
    }

    #[test]
    fn slow_loader_times_out_then_succeeds() {
        let (release_tx, release_rx) = channel::bounded::<()>(1);
        let mut gate = Readiness::spawn(Box::new(move || -> Result<(), String> {
            release_rx.recv().map_err(|e| e.to_string())
        }));
        let err = gate.wait(Duration::from_millis(20)).unwrap_err();
        assert!(matches!(err, PluginError::NotReady { .. }));
        assert!(!gate.is_ready());

        release_tx.send(()).unwrap();
        gate.wait(Duration::from_secs(5)).unwrap();
        assert!(gate.is_ready());
    }

    #[test]
    fn loader_error_is_sticky() {
        let mut gate = Readiness::spawn(Box::new(|| -> Result<(), String> { Err("fonts missing".to_string()) }));
        let err = gate.wait(Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, PluginError::DependencyFailed(ref m) if m == "fonts missing"));
        assert!(matches!(gate.wait(Duration::ZERO), Err(PluginError::DependencyFailed(_))));
    }

    #[test]
    fn panicking_loader_fails_gate() {
        let mut gate = Readiness::spawn(Box::new(|| -> Result<(), String> { panic!("loader blew up") }));
        let err = gate.wait(Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, PluginError::DependencyFailed(_)));
    }
}
