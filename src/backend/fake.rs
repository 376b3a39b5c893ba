//! Recording backend used by the player and playlist tests.
//!
//! The backend moves into the `Player`, so tests observe and steer it
//! through a shared [`FakeHandle`], the same way the real player shares
//! playback info through a handle.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use crate::error::BackendError;

use super::AudioBackend;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Load(PathBuf),
    Play,
    Pause,
    Unpause,
    Stop,
    SetVolume(f32),
    SetPosition(Duration),
}

#[derive(Default)]
pub struct FakeState {
    /// Every call made against the backend, oldest first.
    pub calls: Vec<Call>,
    pub fail_load: bool,
    pub fail_position: bool,
    pub busy: bool,
}

pub type FakeHandle = Rc<RefCell<FakeState>>;

pub struct FakeBackend {
    state: FakeHandle,
}

impl FakeBackend {
    pub fn new() -> (Self, FakeHandle) {
        let state: FakeHandle = Rc::new(RefCell::new(FakeState::default()));
        (Self { state: state.clone() }, state)
    }
}

impl AudioBackend for FakeBackend {
    fn load(&mut self, path: &Path) -> Result<(), BackendError> {
        if self.state.borrow().fail_load {
            return Err(BackendError::Decode {
                path: path.to_path_buf(),
                reason: "fake decode failure".into(),
            });
        }
        self.state.borrow_mut().calls.push(Call::Load(path.to_path_buf()));
        Ok(())
    }

    fn play(&mut self) -> Result<(), BackendError> {
        self.state.borrow_mut().calls.push(Call::Play);
        Ok(())
    }

    fn pause(&mut self) {
        self.state.borrow_mut().calls.push(Call::Pause);
    }

    fn unpause(&mut self) {
        self.state.borrow_mut().calls.push(Call::Unpause);
    }

    fn stop(&mut self) {
        self.state.borrow_mut().calls.push(Call::Stop);
    }

    fn set_volume(&mut self, volume: f32) {
        self.state.borrow_mut().calls.push(Call::SetVolume(volume));
    }

    fn set_position(&mut self, position: Duration) -> Result<(), BackendError> {
        if self.state.borrow().fail_position {
            return Err(BackendError::NoSource);
        }
        self.state.borrow_mut().calls.push(Call::SetPosition(position));
        Ok(())
    }

    fn is_busy(&self) -> bool {
        self.state.borrow().busy
    }
}
