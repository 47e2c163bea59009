//! Command queue between a front-end and the Maestro
//!
//! Front-ends (a UI task, an interrupt handler, a network handler) submit
//! [`Action`]s through a [`CommandSender`]; the render loop drains them into
//! the Maestro before each update. The queue is a fixed-size
//! `heapless::Deque` guarded by a critical section, so it can be shared
//! across execution contexts as a `static`.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::maestro::Maestro;
use crate::show::Action;

/// Default number of queued commands
pub const DEFAULT_COMMAND_CAPACITY: usize = 8;

/// The queue was full; the action is handed back
#[derive(Debug, Clone, PartialEq)]
pub struct TrySendError(pub Action);

/// The queue was empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Bounded queue of pending actions
pub struct CommandChannel<const SIZE: usize = DEFAULT_COMMAND_CAPACITY> {
    queue: Mutex<RefCell<Deque<Action, SIZE>>>,
}

impl<const SIZE: usize> Default for CommandChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SIZE: usize> CommandChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { channel: self }
    }

    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { channel: self }
    }

    pub fn try_send(&self, action: Action) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            self.queue
                .borrow(cs)
                .borrow_mut()
                .push_back(action)
                .map_err(TrySendError)
        })
    }

    pub fn try_receive(&self) -> Result<Action, TryReceiveError> {
        critical_section::with(|cs| self.queue.borrow(cs).borrow_mut().pop_front().ok_or(TryReceiveError))
    }

    /// Number of queued actions
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.queue.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Submitting side of a [`CommandChannel`]
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize = DEFAULT_COMMAND_CAPACITY> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    /// Queue an action; a full queue hands it back
    pub fn try_send(&self, action: Action) -> Result<(), TrySendError> {
        self.channel.try_send(action)
    }
}

/// Draining side of a [`CommandChannel`]
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize = DEFAULT_COMMAND_CAPACITY> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Result<Action, TryReceiveError> {
        self.channel.try_receive()
    }

    /// Apply every queued action to `maestro`, oldest first
    ///
    /// Returns the number of actions applied.
    pub fn process_pending<const SHOW_CAPACITY: usize>(&self, maestro: &mut Maestro<SHOW_CAPACITY>) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.try_receive() {
            #[cfg(feature = "esp32-log")]
            println!("[Command] {}", action.as_str());
            maestro.apply(&action);
            applied += 1;
        }
        applied
    }
}
