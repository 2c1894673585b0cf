//! Input source trait abstraction.

use async_trait::async_trait;

use crate::input::InputSnapshot;

/// Produces one [`InputSnapshot`] per frame.
///
/// `capture` is the loop's frame-pacing point: implementations wait for the
/// frame interval to elapse, collecting whatever input arrives meanwhile.
#[async_trait]
pub trait InputSource: Send {
    async fn capture(&mut self) -> InputSnapshot;
}
