use bytes::Bytes;

use crate::domain::common::entities::app_errors::CoreError;

/// A device stream that yields still JPEG frames.
pub trait FrameSource: Send {
    /// Acquire the underlying device
    fn open(&mut self) -> Result<(), CoreError>;

    /// Grab one JPEG-encoded frame from an open source
    fn capture_frame(&mut self) -> Result<Bytes, CoreError>;

    /// Stop every track. Must tolerate being called on a closed source.
    fn release(&mut self);
}
