use bytes::Bytes;
use tracing::debug;

use crate::domain::common::entities::app_errors::CoreError;

use super::ports::FrameSource;

/// Holds an open [`FrameSource`] and releases it when dropped.
pub struct CameraGuard<'a, S: FrameSource> {
    source: &'a mut S,
}

impl<'a, S: FrameSource> CameraGuard<'a, S> {
    pub fn open(source: &'a mut S) -> Result<Self, CoreError> {
        if let Err(e) = source.open() {
            source.release();
            return Err(e);
        }
        Ok(Self { source })
    }

    pub fn capture_frame(&mut self) -> Result<Bytes, CoreError> {
        self.source.capture_frame()
    }
}

impl<S: FrameSource> Drop for CameraGuard<'_, S> {
    fn drop(&mut self) {
        debug!("releasing camera");
        self.source.release();
    }
}

/// Opens the source, takes one frame and releases the source on every path.
pub fn capture_single_frame<S: FrameSource>(source: &mut S) -> Result<Bytes, CoreError> {
    let mut guard = CameraGuard::open(source)?;
    guard.capture_frame()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Default)]
    pub(crate) struct FakeCamera {
        pub fail_open: bool,
        pub fail_capture: bool,
        pub open: bool,
        pub releases: usize,
    }

    impl FrameSource for FakeCamera {
        fn open(&mut self) -> Result<(), CoreError> {
            if self.fail_open {
                return Err(CoreError::CameraUnavailable("permission denied".to_string()));
            }
            self.open = true;
            Ok(())
        }

        fn capture_frame(&mut self) -> Result<Bytes, CoreError> {
            if self.fail_capture || !self.open {
                return Err(CoreError::CameraUnavailable("no frame".to_string()));
            }
            Ok(Bytes::from_static(&[0xFF, 0xD8, 0xFF, 0xD9]))
        }

        fn release(&mut self) {
            self.open = false;
            self.releases += 1;
        }
    }

    #[test]
    fn test_releases_after_capture() {
        let mut camera = FakeCamera::default();
        let frame = capture_single_frame(&mut camera).unwrap();
        assert_eq!(frame.len(), 4);
        assert!(!camera.open);
        assert_eq!(camera.releases, 1);
    }

    #[test]
    fn test_releases_when_capture_fails() {
        let mut camera = FakeCamera {
            fail_capture: true,
            ..FakeCamera::default()
        };
        assert!(capture_single_frame(&mut camera).is_err());
        assert_eq!(camera.releases, 1);
    }

    #[test]
    fn test_releases_when_open_fails() {
        let mut camera = FakeCamera {
            fail_open: true,
            ..FakeCamera::default()
        };
        assert!(matches!(
            capture_single_frame(&mut camera),
            Err(CoreError::CameraUnavailable(_))
        ));
        assert_eq!(camera.releases, 1);
    }

    #[test]
    fn test_releases_when_abandoned() {
        let mut camera = FakeCamera::default();
        {
            let _guard = CameraGuard::open(&mut camera).unwrap();
        }
        assert_eq!(camera.releases, 1);
    }
}
