use std::collections::HashSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use image::DynamicImage;
use tokio::runtime::{Builder, Handle, Runtime};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::debug;

use crate::error::{AppError, AppResult};

use super::image_ops::{MAX_DECODED_SIDE_PX, decode_photo};

#[derive(Debug)]
pub struct ImageLoadResult {
    pub path: PathBuf,
    pub result: AppResult<DynamicImage>,
    pub elapsed: Duration,
}

struct LoaderRuntime {
    _owned: Option<Runtime>,
    handle: Handle,
}

impl LoaderRuntime {
    fn new() -> AppResult<Self> {
        if let Ok(handle) = Handle::try_current() {
            return Ok(Self {
                _owned: None,
                handle,
            });
        }

        let runtime = Builder::new_multi_thread()
            .enable_all()
            .worker_threads(1)
            .thread_name("lu-image")
            .build()
            .map_err(|source| {
                AppError::io_with_context(source, "failed to start image loader runtime")
            })?;
        let handle = runtime.handle().clone();
        Ok(Self {
            _owned: Some(runtime),
            handle,
        })
    }
}

/// Decodes photos off the UI task. Each path is decoded at most once at a
/// time; results come back through [`ImageLoader::recv_result`].
pub(crate) struct ImageLoader {
    result_tx: UnboundedSender<ImageLoadResult>,
    result_rx: UnboundedReceiver<ImageLoadResult>,
    in_flight: HashSet<PathBuf>,
    runtime: LoaderRuntime,
}

impl ImageLoader {
    pub(crate) fn spawn() -> AppResult<Self> {
        let (result_tx, result_rx) = unbounded_channel();
        Ok(Self {
            result_tx,
            result_rx,
            in_flight: HashSet::new(),
            runtime: LoaderRuntime::new()?,
        })
    }

    pub(crate) fn enqueue(&mut self, path: PathBuf) -> bool {
        if !self.in_flight.insert(path.clone()) {
            return false;
        }

        let result_tx = self.result_tx.clone();
        self.runtime.handle.spawn_blocking(move || {
            let started = Instant::now();
            let result = decode_photo(&path, MAX_DECODED_SIDE_PX);
            debug!(path = %path.display(), ok = result.is_ok(), "photo decoded");
            let _ = result_tx.send(ImageLoadResult {
                path,
                result,
                elapsed: started.elapsed(),
            });
        });
        true
    }

    pub(crate) fn in_flight_len(&self) -> usize {
        self.in_flight.len()
    }

    pub(crate) async fn recv_result(&mut self) -> Option<ImageLoadResult> {
        let result = self.result_rx.recv().await?;
        self.in_flight.remove(&result.path);
        Some(result)
    }

    #[cfg(test)]
    pub(crate) fn blocking_recv_result(&mut self) -> Option<ImageLoadResult> {
        let result = self.result_rx.blocking_recv()?;
        self.in_flight.remove(&result.path);
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::ImageLoader;

    #[test]
    fn loader_dedupes_in_flight_paths_and_reports_failures() {
        let mut loader = ImageLoader::spawn().expect("loader should start");
        let path = PathBuf::from("/definitely/not/here.png");

        assert!(loader.enqueue(path.clone()));
        assert!(!loader.enqueue(path.clone()));
        assert_eq!(loader.in_flight_len(), 1);

        let done = loader.blocking_recv_result().expect("result should arrive");
        assert_eq!(done.path, path);
        assert!(done.result.is_err());
        assert_eq!(loader.in_flight_len(), 0);
    }
}
