use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::ports::presenter::FramePresenterPort;
use crate::core::actions::cancellation::{CancelFlag, CancelToken, Cancelled};
use crate::core::actions::render_mandelbrot::render_cancelable;
use crate::core::data::pixel_buffer::PixelBuffer;
use log::{debug, info};
use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Instant;

/// A submitted render together with the flag that aborts it.
struct RenderPass {
    generation: u64,
    request: RenderRequest,
    cancel: Arc<CancelFlag>,
}

#[derive(Default)]
struct Slot {
    next_generation: u64,
    queued: Option<RenderPass>,
    running: Option<Arc<CancelFlag>>,
    completed_generation: u64,
    closed: bool,
}

struct Shared {
    slot: Mutex<Slot>,
    wake: Condvar,
    presenter: Arc<dyn FramePresenterPort>,
}

impl Shared {
    fn slot(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap()
    }
}

/// Renders Mandelbrot passes on one background thread.
///
/// At most one pass is queued and at most one is running. Each pass owns a
/// [`CancelFlag`]; submitting replaces the queued pass and raises the flag
/// of the running one, so a superseded zoom stops at its next column and is
/// never presented.
pub struct RenderWorker {
    shared: Arc<Shared>,
    thread: Option<JoinHandle<()>>,
}

impl RenderWorker {
    pub fn new(presenter: Arc<dyn FramePresenterPort>) -> Self {
        let shared = Arc::new(Shared {
            slot: Mutex::new(Slot::default()),
            wake: Condvar::new(),
            presenter,
        });

        let thread_shared = Arc::clone(&shared);
        let thread = thread::spawn(move || run_passes(&thread_shared));

        Self {
            shared,
            thread: Some(thread),
        }
    }

    /// Makes `request` the only pending pass and returns its generation.
    pub fn submit(&self, request: RenderRequest) -> u64 {
        let mut slot = self.shared.slot();

        if let Some(running) = &slot.running {
            running.cancel();
        }
        if let Some(superseded) = slot.queued.take() {
            debug!("Generation {} superseded before it started", superseded.generation);
        }

        slot.next_generation += 1;
        let generation = slot.next_generation;
        slot.queued = Some(RenderPass {
            generation,
            request,
            cancel: Arc::new(CancelFlag::new()),
        });
        drop(slot);

        self.shared.wake.notify_one();
        generation
    }

    /// Cancels the running pass, drops the queued one and joins the thread.
    pub fn shutdown(&mut self) {
        {
            let mut slot = self.shared.slot();
            slot.closed = true;
            slot.queued = None;
            if let Some(running) = &slot.running {
                running.cancel();
            }
        }
        self.shared.wake.notify_one();

        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }

    /// Generation of the newest frame handed to the presenter, `0` before any.
    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared.slot().completed_generation
    }
}

impl Drop for RenderWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn next_pass(shared: &Shared) -> Option<RenderPass> {
    let mut slot = shared.slot();

    loop {
        if slot.closed {
            return None;
        }
        if let Some(pass) = slot.queued.take() {
            slot.running = Some(Arc::clone(&pass.cancel));
            return Some(pass);
        }
        slot = shared.wake.wait(slot).unwrap();
    }
}

fn run_passes(shared: &Shared) {
    while let Some(pass) = next_pass(shared) {
        let RenderPass {
            generation,
            request,
            cancel,
        } = pass;

        info!(
            "Computing Mandelbrot (generation {}, budget {}, {})",
            generation, request.budget, request.region
        );

        let start = Instant::now();
        let mut pixel_buffer = PixelBuffer::new(request.canvas);
        let result = render_cancelable(&mut pixel_buffer, request.region, request.budget, &*cancel);
        let render_duration = start.elapsed();

        let mut slot = shared.slot();
        slot.running = None;

        // A pass can finish its last column just as it is superseded.
        match result {
            Ok(()) if !cancel.is_cancelled() => {
                info!("Calculation time: {:?}", render_duration);
                slot.completed_generation = generation;
                drop(slot);

                shared.presenter.present(FrameData {
                    generation,
                    request,
                    pixel_buffer,
                    render_duration,
                });
            }
            Ok(()) | Err(Cancelled) => {
                debug!("Generation {} cancelled after {:?}", generation, render_duration);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::session::{FractalSession, InputEvent};
    use crate::core::actions::render_mandelbrot::render;
    use crate::core::data::canvas_size::CanvasSize;
    use crate::core::data::iteration_budget::IterationBudget;
    use crate::core::data::point::Point;
    use crate::core::data::region::Region;
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::time::Duration;

    const FRAME_TIMEOUT: Duration = Duration::from_secs(30);

    /// Forwards presented frames to the test thread.
    struct ChannelPresenter {
        frames: Mutex<Sender<FrameData>>,
    }

    impl FramePresenterPort for ChannelPresenter {
        fn present(&self, frame: FrameData) {
            let _ = self.frames.lock().unwrap().send(frame);
        }
    }

    fn spawn_worker() -> (RenderWorker, Receiver<FrameData>) {
        let (sender, receiver) = mpsc::channel();
        let presenter = Arc::new(ChannelPresenter {
            frames: Mutex::new(sender),
        });

        (RenderWorker::new(presenter), receiver)
    }

    /// A view entirely inside the main cardioid: every pixel runs the full
    /// budget, so a pass takes long enough to be overtaken.
    fn slow_request() -> RenderRequest {
        RenderRequest {
            region: Region::new(-0.3, -0.1, -0.1, 0.1).unwrap(),
            budget: IterationBudget::new(200_000.0).unwrap(),
            canvas: CanvasSize::new(240, 160).unwrap(),
        }
    }

    fn quick_request(region: Region) -> RenderRequest {
        RenderRequest {
            region,
            budget: IterationBudget::new(52.0).unwrap(),
            canvas: CanvasSize::new(60, 40).unwrap(),
        }
    }

    #[test]
    fn test_frame_matches_synchronous_render() {
        let (mut worker, frames) = spawn_worker();
        let request = quick_request(Region::new(-2.0, 1.0, -1.0, 1.0).unwrap());

        let generation = worker.submit(request);
        let frame = frames.recv_timeout(FRAME_TIMEOUT).unwrap();

        assert_eq!(generation, 1);
        assert_eq!(frame.generation, generation);
        assert_eq!(frame.request, request);
        assert_eq!(frame.pixel_buffer, render(request.region, request.budget, request.canvas));
        assert_eq!(worker.last_completed_generation(), generation);

        worker.shutdown();
    }

    #[test_log::test]
    fn test_superseded_zoom_is_never_presented() {
        let (mut worker, frames) = spawn_worker();

        let slow = worker.submit(slow_request());
        let zoomed = quick_request(Region::new(-1.25, 0.25, -0.5, 0.5).unwrap());
        let latest = worker.submit(zoomed);

        let frame = frames.recv_timeout(FRAME_TIMEOUT).unwrap();

        assert!(latest > slow);
        assert_eq!(frame.generation, latest);
        assert_eq!(frame.request, zoomed);
        assert!(frames.try_recv().is_err());

        worker.shutdown();
    }

    #[test]
    fn test_session_zoom_round_trip() {
        let (mut worker, frames) = spawn_worker();
        let mut session = FractalSession::new(CanvasSize::new(60, 40).unwrap());

        session.apply(InputEvent::PrimaryClick(Point { x: 45, y: 10 }));
        let request = session.begin_render();
        worker.submit(request);

        let frame = frames.recv_timeout(FRAME_TIMEOUT).unwrap();
        assert!(session.accept_frame(frame));
        assert_eq!(
            session.buffer(),
            &render(session.viewport().region(), session.viewport().budget(), session.canvas())
        );

        worker.shutdown();
    }

    #[test]
    fn test_shutdown_abandons_running_pass() {
        let (mut worker, frames) = spawn_worker();

        worker.submit(slow_request());
        thread::sleep(Duration::from_millis(50));
        worker.shutdown();

        assert!(frames.try_recv().is_err());
        assert_eq!(worker.last_completed_generation(), 0);
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let (mut worker, _frames) = spawn_worker();

        worker.shutdown();
        worker.shutdown();
    }
}
