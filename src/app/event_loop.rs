use std::time::Duration;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time;
use tracing::{debug, info, warn};

use crate::command::{ActionId, CommandOutcome};
use crate::error::AppResult;
use crate::event::DomainEvent;
use crate::presenter::ImageLoader;

use super::core::App;
use super::event_bus::EventBusRuntime;
use super::terminal_session::TerminalSession;

/// Poll cadence while photos are still decoding so "loading" frames refresh.
const PHOTO_PENDING_WAKE: Duration = Duration::from_millis(60);

struct LoopRuntime {
    session: TerminalSession,
    loader: ImageLoader,
    input_poll_timeout: Duration,
    needs_redraw: bool,
    loop_event_tx: UnboundedSender<DomainEvent>,
    loop_event_rx: UnboundedReceiver<DomainEvent>,
    loop_event_runtime: EventBusRuntime,
}

enum WaitEvent {
    Event(DomainEvent),
    Closed,
}

enum LoopControl {
    Continue,
    Break,
}

impl App {
    pub async fn run(&mut self) -> AppResult<()> {
        let mut runtime = self.initialize_loop_runtime()?;

        loop {
            if runtime.needs_redraw {
                let report = self.render_frame(&mut runtime.session)?;
                runtime.needs_redraw = report.photos_pending;
            }
            for path in self.presenter.take_load_requests() {
                if runtime.loader.enqueue(path.clone()) {
                    debug!(
                        path = %path.display(),
                        in_flight = runtime.loader.in_flight_len(),
                        "photo queued"
                    );
                }
            }

            let wake_timeout = if self.presenter.has_pending_work() {
                PHOTO_PENDING_WAKE
            } else {
                runtime.input_poll_timeout
            };
            let waited = wait_next_event(
                &mut runtime.loop_event_rx,
                &mut runtime.loader,
                wake_timeout,
            )
            .await;
            if matches!(
                self.handle_waited_event(waited, &mut runtime)?,
                LoopControl::Break
            ) {
                break;
            }
        }

        runtime.loop_event_runtime.shutdown();
        runtime.session.restore()?;
        info!(position = %self.position(), "session ended");
        Ok(())
    }

    fn initialize_loop_runtime(&mut self) -> AppResult<LoopRuntime> {
        let session = TerminalSession::enter()?;
        self.presenter.initialize_terminal()?;
        let loader = ImageLoader::spawn()?;
        let (loop_event_tx, loop_event_rx, loop_event_runtime) = EventBusRuntime::spawn();
        debug!(presenter = %self.presenter.status_label(), "event loop ready");

        Ok(LoopRuntime {
            session,
            loader,
            input_poll_timeout: Duration::from_millis(self.config.ui.input_poll_timeout_ms),
            needs_redraw: true,
            loop_event_tx,
            loop_event_rx,
            loop_event_runtime,
        })
    }

    fn handle_waited_event(
        &mut self,
        waited: WaitEvent,
        runtime: &mut LoopRuntime,
    ) -> AppResult<LoopControl> {
        match waited {
            WaitEvent::Event(DomainEvent::Input(event)) => {
                let input_outcome =
                    self.handle_input_event(event, &mut runtime.session, &mut runtime.needs_redraw)?;
                if input_outcome.quit_requested {
                    return Ok(LoopControl::Break);
                }
                if let Some(command) = input_outcome.command {
                    let _ = runtime.loop_event_tx.send(DomainEvent::Command(command));
                }
            }
            WaitEvent::Event(DomainEvent::InputError(message)) => {
                warn!(error = %message, "terminal input error");
                self.state.status.last_action_id = Some(ActionId::Input);
                self.state.status.message = format!("input error: {message}");
                runtime.needs_redraw = true;
            }
            WaitEvent::Event(DomainEvent::Command(command)) => {
                match self.apply_command(command)? {
                    CommandOutcome::QuitRequested => return Ok(LoopControl::Break),
                    CommandOutcome::Applied | CommandOutcome::Noop => runtime.needs_redraw = true,
                }
            }
            WaitEvent::Event(DomainEvent::ImageLoaded(loaded)) => {
                if self.presenter.ingest(loaded) {
                    runtime.needs_redraw = true;
                }
            }
            WaitEvent::Event(DomainEvent::Wake) => {}
            WaitEvent::Closed => return Ok(LoopControl::Break),
        }
        Ok(LoopControl::Continue)
    }
}

async fn wait_next_event(
    loop_event_rx: &mut UnboundedReceiver<DomainEvent>,
    loader: &mut ImageLoader,
    wake_timeout: Duration,
) -> WaitEvent {
    tokio::select! {
        biased;
        maybe_loop = loop_event_rx.recv() => {
            match maybe_loop {
                Some(event) => WaitEvent::Event(event),
                None => WaitEvent::Closed,
            }
        },
        Some(loaded) = loader.recv_result() => {
            WaitEvent::Event(DomainEvent::ImageLoaded(loaded))
        },
        _ = time::sleep(wake_timeout) => {
            WaitEvent::Event(DomainEvent::Wake)
        }
    }
}
