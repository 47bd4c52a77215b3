use std::sync::Arc;
use tictactoe_client::GameApi;
use tictactoe_types::Position;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::controller::{GameController, Outcome, Request, Response};
use crate::executor::execute;
use crate::poller::Poller;
use crate::state::ViewState;

/// Events fed back into the UI loop
#[derive(Debug, Clone)]
pub enum RuntimeEvent {
    /// Polling interval elapsed
    Tick,
    /// A request finished
    Response(Response),
}

/// Connects a [`GameController`] to a `GameApi` and a [`Poller`].
///
/// The driver is owned by the UI loop. Requests run as tokio tasks and post
/// their [`Response`] back through the event channel, so the controller is only
/// ever touched from the thread that calls [`GameDriver::handle_event`].
pub struct GameDriver {
    controller: GameController,
    api: Arc<dyn GameApi>,
    handle: Handle,
    tx: UnboundedSender<RuntimeEvent>,
    poller: Poller,
}

impl GameDriver {
    pub fn new(
        api: Arc<dyn GameApi>,
        handle: Handle,
        controller: GameController,
    ) -> (Self, UnboundedReceiver<RuntimeEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let poller = Poller::new(handle.clone(), tx.clone());
        let driver = Self {
            controller,
            api,
            handle,
            tx,
            poller,
        };
        (driver, rx)
    }

    pub fn state(&self) -> &ViewState {
        self.controller.state()
    }

    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    pub fn is_polling(&self) -> bool {
        self.poller.is_running()
    }

    /// Returns `false` when the controller declined the intent.
    pub fn start_game(&mut self, player_x: &str, player_o: &str) -> bool {
        let request = self.controller.request_start(player_x, player_o);
        self.dispatch(request)
    }

    pub fn join_game(&mut self, game_id: &str) -> bool {
        let request = self.controller.request_join(game_id);
        self.dispatch(request)
    }

    pub fn click(&mut self, position: Position) -> bool {
        let request = self.controller.request_move(position);
        self.dispatch(request)
    }

    /// Poll immediately instead of waiting for the next tick.
    pub fn refresh(&mut self) -> bool {
        let request = self.controller.request_poll();
        self.dispatch(request)
    }

    pub fn toggle_theme(&mut self) {
        self.controller.toggle_theme();
    }

    /// Feed one event from the receiver. Returns the outcome for responses.
    pub fn handle_event(&mut self, event: RuntimeEvent) -> Option<Outcome> {
        match event {
            RuntimeEvent::Tick => {
                let request = self.controller.request_poll();
                self.dispatch(request);
                // Status may have left in_progress while the tick was queued.
                self.poller.sync(self.controller.should_poll());
                None
            }
            RuntimeEvent::Response(response) => {
                let outcome = self.controller.apply(response);
                self.poller.sync(self.controller.should_poll());
                Some(outcome)
            }
        }
    }

    fn dispatch(&self, request: Option<Request>) -> bool {
        let Some(request) = request else {
            return false;
        };
        tracing::debug!(seq = request.seq, kind = request.kind.name(), "dispatching");
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let response = execute(api.as_ref(), request).await;
            // Receiver gone means the view was torn down; drop the result.
            let _ = tx.send(RuntimeEvent::Response(response));
        });
        true
    }
}
