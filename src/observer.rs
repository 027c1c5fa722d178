use alloc::vec::Vec;

use crate::Status;

pub trait Observer {
    fn on_enter(&mut self, _node_id: usize) {}
    fn on_exit(&mut self, _node_id: usize, _status: Status) {}
}

#[derive(Default)]
pub struct NoOpObserver;

impl Observer for NoOpObserver {}

#[derive(Default)]
pub struct RecordingObserver {
    pub events: Vec<ObserverEvent>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ObserverEvent {
    Enter(usize),
    Exit(usize, Status),
}

impl RecordingObserver {
    /// Node ids in the order they were entered.
    pub fn entered(&self) -> Vec<usize> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ObserverEvent::Enter(id) => Some(*id),
                ObserverEvent::Exit(..) => None,
            })
            .collect()
    }
}

impl Observer for RecordingObserver {
    fn on_enter(&mut self, node_id: usize) {
        self.events.push(ObserverEvent::Enter(node_id));
    }

    fn on_exit(&mut self, node_id: usize, status: Status) {
        self.events.push(ObserverEvent::Exit(node_id, status));
    }
}

/// Forwards node transitions to `tracing` at trace level.
#[derive(Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_enter(&mut self, node_id: usize) {
        tracing::trace!(node_id, "enter");
    }

    fn on_exit(&mut self, node_id: usize, status: Status) {
        tracing::trace!(node_id, %status, "exit");
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{NoOpObserver, Observer, ObserverEvent, RecordingObserver, TracingObserver};
    use crate::Status;

    #[test]
    fn observer_records_events() {
        let mut observer = RecordingObserver::default();
        observer.on_enter(3);
        observer.on_enter(4);
        observer.on_exit(4, Status::Running);
        observer.on_exit(3, Status::Running);

        assert_eq!(
            observer.events,
            vec![
                ObserverEvent::Enter(3),
                ObserverEvent::Enter(4),
                ObserverEvent::Exit(4, Status::Running),
                ObserverEvent::Exit(3, Status::Running),
            ]
        );
        assert_eq!(observer.entered(), vec![3, 4]);
    }

    #[test]
    fn observer_noop_and_tracing_compile() {
        let mut noop = NoOpObserver;
        noop.on_enter(0);
        noop.on_exit(0, Status::Running);
        let mut tracing = TracingObserver;
        tracing.on_enter(1);
        tracing.on_exit(1, Status::Failure);
    }
}
