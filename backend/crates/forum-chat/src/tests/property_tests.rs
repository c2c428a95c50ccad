use crate::tests::{RecordingHubEvents, message};
use crate::{ChatMessage, ChatMetrics, ConnectionId, Hub, HubEvent, Subscriber};

use std::collections::HashMap;
use std::sync::Arc;

use proptest::prelude::*;
use tokio::sync::mpsc;

fn drain(queue: &mut mpsc::Receiver<ChatMessage>) -> Vec<ChatMessage> {
    let mut received = Vec::new();
    while let Ok(message) = queue.try_recv() {
        received.push(message);
    }
    received
}

proptest! {
    #[test]
    fn broadcasts_only_reach_connections_on_the_same_thread(
        connection_threads in prop::collection::vec(1i64..5, 1..12),
        broadcast_threads in prop::collection::vec(1i64..5, 0..30),
    ) {
        let (mut hub, _handle) = Hub::new(
            16,
            Arc::new(RecordingHubEvents::default()),
            ChatMetrics::default(),
        );

        let mut queues = Vec::new();
        for &thread_id in &connection_threads {
            let (subscriber, queue) =
                Subscriber::new(ConnectionId::new(), thread_id, broadcast_threads.len() + 1);
            hub.handle(HubEvent::Register(subscriber));
            queues.push((thread_id, queue));
        }

        for (index, &thread_id) in broadcast_threads.iter().enumerate() {
            hub.handle(HubEvent::Broadcast(message(thread_id, &index.to_string())));
        }

        let mut expected: HashMap<i64, Vec<String>> = HashMap::new();
        for (index, &thread_id) in broadcast_threads.iter().enumerate() {
            expected.entry(thread_id).or_default().push(index.to_string());
        }

        let empty = Vec::new();
        for (thread_id, queue) in &mut queues {
            let received = drain(queue);
            prop_assert!(received.iter().all(|m| m.thread_id == *thread_id));
            let contents: Vec<String> = received.into_iter().map(|m| m.content).collect();
            prop_assert_eq!(&contents, expected.get(thread_id).unwrap_or(&empty));
        }
    }

    #[test]
    fn unregistered_connections_never_receive(
        thread_id in 1i64..4,
        broadcasts in 1usize..10,
    ) {
        let (mut hub, _handle) = Hub::new(
            16,
            Arc::new(RecordingHubEvents::default()),
            ChatMetrics::default(),
        );
        let connection_id = ConnectionId::new();
        let (subscriber, mut queue) = Subscriber::new(connection_id, thread_id, 16);
        hub.handle(HubEvent::Register(subscriber));
        hub.handle(HubEvent::Unregister(connection_id));

        for index in 0..broadcasts {
            hub.handle(HubEvent::Broadcast(message(thread_id, &index.to_string())));
        }

        prop_assert!(drain(&mut queue).is_empty());
    }
}
