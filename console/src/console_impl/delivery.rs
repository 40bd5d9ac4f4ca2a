// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The reactor never waits on the consumer. Commands and notifications are pushed into
//! unbounded internal queues, and one delivery task per consumer channel forwards them,
//! one at a time, into the bounded channel the consumer reads from. A slow consumer
//! only slows down its own delivery task, and production order is kept.

use std::fmt::Debug;

use tokio::{spawn,
            sync::mpsc::{self, UnboundedReceiver, UnboundedSender}};

use crate::{ChannelCapacity, Notification};

/// The reactor's side of the outbound queues.
#[derive(Debug, Clone)]
pub struct Outbound {
    pub commands: UnboundedSender<String>,
    pub notifications: UnboundedSender<Notification>,
}

/// The consumer's side. Dropping either receiver is allowed, the reactor keeps
/// running.
///
/// A receiver that is kept alive but never read from is not allowed to stall the
/// reactor, so everything past the channel capacity waits in the unbounded internal
/// queue. That backlog is only released by reading or by dropping the receiver. Its
/// growth is bounded by how fast lines are submitted and notifications are triggered,
/// so read both channels, or drop the one you don't need.
#[derive(Debug)]
pub struct ConsoleReceivers {
    /// The text of every submitted line, in submission order.
    pub commands: mpsc::Receiver<String>,
    pub notifications: mpsc::Receiver<Notification>,
}

/// Create the outbound queues and spawn their delivery tasks.
#[must_use]
pub fn spawn_delivery_tasks(channel_capacity: ChannelCapacity) -> (Outbound, ConsoleReceivers) {
    let (commands, commands_receiver) = spawn_delivery_task("commands", channel_capacity);
    let (notifications, notifications_receiver) =
        spawn_delivery_task("notifications", channel_capacity);
    (
        Outbound {
            commands,
            notifications,
        },
        ConsoleReceivers {
            commands: commands_receiver,
            notifications: notifications_receiver,
        },
    )
}

/// The task exits when the reactor drops its [`UnboundedSender`] (after everything
/// queued has been delivered), or when the consumer drops its receiver.
pub fn spawn_delivery_task<T: Send + Debug + 'static>(
    name: &'static str,
    channel_capacity: ChannelCapacity,
) -> (UnboundedSender<T>, mpsc::Receiver<T>) {
    let (internal_sender, mut internal_receiver): (UnboundedSender<T>, UnboundedReceiver<T>) =
        mpsc::unbounded_channel();
    let (consumer_sender, consumer_receiver) = mpsc::channel(channel_capacity.capacity());

    spawn(async move {
        while let Some(item) = internal_receiver.recv().await {
            if consumer_sender.send(item).await.is_err() {
                tracing::warn!(message = "consumer dropped its receiver", channel = name);
                break;
            }
        }
    });

    (internal_sender, consumer_receiver)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_delivery_preserves_order_with_slow_consumer() {
        let (sender, mut receiver) =
            spawn_delivery_task::<usize>("test", ChannelCapacity::Minimal);

        // Far more than the consumer channel can hold, none of these block.
        for index in 0..100 {
            sender.send(index).unwrap();
        }
        drop(sender);

        let mut received = vec![];
        while let Some(index) = receiver.recv().await {
            if index % 25 == 0 {
                tokio::time::sleep(Duration::from_millis(1)).await;
            }
            received.push(index);
        }
        assert_eq!(received, (0..100).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_dropped_consumer_does_not_affect_producer() {
        let (sender, receiver) = spawn_delivery_task::<usize>("test", ChannelCapacity::Minimal);
        drop(receiver);
        for index in 0..100 {
            // The delivery task may already be gone, sends don't block either way.
            sender.send(index).ok();
        }
    }

    #[tokio::test]
    async fn test_unread_consumer_backlog_is_kept_in_order() {
        let (sender, mut receiver) =
            spawn_delivery_task::<usize>("test", ChannelCapacity::Minimal);

        for index in 0..10_000 {
            sender.send(index).unwrap();
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!sender.is_closed());

        for expected in 0..10_000 {
            assert_eq!(receiver.recv().await, Some(expected));
        }
    }
}
