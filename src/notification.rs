//! Parse notification / diagnostic system.
//!
//! The container format is only partially reverse-engineered.  Non-fatal
//! observations made while reading (skipped unknown byte regions, tolerated
//! out-of-table values, structures that are recognised but not implemented)
//! are collected as `Notification` items rather than being silently dropped.
//!
//! After a run the caller can inspect [`crate::io::olb::reader::ParseReport`]
//! to see what was encountered.

use std::fmt;

/// Severity level of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// A byte region whose meaning is not yet understood was skipped.
    UnknownData,
    /// A value outside the observed table was accepted and carried on.
    Tolerated,
    /// A structure is recognised but has no reader yet.
    NotImplemented,
    /// A stream failed to parse and was abandoned.
    StreamError,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownData => write!(f, "UnknownData"),
            Self::Tolerated => write!(f, "Tolerated"),
            Self::NotImplemented => write!(f, "NotImplemented"),
            Self::StreamError => write!(f, "StreamError"),
        }
    }
}

/// A single notification produced during a parsing run.
#[derive(Debug, Clone)]
pub struct Notification {
    /// The severity / category.
    pub notification_type: NotificationType,
    /// Stream offset the observation was made at, when applicable.
    pub offset: Option<u64>,
    /// A human-readable description of the issue.
    pub message: String,
}

impl Notification {
    /// Create a new notification.
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            offset: None,
            message: message.into(),
        }
    }

    /// Create a new notification anchored to a stream offset.
    pub fn at(
        notification_type: NotificationType,
        offset: u64,
        message: impl Into<String>,
    ) -> Self {
        Self {
            notification_type,
            offset: Some(offset),
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Some(off) => write!(f, "[{}] {} (at {:#x})", self.notification_type, self.message, off),
            None => write!(f, "[{}] {}", self.notification_type, self.message),
        }
    }
}

/// Collects notifications during a parsing run.
#[derive(Debug, Clone, Default)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a notification.
    pub fn notify(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        self.items.push(Notification::new(notification_type, message));
    }

    /// Record a notification anchored to a stream offset.
    pub fn notify_at(
        &mut self,
        notification_type: NotificationType,
        offset: u64,
        message: impl Into<String>,
    ) {
        self.items
            .push(Notification::at(notification_type, offset, message));
    }

    /// Move all notifications from `other` into this collection.
    pub fn extend(&mut self, other: NotificationCollection) {
        self.items.extend(other.items);
    }

    /// Check if there are any notifications.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of notifications.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over all notifications.
    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// Get all notifications of a specific type.
    pub fn of_type(&self, nt: NotificationType) -> Vec<&Notification> {
        self.items
            .iter()
            .filter(|n| n.notification_type == nt)
            .collect()
    }

    /// Check whether any notification of the given type exists.
    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }

    /// Consume the collection into a `Vec`.
    pub fn into_vec(self) -> Vec<Notification> {
        self.items
    }
}

impl IntoIterator for NotificationCollection {
    type Item = Notification;
    type IntoIter = std::vec::IntoIter<Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::at(NotificationType::UnknownData, 0x40, "wire trailer, 2 bytes");
        assert_eq!(n.notification_type, NotificationType::UnknownData);
        assert_eq!(n.offset, Some(0x40));
    }

    #[test]
    fn test_collection_basics() {
        let mut c = NotificationCollection::new();
        assert!(c.is_empty());

        c.notify(NotificationType::Tolerated, "t1");
        c.notify(NotificationType::StreamError, "e1");
        c.notify(NotificationType::Tolerated, "t2");

        assert_eq!(c.len(), 3);
        assert_eq!(c.of_type(NotificationType::Tolerated).len(), 2);
        assert!(c.has_type(NotificationType::StreamError));
        assert!(!c.has_type(NotificationType::NotImplemented));
    }

    #[test]
    fn test_display() {
        let n = Notification::new(NotificationType::NotImplemented, "very long prefix form");
        assert_eq!(format!("{}", n), "[NotImplemented] very long prefix form");
    }
}
