//! Activity Events
//!
//! Entries of the dashboard activity log, one per state transition worth
//! telling the user about.

use crate::logging::{LogLevel, is_displayed};
use chrono::Local;
use std::fmt::Display;

/// Which workflow produced an event.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Channel {
    /// Loading, adding and deleting expenses.
    Expenses,
    /// Budget prediction and model training.
    Ml,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEvent {
    pub channel: Channel,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl ActivityEvent {
    pub fn new(channel: Channel, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            channel,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn expenses(msg: impl Into<String>, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Channel::Expenses, msg.into(), event_type, log_level)
    }

    pub fn ml(msg: impl Into<String>, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Channel::Ml, msg.into(), event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        is_displayed(self.log_level)
    }
}

impl Display for ActivityEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
