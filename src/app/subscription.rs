// SPDX-License-Identifier: MPL-2.0
//! Native event subscriptions for the application.

use super::Message;
use iced::{event, window, Subscription};

/// Routes window close requests so the tab bar can be torn down before the
/// window goes away.
pub fn close_requests() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(window::Event::CloseRequested) = event {
            Some(Message::WindowCloseRequested(window_id))
        } else {
            None
        }
    })
}
