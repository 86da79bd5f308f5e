//! Toast Notifier
//!
//! `Notifier` that queues auto-dismissing toasts in a signal.

use std::cell::Cell;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::sync::Notifier;

/// How long a toast stays visible
pub const TOAST_DURATION_MS: u32 = 3000;

/// A visible message
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
}

/// Appends toasts to `toasts`, each removed again after `TOAST_DURATION_MS`
pub struct ToastNotifier {
    toasts: RwSignal<Vec<Toast>>,
    next_id: Cell<u32>,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<Vec<Toast>>) -> Self {
        Self {
            toasts,
            next_id: Cell::new(0),
        }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str) {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));

        let toasts = self.toasts;
        toasts.update(|list| {
            list.push(Toast {
                id,
                message: message.to_string(),
            })
        });

        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }
}
