use crate::domain::ports::Navigator;
use std::io::Write;
use std::sync::{Arc, Mutex};
use url::Url;

/// Hands the approval URL to the user on stdout.
///
/// The terminal stands in for the browser: printing the URL is the point at
/// which the application is left.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutNavigator;

impl Navigator for StdoutNavigator {
    fn navigate(&self, url: &Url) {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = writeln!(out, "Redirecting to PayPal: {url}") {
            tracing::warn!(error = %e, "failed to write redirect target");
        }
    }
}

/// Remembers every navigation instead of performing it.
#[derive(Debug, Default, Clone)]
pub struct RecordingNavigator {
    visited: Arc<Mutex<Vec<Url>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<Url> {
        self.visited
            .lock()
            .map(|visited| visited.clone())
            .unwrap_or_default()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &Url) {
        if let Ok(mut visited) = self.visited.lock() {
            visited.push(url.clone());
        }
    }
}
