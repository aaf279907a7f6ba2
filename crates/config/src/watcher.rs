use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Burst of writes collapsed into one notification.
const DEBOUNCE: Duration = Duration::from_millis(250);

/// Watches the config file and sends a notification after every change.
///
/// The parent directory is watched rather than the file itself, so the
/// watcher survives editors that save by renaming a temp file over the
/// original, and picks up a config file created after start-up.
///
/// # Example
/// ```no_run
/// # async fn demo() {
/// use avg_config::ConfigWatcher;
/// let (_, mut rx) = ConfigWatcher::spawn("/home/user/.config/avg/avg.toml");
/// while rx.recv().await.is_some() {
///     println!("config changed, reloading");
/// }
/// # }
/// ```
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Spawn a filesystem watcher for `path`.
    /// Returns the watcher handle and a receiver that fires on every detected change.
    pub fn spawn(path: impl AsRef<Path>) -> (Self, mpsc::Receiver<()>) {
        let (tx, rx) = mpsc::channel(1);
        let path = path.as_ref().to_path_buf();

        tokio::spawn(watch_loop(path.clone(), tx));

        (Self { path }, rx)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<()>) {
    let Some(dir) = path.parent().map(Path::to_path_buf) else {
        error!("Config path '{}' has no parent directory", path.display());
        return;
    };

    let (event_tx, mut event_rx) = mpsc::channel::<notify::Result<Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = event_tx.blocking_send(res);
        },
        Config::default().with_poll_interval(Duration::from_secs(2)),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    if let Err(e) = watcher.watch(&dir, RecursiveMode::NonRecursive) {
        warn!("Live reload disabled, cannot watch '{}': {e}", dir.display());
        return;
    }

    info!("Watching config file: {}", path.display());

    while let Some(event) = event_rx.recv().await {
        match event {
            Ok(e) if touches_config(&e, &path) => {
                // Swallow the rest of the burst before notifying.
                tokio::time::sleep(DEBOUNCE).await;
                while event_rx.try_recv().is_ok() {}

                debug!("Config change detected");
                if tx.send(()).await.is_err() {
                    break; // receiver dropped
                }
            }
            Ok(_) => {}
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}

/// `true` when `event` writes, creates or renames onto the config file.
fn touches_config(event: &Event, path: &Path) -> bool {
    let relevant_kind = matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_)
    );
    relevant_kind && event.paths.iter().any(|p| p == path || p.file_name() == path.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind, RemoveKind};

    fn event(kind: EventKind, path: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn modify_on_config_is_relevant() {
        let cfg = Path::new("/home/u/.config/avg/avg.toml");
        let e = event(EventKind::Modify(ModifyKind::Any), "/home/u/.config/avg/avg.toml");
        assert!(touches_config(&e, cfg));
    }

    #[test]
    fn create_on_config_is_relevant() {
        let cfg = Path::new("/home/u/.config/avg/avg.toml");
        let e = event(EventKind::Create(CreateKind::File), "/home/u/.config/avg/avg.toml");
        assert!(touches_config(&e, cfg));
    }

    #[test]
    fn sibling_files_are_ignored() {
        let cfg = Path::new("/home/u/.config/avg/avg.toml");
        let e = event(EventKind::Modify(ModifyKind::Any), "/home/u/.config/avg/notes.txt");
        assert!(!touches_config(&e, cfg));
    }

    #[test]
    fn removal_is_ignored() {
        let cfg = Path::new("/home/u/.config/avg/avg.toml");
        let e = event(EventKind::Remove(RemoveKind::File), "/home/u/.config/avg/avg.toml");
        assert!(!touches_config(&e, cfg));
    }
}
