use log::debug;
use std::{
    future::Future,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::time;

/// Handle to a background polling loop. Dropping it does not stop the
/// loop; call [`PollHandle::stop`].
pub struct PollHandle {
    name: &'static str,
    should_exit: Arc<Mutex<bool>>,
}

impl PollHandle {
    pub fn stop(&self) {
        debug!("stopping {} poller", self.name);
        *self.should_exit.lock().unwrap() = true;
    }
}

/// Spawns a loop that runs `task` every `interval`, subtracting the time
/// the task itself took. The loop exits at the next wakeup after
/// [`PollHandle::stop`] is called.
pub fn spawn_poller<F, Fut>(name: &'static str, interval: Duration, mut task: F) -> PollHandle
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send,
{
    let should_exit = Arc::new(Mutex::new(false));
    let should_exit_clone = Arc::clone(&should_exit);

    tokio::spawn(async move {
        while !*should_exit_clone.lock().unwrap() {
            let start_time = std::time::Instant::now();

            task().await;

            let elapsed_time = start_time.elapsed();
            debug!("{} poll took {:?}", name, elapsed_time);

            time::sleep(interval.saturating_sub(elapsed_time)).await;
        }
    });

    PollHandle { name, should_exit }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn poller_fires_repeatedly_until_stopped() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let ticks_clone = Arc::clone(&ticks);

        let handle = spawn_poller("test", Duration::from_millis(5), move || {
            let ticks = Arc::clone(&ticks_clone);
            async move {
                ticks.fetch_add(1, Ordering::SeqCst);
            }
        });

        time::sleep(Duration::from_millis(40)).await;
        handle.stop();
        let seen = ticks.load(Ordering::SeqCst);
        assert!(seen >= 2, "expected at least 2 ticks, got {}", seen);

        time::sleep(Duration::from_millis(40)).await;
        let after_stop = ticks.load(Ordering::SeqCst);
        // one in-flight tick may still land after stop() is called
        assert!(after_stop <= seen + 1);
    }
}
