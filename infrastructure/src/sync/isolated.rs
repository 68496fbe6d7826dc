use std::any::Any;
use std::future::Future;

/// How an isolated unit of work ended
#[derive(Debug)]
pub enum Exit<T> {
    Finished(T),
    /// The work panicked, carries the panic message
    Panicked(String),
}

/// Run `future` on its own task and wait for it.
///
/// The future owns everything it touches, so nothing it does can leak into
/// the caller. A panic is turned into [`Exit::Panicked`]; only a task that
/// was cancelled under us (runtime shutting down) is reported as an error.
pub async fn run<F>(future: F) -> anyhow::Result<Exit<F::Output>>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    match tokio::spawn(future).await {
        Ok(output) => Ok(Exit::Finished(output)),
        Err(e) if e.is_panic() => Ok(Exit::Panicked(panic_message(e.into_panic()))),
        Err(e) => Err(anyhow::anyhow!("Isolated task did not complete: {e}")),
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(s) => *s,
        Err(payload) => match payload.downcast::<&'static str>() {
            Ok(s) => (*s).to_owned(),
            Err(_) => "unknown panic".to_owned(),
        },
    }
}

#[cfg(test)]
impl<T> Exit<T> {
    pub fn finished(self) -> Option<T> {
        match self {
            Self::Finished(x) => Some(x),
            Self::Panicked(_) => None,
        }
    }
}
