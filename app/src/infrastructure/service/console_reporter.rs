use std::io::Write;
use std::sync::Mutex;

use async_trait::async_trait;
use domain::{
    model::{entity::TaskEntry, vo::HttpFailure},
    service::SubmissionReporter,
};

/// Prints task names and rejected responses for the operator.
pub struct ConsoleReporter<W> {
    out: Mutex<W>,
}

impl ConsoleReporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out.into_inner().unwrap()
    }
}

impl<W: Write> ConsoleReporter<W> {
    fn write(&self, text: &str) -> anyhow::Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| anyhow::anyhow!("Output lock poisoned"))?;
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

#[async_trait]
impl<W> SubmissionReporter for ConsoleReporter<W>
where
    W: Write + Send,
{
    async fn announce(&self, task: &TaskEntry) -> anyhow::Result<()> {
        self.write(&format!("{}\n", task.name))
    }

    async fn report_rejection(
        &self,
        task: &TaskEntry,
        failure: &HttpFailure,
    ) -> anyhow::Result<()> {
        tracing::warn!(
            task = %task.name,
            detail = failure.header("X-Error-Detail"),
            info = failure.header("X-Error-Info"),
            "{failure}"
        );
        let mut text = format!("{failure}\n");
        for (name, value) in &failure.headers {
            text += &format!("{name}: {value}\n");
        }
        self.write(&text)
    }
}
