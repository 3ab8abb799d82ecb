//! Streaming sink that enforces shell-first ordering.

use std::fmt::Display;
use std::marker::PhantomData;

use futures::{Sink, SinkExt};
use shopfront_core::{LifecyclePhase, TimingContext};

use crate::error::WorkloadError;

/// State of the streaming sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    /// Shell not yet sent.
    Initial,
    /// Shell has been sent, sections can be streamed.
    ShellSent,
    /// Response has been completed.
    Completed,
}

/// Shell-first streaming sink.
///
/// Generic over any `Sink<Vec<u8>>`: Spin's outgoing body, a channel feeding
/// an HTTP body, or a plain `Vec<Vec<u8>>` in tests.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: TimingContext,
    sections_sent: Vec<String>,
    bytes_sent: usize,
    _error: PhantomData<fn() -> E>,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Create a new streaming sink.
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            timing,
            sections_sent: Vec::new(),
            bytes_sent: 0,
            _error: PhantomData,
        }
    }

    /// Send the shell HTML. Must be called before any sections.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), WorkloadError> {
        if self.state != SinkState::Initial {
            return Err(WorkloadError::ShellAlreadySent);
        }

        self.timing.mark("shell_start");
        self.write(html).await?;
        self.timing.mark("shell_sent");
        self.state = SinkState::ShellSent;

        Ok(())
    }

    /// Send a named section. Shell must be sent first.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), WorkloadError> {
        self.ensure_open()?;

        self.timing.mark_section_start(name);
        self.write(html).await?;
        self.timing.mark_section_sent(name);
        self.sections_sent.push(name.to_string());

        Ok(())
    }

    /// Send the closing HTML, close the underlying sink and mark completion.
    pub async fn complete(&mut self, closing_html: &str) -> Result<(), WorkloadError> {
        self.ensure_open()?;

        self.write(closing_html).await?;
        self.inner
            .close()
            .await
            .map_err(|e| WorkloadError::Stream(e.to_string()))?;
        self.state = SinkState::Completed;
        self.timing.mark("complete");

        Ok(())
    }

    async fn write(&mut self, html: &str) -> Result<(), WorkloadError> {
        self.inner
            .send(html.as_bytes().to_vec())
            .await
            .map_err(|e| WorkloadError::Stream(e.to_string()))?;
        self.bytes_sent += html.len();
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), WorkloadError> {
        match self.state {
            SinkState::Initial => Err(WorkloadError::ShellNotSent),
            SinkState::Completed => Err(WorkloadError::Completed),
            SinkState::ShellSent => Ok(()),
        }
    }

    /// Sections sent so far, in send order.
    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    /// Total body bytes written.
    pub fn bytes_sent(&self) -> usize {
        self.bytes_sent
    }

    /// Get the current lifecycle phase.
    pub fn phase(&self) -> LifecyclePhase {
        match (self.state, self.sections_sent.last()) {
            (SinkState::Initial, _) => LifecyclePhase::Start,
            (SinkState::ShellSent, None) => LifecyclePhase::ShellSent,
            (SinkState::ShellSent, Some(last)) => LifecyclePhase::SectionSent(last.clone()),
            (SinkState::Completed, _) => LifecyclePhase::Completion,
        }
    }

    /// Get timing context reference.
    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }

    /// Consume the sink and return the inner sink and timing.
    pub fn into_parts(self) -> (S, TimingContext) {
        (self.inner, self.timing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn sink() -> StreamingSink<Vec<Vec<u8>>, std::convert::Infallible> {
        StreamingSink::new(Vec::new(), TimingContext::new())
    }

    #[test]
    fn test_shell_first() {
        let mut sink = sink();
        let err = block_on(sink.send_section("gallery", "<div></div>")).unwrap_err();
        assert_eq!(err, WorkloadError::ShellNotSent);
        assert_eq!(sink.phase(), LifecyclePhase::Start);
    }

    #[test]
    fn test_stream_lifecycle() {
        let mut sink = sink();
        block_on(async {
            sink.send_shell("<html>").await.unwrap();
            assert_eq!(sink.phase(), LifecyclePhase::ShellSent);
            sink.send_section("gallery", "<img>").await.unwrap();
            sink.send_section("summary", "<h1>").await.unwrap();
            assert_eq!(sink.phase(), LifecyclePhase::SectionSent("summary".into()));
            sink.complete("</html>").await.unwrap();
        });

        assert_eq!(sink.phase(), LifecyclePhase::Completion);
        assert_eq!(sink.sections_sent(), &["gallery", "summary"]);
        assert_eq!(sink.bytes_sent(), "<html><img><h1></html>".len());
        assert!(sink.timing().time_to_shell().is_some());

        let (chunks, timing) = sink.into_parts();
        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[0], b"<html>".to_vec());
        assert_eq!(timing.sections_sent(), vec!["gallery", "summary"]);
    }

    #[test]
    fn test_no_writes_after_completion() {
        let mut sink = sink();
        block_on(async {
            sink.send_shell("<html>").await.unwrap();
            sink.complete("</html>").await.unwrap();
            assert_eq!(
                sink.send_section("late", "x").await.unwrap_err(),
                WorkloadError::Completed
            );
            assert_eq!(
                sink.send_shell("<html>").await.unwrap_err(),
                WorkloadError::ShellAlreadySent
            );
        });
    }
}
