//! Per-request summary line.

use std::time::Duration;

use shopfront_core::{SectionTiming, TimingContext};

use crate::logging::StructuredLogger;

/// What a finished request looked like on the wire.
#[derive(Debug, Clone)]
pub struct RequestSummary {
    pub status: u16,
    pub total: Duration,
    pub time_to_shell: Option<Duration>,
    pub time_to_first_section: Option<Duration>,
    pub sections: Vec<SectionTiming>,
    pub bytes_sent: usize,
}

impl RequestSummary {
    /// Collect timings recorded during streaming.
    pub fn from_timing(status: u16, timing: &TimingContext, bytes_sent: usize) -> Self {
        Self {
            status,
            total: timing.elapsed(),
            time_to_shell: timing.time_to_shell(),
            time_to_first_section: timing.time_to_first_section(),
            sections: timing.section_timings().to_vec(),
            bytes_sent,
        }
    }

    /// Section names in the order they were sent.
    pub fn section_order(&self) -> String {
        self.sections
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl StructuredLogger {
    /// Emit the request summary; 5xx responses log at error level.
    pub fn request_summary(&self, summary: &RequestSummary) {
        let builder = if summary.status >= 500 {
            self.error_builder("request completed")
        } else {
            self.info_builder("request completed")
        };

        let mut builder = builder
            .field_i64("status", summary.status as i64)
            .duration_us("total_us", summary.total)
            .field_i64("bytes", summary.bytes_sent as i64)
            .field("sections", summary.section_order());

        if let Some(ttfb) = summary.time_to_shell {
            builder = builder.duration_us("shell_us", ttfb);
        }
        if let Some(first) = summary.time_to_first_section {
            builder = builder.duration_us("first_section_us", first);
        }
        for section in &summary.sections {
            builder = builder.duration_us(&format!("section_{}_us", section.name), section.sent);
        }

        builder.emit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LogCapture, LogLevel};
    use shopfront_core::RequestId;

    #[test]
    fn test_summary_fields() {
        let mut timing = TimingContext::new();
        timing.mark("shell_sent");
        timing.mark_section_start("gallery");
        timing.mark_section_sent("gallery");

        let summary = RequestSummary::from_timing(200, &timing, 1024);
        assert_eq!(summary.section_order(), "gallery");

        let capture = LogCapture::new();
        StructuredLogger::new(RequestId::from_string("r"))
            .with_capture(capture.clone())
            .request_summary(&summary);

        let entry = capture.find("request completed").unwrap();
        assert_eq!(entry.level, LogLevel::Info);
        assert_eq!(entry.fields["status"], 200);
        assert_eq!(entry.fields["bytes"], 1024);
        assert!(entry.fields.contains_key("shell_us"));
        assert!(entry.fields.contains_key("section_gallery_us"));
    }

    #[test]
    fn test_server_error_logs_at_error() {
        let summary = RequestSummary::from_timing(500, &TimingContext::new(), 0);
        let capture = LogCapture::new();
        StructuredLogger::new(RequestId::from_string("r"))
            .with_capture(capture.clone())
            .request_summary(&summary);

        let entry = capture.find("request completed").unwrap();
        assert_eq!(entry.level, LogLevel::Error);
        assert!(!entry.fields.contains_key("shell_us"));
    }
}
