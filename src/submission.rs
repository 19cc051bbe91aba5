// SPDX-License-Identifier: MPL-2.0
//! The form-submission seam.
//!
//! The screen itself never talks to a backend; pressing Submit hands the
//! selected category and the free text to a [`FeedbackSink`] collaborator.
//! The default sink just records the submission on the log so the screen is
//! usable standalone.

/// A completed survey answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// Stable category identifier ("1", "2" or "3").
    pub category_id: String,
    /// Free-text comment; may be empty, no validation is applied.
    pub text: String,
}

/// Receiver for submitted feedback. No response contract: submission is
/// fire-and-forget from the screen's point of view.
pub trait FeedbackSink {
    fn submit(&mut self, feedback: Feedback);
}

/// Default sink: logs the submission.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl FeedbackSink for LogSink {
    fn submit(&mut self, feedback: Feedback) {
        log::info!(
            "feedback submitted: category={} text={:?}",
            feedback.category_id,
            feedback.text
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        received: Vec<Feedback>,
    }

    impl FeedbackSink for RecordingSink {
        fn submit(&mut self, feedback: Feedback) {
            self.received.push(feedback);
        }
    }

    #[test]
    fn sink_receives_category_and_text() {
        let mut sink = RecordingSink::default();
        sink.submit(Feedback {
            category_id: "2".into(),
            text: "quick checkout".into(),
        });
        assert_eq!(sink.received.len(), 1);
        assert_eq!(sink.received[0].category_id, "2");
        assert_eq!(sink.received[0].text, "quick checkout");
    }

    #[test]
    fn empty_text_is_accepted_verbatim() {
        let mut sink = RecordingSink::default();
        sink.submit(Feedback {
            category_id: "1".into(),
            text: String::new(),
        });
        assert_eq!(sink.received[0].text, "");
    }
}
