use std::fmt::{self, Display};

use serde::Serialize;
use tracing::trace;

use crate::error::FormatError;
use crate::template::format_indexed;

/// The result of an operation: a success flag, ordered diagnostic messages
/// and an optional payload.
///
/// `Outcome` (with the default `T = ()`) is the payload-less shape and is
/// built with [`Outcome::succeed`] or [`Outcome::fail`]. `Outcome<T>` carries
/// a payload and is built with [`Outcome::succeed_with`],
/// [`Outcome::fail_with`] or [`Outcome::fail_without_data`]. Both shapes
/// share every builder, accessor and the [`Display`] rendering.
///
/// Builders consume the value and hand back the extended one, so an outcome
/// that has been shared by reference can no longer grow.
///
/// ```
/// use simple_outcome::{Outcome, catalog::format};
///
/// let outcome = Outcome::fail()
///     .with_message(format::NOT_FOUND, &[&"Widget"])?
///     .with_list_of(["check the id", "   "]);
///
/// assert!(!outcome.is_success());
/// assert_eq!(outcome.messages(), ["Widget not found", "check the id"]);
/// # Ok::<(), simple_outcome::FormatError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[must_use]
pub struct Outcome<T = ()> {
    success: bool,
    messages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl Outcome {
    /// A successful outcome with no messages and no payload.
    pub fn succeed() -> Self {
        Self::new(true, None)
    }

    /// A failed outcome with no messages and no payload.
    pub fn fail() -> Self {
        Self::new(false, None)
    }
}

impl<T> Outcome<T> {
    fn new(success: bool, data: Option<T>) -> Self {
        Self {
            success,
            messages: Vec::new(),
            data,
        }
    }

    /// A successful outcome carrying `data`. Passing `None` records a success
    /// that produced nothing.
    pub fn succeed_with(data: impl Into<Option<T>>) -> Self {
        Self::new(true, data.into())
    }

    /// A failed outcome carrying `data`, which may be `None`.
    pub fn fail_with(data: impl Into<Option<T>>) -> Self {
        Self::new(false, data.into())
    }

    /// A failed outcome of the payload-bearing shape with no payload.
    pub fn fail_without_data() -> Self {
        Self::new(false, None)
    }

    /// Append a message rendered from `template`.
    ///
    /// With no `args` the template is appended verbatim, braces included.
    /// Otherwise every `{n}` placeholder is replaced by `args[n]`. Empty or
    /// whitespace-only text is dropped without error.
    ///
    /// Arguments render through `Display`. A `:format` suffix such as
    /// `{0:D3}` or `{0:X}` is accepted but ignored, so `7` renders as `7`,
    /// not `007`. Pre-format such values before passing them in. Alignment
    /// (`{0,8}`, `{0,-8}`) is honoured, up to a width below one million.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] when `args` is non-empty and the template
    /// cannot be rendered against it. The outcome is consumed in that case.
    pub fn with_message(
        mut self,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<Self, FormatError> {
        if args.is_empty() {
            self.push(template.to_owned());
        } else {
            let rendered = format_indexed(template, args)?;
            self.push(rendered);
        }
        Ok(self)
    }

    /// Append each message verbatim, in order, skipping empty and
    /// whitespace-only entries.
    pub fn with_list_of<I, S>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for message in messages {
            self.push(message.into());
        }
        self
    }

    fn push(&mut self, message: String) {
        if message.trim().is_empty() {
            trace!(success = self.success, "dropping blank outcome message");
            return;
        }
        self.messages.push(message);
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn is_failure(&self) -> bool {
        !self.success
    }

    /// Messages in the order they were added.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Split into the success flag, the messages and the payload.
    pub fn into_parts(self) -> (bool, Vec<String>, Option<T>) {
        (self.success, self.messages, self.data)
    }

    /// Drop the payload, keeping the flag and messages.
    pub fn discard_data(self) -> Outcome {
        Outcome {
            success: self.success,
            messages: self.messages,
            data: None,
        }
    }

    /// Transform a present payload, keeping the flag and messages.
    pub fn map_data<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        Outcome {
            success: self.success,
            messages: self.messages,
            data: self.data.map(f),
        }
    }
}

/// Messages one per line, or a fixed status line when there are none.
/// Intended for logs and terminals, not for parsing.
impl<T> Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.messages.is_empty() {
            let status = if self.success {
                "Operation succeeded"
            } else {
                "Operation failed"
            };
            return f.write_str(status);
        }

        f.write_str(&self.messages.join("\n"))
    }
}
