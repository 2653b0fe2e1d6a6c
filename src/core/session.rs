//! Interaction context handed from one command handler to the next.
//!
//! Handlers never mutate shared state: they take a `Session` by value and
//! return the next one.

use crate::ui::messages;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    List,
    Form,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Success(String),
    Failure(String),
}

impl Notice {
    pub fn is_failure(&self) -> bool {
        matches!(self, Notice::Failure(_))
    }

    pub fn text(&self) -> &str {
        match self {
            Notice::Info(s) | Notice::Success(s) | Notice::Failure(s) => s,
        }
    }

    /// Print through the message helpers.
    pub fn emit(&self) {
        match self {
            Notice::Info(s) => messages::info(s),
            Notice::Success(s) => messages::success(s),
            Notice::Failure(s) => messages::error(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    view: View,
    edit_target: Option<i64>,
    notice: Option<Notice>,
}

impl Session {
    pub fn start() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn edit_target(&self) -> Option<i64> {
        self.edit_target
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn show_list(self) -> Self {
        Self {
            view: View::List,
            edit_target: None,
            ..self
        }
    }

    /// Open the form for a new event.
    pub fn new_event(self) -> Self {
        Self {
            view: View::Form,
            edit_target: None,
            ..self
        }
    }

    /// Open the form on an existing event.
    pub fn edit_event(self, id: i64) -> Self {
        Self {
            view: View::Form,
            edit_target: Some(id),
            ..self
        }
    }

    /// A write succeeded: back to the list with a confirmation.
    pub fn completed(self, msg: impl Into<String>) -> Self {
        Self {
            view: View::List,
            edit_target: None,
            notice: Some(Notice::Success(msg.into())),
        }
    }

    /// A write failed: stay where we are and report it.
    pub fn failed(self, msg: impl Into<String>) -> Self {
        Self {
            notice: Some(Notice::Failure(msg.into())),
            ..self
        }
    }

    pub fn inform(self, msg: impl Into<String>) -> Self {
        Self {
            notice: Some(Notice::Info(msg.into())),
            ..self
        }
    }

    /// Hand the pending notice out, leaving none behind.
    pub fn take_notice(self) -> (Option<Notice>, Self) {
        let Self {
            view,
            edit_target,
            notice,
        } = self;
        (
            notice,
            Self {
                view,
                edit_target,
                notice: None,
            },
        )
    }
}
