//! Transient notification state consumed by the toast component.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Severity icon shown next to a toast message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastIcon {
    #[default]
    Success,
    Error,
}

impl ToastIcon {
    /// Glyph rendered for the icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Success => "✔",
            Self::Error => "⚠",
        }
    }

    /// CSS modifier class for the icon.
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast__icon--success",
            Self::Error => "toast__icon--error",
        }
    }
}

/// Last notification produced by a submission attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub icon: ToastIcon,
    pub message: String,
}

impl ToastState {
    pub fn set_icon(&mut self, icon: ToastIcon) {
        self.icon = icon;
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Replace icon and message together.
    pub fn show(&mut self, icon: ToastIcon, message: impl Into<String>) {
        self.set_icon(icon);
        self.set_message(message);
    }

    pub fn dismiss(&mut self) {
        self.message.clear();
    }

    pub fn is_visible(&self) -> bool {
        !self.message.is_empty()
    }
}
