#![forbid(unsafe_code)]

//! Rendering surface for a radio group.
//!
//! The controller never builds nodes itself; it drives a [`ChoiceSurface`]
//! that owns one label, one message region, one ordered list of choices, and
//! a set of marker classes on the root. [`HeadlessSurface`] keeps all of that
//! in memory and can print itself as text.
//!
//! # Failure Modes
//!
//! | Scenario | Behavior |
//! |----------|----------|
//! | No label hook | `set_label` is ignored |
//! | No message region | message updates and valid/invalid classes are skipped |
//! | Out-of-range choice index | `set_checked` is ignored |

/// One rendered (input, label) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedChoice {
    /// Unique input id; the label's `for` target.
    pub id: String,
    /// Group name shared by every input of the control.
    pub name: String,
    /// Input value token.
    pub token: String,
    /// Label text.
    pub text: String,
    pub checked: bool,
}

/// What a radio group needs from whatever displays it.
pub trait ChoiceSurface {
    fn set_label(&mut self, text: &str);

    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
    fn has_class(&self, class: &str) -> bool;

    /// Whether a message region exists at all.
    fn has_message_region(&self) -> bool {
        true
    }
    fn show_message(&mut self, text: &str);
    fn hide_message(&mut self);

    fn clear_choices(&mut self);
    fn append_choice(&mut self, choice: RenderedChoice);
    fn choices(&self) -> &[RenderedChoice];
    fn set_checked(&mut self, index: usize, checked: bool);

    /// Take the root out of its parent.
    fn detach(&mut self);
}

/// In-memory surface.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    label_hook: bool,
    message_hook: bool,
    label: String,
    message: Option<String>,
    classes: Vec<String>,
    choices: Vec<RenderedChoice>,
    attached: bool,
    rebuilds: usize,
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessSurface {
    /// Surface with a label and a message region.
    #[must_use]
    pub fn new() -> Self {
        Self {
            label_hook: true,
            message_hook: true,
            label: String::new(),
            message: None,
            classes: Vec::new(),
            choices: Vec::new(),
            attached: true,
            rebuilds: 0,
        }
    }

    /// Surface with neither a label nor a message region.
    #[must_use]
    pub fn bare() -> Self {
        Self {
            label_hook: false,
            message_hook: false,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Visible message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// How many times the choice list was rebuilt.
    #[must_use]
    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }

    #[must_use]
    pub fn checked(&self) -> Option<&RenderedChoice> {
        self.choices.iter().find(|c| c.checked)
    }

    /// Text rendering: label, optional `! message`, then one line per choice.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.choices.len() + 2);
        if self.label_hook {
            out.push(self.label.clone());
        }
        if let Some(msg) = &self.message {
            out.push(format!("! {msg}"));
        }
        out.extend(self.choices.iter().map(|c| {
            let mark = if c.checked { "(x)" } else { "( )" };
            format!("{mark} {}", c.text)
        }));
        out
    }
}

impl ChoiceSurface for HeadlessSurface {
    fn set_label(&mut self, text: &str) {
        if self.label_hook {
            self.label = text.to_string();
        }
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn has_message_region(&self) -> bool {
        self.message_hook
    }

    fn show_message(&mut self, text: &str) {
        if self.message_hook {
            self.message = Some(text.to_string());
        }
    }

    fn hide_message(&mut self) {
        self.message = None;
    }

    fn clear_choices(&mut self) {
        self.choices.clear();
        self.rebuilds += 1;
    }

    fn append_choice(&mut self, choice: RenderedChoice) {
        self.choices.push(choice);
    }

    fn choices(&self) -> &[RenderedChoice] {
        &self.choices
    }

    fn set_checked(&mut self, index: usize, checked: bool) {
        if let Some(choice) = self.choices.get_mut(index) {
            choice.checked = checked;
        }
    }

    fn detach(&mut self) {
        self.attached = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice(token: &str, checked: bool) -> RenderedChoice {
        RenderedChoice {
            id: format!("g_{token}1"),
            name: "g".into(),
            token: token.into(),
            text: token.to_uppercase(),
            checked,
        }
    }

    #[test]
    fn classes_are_a_set() {
        let mut s = HeadlessSurface::new();
        s.add_class("a");
        s.add_class("a");
        s.add_class("b");
        assert_eq!(s.classes(), ["a", "b"]);
        s.remove_class("a");
        assert!(!s.has_class("a"));
    }

    #[test]
    fn lines_render_marks() {
        let mut s = HeadlessSurface::new();
        s.set_label("Size");
        s.append_choice(choice("s", false));
        s.append_choice(choice("m", true));
        s.show_message("oops");
        assert_eq!(s.lines(), ["Size", "! oops", "( ) S", "(x) M"]);
    }

    #[test]
    fn bare_surface_skips_hooks() {
        let mut s = HeadlessSurface::bare();
        s.set_label("Size");
        s.show_message("oops");
        assert!(!s.has_message_region());
        assert_eq!(s.label(), "");
        assert_eq!(s.message(), None);
        assert!(s.lines().is_empty());
    }

    #[test]
    fn set_checked_out_of_range_is_ignored() {
        let mut s = HeadlessSurface::new();
        s.append_choice(choice("s", false));
        s.set_checked(5, true);
        assert!(s.checked().is_none());
    }

    #[test]
    fn clear_counts_rebuilds() {
        let mut s = HeadlessSurface::new();
        s.clear_choices();
        s.clear_choices();
        assert_eq!(s.rebuilds(), 2);
        s.detach();
        assert!(!s.is_attached());
    }
}
