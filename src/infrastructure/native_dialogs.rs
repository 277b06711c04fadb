// SPDX-License-Identifier: MPL-2.0
//! Blocking native message boxes.
//!
//! Used when the wired [`DialogHost`](crate::application::port::dialog::DialogHost)
//! reports no modal capability: `alert` and `confirm` degrade to the
//! operating system's own message boxes instead of failing outright.

use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// Shows a native acknowledgment box and blocks until it is closed.
pub fn blocking_alert(title: &str, content: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(title)
        .set_description(content)
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Shows a native yes/no box and blocks until the user chooses.
///
/// Closing the box without an explicit choice yields `None`.
pub fn blocking_confirm(title: &str, content: &str) -> Option<bool> {
    let result = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(title)
        .set_description(content)
        .set_buttons(MessageButtons::YesNo)
        .show();
    choice_from(result)
}

fn choice_from(result: MessageDialogResult) -> Option<bool> {
    match result {
        MessageDialogResult::Yes => Some(true),
        MessageDialogResult::No => Some(false),
        MessageDialogResult::Ok | MessageDialogResult::Cancel | MessageDialogResult::Custom(_) => {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_and_no_map_to_choices() {
        assert_eq!(choice_from(MessageDialogResult::Yes), Some(true));
        assert_eq!(choice_from(MessageDialogResult::No), Some(false));
    }

    #[test]
    fn anything_else_counts_as_dismissal() {
        assert_eq!(choice_from(MessageDialogResult::Ok), None);
        assert_eq!(choice_from(MessageDialogResult::Cancel), None);
        assert_eq!(
            choice_from(MessageDialogResult::Custom("later".to_string())),
            None
        );
    }
}
