use dioxus::prelude::*;
use crate::constants::*;
use crate::utils::parse_f64_input;

/// Result of leaving a time input.
#[derive(Debug, Clone, PartialEq)]
struct TimeCommit {
    /// Value to send upward, if the edit changes what is displayed.
    value: Option<f64>,
    /// Text to show until the prop reports the accepted value.
    display: String,
}

fn format_time_input(value: f64) -> String {
    format!("{:.3}", value)
}

/// Rounds to the three decimals the field displays.
fn display_precision(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Decide what a blur or Enter commits. The field always falls back to the
/// current prop, so a rejected edit never lingers in the input.
fn commit_time_input(text: &str, current: f64) -> TimeCommit {
    let parsed = parse_f64_input(text, current);
    let changed = display_precision(parsed) != display_precision(current);
    TimeCommit {
        value: changed.then_some(parsed),
        display: format_time_input(current),
    }
}

/// Seconds input that commits on blur or Enter. Unparseable text reverts to
/// the current value.
#[component]
pub fn TimeField(
    label: &'static str,
    value: f64,
    on_commit: EventHandler<f64>,
    on_focus_change: EventHandler<bool>,
) -> Element {
    let mut text = use_signal(|| format_time_input(value));

    // Re-sync when the value changes upstream.
    use_effect(use_reactive!(|value| {
        text.set(format_time_input(value));
    }));

    let make_commit = || {
        let mut text = text.clone();
        let on_commit = on_commit.clone();
        move || {
            let commit = commit_time_input(&text(), value);
            text.set(commit.display);
            if let Some(parsed) = commit.value {
                on_commit.call(parsed);
            }
        }
    };

    let mut commit_on_blur = make_commit();
    let mut commit_on_key = make_commit();

    let on_blur = move |_| {
        commit_on_blur();
        on_focus_change.call(false);
    };

    let on_keydown = move |e: KeyboardEvent| {
        if e.key() == Key::Enter {
            commit_on_key();
        }
    };

    let text_value = text();

    rsx! {
        label {
            style: "display: flex; align-items: center; gap: 4px; min-width: 0;",
            span { style: "font-size: 10px; color: {TEXT_MUTED};", "{label}" }
            input {
                r#type: "number",
                step: "0.1",
                min: "0",
                value: "{text_value}",
                style: "
                    width: 72px; box-sizing: border-box;
                    padding: 2px 6px; font-size: 11px;
                    font-family: 'SF Mono', Consolas, monospace;
                    background-color: {BG_SURFACE}; color: {TEXT_SECONDARY};
                    border: 1px solid {BORDER_DEFAULT}; border-radius: 4px;
                    outline: none;
                    user-select: text;
                ",
                onclick: move |e| e.stop_propagation(),
                oninput: move |e| text.set(e.value()),
                onfocus: move |_| on_focus_change.call(true),
                onblur: on_blur,
                onkeydown: on_keydown,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_field_does_not_commit() {
        let commit = commit_time_input(&format_time_input(1.23456), 1.23456);
        assert_eq!(commit.value, None);
        assert_eq!(commit.display, "1.235");
    }

    #[test]
    fn test_edit_commits_and_shows_current_until_accepted() {
        // End = 1 on a [3, 5] subtitle: the edit goes upward, but the field
        // keeps showing 5 unless the new value comes back as the prop.
        let commit = commit_time_input("1", 5.0);
        assert_eq!(commit.value, Some(1.0));
        assert_eq!(commit.display, "5.000");
    }

    #[test]
    fn test_unparseable_text_reverts() {
        let commit = commit_time_input("abc", 2.5);
        assert_eq!(commit.value, None);
        assert_eq!(commit.display, "2.500");
    }
}
