use crate::session::Session;
use automotion_common::Driver;
use regex::Regex;
use std::sync::OnceLock;

fn hex_color() -> &'static Regex {
    static HEX: OnceLock<Regex> = OnceLock::new();
    HEX.get_or_init(|| {
        Regex::new(r"^#(?:[0-9a-fA-F]{2})?[0-9a-fA-F]{6}$").expect("hex colour pattern is valid")
    })
}

/// Rewrite a hex colour into the form computed styles report.
///
/// `#RRGGBB` becomes `rgb(r, g, b)` and `#AARRGGBB` becomes
/// `rgba(r, g, b, a)` with alpha as a fraction. Anything else is returned
/// unchanged.
pub fn css_color(value: &str) -> String {
    if !hex_color().is_match(value) {
        return value.to_string();
    }

    let channel = |i: usize| u8::from_str_radix(&value[i..i + 2], 16).unwrap_or(0);
    if value.len() == 7 {
        format!("rgb({}, {}, {})", channel(1), channel(3), channel(5))
    } else {
        let alpha = format!("{:.2}", f64::from(channel(1)) / 255.0);
        let alpha = alpha.trim_end_matches('0').trim_end_matches('.');
        format!("rgba({}, {}, {}, {})", channel(3), channel(5), channel(7), alpha)
    }
}

impl<'d, D: Driver> Session<'d, D> {
    /// Every value is (`expected`) or is not found in the root's computed
    /// value for `property`
    pub(crate) fn check_css(&mut self, property: &str, values: &[&str], expected: bool) {
        let Some(root) = self.target().root().cloned() else {
            return;
        };
        let actual = match self.driver().css_value(&root, property) {
            Ok(actual) => actual,
            Err(e) => {
                self.read_failed(e);
                return;
            }
        };

        if actual.is_empty() {
            let message = format!(
                "Element '{}' does not have css property '{}'",
                self.root_name(),
                property
            );
            self.log_mut().push(message);
            return;
        }

        for value in values {
            let value = css_color(value);
            let found = actual.contains(value.as_str());
            if found && !expected {
                self.log_mut().push(format!(
                    "CSS property '{}' should not contain value '{}'. Actual value is '{}'",
                    property, value, actual
                ));
            } else if !found && expected {
                self.log_mut().push(format!(
                    "Expected value of '{}' is '{}'. Actual value is '{}'",
                    property, value, actual
                ));
            }
        }
    }
}
