//! Terminal presenter
//!
//! Alerts go to stderr and, on a terminal, wait for an "OK" selection.
//! Greetings are printed as a framed banner on stdout.

use colored::Colorize;
use dialoguer::Select;
use natal::{Alert, AlertKind, Greeting, Presenter};

pub struct TerminalPresenter {
    interactive: bool,
    greetings: bool,
}

impl TerminalPresenter {
    /// `interactive` enables the acknowledgement prompt after alerts
    pub fn new(interactive: bool) -> Self {
        Self {
            interactive,
            greetings: true,
        }
    }

    /// Keep stdout clean, e.g. for JSON output
    pub fn without_greetings(mut self) -> Self {
        self.greetings = false;
        self
    }
}

impl Presenter for TerminalPresenter {
    fn alert(&self, alert: &Alert) {
        let title = format!("{}:", alert.title);
        let title = match alert.kind {
            AlertKind::Error => title.red().bold(),
            AlertKind::Warning => title.yellow().bold(),
            AlertKind::Info => title.cyan().bold(),
        };
        eprintln!("{} {}", title, alert.message);

        if self.interactive {
            let acknowledged = Select::new()
                .with_prompt("Acknowledge")
                .items(&["OK"])
                .default(0)
                .interact();
            if let Err(e) = acknowledged {
                tracing::warn!(error = %e, "Alert acknowledgement prompt failed");
            }
        }
    }

    fn show_greeting(&self, greeting: &Greeting) {
        if !self.greetings {
            tracing::debug!(age = greeting.age, "Greeting suppressed");
            return;
        }
        for line in render_greeting(greeting) {
            println!("{}", line);
        }
    }
}

/// Framed greeting, one entry per output line
pub fn render_greeting(greeting: &Greeting) -> Vec<String> {
    let body = [
        greeting.message(),
        format!("Born {}", greeting.birth_date.format("%B %-d, %Y")),
        format!(
            "{} / Year of the {}",
            greeting.western_zodiac, greeting.chinese_zodiac
        ),
    ];
    let width = body
        .iter()
        .map(|line| line.chars().count())
        .chain(std::iter::once(greeting.title().len()))
        .max()
        .unwrap_or(0);
    let border = format!("+{}+", "-".repeat(width + 2));

    let mut lines = vec![border.clone()];
    lines.push(format!(
        "| {} |",
        pad(greeting.title(), width).magenta().bold()
    ));
    lines.push(format!("| {} |", " ".repeat(width)));
    for line in &body {
        lines.push(format!("| {} |", pad(line, width)));
    }
    lines.push(border);
    lines
}

fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use natal::{AgeBreakdown, ChineseZodiac, WesternZodiac};

    fn greeting() -> Greeting {
        Greeting {
            profile_id: Default::default(),
            birth_date: NaiveDate::from_ymd_opt(1996, 10, 18).unwrap(),
            age: 30,
            age_breakdown: AgeBreakdown {
                years: 30,
                months: 0,
                days: 0,
            },
            western_zodiac: WesternZodiac::Libra,
            chinese_zodiac: ChineseZodiac::Rat,
            zodiac_info: String::new(),
        }
    }

    #[test]
    fn test_render_greeting_is_framed() {
        colored::control::set_override(false);

        let lines = render_greeting(&greeting());

        assert_eq!(lines.first(), lines.last());
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|line| line.chars().count() == width));
        assert!(lines.iter().any(|line| line.contains("Happy 30th birthday!")));
        assert!(lines.iter().any(|line| line.contains("Born October 18, 1996")));
        assert!(lines.iter().any(|line| line.contains("Libra / Year of the Rat")));
    }
}
