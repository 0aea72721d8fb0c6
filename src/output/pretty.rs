use colored::Colorize;

use crate::parse::{Classification, FieldRef, Statement, Token, TokenKind, Verdict};

/// Format a parsed statement as a labelled list
pub fn format_statement_pretty(stmt: &Statement) -> String {
    if stmt.is_empty() {
        return format!("Standup (0 fields)\n  {}", "Nothing recognised".dimmed());
    }

    let set = stmt.fields().iter().filter(|(_, f)| f.is_set()).count();
    let mut output = format!("Standup ({set} fields)\n");
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for (name, field) in stmt.fields() {
        let icon = if !field.is_set() {
            "[ ]".dimmed()
        } else if field.is_valid() {
            "[x]".green()
        } else {
            "[?]".yellow()
        };

        let label = format!("{name:<10}");
        let mut line = format!("{icon} {}", label.bold());
        // "[x] " ahead of the label
        let mut width = 4 + label.chars().count();

        match field {
            FieldRef::Text(f) => {
                if !f.key.is_empty() {
                    line.push_str(&format!("{}  ", f.key.dimmed()));
                    width += f.key.chars().count() + 2;
                }
                line.push_str(&indent_continuation(&f.val, width));
            },
            FieldRef::Flag(f) if f.is_set() => {
                if !f.key.is_empty() {
                    line.push_str(&format!("{}  ", f.key.dimmed()));
                }
                let answer = if f.val { "yes".green() } else { "no".red() };
                line.push_str(&format!("{answer}  ({})", f.lit));
            },
            FieldRef::Flag(_) => {},
        }

        output.push_str(line.trim_end());
        output.push('\n');
    }

    let review = stmt.needs_review();
    if !review.is_empty() {
        output.push_str(&format!(
            "{} {}\n",
            "Needs review:".yellow().bold(),
            review.join(", ")
        ));
    }

    output
}

/// Format a token stream, one token per line
pub fn format_tokens_pretty(tokens: &[Token]) -> String {
    let mut output = format!("Tokens ({} items)\n", tokens.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for token in tokens {
        let kind = format!("{:<14}", token.kind.to_string());
        let kind = if token.kind.is_keyword() {
            kind.cyan().bold()
        } else if token.kind == TokenKind::Word {
            kind.normal()
        } else {
            kind.dimmed()
        };
        output.push_str(&format!("{kind} {:?}\n", token.literal));
    }

    output
}

/// Format the outcome of boolean inference
pub fn format_classification_pretty(text: &str, classification: &Classification) -> String {
    let answer = if classification.value {
        "yes".green().bold()
    } else {
        "no".red().bold()
    };
    let verdict = match classification.verdict {
        Verdict::Clear => "clear".green(),
        Verdict::Ambiguous => "ambiguous".yellow(),
        Verdict::Unclear => "unclear".yellow(),
    };
    format!("{text:?} -> {answer} ({verdict})")
}

/// Indent every line after the first by `width` so values line up under the first
fn indent_continuation(val: &str, width: usize) -> String {
    val.replace('\n', &format!("\n{}", " ".repeat(width)))
}
