//! `!remind` command grammar.
//!
//! Case-sensitive, single-space tokenization. Anything that is not one of the
//! three recognised forms parses to [`Command::None`] and produces no reply.

/// A recognised chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `!remind list`
    List,
    /// `!remind delete <id>` — id is taken verbatim, existence is not checked.
    Delete { id: String },
    /// `!remind <time> <message…>` — time token is resolved downstream; the
    /// message is the remaining tokens rejoined with single spaces (may be
    /// empty).
    Create { time_token: String, message: String },
    /// Anything else, including a bare `!remind`.
    None,
}

/// Parse raw trimmed command text.
pub fn parse(text: &str) -> Command {
    if text == "!remind list" {
        return Command::List;
    }
    if let Some(rest) = text.strip_prefix("!remind delete ") {
        let id = rest.split(' ').next().unwrap_or_default();
        return Command::Delete { id: id.to_string() };
    }
    if let Some(rest) = text.strip_prefix("!remind ") {
        let mut tokens = rest.split(' ');
        let Some(time_token) = tokens.next().filter(|t| !t.is_empty()) else {
            return Command::None;
        };
        let message = tokens.collect::<Vec<_>>().join(" ");
        return Command::Create {
            time_token: time_token.to_string(),
            message,
        };
    }
    Command::None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_is_exact_match() {
        assert_eq!(parse("!remind list"), Command::List);
        // Trailing content turns it into a create with time token "list".
        assert_eq!(
            parse("!remind list extra"),
            Command::Create {
                time_token: "list".into(),
                message: "extra".into()
            }
        );
    }

    #[test]
    fn delete_takes_third_token() {
        assert_eq!(
            parse("!remind delete 12345"),
            Command::Delete { id: "12345".into() }
        );
        assert_eq!(
            parse("!remind delete 12345 trailing"),
            Command::Delete { id: "12345".into() }
        );
    }

    #[test]
    fn create_splits_time_and_message() {
        assert_eq!(
            parse("!remind 10分後 buy milk"),
            Command::Create {
                time_token: "10分後".into(),
                message: "buy milk".into()
            }
        );
    }

    #[test]
    fn create_message_may_be_empty() {
        assert_eq!(
            parse("!remind 10分後"),
            Command::Create {
                time_token: "10分後".into(),
                message: String::new()
            }
        );
    }

    #[test]
    fn unrecognised_text_is_none() {
        assert_eq!(parse("hello"), Command::None);
        assert_eq!(parse("!remind"), Command::None);
        assert_eq!(parse("!remindlist"), Command::None);
        assert_eq!(parse(""), Command::None);
    }
}
