//! Quote data shown by the demo

/// One quote row: who said it and what they said
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub author: String,
    pub text: String,
}

impl Quote {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
        }
    }

    /// Parse an `author|quote` line. Blank lines and `#` comments yield `None`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        match line.split_once('|') {
            Some((author, text)) => Some(Self::new(author.trim(), text.trim())),
            None => Some(Self::new("Unknown", line)),
        }
    }
}

/// Quotes used when no file is given
pub fn builtin() -> Vec<Quote> {
    vec![
        Quote::new(
            "Edsger Dijkstra",
            "If debugging is the process of removing software bugs, then programming must be \
             the process of putting them in.",
        ),
        Quote::new(
            "Linus Torvalds",
            "Most good programmers do programming not because they expect to get paid or get \
             adulation by the public, but because it is fun to program.",
        ),
        Quote::new("Chris Heilmann", "Java is to JavaScript what Car is to Carpet."),
        Quote::new(
            "Edward V Berard",
            "Walking on water and developing software from a specification are easy if both \
             are frozen.",
        ),
        Quote::new(
            "Brian Kernighan",
            "Debugging is twice as hard as writing the code in the first place. Therefore, if \
             you write the code as cleverly as possible, you are, by definition, not smart \
             enough to debug it.",
        ),
        Quote::new(
            "Rick Osborne",
            "Always code as if the guy who ends up maintaining your code will be a violent \
             psychopath who knows where you live.",
        ),
        Quote::new("Nathan Myhrvold", "Software sucks because users demand it to."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        assert_eq!(
            Quote::parse_line("Ada Lovelace | The engine weaves patterns."),
            Some(Quote::new("Ada Lovelace", "The engine weaves patterns."))
        );
        assert_eq!(
            Quote::parse_line("no author here"),
            Some(Quote::new("Unknown", "no author here"))
        );
        assert_eq!(Quote::parse_line("   "), None);
        assert_eq!(Quote::parse_line("# comment"), None);
    }
}
