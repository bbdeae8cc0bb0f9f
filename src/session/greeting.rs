use super::*;

/// Opening frame from the connecting side: a word and a number.
/// The listening side reads it and otherwise ignores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub token: String,
    pub number: u64,
}

impl Greeting {
    pub fn new(token: &str, number: u64) -> Self {
        Self {
            token: token.to_string(),
            number,
        }
    }
}

impl std::str::FromStr for Greeting {
    type Err = SessionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || SessionError::Malformed(s.to_string());
        let mut fields = s.split_whitespace();
        let token = fields.next().ok_or_else(malformed)?;
        let number = fields
            .next()
            .and_then(|n| n.parse().ok())
            .ok_or_else(malformed)?;
        match fields.next() {
            Some(_) => Err(malformed()),
            None => Ok(Self::new(token, number)),
        }
    }
}

impl std::fmt::Display for Greeting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.token, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_greeting() {
        let greeting = "hello 3".parse::<Greeting>().unwrap();
        assert_eq!(greeting, Greeting::new("hello", 3));
        assert_eq!(greeting.to_string(), "hello 3");
    }
    #[test]
    fn tolerate_spacing() {
        let greeting = "  hi\t7 ".parse::<Greeting>().unwrap();
        assert_eq!(greeting, Greeting::new("hi", 7));
    }
    #[test]
    fn reject_malformed() {
        assert!(matches!("".parse::<Greeting>(), Err(SessionError::Malformed(_))));
        assert!(matches!("hello".parse::<Greeting>(), Err(SessionError::Malformed(_))));
        assert!(matches!("hello x".parse::<Greeting>(), Err(SessionError::Malformed(_))));
        assert!(matches!("hello -1".parse::<Greeting>(), Err(SessionError::Malformed(_))));
        assert!(matches!("hello 1 2".parse::<Greeting>(), Err(SessionError::Malformed(_))));
    }
}
