use std::fmt;

use substring::Substring;

/// Represents a literal value in the language.
#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    String(String),
    Number(f64),
    Bool(bool),
    Null,
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(String::from(s))
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::String(s)
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Number(n)
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Bool(b)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "{s}"),
            Literal::Number(n) => {
                // A number whose textual form ends in ".0" prints as an integer.
                let text = format!("{n:?}");
                if text.ends_with(".0") {
                    write!(f, "{}", text.substring(0, text.len() - 2))
                } else {
                    write!(f, "{text}")
                }
            },
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Null => write!(f, "null"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_whole_number_without_fraction() {
        assert_eq!(Literal::Number(7.0).to_string(), "7");
        assert_eq!(Literal::Number(-12.0).to_string(), "-12");
        assert_eq!(Literal::Number(0.0).to_string(), "0");
    }

    #[test]
    fn display_fractional_number() {
        assert_eq!(Literal::Number(2.5).to_string(), "2.5");
        assert_eq!(Literal::Number(0.125).to_string(), "0.125");
    }

    #[test]
    fn display_null_and_bools() {
        assert_eq!(Literal::Null.to_string(), "null");
        assert_eq!(Literal::Bool(true).to_string(), "true");
        assert_eq!(Literal::Bool(false).to_string(), "false");
    }

    #[test]
    fn display_string_verbatim() {
        assert_eq!(Literal::from("hello").to_string(), "hello");
    }
}
