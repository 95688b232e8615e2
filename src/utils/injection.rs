//! Heuristic detection of SQL statements hidden in free-text fields.
//!
//! The input is tokenized, split into statements on `;`, and each statement is
//! classified by its leading keyword. Text that merely contains SQL words
//! somewhere in the middle is not flagged, but text that *starts* like a
//! statement is, even if a human meant it as prose.

use crate::error::{Error, Result};

const DML_KEYWORDS: &[&str] = &[
    "SELECT", "INSERT", "UPDATE", "DELETE", "UPSERT", "REPLACE", "MERGE",
];
const DDL_KEYWORDS: &[&str] = &["CREATE", "ALTER", "DROP", "TRUNCATE"];

/// Records whose text fields are screened before they reach storage.
pub trait StringFields {
    fn string_fields(&self) -> Vec<(&'static str, &str)>;
}

pub fn detect_sql_injection<T: StringFields + ?Sized>(record: &T) -> Result<()> {
    for (field, value) in record.string_fields() {
        if is_suspicious_input(value) {
            tracing::warn!(field, "rejected input resembling a SQL statement");
            return Err(Error::InjectionDetected { field });
        }
    }
    Ok(())
}

pub fn is_suspicious_input(text: &str) -> bool {
    let tokens = tokenize(text);
    tokens
        .split(|t| *t == Token::Semicolon)
        .any(|statement| statement_type(statement).is_some())
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Word(String),
    Semicolon,
    OpenParen,
    CloseParen,
    Other,
}

fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            c if c.is_whitespace() => i += 1,
            '-' if chars.get(i + 1) == Some(&'-') => {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
            }
            '/' if chars.get(i + 1) == Some(&'*') => {
                i += 2;
                while i < chars.len() && !(chars[i] == '*' && chars.get(i + 1) == Some(&'/')) {
                    i += 1;
                }
                i = (i + 2).min(chars.len());
            }
            '\'' | '"' | '`' => {
                // Unterminated quotes are a single stray token.
                match chars[i + 1..].iter().position(|&ch| ch == c) {
                    Some(len) => i += len + 2,
                    None => i += 1,
                }
                tokens.push(Token::Other);
            }
            ';' => {
                tokens.push(Token::Semicolon);
                i += 1;
            }
            '(' => {
                tokens.push(Token::OpenParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::CloseParen);
                i += 1;
            }
            c if c.is_alphanumeric() || c == '_' => {
                let start = i;
                while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_' || chars[i] == '$') {
                    i += 1;
                }
                tokens.push(Token::Word(chars[start..i].iter().collect()));
            }
            _ => {
                tokens.push(Token::Other);
                i += 1;
            }
        }
    }

    tokens
}

fn keyword(token: &Token) -> Option<String> {
    match token {
        Token::Word(word) => Some(word.to_ascii_uppercase()),
        _ => None,
    }
}

fn statement_type(statement: &[Token]) -> Option<String> {
    let first = keyword(statement.first()?)?;
    if DML_KEYWORDS.contains(&first.as_str()) || DDL_KEYWORDS.contains(&first.as_str()) {
        return Some(first);
    }
    if first != "WITH" {
        return None;
    }

    // A CTE is typed by the first DML keyword outside its parenthesised bodies.
    let mut depth = 0usize;
    for token in &statement[1..] {
        match token {
            Token::OpenParen => depth += 1,
            Token::CloseParen => depth = depth.saturating_sub(1),
            Token::Word(_) if depth == 0 => {
                if let Some(word) = keyword(token).filter(|w| DML_KEYWORDS.contains(&w.as_str())) {
                    return Some(word);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Record<'a>(Vec<(&'static str, &'a str)>);

    impl StringFields for Record<'_> {
        fn string_fields(&self) -> Vec<(&'static str, &str)> {
            self.0.clone()
        }
    }

    #[test]
    fn flags_statements() {
        assert!(is_suspicious_input("DROP TABLE x"));
        assert!(is_suspicious_input("'; DROP TABLE users; --"));
        assert!(is_suspicious_input("select * from vacancy"));
        assert!(is_suspicious_input("1; delete from vacancy"));
        assert!(is_suspicious_input("/* hi */ INSERT INTO t VALUES (1)"));
        assert!(is_suspicious_input("WITH t AS (SELECT 1) DELETE FROM vacancy"));
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert!(!is_suspicious_input("Test"));
        assert!(!is_suspicious_input("Senior backend developer, Rust and Postgres"));
        assert!(!is_suspicious_input("Please update the team about the drop in hiring"));
        assert!(!is_suspicious_input("drop_table"));
        assert!(!is_suspicious_input("'DROP TABLE x'"));
        assert!(!is_suspicious_input(""));
    }

    #[test]
    fn reports_the_offending_field() {
        let record = Record(vec![("description", "Analyst"), ("notes", "DROP TABLE x")]);
        match detect_sql_injection(&record) {
            Err(Error::InjectionDetected { field }) => assert_eq!(field, "notes"),
            other => panic!("unexpected result {other:?}"),
        }
        assert!(detect_sql_injection(&Record(vec![("sector", "IT")])).is_ok());
    }
}
