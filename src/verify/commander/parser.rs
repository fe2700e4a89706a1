//! Robot script parser
//!
//! Tokenizes and parses the JS-flavored robot scripts into [`Stmt`] lists.
//! The grammar is intentionally tiny: call statements, counted `for`
//! loops in the `for (let i = 0; i < N; i++)` shape the hints teach, and
//! `if`/`else` with a `hasObstacle("dir")` condition.

use super::ScriptError;

/// A parsed statement
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A function call such as `moveRight()` or `console.log("hi")`
    Call {
        name: String,
        arg: Option<String>,
        line: usize,
    },
    /// A counted loop; the counter variable itself is not observable
    Repeat { count: u32, body: Vec<Stmt> },
    /// Conditional on the obstacle predicate
    If {
        negated: bool,
        direction: String,
        line: usize,
        then_body: Vec<Stmt>,
        else_body: Vec<Stmt>,
    },
}

#[derive(Debug, Clone, PartialEq)]
enum Tok {
    Ident(String),
    Number(i64),
    Str(String),
    LParen,
    RParen,
    LBrace,
    RBrace,
    Semi,
    Lt,
    LtEq,
    Assign,
    PlusPlus,
    Bang,
    Dot,
}

struct Token {
    tok: Tok,
    line: usize,
}

fn err(line: usize, message: impl Into<String>) -> ScriptError {
    ScriptError::Parse {
        line,
        message: message.into(),
    }
}

fn tokenize(source: &str) -> Result<Vec<Token>, ScriptError> {
    let mut tokens = Vec::new();
    let mut chars = source.chars().peekable();
    let mut line = 1;

    while let Some(&c) = chars.peek() {
        match c {
            '\n' => {
                line += 1;
                chars.next();
            }
            c if c.is_whitespace() => {
                chars.next();
            }
            '/' => {
                chars.next();
                if chars.peek() == Some(&'/') {
                    // Line comment: skip to end of line
                    for c in chars.by_ref() {
                        if c == '\n' {
                            line += 1;
                            break;
                        }
                    }
                } else {
                    return Err(err(line, "unexpected '/'"));
                }
            }
            '"' | '\'' => {
                let quote = c;
                chars.next();
                let mut s = String::new();
                loop {
                    match chars.next() {
                        Some(c) if c == quote => break,
                        Some('\n') | None => return Err(err(line, "unterminated string")),
                        Some(c) => s.push(c),
                    }
                }
                tokens.push(Token {
                    tok: Tok::Str(s),
                    line,
                });
            }
            '(' => {
                chars.next();
                tokens.push(Token {
                    tok: Tok::LParen,
                    line,
                });
            }
            ')' => {
                chars.next();
                tokens.push(Token {
                    tok: Tok::RParen,
                    line,
                });
            }
            '{' => {
                chars.next();
                tokens.push(Token {
                    tok: Tok::LBrace,
                    line,
                });
            }
            '}' => {
                chars.next();
                tokens.push(Token {
                    tok: Tok::RBrace,
                    line,
                });
            }
            ';' => {
                chars.next();
                tokens.push(Token {
                    tok: Tok::Semi,
                    line,
                });
            }
            '.' => {
                chars.next();
                tokens.push(Token {
                    tok: Tok::Dot,
                    line,
                });
            }
            '!' => {
                chars.next();
                tokens.push(Token {
                    tok: Tok::Bang,
                    line,
                });
            }
            '<' => {
                chars.next();
                if chars.peek() == Some(&'=') {
                    chars.next();
                    tokens.push(Token {
                        tok: Tok::LtEq,
                        line,
                    });
                } else {
                    tokens.push(Token { tok: Tok::Lt, line });
                }
            }
            '=' => {
                chars.next();
                tokens.push(Token {
                    tok: Tok::Assign,
                    line,
                });
            }
            '+' => {
                chars.next();
                if chars.peek() == Some(&'+') {
                    chars.next();
                    tokens.push(Token {
                        tok: Tok::PlusPlus,
                        line,
                    });
                } else {
                    return Err(err(line, "unexpected '+'"));
                }
            }
            c if c.is_ascii_digit() => {
                let mut n = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_digit() {
                        n.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value = n.parse().map_err(|_| err(line, "invalid number"))?;
                tokens.push(Token {
                    tok: Tok::Number(value),
                    line,
                });
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut ident = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_alphanumeric() || d == '_' {
                        ident.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token {
                    tok: Tok::Ident(ident),
                    line,
                });
            }
            c => return Err(err(line, format!("unexpected character '{}'", c))),
        }
    }

    Ok(tokens)
}

/// Parse a robot script into a statement list
///
/// Accepts either bare statements or the `function runRobot() { ... }`
/// wrapper the editor pre-fills; with the wrapper, only the function body
/// is executed.
pub fn parse(source: &str) -> Result<Vec<Stmt>, ScriptError> {
    let tokens = tokenize(source)?;
    let mut parser = Parser { tokens, pos: 0 };

    // Unwrap `function runRobot() { ... }` if present
    if let Some(Tok::Ident(kw)) = parser.peek() {
        if kw == "function" {
            parser.advance();
            parser.expect_ident()?;
            parser.expect(&Tok::LParen)?;
            parser.expect(&Tok::RParen)?;
            parser.expect(&Tok::LBrace)?;
            let body = parser.parse_stmts_until_brace()?;
            // Anything after the wrapper (e.g. a trailing `runRobot();`)
            // is tolerated and ignored.
            return Ok(body);
        }
    }

    let mut stmts = Vec::new();
    while parser.peek().is_some() {
        if parser.peek() == Some(&Tok::Semi) {
            parser.advance();
            continue;
        }
        stmts.push(parser.parse_stmt()?);
    }
    Ok(stmts)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Tok> {
        self.tokens.get(self.pos).map(|t| &t.tok)
    }

    fn line(&self) -> usize {
        self.tokens
            .get(self.pos.min(self.tokens.len().saturating_sub(1)))
            .map(|t| t.line)
            .unwrap_or(1)
    }

    fn advance(&mut self) -> Option<&Tok> {
        let tok = self.tokens.get(self.pos).map(|t| &t.tok);
        self.pos += 1;
        tok
    }

    fn expect(&mut self, expected: &Tok) -> Result<(), ScriptError> {
        let line = self.line();
        match self.advance() {
            Some(tok) if tok == expected => Ok(()),
            _ => Err(err(line, format!("expected {:?}", expected))),
        }
    }

    fn expect_ident(&mut self) -> Result<String, ScriptError> {
        let line = self.line();
        match self.advance() {
            Some(Tok::Ident(name)) => Ok(name.clone()),
            _ => Err(err(line, "expected an identifier")),
        }
    }

    fn expect_number(&mut self) -> Result<i64, ScriptError> {
        let line = self.line();
        match self.advance() {
            Some(Tok::Number(n)) => Ok(*n),
            _ => Err(err(line, "expected a number")),
        }
    }

    fn expect_string(&mut self) -> Result<String, ScriptError> {
        let line = self.line();
        match self.advance() {
            Some(Tok::Str(s)) => Ok(s.clone()),
            _ => Err(err(line, "expected a quoted string")),
        }
    }

    fn parse_stmts_until_brace(&mut self) -> Result<Vec<Stmt>, ScriptError> {
        let mut stmts = Vec::new();
        loop {
            match self.peek() {
                Some(Tok::RBrace) => {
                    self.advance();
                    return Ok(stmts);
                }
                // Empty statements are no-ops, as in JS
                Some(Tok::Semi) => {
                    self.advance();
                }
                Some(_) => stmts.push(self.parse_stmt()?),
                None => return Err(err(self.line(), "expected '}'")),
            }
        }
    }

    fn parse_block(&mut self) -> Result<Vec<Stmt>, ScriptError> {
        self.expect(&Tok::LBrace)?;
        self.parse_stmts_until_brace()
    }

    fn parse_stmt(&mut self) -> Result<Stmt, ScriptError> {
        let line = self.line();
        match self.peek() {
            Some(Tok::Ident(kw)) if kw == "for" => self.parse_for(),
            Some(Tok::Ident(kw)) if kw == "if" => self.parse_if(),
            Some(Tok::Ident(_)) => self.parse_call(),
            _ => Err(err(line, "expected a statement")),
        }
    }

    /// `for (let i = A; i < B; i++) { ... }`
    fn parse_for(&mut self) -> Result<Stmt, ScriptError> {
        let line = self.line();
        self.advance(); // for
        self.expect(&Tok::LParen)?;

        let decl = self.expect_ident()?;
        if decl != "let" && decl != "var" {
            return Err(err(line, "expected 'let' in for loop"));
        }
        let var = self.expect_ident()?;
        self.expect(&Tok::Assign)?;
        let start = self.expect_number()?;
        self.expect(&Tok::Semi)?;

        let cond_var = self.expect_ident()?;
        if cond_var != var {
            return Err(err(line, "loop condition must test the loop variable"));
        }
        let inclusive = match self.advance() {
            Some(Tok::Lt) => false,
            Some(Tok::LtEq) => true,
            _ => return Err(err(line, "expected '<' in loop condition")),
        };
        let end = self.expect_number()?;
        self.expect(&Tok::Semi)?;

        let inc_var = self.expect_ident()?;
        if inc_var != var {
            return Err(err(line, "loop increment must use the loop variable"));
        }
        self.expect(&Tok::PlusPlus)?;
        self.expect(&Tok::RParen)?;

        let body = self.parse_block()?;
        let count = if inclusive {
            (end - start + 1).max(0) as u32
        } else {
            (end - start).max(0) as u32
        };
        Ok(Stmt::Repeat { count, body })
    }

    /// `if ([!]hasObstacle("dir")) { ... } [else { ... } | else if ...]`
    fn parse_if(&mut self) -> Result<Stmt, ScriptError> {
        let line = self.line();
        self.advance(); // if
        self.expect(&Tok::LParen)?;

        let negated = if self.peek() == Some(&Tok::Bang) {
            self.advance();
            true
        } else {
            false
        };
        let pred = self.expect_ident()?;
        if pred != "hasObstacle" {
            return Err(err(
                line,
                "only hasObstacle(\"dir\") can be used as a condition",
            ));
        }
        self.expect(&Tok::LParen)?;
        let direction = self.expect_string()?;
        self.expect(&Tok::RParen)?;
        self.expect(&Tok::RParen)?;

        let then_body = self.parse_block()?;
        let mut else_body = Vec::new();
        if let Some(Tok::Ident(kw)) = self.peek() {
            if kw == "else" {
                self.advance();
                if let Some(Tok::Ident(kw)) = self.peek() {
                    if kw == "if" {
                        else_body.push(self.parse_if()?);
                        return Ok(Stmt::If {
                            negated,
                            direction,
                            line,
                            then_body,
                            else_body,
                        });
                    }
                }
                else_body = self.parse_block()?;
            }
        }

        Ok(Stmt::If {
            negated,
            direction,
            line,
            then_body,
            else_body,
        })
    }

    /// `name();`, `console.log("msg");`, `hasObstacle("dir");`
    fn parse_call(&mut self) -> Result<Stmt, ScriptError> {
        let line = self.line();
        let mut name = self.expect_ident()?;
        while self.peek() == Some(&Tok::Dot) {
            self.advance();
            let part = self.expect_ident()?;
            name.push('.');
            name.push_str(&part);
        }

        self.expect(&Tok::LParen)?;
        let arg = if let Some(Tok::Str(_)) = self.peek() {
            Some(self.expect_string()?)
        } else {
            None
        };
        self.expect(&Tok::RParen)?;
        if self.peek() == Some(&Tok::Semi) {
            self.advance();
        }

        Ok(Stmt::Call { name, arg, line })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_wrapped_function_body() {
        let stmts = parse("function runRobot() {\n  moveRight();\n}").unwrap();
        assert_eq!(stmts.len(), 1);
        assert!(matches!(&stmts[0], Stmt::Call { name, .. } if name == "moveRight"));
    }

    #[test]
    fn test_parses_for_loop_count() {
        let stmts = parse("for (let i = 0; i < 5; i++) { moveRight(); }").unwrap();
        assert!(matches!(&stmts[0], Stmt::Repeat { count: 5, .. }));

        let stmts = parse("for (let i = 1; i <= 3; i++) { moveDown(); }").unwrap();
        assert!(matches!(&stmts[0], Stmt::Repeat { count: 3, .. }));
    }

    #[test]
    fn test_parses_if_else() {
        let stmts =
            parse("if (hasObstacle(\"right\")) { moveDown(); } else { moveRight(); }").unwrap();
        match &stmts[0] {
            Stmt::If {
                negated,
                direction,
                then_body,
                else_body,
                ..
            } => {
                assert!(!negated);
                assert_eq!(direction, "right");
                assert_eq!(then_body.len(), 1);
                assert_eq!(else_body.len(), 1);
            }
            other => panic!("unexpected stmt: {:?}", other),
        }
    }

    #[test]
    fn test_comments_and_single_quotes() {
        let stmts = parse("// a comment\nconsole.log('hi');").unwrap();
        assert!(matches!(
            &stmts[0],
            Stmt::Call { name, arg: Some(a), .. } if name == "console.log" && a == "hi"
        ));
    }

    #[test]
    fn test_stray_semicolons_are_no_ops() {
        let stmts = parse("moveRight();;\n;moveLeft();").unwrap();
        assert_eq!(stmts.len(), 2);

        let stmts = parse("function runRobot() {\n  moveRight();;\n  ;\n}").unwrap();
        assert_eq!(stmts.len(), 1);
    }

    #[test]
    fn test_mismatched_loop_variable_rejected() {
        let result = parse("for (let i = 0; j < 5; i++) { moveRight(); }");
        assert!(matches!(result, Err(ScriptError::Parse { .. })));
    }

    #[test]
    fn test_reports_line_numbers() {
        let result = parse("moveRight();\nmoveLeft(");
        match result {
            Err(ScriptError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
