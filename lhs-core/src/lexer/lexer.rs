use super::error::{LexicalError, LexicalErrorType};
use super::token::Token;
use crate::utils::prelude::SrcSpan;

pub type Spanned = (u32, Token, u32);
pub type LexResult = std::result::Result<Spanned, LexicalError>;

pub fn str_to_keyword(word: &str) -> Option<Token> {
	Some(match word {
		"let" => Token::Let,
		"const" => Token::Const,
		"func" => Token::Func,

		_ => return None
	})
}

fn char_to_operator(ch: char) -> Option<Token> {
	Some(match ch {
		'+' => Token::Plus,
		'-' => Token::Minus,
		'*' => Token::Asterisk,
		'/' => Token::Slash,
		'%' => Token::Percent,
		'=' => Token::Assign,
		'<' => Token::LessThan,
		'>' => Token::GreaterThan,

		_ => return None
	})
}

/// Tokenizes the whole source. The result always ends with a single `Eof`;
/// the first unrecognized character aborts the run.
pub fn tokenize(src: &str) -> Result<Vec<Spanned>, LexicalError> {
	Lexer::new(src.char_indices().map(|(i, c)| (i as u32, c))).collect()
}

#[derive(Debug)]
pub struct Lexer<T: Iterator<Item = (u32, char)>> {
	position: u32,
	next_position: u32,
	ch: Option<char>,
	next_ch: Option<char>,
	input: T,

	finished: bool,
}

impl<T: Iterator<Item = (u32, char)>> Lexer<T> {
	pub fn new(input: T) -> Self {
		let mut lexer = Self {
			position: 0,
			next_position: 0,
			ch: None,
			next_ch: None,
			input,

			finished: false,
		};

		lexer.next_char();
		lexer.next_char();

		lexer
	}

	pub fn next_token(&mut self) -> LexResult {
		self.skip_whitespace();

		let span = match self.ch {
			Some(ch) => match ch {
				'"' => return self.lex_string(),
				'(' => self.eat_one_char(Token::LParen),
				')' => self.eat_one_char(Token::RParen),
				':' => self.eat_one_char(Token::Colon),
				';' => self.eat_one_char(Token::EndLine),
				'0'..='9' => return self.lex_number(),
				c if c.is_alphabetic() => self.lex_ident(),
				c => match char_to_operator(c) {
					Some(operator) => self.lex_operator(operator),
					None => {
						let location = self.position;
						return Err(LexicalError {
							error: LexicalErrorType::UnrecognizedToken { tok: c },
							location: SrcSpan::from(location, location + c.len_utf8() as u32),
						});
					}
				}
			},
			None => self.eat_one_char(Token::Eof)
		};

		Ok(span)
	}

	fn next_char(&mut self) -> Option<char> {
		let ch = self.ch;

		let next = match self.input.next() {
			Some((pos, ch)) => {
				self.position = self.next_position;
				self.next_position = pos;

				Some(ch)
			},
			None => {
				self.position = self.next_position;
				self.next_position += self.next_ch.map_or(0, |ch| ch.len_utf8() as u32);

				None
			}
		};

		self.ch = self.next_ch;
		self.next_ch = next;

		ch
	}

	fn skip_whitespace(&mut self) {
		while matches!(self.ch, Some(' ' | '\n' | '\t' | '\r')) {
			self.next_char();
		}
	}

	fn eat_one_char(&mut self, token: Token) -> Spanned {
		let start_pos = self.position;
		self.next_char();
		let end_pos = self.position;

		(start_pos, token, end_pos)
	}

	fn lex_operator(&mut self, operator: Token) -> Spanned {
		let (start_pos, operator, end_pos) = self.eat_one_char(operator);

		// The emitted operator is replaced when it forms a two-character
		// operator with the character that directly follows it.
		match self.ch.and_then(|next| operator.compose(next)) {
			Some(composed) => {
				self.next_char();
				(start_pos, composed, self.position)
			},
			None => (start_pos, operator, end_pos)
		}
	}

	fn lex_ident(&mut self) -> Spanned {
		let start_pos = self.position;
		let mut ident = String::new();

		while let Some(ch) = self.ch.filter(|ch| ch.is_alphabetic()) {
			ident.push(ch);
			self.next_char();
		}

		let end_pos = self.position;

		match str_to_keyword(&ident) {
			Some(keyword) => (start_pos, keyword, end_pos),
			None => (start_pos, Token::Ident(ident), end_pos)
		}
	}

	fn lex_number(&mut self) -> LexResult {
		let start_pos = self.position;
		let mut value = String::new();

		self.lex_digits(&mut value);

		if self.ch == Some('.') {
			value.push('.');
			self.next_char();

			if !self.ch.is_some_and(|ch| ch.is_ascii_digit()) {
				return Err(LexicalError {
					error: LexicalErrorType::MissingDigitAfterPeriod,
					location: SrcSpan::from(start_pos, self.position)
				});
			}

			self.lex_digits(&mut value);
		}

		let end_pos = self.position;

		// digit runs always parse, overly long ones saturate to infinity
		let value = value.parse::<f64>().unwrap_or(f64::INFINITY);

		Ok((start_pos, Token::Number(value), end_pos))
	}

	fn lex_digits(&mut self, value: &mut String) {
		while let Some(ch) = self.ch.filter(|ch| ch.is_ascii_digit()) {
			value.push(ch);
			self.next_char();
		}
	}

	fn lex_string(&mut self) -> LexResult {
		let start_pos = self.position;
		let mut value = String::new();

		self.next_char(); // skip opening quote

		loop {
			match (self.ch, self.next_ch) {
				(Some('\\'), Some('"')) => {
					value.push('"');
					self.next_char();
					self.next_char();
				},
				(Some('"'), _) => {
					self.next_char();
					break;
				},
				(Some(ch), _) => {
					value.push(ch);
					self.next_char();
				},
				(None, _) => return Err(LexicalError {
					error: LexicalErrorType::UnterminatedString,
					location: SrcSpan::from(start_pos, self.position)
				})
			}
		}

		let end_pos = self.position;

		Ok((start_pos, Token::String(value), end_pos))
	}
}

impl<T: Iterator<Item = (u32, char)>> Iterator for Lexer<T> {
	type Item = LexResult;

	fn next(&mut self) -> Option<Self::Item> {
		if self.finished {
			return None;
		}

		let token = self.next_token();

		// Eof is yielded once and a lexical error ends the stream.
		self.finished = matches!(token, Ok((_, Token::Eof, _)) | Err(_));

		Some(token)
	}
}
