use std::io::Write;

use lhs_core::lexer::prelude::{Lexer, Token};

const PROMPT: &str = ">> ";

pub fn start() -> std::io::Result<()> {
	crate::cli::handle_interrupt("rlpl");

	let stdin = std::io::stdin();

	loop {
		let mut input = String::from("");

		print!("{}", PROMPT);
		std::io::stdout().flush()?;

		if stdin.read_line(&mut input)? == 0 {
			return Ok(());
		}

		let input = input.trim_end_matches(['\n', '\r']);

		match input {
			"" => {},
			".exit" => return Ok(()),
			_ => {
				let lexer = Lexer::new(input.char_indices().map(|(i, c)| (i as u32, c)));

				for res in lexer {
					match res {
						Ok((start, token, end)) => {
							println!("{start: >4}..{end: <4} {token}");

							if token == Token::Eof {
								break;
							}
						},
						Err(err) => {
							let (message, messages) = err.details();
							println!("[at {}] Lexical Error: {}", err.location.start, message);
							if !messages.is_empty() {
								println!("{}", messages.join("\n"));
							}
							break;
						}
					}
				}
			}
		}
	}
}
