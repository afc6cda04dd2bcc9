use std::{io::Write, path::PathBuf};

use lhs_core::{parser::prelude::produce_ast, utils::prelude::Error};

use crate::cli::print_error;

const PROMPT: &str = ">> ";

pub fn start() -> std::io::Result<()> {
	crate::cli::handle_interrupt("rppl");

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
			_ => match produce_ast(input) {
				Ok(program) => println!("{program}"),
				Err(error) => print_error(&Error::Parse {
					path: PathBuf::new(),
					src: input.to_string(),
					error
				})
			}
		}
	}
}
