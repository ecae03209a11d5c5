//! Parsing of shell input lines.

/// One line of user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    New { pits: i64, seeds: i64 },
    Level(i64),
    Move(i64),
    Switch,
    Print,
    Help,
    Quit,
}

/// Why a line could not be understood.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Not enough arguments supplied!")]
    MissingArguments,

    #[error("First and second argument need to be an integer.")]
    SizeNotInteger,

    #[error("Argument must be an integer.")]
    NotInteger,

    #[error("Not a valid command.")]
    UnknownCommand,
}

impl Command {
    /// Parse a line. Blank lines give `Ok(None)`.
    ///
    /// Command names are case-insensitive; extra arguments are ignored.
    ///
    /// ```
    /// use kalah::shell::Command;
    ///
    /// assert_eq!(Command::parse("move 3"), Ok(Some(Command::Move(3))));
    /// assert_eq!(Command::parse("   "), Ok(None));
    /// ```
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some(name) = words.first() else {
            return Ok(None);
        };

        let command = match name.to_uppercase().as_str() {
            "NEW" => {
                let (Some(pits), Some(seeds)) = (words.get(1), words.get(2)) else {
                    return Err(ParseError::MissingArguments);
                };
                match (pits.parse::<i64>(), seeds.parse::<i64>()) {
                    (Ok(pits), Ok(seeds)) => Command::New { pits, seeds },
                    _ => return Err(ParseError::SizeNotInteger),
                }
            }
            "LEVEL" => Command::Level(Self::integer_argument(&words)?),
            "MOVE" => Command::Move(Self::integer_argument(&words)?),
            "SWITCH" => Command::Switch,
            "PRINT" => Command::Print,
            "HELP" => Command::Help,
            "QUIT" => Command::Quit,
            _ => return Err(ParseError::UnknownCommand),
        };
        Ok(Some(command))
    }

    fn integer_argument(words: &[&str]) -> Result<i64, ParseError> {
        words
            .get(1)
            .ok_or(ParseError::MissingArguments)?
            .parse()
            .map_err(|_| ParseError::NotInteger)
    }
}
