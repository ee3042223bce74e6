use lexopt::{Arg, Parser};
use std::path::PathBuf;

pub(crate) const HELP: &str = concat!(
    "Usage: snakegame [-c <file>]\n",
    "\n",
    "Play snake in the terminal\n",
    "\n",
    "Options:\n",
    "  -c, --config <file>  Read configuration from the given file\n",
    "  -h, --help           Display this help message and exit\n",
    "  -V, --version        Show the program version and exit\n",
);

/// What the program was asked to do on the command line
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    /// Play the game, reading configuration from `config` if given
    Run { config: Option<PathBuf> },
    Help,
    Version,
}

impl Command {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut config = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run { config })
    }
}
