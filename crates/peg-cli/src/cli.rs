use clap::{Parser, Subcommand, ValueEnum};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::IsTerminal::is_terminal(&std::io::stdout()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum Grammar {
    #[default]
    Calc,
    Json,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum Trace {
    #[default]
    Quiet,
    Steps,
    Verbose,
}

impl From<Trace> for peg_vm::Verbosity {
    fn from(trace: Trace) -> Self {
        match trace {
            Trace::Quiet => peg_vm::Verbosity::Quiet,
            Trace::Steps => peg_vm::Verbosity::Steps,
            Trace::Verbose => peg_vm::Verbosity::Verbose,
        }
    }
}

#[derive(Parser)]
#[command(name = "peg", bin_name = "peg")]
#[command(about = "Demo parsers built on the PEG runtime engine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check whether an arithmetic expression parses
    #[command(after_help = r#"EXAMPLES:
  peg calc "1 + 2 * (3 - 4)"
  peg calc "1 +" --trace steps
  peg calc "1 + 2" --captures"#)]
    Calc {
        /// The expression to parse
        expression: String,

        /// Print the captured value stack on a successful parse
        #[arg(long)]
        captures: bool,

        /// Execution trace verbosity, printed to stderr
        #[arg(long, default_value = "quiet", value_name = "LEVEL")]
        trace: Trace,
    },

    /// Parse a JSON document and print its captured value tree
    #[command(after_help = r#"EXAMPLES:
  peg json '{"a": 1, "b": [true, null]}'
  peg json --file data.json
  peg json '{"a": 1}' --pretty --color always"#)]
    Json {
        /// The document as inline text (use --file instead to read from a path)
        document: Option<String>,

        /// Read the document from a file instead of the positional argument
        #[arg(long, value_name = "FILE", conflicts_with = "document")]
        file: Option<std::path::PathBuf>,

        /// Pretty-print the captured value tree
        #[arg(long)]
        pretty: bool,

        /// Colorize output (auto-detected by default)
        #[arg(long, default_value = "auto", value_name = "WHEN")]
        color: ColorChoice,
    },

    /// Print a demo grammar's combinator tree
    #[command(after_help = r#"EXAMPLES:
  peg dump calc
  peg dump json --color always"#)]
    Dump {
        /// Which demo grammar to print
        grammar: Grammar,

        /// Colorize output (auto-detected by default)
        #[arg(long, default_value = "auto", value_name = "WHEN")]
        color: ColorChoice,
    },
}
