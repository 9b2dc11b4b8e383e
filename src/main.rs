use std::{
    fs::read_to_string,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use clap::Parser as ClapParser;
use molybdenum::{
    display_error,
    errors::errors::Error,
    lexer::lexer::tokenize,
    parser::parser::parse,
    verifier::verifier::{verify_with, VerifierConfig},
};

#[derive(ClapParser, Debug)]
#[command(name = "molybdenum", version, about = "Checks Molybdenum source files")]
struct Cli {
    /// Source file to check; reads stdin when omitted
    file: Option<PathBuf>,

    /// Print the token stream
    #[arg(long)]
    tokens: bool,

    /// Print the parsed program
    #[arg(long)]
    ast: bool,

    /// Also verify function signatures and nested bodies
    #[arg(long)]
    strict: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let file_name = cli
        .file
        .as_ref()
        .map(|path| path.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("<stdin>"));

    let source = match read_source(cli.file.as_ref()) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: could not read {}: {}", file_name, err);
            return ExitCode::from(2);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(error) => {
            report(&[error], &source, &file_name);
            return ExitCode::from(2);
        }
    };

    eprintln!("Tokenized in {:?}", start.elapsed());

    if cli.tokens {
        for token in &tokens {
            println!("{}", token);
        }
    }

    let parse_start = Instant::now();
    let (parser, program) = parse(tokens);

    eprintln!("Parsed in {:?}", parse_start.elapsed());

    if cli.ast {
        print!("{}", program);
    }

    let config = if cli.strict {
        VerifierConfig::strict()
    } else {
        VerifierConfig::default()
    };

    let verify_start = Instant::now();
    let verify_errors = verify_with(&program, config);

    eprintln!("Verified in {:?}", verify_start.elapsed());
    eprintln!("Total time: {:?}", start.elapsed());

    report(parser.errors(), &source, &file_name);
    report(&verify_errors, &source, &file_name);

    if parser.errors().is_empty() && verify_errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn read_source(file: Option<&PathBuf>) -> io::Result<String> {
    match file {
        Some(path) => read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn report(errors: &[Error], source: &str, file_name: &str) {
    for error in errors {
        eprintln!("{}\n", display_error(error, source, file_name));
    }
}
