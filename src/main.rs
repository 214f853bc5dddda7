use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing::{debug, info};

use tally::bytecode::ProgramBc;
use tally::bytecode::disasm::print_bc;
use tally::frontend::lexer::Lexer;
use tally::frontend::token_dumper::TokenDumper;
use tally::logging::init_logging;
use tally::runtime::vm::{Vm, VmConfig};

#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Evaluate semicolon-terminated arithmetic and assignment statements")]
struct Args {
    /// Source text, e.g. "hp=10; damage=5; hp/damage+(1.25*2);"
    source: Option<String>,

    /// Read the source from a file instead
    #[arg(long, conflicts_with = "source")]
    file: Option<PathBuf>,

    /// Run a bytecode image written by --emit
    #[arg(long, conflicts_with_all = ["source", "file"])]
    load: Option<PathBuf>,

    /// Show tokens only
    #[arg(long)]
    tokens: bool,

    /// Disable ANSI colors in --tokens output
    #[arg(long)]
    no_color: bool,

    /// Print the AST instead of running
    #[arg(long)]
    ast: bool,

    /// Print the disassembly before running
    #[arg(long = "bc", alias = "bytecode")]
    bytecode: bool,

    /// Write the compiled bytecode image to this path
    #[arg(long)]
    emit: Option<PathBuf>,

    /// Start an interactive session with persistent variables
    #[arg(long, short = 'i')]
    repl: bool,

    /// Abort after this many executed instructions
    #[arg(long)]
    max_steps: Option<usize>,

    /// Maximum operand stack depth
    #[arg(long, default_value_t = 10_000)]
    max_stack: usize,
}

fn main() {
    init_logging();
    let args = Args::parse();

    let config = VmConfig {
        max_steps: args.max_steps,
        max_stack_size: args.max_stack,
    };

    if args.repl {
        run_repl(config);
        return;
    }

    if let Some(path) = &args.load {
        run_image(path, config, args.bytecode);
        return;
    }

    let source = match (&args.source, &args.file) {
        (Some(source), _) => source.clone(),
        (None, Some(path)) => match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        (None, None) => {
            eprintln!("error: no source given (pass SOURCE, --file, --load or --repl)");
            process::exit(2);
        }
    };

    if args.tokens {
        dump_tokens(&source, args.no_color);
    } else {
        run_program(&source, &args, config);
    }
}

fn dump_tokens(source: &str, no_color: bool) {
    match Lexer::new(source).tokenize() {
        Ok(tokens) => {
            let mut dumper = TokenDumper::new();
            if no_color {
                dumper = dumper.no_color();
            }
            dumper.dump(&tokens);
        }
        Err(e) => {
            eprintln!("Lexer error: {}", e);
            process::exit(1);
        }
    }
}

fn run_program(source: &str, args: &Args, config: VmConfig) {
    if args.ast {
        match tally::parse(source) {
            Ok(program) => println!("{}", program),
            Err(e) => fail(e),
        }
        return;
    }

    let program = match tally::compile(source) {
        Ok(program) => program,
        Err(e) => fail(e),
    };

    if let Some(path) = &args.emit {
        emit_image(&program, path);
    }

    execute(&program, config, args.bytecode);
}

fn emit_image(program: &ProgramBc, path: &Path) {
    let bytes = match program.to_bytes() {
        Ok(bytes) => bytes,
        Err(e) => fail(e),
    };
    if let Err(e) = fs::write(path, &bytes) {
        eprintln!("Failed to write '{}': {}", path.display(), e);
        process::exit(1);
    }
    info!(path = %path.display(), bytes = bytes.len(), "bytecode image written");
}

fn run_image(path: &Path, config: VmConfig, show_bc: bool) {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Failed to read '{}': {}", path.display(), e);
            process::exit(1);
        }
    };
    let program = match ProgramBc::from_bytes(&bytes) {
        Ok(program) => program,
        Err(e) => fail(e),
    };
    debug!(ops = program.len(), "bytecode image loaded");

    execute(&program, config, show_bc);
}

fn execute(program: &ProgramBc, config: VmConfig, show_bc: bool) {
    if show_bc {
        print_bc(program);
    }

    let mut vm = Vm::with_config(config);
    match vm.run(program) {
        Ok(result) => print_result(result),
        Err(e) => fail(e),
    }
}

fn print_result(result: Option<f64>) {
    if let Some(value) = result {
        println!("{}", value);
    }
}

fn fail(e: impl Into<tally::Error>) -> ! {
    eprintln!("{}", e.into());
    process::exit(1);
}

/// Line-at-a-time session on a single VM, so variables carry over.
///
/// `:vars` lists variables, `:reset` forgets them, `:quit` leaves.
fn run_repl(config: VmConfig) {
    let mut vm = Vm::with_config(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("tally> ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Failed to read input: {}", e);
                process::exit(1);
            }
        }

        match line.trim() {
            "" => continue,
            ":quit" | ":q" => break,
            ":reset" => vm.reset(),
            ":vars" => {
                for (slot, name) in vm.symbols().iter() {
                    match vm.memory().load(slot) {
                        Some(value) => println!("{:>4}  {} = {}", slot, name, value),
                        None => println!("{:>4}  {} (unset)", slot, name),
                    }
                }
            }
            source => match tally::evaluate_with(&mut vm, source) {
                Ok(result) => print_result(result),
                Err(e) => eprintln!("{}", e),
            },
        }
    }
}
