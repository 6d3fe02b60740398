#![allow(clippy::needless_return)]

//! Ember is a dynamically typed scripting language with lexical scoping,
//! first-class functions and closures. It is implemented as a tree-walk
//! interpreter with a hand-written recursive descent parser.
//!
//! Source text runs through four stages. Each stage reports its problems to
//! a shared [`ErrorReporter`](error::ErrorReporter) that is passed along
//! explicitly; interpretation only starts when the earlier stages finished
//! without raising the error flag.
//!
//! ## Scanning
//! Scanning converts a string of characters into a list of tokens. A token
//! is a single unit of the language; the string `1 + 2` becomes:
//! ```text
//! [Number(1), Plus, Number(2)]
//! ```
//! The scanner is implemented in the [`scanner`](scanner) module as an
//! iterator over the characters of the source code. Lexical problems such as
//! an unterminated string or a stray character are reported as a
//! [`ScanError`](error::ScanError) and scanning carries on, so a single run
//! surfaces every lexical error at once.
//!
//! ## Parsing
//! Parsing converts the list of tokens into an abstract syntax tree.
//! [`Expressions`](expr::Expr) are pieces of code that produce a value,
//! specifically an [`Object`](object::Object); [`statements`](stmt::Stmt)
//! perform some action instead, like declaring a variable or echoing a
//! value. The parser is implemented in the [`parser`](parser) module as a
//! recursive descent parser over the grammar documented there. On a
//! [`ParseError`](error::ParseError) it synchronizes to the next statement
//! boundary and keeps going, so several syntax errors can be fixed in one
//! pass.
//!
//! ## Resolving
//! The resolver in the [`resolver`](resolver) module statically analyzes the
//! tree before it runs. It computes, for every variable use, how many scope
//! frames lie between the use and the declaration, and it rejects programs
//! that are syntactically fine but semantically wrong — declaring the same
//! name twice in one scope, reading a local variable inside its own
//! initializer, or returning from top-level code — as a
//! [`ResolveError`](error::ResolveError).
//!
//! ## Interpreting
//! The interpreter in the [`interpreter`](interpreter) module walks the tree
//! and evaluates it, managing a chain of [`environments`](environment) that
//! map names to values. Scopes nest towards the global environment; a
//! function value captures the environment of its declaration site, which
//! keeps closures working after the enclosing scope has exited. Problems
//! that can only be seen at runtime — type mismatches, undefined variables,
//! reassigning a `const` — are reported as a
//! [`RuntimeError`](error::RuntimeError) and stop the current run.

use std::{fs, process};
use std::io::Write;

pub mod error;
pub mod token;
pub mod scanner;
pub mod expr;
pub mod stmt;
pub mod environment;
pub mod parser;
pub mod ast;
pub mod interpreter;
pub mod literal;
pub mod object;
pub mod function;
pub mod resolver;

use ast::AstPrinter;
use error::ErrorReporter;
use interpreter::Interpreter;
use parser::Parser;
use resolver::Resolver;
use scanner::Scanner;

/// How the source reached the interpreter. In the prompt the value of a bare
/// expression statement is printed back; a script stays silent.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RunMode {
    File,
    Repl,
}

#[allow(non_camel_case_types)]
pub struct ember<'a> {
    interpreter: Interpreter<'a>,
    reporter: ErrorReporter,
    debug: bool,
    // High-water mark for expression ids. The interpreter's distance map
    // outlives a single run in the prompt, so ids must never be reused
    // within one session.
    next_id: usize,
}

impl<'a> ember<'a> {
    /// Creates the driver. Program output is written to `output`; natives
    /// are defined into the globals once, before any source runs.
    pub fn new(output: &'a mut dyn Write) -> Self {
        let mut interpreter = Interpreter::new(output);
        function::define_natives(&mut interpreter);

        ember {
            interpreter,
            reporter: ErrorReporter::new(),
            debug: false,
            next_id: 0,
        }
    }

    /// Enables debug mode: `run` prints the token stream and the AST to
    /// stderr instead of resolving and interpreting.
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub fn had_error(&self) -> bool {
        self.reporter.had_error
    }

    pub fn had_runtime_error(&self) -> bool {
        self.reporter.had_runtime_error
    }

    /// Clears the error flags between prompt lines.
    pub fn reset_errors(&mut self) {
        self.reporter.reset();
    }

    /// Runs a script from disk and exits the process on errors: 65 for
    /// scan, parse and resolve errors, 70 for runtime errors.
    pub fn run_file(&mut self, path: String) {
        let contents = fs::read_to_string(path)
            .expect("Should have been able to read the file");

        self.run(&contents, RunMode::File);

        if self.reporter.had_error {
            process::exit(65);
        }
        if self.reporter.had_runtime_error {
            process::exit(70);
        }
    }

    /// Feeds one source string through the pipeline. Each stage aborts the
    /// run if an earlier stage raised the error flag.
    pub fn run(&mut self, source: &str, mode: RunMode) {
        let mut scanner = Scanner::new(source, &mut self.reporter);
        let tokens = scanner.scan_tokens();

        if self.reporter.had_error {
            return;
        }

        if self.debug {
            for token in &tokens {
                eprintln!("{token}");
            }
        }

        let mut parser = Parser::new(tokens, &mut self.reporter, self.next_id);
        let statements = parser.parse();
        self.next_id = parser.next_id();

        if self.reporter.had_error {
            return;
        }

        if self.debug {
            let printer = AstPrinter;
            for statement in &statements {
                eprintln!("{}", printer.print_stmt(statement));
            }
            return;
        }

        let mut resolver = Resolver::new(&mut self.interpreter, &mut self.reporter);
        resolver.resolve(&statements);

        if self.reporter.had_error {
            return;
        }

        self.interpreter.mode = mode;
        self.interpreter.interpret(&statements, &mut self.reporter);
    }
}
