use std::collections::HashMap;
use std::mem;

use crate::error::{ErrorReporter, ResolveError};
use crate::expr::Expr;
use crate::interpreter::Interpreter;
use crate::stmt::{FunctionData, Stmt};
use crate::token::Token;

enum FunctionType {
    None,
    Function,
}

/// Statically analyzes the program after parsing and before evaluation. The
/// resolver walks the statements with a stack of lexical scopes and records,
/// for every variable read and assignment, how many environment frames lie
/// between the use site and the binding. Globals are deliberately left
/// unrecorded; the interpreter falls back to the global environment for
/// anything without a distance.
pub struct Resolver<'a, 'w> {
    interpreter: &'a mut Interpreter<'w>,
    reporter: &'a mut ErrorReporter,
    scopes: Vec<HashMap<String, bool>>,
    current_func: FunctionType,
}

impl<'a, 'w> Resolver<'a, 'w> {
    pub fn new(interpreter: &'a mut Interpreter<'w>, reporter: &'a mut ErrorReporter) -> Self {
        Resolver {
            interpreter,
            reporter,
            scopes: vec![],
            current_func: FunctionType::None,
        }
    }

    pub fn resolve(&mut self, statements: &[Stmt]) {
        for statement in statements {
            self.resolve_stmt(statement);
        }
    }

    fn begin_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    fn end_scope(&mut self) {
        self.scopes.pop();
    }

    /// Marks a name as declared but not yet usable in the innermost scope.
    fn declare(&mut self, name: &Token) {
        if self.scopes.is_empty() {
            return;
        }

        let scope = self.scopes.last_mut().expect("stack to be not empty");
        if scope.contains_key(&name.lexeme) {
            self.reporter.resolve_error(&ResolveError {
                token: name.clone(),
                message: "Already a variable with this name in this scope.".to_string(),
            });
        }
        scope.insert(name.lexeme.to_owned(), false);
    }

    /// Marks a declared name as usable in the innermost scope.
    fn define(&mut self, name: &Token) {
        if self.scopes.is_empty() {
            return;
        }

        self.scopes
            .last_mut()
            .expect("stack to be not empty")
            .insert(name.lexeme.to_owned(), true);
    }

    /// Scans the scopes innermost first and records the distance of the
    /// first hit with the interpreter.
    fn resolve_local(&mut self, id: usize, name: &Token) {
        for (i, scope) in self.scopes.iter().rev().enumerate() {
            if scope.contains_key(&name.lexeme) {
                self.interpreter.resolve(id, i);
                return;
            }
        }
    }

    fn resolve_function(&mut self, function: &FunctionData) {
        let enclosing_func = mem::replace(&mut self.current_func, FunctionType::Function);

        self.begin_scope();
        for param in &function.params {
            self.declare(param);
            self.define(param);
        }
        self.resolve(&function.body);
        self.end_scope();

        self.current_func = enclosing_func;
    }

    fn resolve_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Block(data) => {
                self.begin_scope();
                self.resolve(&data.statements);
                self.end_scope();
            },
            Stmt::Break(_) | Stmt::Continue(_) => (),
            Stmt::Const(data) => {
                self.declare(&data.name);
                self.resolve_expr(&data.initializer);
                self.define(&data.name);
            },
            Stmt::Echo(data) => self.resolve_expr(&data.expression),
            Stmt::Expression(data) => self.resolve_expr(&data.expression),
            Stmt::For(data) => {
                // One scope covers the whole loop so the initializer is
                // visible to the condition, the increment and the body.
                self.begin_scope();
                if let Some(initializer) = &data.initializer {
                    self.resolve_stmt(initializer);
                }
                self.resolve_expr(&data.condition);
                if let Some(increment) = &data.increment {
                    self.resolve_expr(increment);
                }
                self.resolve_stmt(&data.body);
                self.end_scope();
            },
            Stmt::Function(data) => {
                self.declare(&data.name);
                self.define(&data.name);

                self.resolve_function(data);
            },
            Stmt::If(data) => {
                self.resolve_expr(&data.condition);
                self.resolve_stmt(&data.then_branch);
                if let Some(else_branch) = &data.else_branch {
                    self.resolve_stmt(else_branch);
                }
            },
            Stmt::Return(data) => {
                if let FunctionType::None = self.current_func {
                    self.reporter.resolve_error(&ResolveError {
                        token: data.keyword.clone(),
                        message: "Cannot return from top-level code.".to_string(),
                    });
                }

                if let Some(value) = &data.value {
                    self.resolve_expr(value);
                }
            },
            Stmt::Var(data) => {
                self.declare(&data.name);
                if let Some(initializer) = &data.initializer {
                    self.resolve_expr(initializer);
                }
                self.define(&data.name);
            },
            Stmt::While(data) => {
                self.resolve_expr(&data.condition);
                self.resolve_stmt(&data.body);
            },
        }
    }

    fn resolve_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Assign(data) => {
                self.resolve_expr(&data.value);
                self.resolve_local(data.id, &data.name);
            },
            Expr::Binary(data) => {
                self.resolve_expr(&data.left);
                self.resolve_expr(&data.right);
            },
            Expr::Call(data) => {
                self.resolve_expr(&data.callee);

                for argument in &data.arguments {
                    self.resolve_expr(argument);
                }
            },
            Expr::Conditional(data) => {
                self.resolve_expr(&data.condition);
                self.resolve_expr(&data.then_branch);
                self.resolve_expr(&data.else_branch);
            },
            Expr::Grouping(data) => self.resolve_expr(&data.expression),
            Expr::Literal(_) => (),
            Expr::Logical(data) => {
                self.resolve_expr(&data.left);
                self.resolve_expr(&data.right);
            },
            Expr::Unary(data) => self.resolve_expr(&data.right),
            Expr::Variable(data) => {
                if let Some(scope) = self.scopes.last() {
                    if scope.get(&data.name.lexeme) == Some(&false) {
                        self.reporter.resolve_error(&ResolveError {
                            token: data.name.clone(),
                            message: "Cannot read a local variable within its own initializer.".to_string(),
                        });
                    }
                }

                self.resolve_local(data.id, &data.name);
            },
        }
    }
}
