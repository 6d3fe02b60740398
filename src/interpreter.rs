use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::mem;
use std::rc::Rc;

use crate::environment::Environment;
use crate::error::{ErrorReporter, Interrupt, RuntimeError};
use crate::expr::{AssignData, BinaryData, CallData, Expr, LogicalData, UnaryData};
use crate::function::Function;
use crate::literal::Literal;
use crate::object::Object;
use crate::stmt::{ForData, Stmt};
use crate::token::{Token, Type};
use crate::RunMode;

type EvalResult<T> = Result<T, Interrupt>;

/// Walks the statements produced by the parser and evaluates them. The
/// interpreter owns the global environment, a pointer to the environment of
/// the scope currently executing, and the distance map produced by the
/// resolver. Program output is written to the injected writer so the driver
/// and the tests can decide where it goes.
pub struct Interpreter<'a> {
    pub globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    locals: HashMap<usize, usize>,
    pub mode: RunMode,
    output: &'a mut dyn Write,
}

impl<'a> Interpreter<'a> {
    pub fn new(output: &'a mut dyn Write) -> Self {
        let globals = Rc::new(RefCell::new(Environment::default()));

        Interpreter {
            globals: Rc::clone(&globals),
            environment: globals,
            locals: HashMap::new(),
            mode: RunMode::File,
            output,
        }
    }

    /// Records the scope distance for an expression id. Called by the
    /// resolver; queried again with the same id during evaluation.
    pub fn resolve(&mut self, id: usize, depth: usize) {
        self.locals.insert(id, depth);
    }

    /// Executes the statements in order. A runtime error is reported and
    /// stops the remaining statements of this run.
    pub fn interpret(&mut self, statements: &[Stmt], reporter: &mut ErrorReporter) {
        for statement in statements {
            let result = match self.mode {
                RunMode::Repl => self.execute_repl_friendly(statement),
                RunMode::File => self.execute(statement),
            };

            if let Err(interrupt) = result {
                match interrupt {
                    Interrupt::Error(error) => reporter.runtime_error(&error),
                    // The parser and the resolver keep break, continue and
                    // return inside their constructs.
                    _ => unreachable!(),
                }
                return;
            }
        }
    }

    /// Executes a statement like [`execute`](Interpreter::execute), except
    /// that the value of a bare expression statement is printed. Assignments
    /// stay silent; so does everything in file mode.
    fn execute_repl_friendly(&mut self, stmt: &Stmt) -> EvalResult<()> {
        match stmt {
            Stmt::Expression(data) if !matches!(data.expression, Expr::Assign(_)) => {
                let value = self.evaluate(&data.expression)?;
                writeln!(self.output, "{value}").expect("output stream to be writable");
                Ok(())
            },
            _ => self.execute(stmt),
        }
    }

    fn execute(&mut self, stmt: &Stmt) -> EvalResult<()> {
        match stmt {
            Stmt::Block(data) => {
                let environment = Environment::new(Some(Rc::clone(&self.environment)));
                self.execute_block(&data.statements, Rc::new(RefCell::new(environment)))
            },
            Stmt::Break(data) => Err(Interrupt::Break(data.keyword.clone())),
            Stmt::Const(data) => {
                let value = self.evaluate(&data.initializer)?;
                self.environment.borrow_mut().define_const(&data.name.lexeme, value);
                Ok(())
            },
            Stmt::Continue(data) => Err(Interrupt::Continue(data.keyword.clone())),
            Stmt::Echo(data) => {
                let value = self.evaluate(&data.expression)?;
                writeln!(self.output, "{value}").expect("output stream to be writable");
                Ok(())
            },
            Stmt::Expression(data) => {
                self.evaluate(&data.expression)?;
                Ok(())
            },
            Stmt::For(data) => {
                // The whole loop runs inside one child environment so the
                // initializer is visible to the condition, the increment and
                // the body, mirroring the resolver's single loop scope.
                let environment = Environment::new(Some(Rc::clone(&self.environment)));
                let previous = mem::replace(&mut self.environment, Rc::new(RefCell::new(environment)));

                let result = self.execute_for(data);

                self.environment = previous;
                result
            },
            Stmt::Function(data) => {
                let function = Function::new(data, Rc::clone(&self.environment));
                self.environment.borrow_mut().define_const(&data.name.lexeme, Object::from(function));
                Ok(())
            },
            Stmt::If(data) => {
                if is_truthy(&self.evaluate(&data.condition)?) {
                    self.execute(&data.then_branch)
                } else if let Some(else_branch) = &data.else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(())
                }
            },
            Stmt::Return(data) => {
                let value = match &data.value {
                    Some(value) => self.evaluate(value)?,
                    None => Object::from(Literal::Null),
                };

                Err(Interrupt::Return(value))
            },
            Stmt::Var(data) => {
                let value = match &data.initializer {
                    Some(initializer) => self.evaluate(initializer)?,
                    None => Object::from(Literal::Null),
                };

                self.environment.borrow_mut().define(&data.name.lexeme, value);
                Ok(())
            },
            Stmt::While(data) => {
                while is_truthy(&self.evaluate(&data.condition)?) {
                    match self.execute(&data.body) {
                        Ok(()) => (),
                        Err(Interrupt::Break(_)) => break,
                        Err(Interrupt::Continue(_)) => continue,
                        Err(interrupt) => return Err(interrupt),
                    }
                }

                Ok(())
            },
        }
    }

    /// Runs the clauses of a for statement. The increment runs after every
    /// normal body completion and after a `continue`, but not after `break`.
    fn execute_for(&mut self, data: &ForData) -> EvalResult<()> {
        if let Some(initializer) = &data.initializer {
            self.execute(initializer)?;
        }

        while is_truthy(&self.evaluate(&data.condition)?) {
            match self.execute(&data.body) {
                Ok(()) => (),
                Err(Interrupt::Break(_)) => return Ok(()),
                Err(Interrupt::Continue(_)) => (),
                Err(interrupt) => return Err(interrupt),
            }

            if let Some(increment) = &data.increment {
                self.evaluate(increment)?;
            }
        }

        Ok(())
    }

    /// Executes the statements inside the given environment and restores the
    /// previous environment on every exit path, including non-local
    /// transfers.
    pub fn execute_block(&mut self, statements: &[Stmt], environment: Rc<RefCell<Environment>>) -> EvalResult<()> {
        let previous = mem::replace(&mut self.environment, environment);

        let result = statements.iter().try_for_each(|statement| self.execute(statement));

        self.environment = previous;

        result
    }

    fn evaluate(&mut self, expr: &Expr) -> EvalResult<Object> {
        match expr {
            Expr::Assign(data) => self.evaluate_assign(data),
            Expr::Binary(data) => self.evaluate_binary(data),
            Expr::Call(data) => self.evaluate_call(data),
            Expr::Conditional(data) => {
                if is_truthy(&self.evaluate(&data.condition)?) {
                    self.evaluate(&data.then_branch)
                } else {
                    self.evaluate(&data.else_branch)
                }
            },
            Expr::Grouping(data) => self.evaluate(&data.expression),
            Expr::Literal(literal) => Ok(Object::from(literal.clone())),
            Expr::Logical(data) => self.evaluate_logical(data),
            Expr::Unary(data) => self.evaluate_unary(data),
            Expr::Variable(data) => Ok(self.look_up_variable(&data.name, data.id)?),
        }
    }

    fn evaluate_assign(&mut self, data: &AssignData) -> EvalResult<Object> {
        let value = self.evaluate(&data.value)?;

        if data.operator.r#type == Type::Equal {
            self.assign_variable(data, value.clone())?;
            return Ok(value);
        }

        // Augmented assignment. The right-hand side must be a number even
        // for `+=`; plain `+` is the operator that concatenates strings.
        let Object::Literal(Literal::Number(right)) = value else {
            return Err(RuntimeError {
                token: data.operator.clone(),
                message: "Cannot use augmented assignment on non-number values.".to_string(),
            }.into());
        };

        if matches!(data.operator.r#type, Type::SlashEqual | Type::PercentEqual) && right == 0.0 {
            return Err(divide_by_zero(&data.operator).into());
        }

        let initial = self.environment.borrow().get(&data.name)?;
        let Object::Literal(Literal::Number(initial)) = initial else {
            return Err(RuntimeError {
                token: data.operator.clone(),
                message: "Cannot use augmented assignment on non-number values.".to_string(),
            }.into());
        };

        let result = match data.operator.r#type {
            Type::PlusEqual => initial + right,
            Type::MinusEqual => initial - right,
            Type::StarEqual => initial * right,
            Type::SlashEqual => initial / right,
            Type::PercentEqual => initial % right,
            _ => unreachable!(),
        };

        self.assign_variable(data, Object::from(result))?;

        // The expression yields the right-hand side, not the stored value.
        Ok(Object::from(right))
    }

    fn evaluate_binary(&mut self, data: &BinaryData) -> EvalResult<Object> {
        let left = self.evaluate(&data.left)?;
        let right = self.evaluate(&data.right)?;
        let operator = &data.operator;

        match operator.r#type {
            Type::Plus => match (&left, &right) {
                (Object::Literal(Literal::Number(l)), Object::Literal(Literal::Number(r))) => {
                    Ok(Object::from(l + r))
                },
                (Object::Literal(Literal::String(l)), Object::Literal(Literal::String(r))) => {
                    Ok(Object::from(format!("{l}{r}")))
                },
                (Object::Literal(Literal::Number(l)), Object::Literal(Literal::String(r))) => {
                    Ok(Object::from(format!("{}{r}", Literal::Number(*l))))
                },
                (Object::Literal(Literal::String(l)), Object::Literal(Literal::Number(r))) => {
                    Ok(Object::from(format!("{l}{}", Literal::Number(*r))))
                },
                _ => Err(RuntimeError {
                    token: operator.clone(),
                    message: "Operands must be numbers or strings. Combining the two is allowed.".to_string(),
                }.into()),
            },
            Type::Minus => {
                let (l, r) = check_number_operands(operator, &left, &right)?;
                Ok(Object::from(l - r))
            },
            Type::Star => {
                let (l, r) = check_number_operands(operator, &left, &right)?;
                Ok(Object::from(l * r))
            },
            Type::Slash => {
                let (l, r) = check_number_operands(operator, &left, &right)?;
                if r == 0.0 {
                    return Err(divide_by_zero(operator).into());
                }
                Ok(Object::from(l / r))
            },
            Type::Percent => {
                let (l, r) = check_number_operands(operator, &left, &right)?;
                if r == 0.0 {
                    return Err(divide_by_zero(operator).into());
                }
                Ok(Object::from(l % r))
            },
            Type::Power => {
                let (l, r) = check_number_operands(operator, &left, &right)?;
                Ok(Object::from(l.powf(r)))
            },
            Type::Greater => {
                let (l, r) = check_number_operands(operator, &left, &right)?;
                Ok(Object::from(l > r))
            },
            Type::GreaterEqual => {
                let (l, r) = check_number_operands(operator, &left, &right)?;
                Ok(Object::from(l >= r))
            },
            Type::Less => {
                let (l, r) = check_number_operands(operator, &left, &right)?;
                Ok(Object::from(l < r))
            },
            Type::LessEqual => {
                let (l, r) = check_number_operands(operator, &left, &right)?;
                Ok(Object::from(l <= r))
            },
            Type::BangEqual => Ok(Object::from(!is_equal(&left, &right))),
            Type::EqualEqual => Ok(Object::from(is_equal(&left, &right))),
            _ => unreachable!(),
        }
    }

    fn evaluate_call(&mut self, data: &CallData) -> EvalResult<Object> {
        let callee = self.evaluate(&data.callee)?;

        let mut arguments = Vec::with_capacity(data.arguments.len());
        for argument in &data.arguments {
            arguments.push(self.evaluate(argument)?);
        }

        let Some(function) = callee.as_callable() else {
            return Err(RuntimeError {
                token: data.paren.clone(),
                message: "Only classes, functions or methods can be called.".to_string(),
            }.into());
        };

        if arguments.len() != function.arity() {
            return Err(RuntimeError {
                token: data.paren.clone(),
                message: format!(
                    "Expected {} arguments but got {} instead.",
                    function.arity(),
                    arguments.len()
                ),
            }.into());
        }

        Ok(function.call(self, arguments)?)
    }

    fn evaluate_logical(&mut self, data: &LogicalData) -> EvalResult<Object> {
        let left = self.evaluate(&data.left)?;

        // Short-circuit: the result is whichever operand decided it, not a
        // coerced boolean.
        if data.operator.r#type == Type::Or {
            if is_truthy(&left) {
                return Ok(left);
            }
        } else if !is_truthy(&left) {
            return Ok(left);
        }

        self.evaluate(&data.right)
    }

    fn evaluate_unary(&mut self, data: &UnaryData) -> EvalResult<Object> {
        let right = self.evaluate(&data.right)?;

        match data.operator.r#type {
            Type::Bang => Ok(Object::from(!is_truthy(&right))),
            Type::Minus => {
                let right = check_number_operand(&data.operator, &right)?;
                Ok(Object::from(-right))
            },
            _ => unreachable!(),
        }
    }

    /// Reads a variable through the recorded distance if there is one, and
    /// from the globals otherwise.
    fn look_up_variable(&self, name: &Token, id: usize) -> Result<Object, RuntimeError> {
        match self.locals.get(&id) {
            Some(distance) => self.environment.borrow().get_at(*distance, name),
            None => self.globals.borrow().get(name),
        }
    }

    /// Writes a variable through the recorded distance if there is one, and
    /// into the globals otherwise.
    fn assign_variable(&mut self, data: &AssignData, value: Object) -> Result<(), RuntimeError> {
        match self.locals.get(&data.id) {
            Some(distance) => self.environment.borrow_mut().assign_at(*distance, &data.name, value),
            None => self.globals.borrow_mut().assign(&data.name, value),
        }
    }
}

/// Only `null` and `false` are falsy; every other value, including `0` and
/// the empty string, is truthy.
fn is_truthy(object: &Object) -> bool {
    match object {
        Object::Literal(Literal::Null) => false,
        Object::Literal(Literal::Bool(b)) => *b,
        _ => true,
    }
}

/// Equality with null handled first: null equals only null. Everything else
/// uses host equality with no cross-type coercion.
fn is_equal(a: &Object, b: &Object) -> bool {
    match (a, b) {
        (Object::Literal(Literal::Null), Object::Literal(Literal::Null)) => true,
        (Object::Literal(Literal::Null), _) | (_, Object::Literal(Literal::Null)) => false,
        _ => a == b,
    }
}

fn check_number_operand(operator: &Token, operand: &Object) -> Result<f64, RuntimeError> {
    match operand {
        Object::Literal(Literal::Number(n)) => Ok(*n),
        _ => Err(RuntimeError {
            token: operator.clone(),
            message: "Operand must be a number.".to_string(),
        }),
    }
}

fn check_number_operands(operator: &Token, left: &Object, right: &Object) -> Result<(f64, f64), RuntimeError> {
    match (left, right) {
        (Object::Literal(Literal::Number(l)), Object::Literal(Literal::Number(r))) => Ok((*l, *r)),
        _ => Err(RuntimeError {
            token: operator.clone(),
            message: "Operands must be numbers.".to_string(),
        }),
    }
}

fn divide_by_zero(operator: &Token) -> RuntimeError {
    RuntimeError {
        token: operator.clone(),
        message: "Cannot divide by Zero.".to_string(),
    }
}
