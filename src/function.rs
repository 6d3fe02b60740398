use std::cell::RefCell;
use std::fmt::{Debug, Display};
use std::rc::Rc;

use crate::environment::Environment;
use crate::error::{Interrupt, RuntimeError};
use crate::interpreter::Interpreter;
use crate::literal::Literal;
use crate::object::{Callable, Object};
use crate::stmt::FunctionData;

/// Represents a user defined function. A function keeps its declaration and
/// the environment that was current at its declaration site (its closure),
/// so nested functions see the bindings of their enclosing lexical scope
/// even after that scope has exited.
#[derive(Clone)]
pub struct Function {
    declaration: Rc<FunctionData>,
    closure: Rc<RefCell<Environment>>,
}

impl Function {
    pub fn new(declaration: &FunctionData, closure: Rc<RefCell<Environment>>) -> Self {
        Function {
            declaration: Rc::new(declaration.clone()),
            closure,
        }
    }

    pub fn name(&self) -> &str {
        &self.declaration.name.lexeme
    }
}

impl Callable for Function {
    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Object>) -> Result<Object, RuntimeError> {
        let mut environment = Environment::new(Some(Rc::clone(&self.closure)));

        for (param, argument) in self.declaration.params.iter().zip(arguments) {
            environment.define(&param.lexeme, argument);
        }

        match interpreter.execute_block(&self.declaration.body, Rc::new(RefCell::new(environment))) {
            Ok(()) => Ok(Object::from(Literal::Null)),
            Err(Interrupt::Return(value)) => Ok(value),
            Err(Interrupt::Error(error)) => Err(error),
            // The parser rejects break and continue that would cross a
            // function boundary.
            Err(_) => unreachable!(),
        }
    }

    fn arity(&self) -> usize {
        self.declaration.params.len()
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.declaration, &other.declaration)
            && Rc::ptr_eq(&self.closure, &other.closure)
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<User Fn - {}>", self.name())
    }
}

impl Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<User Fn - {}>", self.name())
    }
}

/// Represents a function provided by the host.
#[derive(Clone)]
pub struct NativeFunction {
    pub name: String,
    pub arity: usize,
    pub function: fn(&mut Interpreter, Vec<Object>) -> Result<Object, RuntimeError>,
}

impl Callable for NativeFunction {
    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Object>) -> Result<Object, RuntimeError> {
        (self.function)(interpreter, arguments)
    }

    fn arity(&self) -> usize {
        self.arity
    }
}

impl PartialEq for NativeFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.arity == other.arity
    }
}

impl Display for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Native Fn - {}>", self.name)
    }
}

impl Debug for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Native Fn - {}>", self.name)
    }
}

/// Populates the global environment with the host provided callables. The
/// driver calls this once, before any source is run.
pub fn define_natives(interpreter: &mut Interpreter) {
    for native in natives() {
        let name = native.name.clone();
        interpreter.globals.borrow_mut().define_const(&name, Object::from(native));
    }
}

fn natives() -> Vec<NativeFunction> {
    vec![
        NativeFunction {
            name: "clock".to_owned(),
            arity: 0,
            function: |_, _| {
                let now = std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .expect("system clock to be past the epoch")
                    .as_millis();
                Ok(Object::from(now as f64))
            },
        },
        NativeFunction {
            name: "input".to_owned(),
            arity: 0,
            function: |_, _| {
                let mut input = String::new();
                std::io::stdin().read_line(&mut input).expect("to read a line from stdin");
                input.pop();  // Remove newline
                Ok(Object::from(input))
            },
        },
    ]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn native_display() {
        let natives = natives();
        assert_eq!(natives[0].to_string(), "<Native Fn - clock>");
        assert_eq!(natives[0].arity(), 0);
    }
}
