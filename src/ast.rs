use crate::expr::Expr;
use crate::stmt::Stmt;

/// Returns a string representation of the expression in paranthesize.
macro_rules! parenthesize {
    ( $self:ident, $name:expr, $( $x:expr ),+ ) => {
        {
            let mut string = String::new();
            string += "(";
            string += $name;
            $(
                string += " ";
                string += &$self.print_expr($x);
            )*
            string += ")";

            string
        }
    };
}

/// Prints the AST in prefix notation. Only used for debugging; the `-d`
/// driver flag prints every statement through this instead of running it.
pub struct AstPrinter;

impl AstPrinter {
    pub fn print_expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Assign(data) => {
                parenthesize!(
                    self,
                    format!("{} {}", data.operator.lexeme, data.name.lexeme).as_str(),
                    &data.value
                )
            },
            Expr::Binary(data) => {
                parenthesize!(self, &data.operator.lexeme, &data.left, &data.right)
            },
            Expr::Call(data) => {
                // The callee can be any expression, not just a name.
                let mut string = String::new();
                string += &self.print_expr(&data.callee);
                string += "(";
                string += &data.arguments
                    .iter()
                    .map(|argument| self.print_expr(argument))
                    .collect::<Vec<String>>()
                    .join(" ");
                string += ")";
                string
            },
            Expr::Conditional(data) => {
                parenthesize!(self, "?:", &data.condition, &data.then_branch, &data.else_branch)
            },
            Expr::Grouping(data) => parenthesize!(self, "group", &data.expression),
            Expr::Literal(literal) => literal.to_string(),
            Expr::Logical(data) => {
                parenthesize!(self, &data.operator.lexeme, &data.left, &data.right)
            },
            Expr::Unary(data) => parenthesize!(self, &data.operator.lexeme, &data.right),
            Expr::Variable(data) => data.name.lexeme.clone(),
        }
    }

    pub fn print_stmt(&self, stmt: &Stmt) -> String {
        match stmt {
            Stmt::Block(data) => {
                let mut string = String::new();
                string += "{";
                for statement in &data.statements {
                    string += " ";
                    string += &self.print_stmt(statement);
                }
                string += " }";

                string
            },
            Stmt::Break(_) => "break".to_string(),
            Stmt::Const(data) => {
                format!("(const {} = {})", data.name.lexeme, self.print_expr(&data.initializer))
            },
            Stmt::Continue(_) => "continue".to_string(),
            Stmt::Echo(data) => parenthesize!(self, "echo", &data.expression),
            Stmt::Expression(data) => parenthesize!(self, "expr", &data.expression),
            Stmt::For(data) => {
                let mut string = String::new();
                string += "(for";
                if let Some(initializer) = &data.initializer {
                    string += " ";
                    string += &self.print_stmt(initializer);
                }
                string += " ";
                string += &self.print_expr(&data.condition);
                if let Some(increment) = &data.increment {
                    string += " ";
                    string += &self.print_expr(increment);
                }
                string += " ";
                string += &self.print_stmt(&data.body);
                string += ")";

                string
            },
            Stmt::Function(data) => {
                let mut string = String::new();
                string += "(fun ";
                string += &data.name.lexeme;
                string += "(";
                string += &data.params
                    .iter()
                    .map(|param| param.lexeme.clone())
                    .collect::<Vec<String>>()
                    .join(" ");
                string += ") { ";
                string += &data.body
                    .iter()
                    .map(|statement| self.print_stmt(statement))
                    .collect::<Vec<String>>()
                    .join(" ");
                string += " })";

                string
            },
            Stmt::If(data) => {
                let mut string = String::new();
                string += "(if ";
                string += &self.print_expr(&data.condition);
                string += " ";
                string += &self.print_stmt(&data.then_branch);
                if let Some(else_branch) = &data.else_branch {
                    string += " else ";
                    string += &self.print_stmt(else_branch);
                }
                string += ")";

                string
            },
            Stmt::Return(data) => {
                match &data.value {
                    Some(value) => parenthesize!(self, "return", value),
                    None => "(return)".to_string(),
                }
            },
            Stmt::Var(data) => {
                let mut string = String::new();
                string += "(var ";
                string += &data.name.lexeme;
                if let Some(initializer) = &data.initializer {
                    string += " = ";
                    string += &self.print_expr(initializer);
                }
                string += ")";

                string
            },
            Stmt::While(data) => {
                format!(
                    "(while {} {})",
                    self.print_expr(&data.condition),
                    self.print_stmt(&data.body)
                )
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ErrorReporter;
    use crate::parser::Parser;
    use crate::scanner::Scanner;

    fn print(source: &str) -> String {
        let mut reporter = ErrorReporter::new();
        let mut scanner = Scanner::new(source, &mut reporter);
        let tokens = scanner.scan_tokens();

        let mut parser = Parser::new(tokens, &mut reporter, 0);
        let statements = parser.parse();
        assert!(!reporter.had_error);

        let printer = AstPrinter;
        statements
            .iter()
            .map(|statement| printer.print_stmt(statement))
            .collect::<Vec<String>>()
            .join(" ")
    }

    #[test]
    fn print_precedence() {
        assert_eq!(print("echo 1 + 2 * 3;"), "(echo (+ 1 (* 2 3)))");
        assert_eq!(print("echo (1 + 2) * 3;"), "(echo (* (group (+ 1 2)) 3))");
    }

    #[test]
    fn print_power_is_right_associative() {
        assert_eq!(print("echo 2 ** 3 ** 2;"), "(echo (** 2 (** 3 2)))");
    }

    #[test]
    fn print_assignment() {
        assert_eq!(print("a = 1;"), "(expr (= a 1))");
        assert_eq!(print("a += 1;"), "(expr (+= a 1))");
    }

    #[test]
    fn print_conditional() {
        assert_eq!(print("a ? 1 : 2;"), "(expr (?: a 1 2))");
    }

    #[test]
    fn print_call_with_general_callee() {
        // The callee of the second call is itself a call expression.
        assert_eq!(print("make(1)(2, 3);"), "(expr make(1)(2 3))");
    }

    #[test]
    fn print_function() {
        assert_eq!(
            print("fun add(a, b) { return a + b; }"),
            "(fun add(a b) { (return (+ a b)) })"
        );
    }

    #[test]
    fn print_for() {
        assert_eq!(
            print("for (var i = 0; i < 3; i += 1) echo i;"),
            "(for (var i = 0) (< i 3) (+= i 1) (echo i))"
        );
    }

    #[test]
    fn print_while_with_break_and_continue() {
        assert_eq!(
            print("while (true) { break; continue; }"),
            "(while true { break continue })"
        );
    }

    #[test]
    fn print_declarations() {
        assert_eq!(print("var a;"), "(var a)");
        assert_eq!(print("var a = 1;"), "(var a = 1)");
        assert_eq!(print("const K = 3;"), "(const K = 3)");
    }

    #[test]
    fn print_if_else() {
        assert_eq!(
            print("if (a) echo 1; else echo 2;"),
            "(if a (echo 1) else (echo 2))"
        );
    }
}
