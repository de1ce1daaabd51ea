use std::rc::Rc;

use tracing::debug;

use crate::{
    builtin::Builtin,
    environment::{Env, Environment},
    error::RuntimeError,
    object::{Function, Object},
};

use monkey_parser::ast::{
    BlockStatement, Expression, Identifier, IfExpression, InfixOperator, PrefixOperator, Program,
    Statement,
};

/// Evaluate `program` against `env`, leaving any bindings it makes in `env`.
pub fn evaluate(program: &Program, env: &Env) -> Rc<Object> {
    Evaluator::new_with_env(Rc::clone(env)).eval(program)
}

pub struct Evaluator {
    env: Env,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self::new_with_env(Environment::new().into_shared())
    }

    pub fn new_with_env(env: Env) -> Self {
        Evaluator { env }
    }

    pub fn eval(&mut self, prog: &Program) -> Rc<Object> {
        let mut result = Object::null();

        for stmt in &prog.statements {
            let val = self.eval_statement(stmt);

            match val.as_ref() {
                // If a return value is found, immediately return and stop evaluating statements
                // Unwrap the return value into a final value so the program can use it
                Object::ReturnValue(inner_value) => return Rc::clone(inner_value),
                Object::Error(_) => return val,
                _ => result = val,
            }
        }

        result
    }

    // Similar to eval (for programs) but doesn't unwrap return values
    fn eval_block_statement(&mut self, block: &BlockStatement) -> Rc<Object> {
        let mut result = Object::null();

        for stmt in &block.statements {
            let val = self.eval_statement(stmt);

            match val.as_ref() {
                // Don't unwrap the return value, we might be in a nested block which also needs to return
                Object::ReturnValue(_) | Object::Error(_) => return val,
                _ => result = val,
            }
        }

        result
    }

    fn eval_statement(&mut self, stmt: &Statement) -> Rc<Object> {
        match stmt {
            Statement::Expression { expression } => self.eval_expression(expression),
            Statement::Return { value } => {
                let obj = self.eval_expression(value);

                // Errors and inner returns already bubble up on their own
                if obj.is_carrier() {
                    return obj;
                }

                Rc::new(Object::ReturnValue(obj))
            }
            Statement::Let { name, value } => {
                let obj = self.eval_expression(value);
                if obj.is_carrier() {
                    return obj;
                }

                self.env.borrow_mut().set(name.name.clone(), obj);

                Object::null()
            }
            // Blocks share the surrounding scope
            Statement::Block(block) => self.eval_block_statement(block),
        }
    }

    fn eval_expression(&mut self, expr: &Expression) -> Rc<Object> {
        match expr {
            Expression::Integer(value) => Rc::new(Object::Integer(*value)),
            Expression::Boolean(value) => Object::boolean(*value),
            Expression::String(value) => Rc::new(Object::String(value.clone())),
            Expression::Identifier(identifier) => self.eval_identifier_expression(identifier),

            Expression::Prefix(prefix) => {
                let right = self.eval_expression(&prefix.right);
                if right.is_carrier() {
                    return right;
                }
                self.eval_prefix_expression(prefix.operator, right)
            }
            Expression::Infix(infix) => {
                let left = self.eval_expression(&infix.left);
                if left.is_carrier() {
                    return left;
                }
                let right = self.eval_expression(&infix.right);
                if right.is_carrier() {
                    return right;
                }
                self.eval_infix_expression(infix.operator, left, right)
            }

            Expression::If(if_expr) => self.eval_if_expression(if_expr),

            Expression::Function(func) => Rc::new(Object::Function(Function {
                parameters: func.parameters.clone(),
                body: Rc::clone(&func.body),
                env: Rc::clone(&self.env),
            })),
            Expression::Call(call) => {
                let func = self.eval_expression(&call.function);
                if func.is_carrier() {
                    return func;
                }

                match self.eval_expressions(&call.arguments) {
                    Ok(args) => self.apply_function(func, args),
                    Err(error) => error,
                }
            }
        }
    }

    /// Evaluate left to right, stopping at the first error or return.
    fn eval_expressions(&mut self, exprs: &[Expression]) -> Result<Vec<Rc<Object>>, Rc<Object>> {
        let mut result = Vec::with_capacity(exprs.len());
        for expr in exprs {
            let evaluated = self.eval_expression(expr);
            if evaluated.is_carrier() {
                return Err(evaluated);
            }
            result.push(evaluated);
        }
        Ok(result)
    }

    fn eval_identifier_expression(&self, identifier: &Identifier) -> Rc<Object> {
        let result = self.env.borrow().get(&identifier.name);

        match result {
            Some(obj) => obj,
            // Builtins are only consulted once every scope has missed
            None => match Builtin::lookup(&identifier.name) {
                Some(builtin) => Rc::new(Object::Builtin(builtin)),
                None => error(RuntimeError::IdentifierNotFound(identifier.name.clone())),
            },
        }
    }

    fn eval_prefix_expression(&self, operator: PrefixOperator, right: Rc<Object>) -> Rc<Object> {
        match operator {
            PrefixOperator::Bang => Object::boolean(!is_truthy(&right)),
            PrefixOperator::Minus => self.eval_minus_prefix_operator_expression(right),
        }
    }

    fn eval_minus_prefix_operator_expression(&self, right: Rc<Object>) -> Rc<Object> {
        match *right {
            Object::Integer(value) => match value.checked_neg() {
                Some(negated) => Rc::new(Object::Integer(negated)),
                None => error(RuntimeError::NegationOverflow(value)),
            },
            _ => error(RuntimeError::UnknownPrefixOperator {
                operator: PrefixOperator::Minus,
                right: right.type_name(),
            }),
        }
    }

    fn eval_infix_expression(
        &self,
        operator: InfixOperator,
        left: Rc<Object>,
        right: Rc<Object>,
    ) -> Rc<Object> {
        match (left.as_ref(), right.as_ref()) {
            (Object::Integer(left_value), Object::Integer(right_value)) => {
                return self.eval_integer_infix_expression(operator, *left_value, *right_value)
            }
            (Object::String(left_value), Object::String(right_value))
                if operator == InfixOperator::Plus =>
            {
                return Rc::new(Object::String(format!("{}{}", left_value, right_value)))
            }
            _ => {}
        }

        match operator {
            // Identity, not structure: only the interned booleans and null compare equal by value
            InfixOperator::Equal => Object::boolean(Rc::ptr_eq(&left, &right)),
            InfixOperator::NotEqual => Object::boolean(!Rc::ptr_eq(&left, &right)),
            _ if left.type_name() != right.type_name() => error(RuntimeError::TypeMismatch {
                left: left.type_name(),
                operator,
                right: right.type_name(),
            }),
            _ => error(RuntimeError::UnknownInfixOperator {
                left: left.type_name(),
                operator,
                right: right.type_name(),
            }),
        }
    }

    fn eval_integer_infix_expression(
        &self,
        operator: InfixOperator,
        left_value: i64,
        right_value: i64,
    ) -> Rc<Object> {
        let arithmetic = match operator {
            InfixOperator::Plus => left_value.checked_add(right_value),
            InfixOperator::Minus => left_value.checked_sub(right_value),
            InfixOperator::Asterisk => left_value.checked_mul(right_value),
            InfixOperator::Slash => {
                if right_value == 0 {
                    return error(RuntimeError::DivisionByZero);
                }
                left_value.checked_div(right_value)
            }

            InfixOperator::LessThan => return Object::boolean(left_value < right_value),
            InfixOperator::GreaterThan => return Object::boolean(left_value > right_value),
            InfixOperator::Equal => return Object::boolean(left_value == right_value),
            InfixOperator::NotEqual => return Object::boolean(left_value != right_value),
        };

        match arithmetic {
            Some(value) => Rc::new(Object::Integer(value)),
            None => error(RuntimeError::IntegerOverflow {
                left: left_value,
                operator,
                right: right_value,
            }),
        }
    }

    fn eval_if_expression(&mut self, if_expr: &IfExpression) -> Rc<Object> {
        let evaluated_condition = self.eval_expression(&if_expr.condition);
        if evaluated_condition.is_carrier() {
            return evaluated_condition;
        }

        if is_truthy(&evaluated_condition) {
            self.eval_block_statement(&if_expr.consequence)
        } else if let Some(alternative) = &if_expr.alternative {
            self.eval_block_statement(alternative)
        } else {
            Object::null()
        }
    }

    #[tracing::instrument(level = "debug", skip_all)]
    fn apply_function(&mut self, func: Rc<Object>, args: Vec<Rc<Object>>) -> Rc<Object> {
        match func.as_ref() {
            Object::Function(func) => {
                if args.len() != func.parameters.len() {
                    return error(RuntimeError::WrongArgumentCount {
                        got: args.len(),
                        want: func.parameters.len(),
                    });
                }

                // Enclosed by the defining environment, not the caller's
                let mut scoped_env = Environment::new_enclosed(Rc::clone(&func.env));
                for (ident, obj) in func.parameters.iter().zip(args) {
                    scoped_env.set(ident.name.clone(), obj);
                }

                debug!(
                    arguments = func.parameters.len(),
                    depth = scoped_env.depth(),
                    "calling function"
                );

                let caller_env = std::mem::replace(&mut self.env, scoped_env.into_shared());
                let result = self.eval_block_statement(&func.body);
                self.env = caller_env;

                unwrap_return_value(result)
            }
            Object::Builtin(builtin) => match builtin.apply(&args) {
                Ok(obj) => obj,
                Err(err) => error(err),
            },
            other => error(RuntimeError::NotAFunction(other.type_name())),
        }
    }
}

fn error(err: RuntimeError) -> Rc<Object> {
    debug!(error = %err, "runtime error");
    Rc::new(Object::Error(err))
}

/// `null` and `false` are falsy, everything else is truthy.
fn is_truthy(obj: &Rc<Object>) -> bool {
    !(Rc::ptr_eq(obj, &Object::null()) || Rc::ptr_eq(obj, &Object::boolean(false)))
}

/// A return value stops at the function call that produced it.
fn unwrap_return_value(obj: Rc<Object>) -> Rc<Object> {
    match obj.as_ref() {
        Object::ReturnValue(inner) => Rc::clone(inner),
        _ => obj,
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use crate::{
        environment::{Env, Environment},
        evaluator::{evaluate, Evaluator},
        object::Object,
    };

    use monkey_parser::{lexer::Lexer, parser::Parser};

    #[test]
    fn eval_integer_expression() {
        let tests = vec![
            ("5", 5),
            ("10", 10),
            ("-5", -5),
            ("-10", -10),
            ("5 + 5 + 5 + 5 - 10", 10),
            ("2 * 2 * 2 * 2 * 2", 32),
            ("-50 + 100 + -50", 0),
            ("5 * 2 + 10", 20),
            ("5 + 2 * 10", 25),
            ("20 + 2 * -10", 0),
            ("50 / 2 * 2 + 10", 60),
            ("2 * (5 + 10)", 30),
            ("3 * 3 * 3 + 10", 37),
            ("3 * (3 * 3) + 10", 37),
            ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
            ("7 / 2", 3),
            ("-7 / 2", -3),
            ("10 - 2 - 3", 5),
            ("-9223372036854775807 - 1", i64::MIN),
        ];

        for (input, expected_value) in tests {
            let evaluated = evaluate_input(input);
            test_integer_object(evaluated, expected_value);
        }
    }

    #[test]
    fn eval_boolean_expression() {
        let tests = vec![
            ("true", true),
            ("false", false),
            ("1 < 2", true),
            ("1 > 2", false),
            ("1 < 1", false),
            ("1 > 1", false),
            ("1 == 1", true),
            ("1 != 1", false),
            ("1 == 2", false),
            ("1 != 2", true),
            ("true == true", true),
            ("false == false", true),
            ("true == false", false),
            ("true != false", true),
            ("false != true", true),
            ("(1 < 2) == true", true),
            ("(1 < 2) == false", false),
            ("(1 > 2) == true", false),
            ("(1 > 2) == false", true),
            // Non-integers compare by identity
            ("1 == true", false),
            ("1 != true", true),
            ("\"a\" == \"a\"", false),
            ("let s = \"a\"; s == s", true),
            ("let f = fn() { 1 }; f == f", true),
            ("fn() { 1 } == fn() { 1 }", false),
            ("if (false) { 1 } == if (false) { 2 }", true),
        ];

        for (input, expected_value) in tests {
            let evaluated = evaluate_input(input);
            test_boolean_object(evaluated, expected_value);
        }
    }

    #[test]
    fn booleans_are_singletons() {
        assert!(Rc::ptr_eq(&evaluate_input("true"), &Object::boolean(true)));
        assert!(Rc::ptr_eq(&evaluate_input("1 > 2"), &Object::boolean(false)));
        assert!(Rc::ptr_eq(&evaluate_input("!0"), &Object::boolean(false)));
        assert!(Rc::ptr_eq(&evaluate_input("if (false) { 1 }"), &Object::null()));
    }

    #[test]
    fn eval_string_expression() {
        let tests = vec![
            ("\"hello world\"", "hello world"),
            ("\"hello\" + \" \" + \"world\"", "hello world"),
            ("let s = \"ab\"; s + s", "abab"),
        ];

        for (input, expected_value) in tests {
            let evaluated = evaluate_input(input);
            test_string_object(evaluated, expected_value);
        }
    }

    #[test]
    fn eval_bang_operator() {
        let tests = vec![
            ("!true", false),
            ("!false", true),
            ("!5", false),
            ("!0", false),
            ("!!true", true),
            ("!!false", false),
            ("!!5", true),
            ("!\"\"", false),
            ("!if (false) { 1 }", true),
        ];

        for (input, expected_value) in tests {
            let evaluated = evaluate_input(input);
            test_boolean_object(evaluated, expected_value);
        }
    }

    #[test]
    fn eval_if_else_expression() {
        let tests = vec![
            ("if (true) { 10 }", Some(10)),
            ("if (false) { 10 }", None),
            ("if (1) { 10 }", Some(10)),
            ("if (0) { 10 }", Some(10)),
            ("if (1 < 2) { 10 }", Some(10)),
            ("if (1 > 2) { 10 }", None),
            ("if (1 > 2) { 10 } else { 20 }", Some(20)),
            ("if (1 < 2) { 10 } else { 20 }", Some(10)),
            ("if (if (false) { 1 }) { 10 } else { 20 }", Some(20)),
            ("if (true) { }", None),
        ];

        for (input, expected) in tests {
            let evaluated = evaluate_input(input);

            match expected {
                Some(expected_value) => test_integer_object(evaluated, expected_value),
                None => test_null_object(evaluated),
            }
        }
    }

    #[test]
    fn eval_return_statements() {
        let tests = vec![
            ("return 10;", 10),
            ("return 10; 9;", 10),
            ("return 2 * 5; 9;", 10),
            ("9; return 2 * 5; 9;", 10),
            (
                "
                if (10 > 1) {
                  if (10 > 1) {
                    return 10;
                  }

                  return 1;
                }
                ",
                10,
            ),
            ("{ { return 3; } 4 }", 3),
            (
                "
                let f = fn(x) {
                  if (x > 1) {
                    return x;
                  }
                  return 0;
                };
                f(5) + f(1);
                ",
                5,
            ),
            ("let f = fn() { return 1; 2 }; f(); 3", 3),
        ];

        for (input, expected_value) in tests {
            let evaluated = evaluate_input(input);
            test_integer_object(evaluated, expected_value)
        }
    }

    #[test]
    fn return_inside_value_position_leaves_function() {
        let tests = vec![
            ("let f = fn() { let x = if (true) { return 5 }; 10 }; f()", 5),
            ("let f = fn() { 1 + if (true) { return 2 } }; f()", 2),
            ("let f = fn() { -if (true) { return 3 } }; f()", 3),
            ("let f = fn() { len(if (true) { return 4 }) }; f()", 4),
            ("let f = fn() { (if (true) { return 6 })() }; f()", 6),
            ("let f = fn() { if (if (true) { return 7 }) { 0 } }; f()", 7),
            ("let f = fn() { return if (true) { return 8 }; }; f()", 8),
            ("1 + if (true) { return 2 }", 2),
        ];

        for (input, expected_value) in tests {
            let evaluated = evaluate_input(input);
            test_integer_object(evaluated, expected_value)
        }

        // The program level unwraps it too, so nothing observes a RETURN_VALUE
        test_integer_object(evaluate_input("type(if (true) { return 1 })"), 1);
    }

    #[test]
    fn eval_let_statements() {
        let tests = vec![
            ("let a = 5; a;", 5),
            ("let a = 5 * 5; a;", 25),
            ("let a = 5; let b = a; b;", 5),
            ("let a = 5; let b = a; let c = a + b + 5; c;", 15),
            ("let a = 1; let a = a + 1; a", 2),
            ("let a = 1; { let a = 2; } a", 2),
        ];

        for (input, expected_value) in tests {
            let evaluated = evaluate_input(input);
            test_integer_object(evaluated, expected_value)
        }
    }

    #[test]
    fn eval_statements_without_value() {
        test_null_object(evaluate_input(""));
        test_null_object(evaluate_input("let a = 5;"));
        test_null_object(evaluate_input("{ }"));
    }

    #[test]
    fn eval_function_expression() {
        let input = "fn (x) { x + 2; }";
        let evaluated = evaluate_input(input);

        match evaluated.as_ref() {
            Object::Function(func) => {
                let names: Vec<&str> = func.parameters.iter().map(|p| p.name.as_str()).collect();
                assert_eq!(names, vec!["x"]);
                assert_eq!(func.body.to_string(), "(x + 2)");
            }
            obj => panic!("expected function object but got {}", obj),
        }

        assert_eq!(evaluated.to_string(), "fn(x) {\n(x + 2)\n}");
    }

    #[test]
    fn eval_call_expression() {
        let tests = vec![
            ("let identity = fn(x) { x; }; identity(5);", 5),
            ("let identity = fn(x) { return x; }; identity(5);", 5),
            ("let double = fn(x) { x * 2; }; double(5);", 10),
            ("let add = fn(x, y) { x + y; }; add(5, 5);", 10),
            ("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20),
            ("fn(x) { x; }(5)", 5),
            ("let seven = fn() { 7 }; seven()", 7),
            (
                "
                let fib = fn(n) {
                  if (n < 2) { return n; }
                  fib(n - 1) + fib(n - 2)
                };
                fib(15);
                ",
                610,
            ),
            (
                "
                let apply = fn(f, x) { f(x) };
                apply(fn(n) { n * n }, 9);
                ",
                81,
            ),
        ];

        for (input, expected_value) in tests {
            let evaluated = evaluate_input(input);
            test_integer_object(evaluated, expected_value);
        }
    }

    #[test]
    fn eval_closures() {
        let tests = vec![
            (
                "let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); addTwo(2);",
                4,
            ),
            (
                "
                let adder = fn(x) { fn(y) { x + y } };
                let addOne = adder(1);
                let addTen = adder(10);
                addOne(1) + addTen(1);
                ",
                13,
            ),
            // The callee sees its defining scope, not the caller's
            (
                "
                let x = 1;
                let getX = fn() { x };
                let shadow = fn(x) { getX() };
                shadow(100);
                ",
                1,
            ),
            // Parameters don't leak into the caller
            ("let x = 5; let f = fn(x) { x }; f(10); x", 5),
            // Lookups see later rebindings in the captured scope
            ("let a = 1; let f = fn() { a }; let a = 2; f()", 2),
        ];

        for (input, expected_value) in tests {
            let evaluated = evaluate_input(input);
            test_integer_object(evaluated, expected_value);
        }
    }

    #[test]
    fn eval_builtin_functions() {
        let tests = vec![
            ("len(\"\")", Ok(Object::Integer(0))),
            ("len(\"four\")", Ok(Object::Integer(4))),
            ("len(\"hello world\")", Ok(Object::Integer(11))),
            ("len(\"a\" + \"bc\")", Ok(Object::Integer(3))),
            ("len(1)", Err("argument to 'len' not supported, got INTEGER")),
            ("len(true)", Err("argument to 'len' not supported, got BOOLEAN")),
            (
                "len(\"one\", \"two\")",
                Err("wrong number of arguments. got=2, want=1"),
            ),
            ("len()", Err("wrong number of arguments. got=0, want=1")),
            ("type(1)", Ok(Object::String("INTEGER".to_owned()))),
            ("type(\"s\")", Ok(Object::String("STRING".to_owned()))),
            ("type(type)", Ok(Object::String("BUILTIN".to_owned()))),
            ("type(fn() {})", Ok(Object::String("FUNCTION".to_owned()))),
            // User bindings take precedence over builtins
            ("let len = fn(x) { 42 }; len(\"abc\")", Ok(Object::Integer(42))),
        ];

        for (input, expected) in tests {
            let evaluated = evaluate_input(input);

            match expected {
                Ok(Object::Integer(expected_value)) => {
                    test_integer_object(evaluated, expected_value)
                }
                Ok(Object::String(expected_value)) => {
                    test_string_object(evaluated, &expected_value)
                }
                Ok(other) => panic!("unexpected expectation {:?}", other),
                Err(expected_message) => test_error_object(evaluated, expected_message),
            }
        }
    }

    #[test]
    fn error_handling() {
        let tests = vec![
            ("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
            ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
            ("-true", "unknown operator: -BOOLEAN"),
            ("-\"a\"", "unknown operator: -STRING"),
            ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
            ("\"hello\" - \"world\";", "unknown operator: STRING - STRING"),
            ("\"a\" < \"b\"", "unknown operator: STRING < STRING"),
            ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
            ("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN"),
            (
                "
                if (10 > 1) {
                  if (10 > 1) {
                    return true + false;
                  }
                  return 1;
                }
                ",
                "unknown operator: BOOLEAN + BOOLEAN",
            ),
            ("foobar", "identifier not found: foobar"),
            ("let a = 5 + true; a", "type mismatch: INTEGER + BOOLEAN"),
            ("5(1)", "not a function: INTEGER"),
            ("\"f\"()", "not a function: STRING"),
            ("len(foobar, 1)", "identifier not found: foobar"),
            ("missing(1)", "identifier not found: missing"),
            ("fn(x) { x }(1 + true)", "type mismatch: INTEGER + BOOLEAN"),
            ("fn(x, y) { x }(1)", "wrong number of arguments. got=1, want=2"),
            ("fn() { 1 }(1, 2)", "wrong number of arguments. got=2, want=0"),
            ("let f = fn() { -true; 5 }; f(); 10", "unknown operator: -BOOLEAN"),
            ("if (-true) { 1 } else { 2 }", "unknown operator: -BOOLEAN"),
            ("1 / 0", "division by zero"),
            ("let x = 0; 10 / x", "division by zero"),
            (
                "9223372036854775807 + 1",
                "integer overflow: 9223372036854775807 + 1",
            ),
            (
                "-9223372036854775807 - 2",
                "integer overflow: -9223372036854775807 - 2",
            ),
        ];

        for (input, expected_message) in tests {
            let evaluated = evaluate_input(input);
            test_error_object(evaluated, expected_message)
        }
    }

    #[test]
    fn environment_persists_between_programs() {
        let env: Env = Environment::new().into_shared();

        let first = evaluate(&parse("let counter = fn(x) { x + 1 }; let n = 1;"), &env);
        test_null_object(first);

        let second = evaluate(&parse("counter(n)"), &env);
        test_integer_object(second, 2);

        let n = env.borrow().get("n");
        match n.as_deref() {
            Some(Object::Integer(1)) => {}
            other => panic!("expected n to be bound to 1 but got {:?}", other),
        }
    }

    #[test]
    fn closures_outlive_their_program() {
        let env = Environment::new().into_shared();

        {
            let program = parse("let make = fn(x) { fn() { x } }; let get = make(99);");
            evaluate(&program, &env);
        }

        test_integer_object(evaluate(&parse("get()"), &env), 99);
    }

    fn parse(input: &str) -> monkey_parser::ast::Program {
        let l = Lexer::new(input);
        let mut p = Parser::new(l);
        let prog = p.parse_program();

        if !p.errors().is_empty() {
            println!("parser had {} errors", p.errors().len());
            for error in p.errors() {
                println!("parser error: {}", error);
            }
            panic!("parser errors")
        }

        prog
    }

    fn evaluate_input(input: &str) -> Rc<Object> {
        Evaluator::new().eval(&parse(input))
    }

    fn test_integer_object(obj: Rc<Object>, expected_value: i64) {
        match *obj {
            Object::Integer(value) => {
                if value != expected_value {
                    panic!(
                        "expected integer object with value {} but got {:?}",
                        expected_value, obj
                    )
                }
            }
            _ => panic!("expected integer object but got {:?}", obj),
        }
    }

    fn test_boolean_object(obj: Rc<Object>, expected_value: bool) {
        match *obj {
            Object::Boolean(value) => {
                if value != expected_value {
                    panic!(
                        "expected boolean object with value {} but got {:?}",
                        expected_value, obj
                    )
                }
            }
            _ => panic!("expected boolean object but got {:?}", obj),
        }
    }

    fn test_string_object(obj: Rc<Object>, expected_value: &str) {
        match obj.as_ref() {
            Object::String(value) => assert_eq!(value, expected_value),
            _ => panic!("expected string object but got {:?}", obj),
        }
    }

    fn test_null_object(obj: Rc<Object>) {
        match *obj {
            Object::Null => {}
            _ => panic!("expected null object but got {:?}", obj),
        }
    }

    fn test_error_object(obj: Rc<Object>, expected_message: &str) {
        match obj.as_ref() {
            Object::Error(err) => assert_eq!(err.to_string(), expected_message),
            _ => panic!("expected error object but got {:?}", obj),
        }
    }
}
