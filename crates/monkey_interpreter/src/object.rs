use std::{fmt::Display, rc::Rc};

use crate::{builtin::Builtin, environment::Env, error::RuntimeError};

use monkey_parser::ast::{BlockStatement, Identifier};

thread_local! {
    static TRUE: Rc<Object> = Rc::new(Object::Boolean(true));
    static FALSE: Rc<Object> = Rc::new(Object::Boolean(false));
    static NULL: Rc<Object> = Rc::new(Object::Null);
}

#[derive(Debug)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    String(String),
    Null,
    Function(Function),
    Builtin(Builtin),
    /// Special object to encapsulate a return-ed value while it goes up scopes.
    /// This is never seen by the user.
    ReturnValue(Rc<Object>),
    Error(RuntimeError),
}

impl Object {
    /// The interned `true`/`false` object.
    ///
    /// Booleans are always handed out through here, so `Rc::ptr_eq` on two
    /// booleans is the same as comparing their values.
    pub fn boolean(value: bool) -> Rc<Object> {
        if value {
            TRUE.with(Rc::clone)
        } else {
            FALSE.with(Rc::clone)
        }
    }

    /// The interned `null` object.
    pub fn null() -> Rc<Object> {
        NULL.with(Rc::clone)
    }

    pub fn type_name(&self) -> &'static str {
        use Object::*;

        match self {
            Integer(_) => "INTEGER",
            Boolean(_) => "BOOLEAN",
            String(_) => "STRING",
            Null => "NULL",
            Function(_) => "FUNCTION",
            Builtin(_) => "BUILTIN",
            ReturnValue(_) => "RETURN_VALUE",
            Error(_) => "ERROR",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Whether this value must stop evaluation and travel up unchanged
    /// (a `return`-ed value on its way to the call boundary, or an error).
    pub fn is_carrier(&self) -> bool {
        matches!(self, Self::ReturnValue(_) | Self::Error(_))
    }

    /// Converts the given value to a string (in the format of a code object).
    ///
    /// Use this anywhere a programmer expects to see the code-version of an object (e.g. in the REPL).
    /// # Examples
    /// ```rust
    /// use monkey_interpreter::object::Object;
    ///
    /// let obj = Object::String("hello world".to_string());
    ///
    /// assert_eq!(obj.to_code_string(), "\"hello world\"");
    /// ```
    pub fn to_code_string(&self) -> String {
        use Object::*;

        match self {
            String(value) => format!("\"{}\"", value),
            value => value.to_string(),
        }
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Object::*;

        match self {
            Integer(value) => write!(f, "{}", value),
            Boolean(value) => write!(f, "{}", value),
            String(value) => write!(f, "{}", value),
            Null => write!(f, "null"),
            Function(func) => write!(f, "{}", func),
            Builtin(builtin) => write!(f, "{}", builtin),
            ReturnValue(obj) => write!(f, "{}", obj),
            Error(message) => write!(f, "ERROR: {}", message),
        }
    }
}

/// A function literal paired with the environment it was defined in.
pub struct Function {
    pub parameters: Vec<Identifier>,
    pub body: Rc<BlockStatement>,
    pub env: Env,
}

// The captured environment usually holds this very function, so it stays out of Debug output
impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function")
            .field("parameters", &self.parameters)
            .field("body", &self.body)
            .finish()
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let params: Vec<String> = self.parameters.iter().map(|p| p.to_string()).collect();

        write!(f, "fn({}) {{\n{}\n}}", params.join(", "), self.body)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use crate::{builtin::Builtin, error::RuntimeError, object::Object};

    #[test]
    fn singletons_are_interned() {
        assert!(Rc::ptr_eq(&Object::boolean(true), &Object::boolean(true)));
        assert!(Rc::ptr_eq(&Object::boolean(false), &Object::boolean(false)));
        assert!(Rc::ptr_eq(&Object::null(), &Object::null()));
        assert!(!Rc::ptr_eq(&Object::boolean(true), &Object::boolean(false)));
    }

    #[test]
    fn inspect_format() {
        let tests = vec![
            (Object::Integer(-5), "-5", "INTEGER"),
            (Object::Boolean(true), "true", "BOOLEAN"),
            (Object::String("hi".into()), "hi", "STRING"),
            (Object::Null, "null", "NULL"),
            (Object::Builtin(Builtin::Len), "builtin function len", "BUILTIN"),
            (
                Object::ReturnValue(Rc::new(Object::Integer(1))),
                "1",
                "RETURN_VALUE",
            ),
            (
                Object::Error(RuntimeError::IdentifierNotFound("x".into())),
                "ERROR: identifier not found: x",
                "ERROR",
            ),
        ];

        for (obj, inspected, type_name) in tests {
            assert_eq!(obj.to_string(), inspected);
            assert_eq!(obj.type_name(), type_name);
        }
    }

    #[test]
    fn carriers() {
        assert!(Object::ReturnValue(Rc::new(Object::Integer(1))).is_carrier());
        assert!(Object::Error(RuntimeError::DivisionByZero).is_carrier());
        assert!(!Object::Integer(1).is_carrier());
        assert!(!Object::Null.is_carrier());
    }

    #[test]
    fn code_string_quotes_strings_only() {
        assert_eq!(Object::String("hi".into()).to_code_string(), "\"hi\"");
        assert_eq!(Object::Integer(3).to_code_string(), "3");
    }
}
