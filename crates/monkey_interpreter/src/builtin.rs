use std::{fmt::Display, rc::Rc};

use crate::{error::RuntimeError, object::Object};

/// Native functions, resolved only after an identifier misses every environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Len,
    Type,
}

impl Builtin {
    pub fn lookup(name: &str) -> Option<Builtin> {
        match name {
            "len" => Some(Builtin::Len),
            "type" => Some(Builtin::Type),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Builtin::Len => "len",
            Builtin::Type => "type",
        }
    }

    pub fn apply(&self, args: &[Rc<Object>]) -> Result<Rc<Object>, RuntimeError> {
        match self {
            Builtin::Len => {
                let arg = single_argument(args)?;
                match arg.as_ref() {
                    Object::String(s) => Ok(Rc::new(Object::Integer(s.chars().count() as i64))),
                    other => Err(RuntimeError::UnsupportedArgument {
                        builtin: self.name(),
                        got: other.type_name(),
                    }),
                }
            }
            Builtin::Type => {
                let arg = single_argument(args)?;
                Ok(Rc::new(Object::String(arg.type_name().to_owned())))
            }
        }
    }
}

fn single_argument(args: &[Rc<Object>]) -> Result<&Rc<Object>, RuntimeError> {
    match args {
        [arg] => Ok(arg),
        _ => Err(RuntimeError::WrongArgumentCount {
            got: args.len(),
            want: 1,
        }),
    }
}

impl Display for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "builtin function {}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{builtin::Builtin, error::RuntimeError, object::Object};

    #[test]
    fn lookup() {
        assert_eq!(Builtin::lookup("len"), Some(Builtin::Len));
        assert_eq!(Builtin::lookup("type"), Some(Builtin::Type));
        assert_eq!(Builtin::lookup("puts"), None);
    }

    #[test]
    fn len_counts_characters() {
        let args = vec![Rc::new(Object::String("héllo".into()))];

        match Builtin::Len.apply(&args).as_deref() {
            Ok(Object::Integer(5)) => {}
            result => panic!("expected integer 5 but got {:?}", result),
        }
    }

    #[test]
    fn arity_is_checked() {
        let result = Builtin::Type.apply(&[]);
        assert_eq!(
            result.err(),
            Some(RuntimeError::WrongArgumentCount { got: 0, want: 1 })
        );
    }
}
