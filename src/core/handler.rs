use crate::utils::error::Fault;

/// Handler kinds in the order they are tried. `CatchAll` must stay last.
pub const HANDLER_CHAIN: [Handler; 3] = [
    Handler::Arithmetic,
    Handler::IndexOutOfBounds,
    Handler::CatchAll,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    Arithmetic,
    IndexOutOfBounds,
    CatchAll,
}

impl Handler {
    pub fn matches(&self, fault: &Fault) -> bool {
        match self {
            Handler::Arithmetic => matches!(fault, Fault::DivisionByZero),
            Handler::IndexOutOfBounds => matches!(fault, Fault::IndexOutOfRange { .. }),
            Handler::CatchAll => true,
        }
    }

    pub fn message(&self, fault: &Fault) -> String {
        match self {
            Handler::Arithmetic => "Arithmetic Exception :: Divide by zero!!".to_string(),
            Handler::IndexOutOfBounds => {
                "ArrayIndexOutOfBounds :: Accessed index out of bounds".to_string()
            }
            Handler::CatchAll => format!("Exception :: {}", fault),
        }
    }
}

/// First handler in `HANDLER_CHAIN` whose kind matches the fault.
pub fn dispatch(fault: &Fault) -> Handler {
    HANDLER_CHAIN
        .iter()
        .copied()
        .find(|handler| handler.matches(fault))
        .unwrap_or(Handler::CatchAll)
}
