use crate::functions::errors::FunctionError;
use crate::functions::EdgeFunction;

pub async fn not_implemented(function: &'static EdgeFunction) -> FunctionError {
    FunctionError::NotImplemented {
        function: function.name,
    }
}
