mod classification;
mod parameter;
mod range;
mod severity;
mod value;

pub use classification::Classification;
pub use parameter::{MasterData, Parameter, ParameterKind};
pub use range::{CategoricalOption, NumericRange, RangeSpec};
pub use severity::{InvalidSeverity, Severity};
pub use value::{ComputedValues, InputValues, TestValue, parse_input};
