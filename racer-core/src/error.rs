/// Raised by `MotionIntegrator::step` when the vehicle state holds a NaN or
/// infinite component; the integrator refuses to advance from such a state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MotionError {
    #[error("vehicle state field `{field}` is not finite ({value})")]
    NonFiniteState { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("color `{0}` is not a #rrggbb hex string")]
    InvalidHex(String),
}
