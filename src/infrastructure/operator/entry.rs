//! The operator installed by the binary.

/// Implements every operator port by wiring components from configuration.
///
/// Stateless: each call parses the configuration it is given, so one value
/// serves every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct Operator;

impl Operator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}
