use serde::Serialize;

/// One (age, net worth) sample of the forward compounding simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionPoint {
    pub age: u32,
    pub net_worth: f64,
}
