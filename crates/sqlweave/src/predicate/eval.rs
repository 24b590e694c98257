use super::PredicateNode;
use crate::error::{WeaveError, WeaveResult};
use crate::value::Value;

/// Reduce a value operand to a concrete [`Value`].
///
/// Only literals, computed values and element access over them can be
/// reduced; anything that depends on the entity is an evaluation error.
pub fn evaluate(node: &PredicateNode) -> WeaveResult<Value> {
    match node {
        PredicateNode::Literal(value) => Ok(value.clone()),
        PredicateNode::Computed(computed) => computed.call(),
        PredicateNode::Element { source, index } => match evaluate(source)? {
            Value::List(mut items) => {
                if *index < items.len() {
                    Ok(items.swap_remove(*index))
                } else {
                    Err(WeaveError::evaluation(format!(
                        "index {index} out of range for list of {} values",
                        items.len()
                    )))
                }
            }
            other => Err(WeaveError::evaluation(format!(
                "cannot index into a {} value",
                other.kind()
            ))),
        },
        PredicateNode::ColumnRef(member) => Err(WeaveError::evaluation(format!(
            "member '{member}' cannot be used as a value"
        ))),
        other => Err(WeaveError::evaluation(format!(
            "{} cannot be used as a value",
            other.kind()
        ))),
    }
}
