use std::collections::HashMap;

use serde_json::Value;
use sui_sdk_types::ObjectId;

use crate::{ChainClient, ChainError, PlannedArgument, PlannedCommand, TransactionPlan};

/// How a Move function receives one of its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterAccess {
    Reference,
    MutableReference,
    ByValue,
}

impl ParameterAccess {
    /// Reads one entry of the `parameters` list of `sui_getNormalizedMoveFunction`.
    pub fn from_normalized(parameter: &Value) -> Self {
        if parameter.get("MutableReference").is_some() {
            Self::MutableReference
        } else if parameter.get("Reference").is_some() {
            Self::Reference
        } else {
            Self::ByValue
        }
    }

    /// Shared objects taken by `&mut` or by value must be locked for writing.
    pub fn is_mutable(self) -> bool {
        !matches!(self, Self::Reference)
    }
}

/// Decides, for every object input of `plan`, whether it is used mutably.
///
/// Each Move call with object arguments has its signature looked up once.
/// An object used by several calls is mutable if any of them needs it so.
pub async fn resolve_mutability<C>(
    client: &C,
    plan: &TransactionPlan,
) -> Result<HashMap<ObjectId, bool>, ChainError>
where
    C: ChainClient + ?Sized,
{
    let mut mutability: HashMap<ObjectId, bool> = HashMap::new();
    let mut signatures: HashMap<String, Vec<Value>> = HashMap::new();

    for command in plan.commands() {
        let PlannedCommand::MoveCall(call) = command else {
            continue;
        };
        if !call
            .arguments
            .iter()
            .any(|arg| matches!(arg, PlannedArgument::Object(_)))
        {
            continue;
        }

        let target = call.target();
        if !signatures.contains_key(&target) {
            let parameters = client
                .move_function_parameters(&call.package, &call.module, &call.function)
                .await?;
            signatures.insert(target.clone(), parameters);
        }
        let parameters = signatures.get(&target).map(Vec::as_slice).unwrap_or_default();

        for (position, argument) in call.arguments.iter().enumerate() {
            let PlannedArgument::Object(id) = argument else {
                continue;
            };
            let parameter = parameters.get(position).ok_or_else(|| {
                ChainError::InvalidResponse(format!(
                    "{target} takes {} parameters, argument {position} has none",
                    parameters.len()
                ))
            })?;
            let mutable = ParameterAccess::from_normalized(parameter).is_mutable();
            *mutability.entry(*id).or_insert(false) |= mutable;
        }
    }

    Ok(mutability)
}
