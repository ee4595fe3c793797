use std::collections::HashMap;

use serde::Serialize;
use sui_sdk_types::{
    Address, Argument, Command, Identifier, Input, MoveCall, ObjectId, ProgrammableTransaction,
    Publish, TransferObjects, TypeTag,
};

use crate::{parse_object_id, ChainError, ObjectInfo};

/// Argument of a planned command, before objects are resolved on chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedArgument {
    /// BCS-encoded value.
    Pure(Vec<u8>),
    Object(ObjectId),
    /// Output of the command at this position in the plan.
    Result(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedMoveCall {
    pub package: ObjectId,
    pub module: String,
    pub function: String,
    pub type_arguments: Vec<TypeTag>,
    pub arguments: Vec<PlannedArgument>,
}

impl PlannedMoveCall {
    pub fn target(&self) -> String {
        format!("{}::{}::{}", self.package, self.module, self.function)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedCommand {
    MoveCall(PlannedMoveCall),
    /// Publishes the modules and hands the upgrade cap to the sender.
    Publish {
        modules: Vec<Vec<u8>>,
        dependencies: Vec<ObjectId>,
    },
}

/// Object state and access mode needed to turn a plan into a transaction.
#[derive(Debug, Clone, Default)]
pub struct ResolvedObjects {
    pub objects: HashMap<ObjectId, ObjectInfo>,
    pub mutability: HashMap<ObjectId, bool>,
}

/// Ordered commands of a programmable transaction, with object arguments
/// named by id only.
///
/// Ownership and versions come from the node, and whether a shared object is
/// taken mutably comes from the Move signature of the calls using it, see
/// [crate::resolve_mutability].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionPlan {
    commands: Vec<PlannedCommand>,
}

impl TransactionPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// BCS-encodes a pure value.
    pub fn pure<T: Serialize>(value: &T) -> Result<PlannedArgument, ChainError> {
        Ok(PlannedArgument::Pure(bcs::to_bytes(value)?))
    }

    /// A `vector<u8>` pure value.
    pub fn pure_bytes(bytes: &[u8]) -> Result<PlannedArgument, ChainError> {
        Self::pure(&bytes.to_vec())
    }

    pub fn object(raw: &str) -> Result<PlannedArgument, ChainError> {
        Ok(PlannedArgument::Object(parse_object_id(raw)?))
    }

    /// Adds a call to `package::module::function` and returns its result.
    pub fn move_call(
        &mut self,
        target: &str,
        type_arguments: Vec<TypeTag>,
        arguments: Vec<PlannedArgument>,
    ) -> Result<PlannedArgument, ChainError> {
        let invalid = || ChainError::InvalidMoveTarget(target.to_string());

        let parts: Vec<&str> = target.split("::").collect();
        let [package, module, function] = parts.as_slice() else {
            return Err(invalid());
        };
        Identifier::new(*module).map_err(|_| invalid())?;
        Identifier::new(*function).map_err(|_| invalid())?;
        let package = parse_object_id(package).map_err(|_| invalid())?;

        Ok(self.push(PlannedCommand::MoveCall(PlannedMoveCall {
            package,
            module: module.to_string(),
            function: function.to_string(),
            type_arguments,
            arguments,
        })))
    }

    pub fn publish(&mut self, modules: Vec<Vec<u8>>, dependencies: Vec<ObjectId>) {
        self.push(PlannedCommand::Publish {
            modules,
            dependencies,
        });
    }

    fn push(&mut self, command: PlannedCommand) -> PlannedArgument {
        self.commands.push(command);
        PlannedArgument::Result(self.commands.len() - 1)
    }

    pub fn commands(&self) -> &[PlannedCommand] {
        &self.commands
    }

    /// Distinct object arguments, in order of first use.
    pub fn object_ids(&self) -> Vec<ObjectId> {
        let mut ids = Vec::new();
        for command in &self.commands {
            let PlannedCommand::MoveCall(call) = command else {
                continue;
            };
            for argument in &call.arguments {
                if let PlannedArgument::Object(id) = argument {
                    if !ids.contains(id) {
                        ids.push(*id);
                    }
                }
            }
        }
        ids
    }

    /// Lowers the plan onto SDK inputs and commands.
    ///
    /// Each object becomes a single input however many calls use it.
    pub fn into_programmable(
        self,
        sender: Address,
        resolved: &ResolvedObjects,
    ) -> Result<ProgrammableTransaction, ChainError> {
        let mut lowering = Lowering::default();
        let mut results: Vec<Argument> = Vec::with_capacity(self.commands.len());

        for command in self.commands {
            let lowered = match command {
                PlannedCommand::MoveCall(call) => {
                    let target = call.target();
                    let arguments = call
                        .arguments
                        .into_iter()
                        .map(|argument| lowering.argument(argument, &results, resolved))
                        .collect::<Result<Vec<_>, _>>()?;
                    let module = Identifier::new(&call.module)
                        .map_err(|_| ChainError::InvalidMoveTarget(target.clone()))?;
                    let function = Identifier::new(&call.function)
                        .map_err(|_| ChainError::InvalidMoveTarget(target))?;

                    vec![Command::MoveCall(MoveCall {
                        package: call.package,
                        module,
                        function,
                        type_arguments: call.type_arguments,
                        arguments,
                    })]
                }
                PlannedCommand::Publish {
                    modules,
                    dependencies,
                } => {
                    let cap = lowering.next_result()?;
                    let recipient = lowering.pure(bcs::to_bytes(&sender)?)?;
                    vec![
                        Command::Publish(Publish {
                            modules,
                            dependencies,
                        }),
                        Command::TransferObjects(TransferObjects {
                            objects: vec![cap],
                            address: recipient,
                        }),
                    ]
                }
            };

            results.push(lowering.next_result()?);
            lowering.commands.extend(lowered);
        }

        Ok(ProgrammableTransaction {
            inputs: lowering.inputs,
            commands: lowering.commands,
        })
    }
}

#[derive(Default)]
struct Lowering {
    inputs: Vec<Input>,
    commands: Vec<Command>,
    object_inputs: HashMap<ObjectId, Argument>,
}

impl Lowering {
    fn index(len: usize) -> Result<u16, ChainError> {
        u16::try_from(len).map_err(|_| ChainError::TooManyArguments(len))
    }

    fn next_result(&self) -> Result<Argument, ChainError> {
        Ok(Argument::Result(Self::index(self.commands.len())?))
    }

    fn push_input(&mut self, input: Input) -> Result<Argument, ChainError> {
        let argument = Argument::Input(Self::index(self.inputs.len())?);
        self.inputs.push(input);
        Ok(argument)
    }

    fn pure(&mut self, value: Vec<u8>) -> Result<Argument, ChainError> {
        self.push_input(Input::Pure { value })
    }

    fn argument(
        &mut self,
        argument: PlannedArgument,
        results: &[Argument],
        resolved: &ResolvedObjects,
    ) -> Result<Argument, ChainError> {
        match argument {
            PlannedArgument::Pure(value) => self.pure(value),
            PlannedArgument::Result(position) => results
                .get(position)
                .cloned()
                .ok_or(ChainError::UnknownResult(position)),
            PlannedArgument::Object(id) => {
                if let Some(existing) = self.object_inputs.get(&id) {
                    return Ok(existing.clone());
                }
                let info = resolved
                    .objects
                    .get(&id)
                    .ok_or_else(|| ChainError::ObjectNotFound(id.to_string()))?;
                let mutable = resolved.mutability.get(&id).copied().unwrap_or(false);
                let argument = self.push_input(info.input(mutable))?;
                self.object_inputs.insert(id, argument.clone());
                Ok(argument)
            }
        }
    }
}
