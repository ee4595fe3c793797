use serde_json::Value;
use sui_sdk_types::{Address, GasPayment, ObjectId, Transaction, TransactionExpiration, TransactionKind};

use crate::{
    resolve_mutability, AdminKeypair, ChainClient, ChainError, ObjectInfo, ResolvedObjects,
    TransactionPlan,
};

/// Upper bound on gas coins attached to a single transaction.
pub const MAX_GAS_PAYMENT_OBJECTS: usize = 256;

/// Picks SUI coins owned by `owner`, in the order the node lists them, until
/// their balance covers `budget`. Coins also used as inputs are skipped.
pub async fn select_gas_coins<C>(
    client: &C,
    owner: &Address,
    budget: u64,
    exclude: &[ObjectId],
) -> Result<Vec<ObjectInfo>, ChainError>
where
    C: ChainClient + ?Sized,
{
    let mut selected = Vec::new();
    let mut total: u64 = 0;
    let mut cursor = None;

    loop {
        let page = client.coins_page(owner, cursor.take()).await?;

        for coin in &page.data {
            let info = coin.object_info()?;
            if exclude.contains(&info.object_id) {
                continue;
            }
            total = total.saturating_add(coin.balance()?);
            selected.push(info);

            if total >= budget {
                return Ok(selected);
            }
            if selected.len() == MAX_GAS_PAYMENT_OBJECTS {
                return Err(ChainError::InsufficientGas {
                    required: budget,
                    available: total,
                });
            }
        }

        match (page.has_next_page, page.next_cursor) {
            (true, Some(next)) => cursor = Some(next),
            _ => break,
        }
    }

    Err(ChainError::InsufficientGas {
        required: budget,
        available: total,
    })
}

/// Resolves objects and their access mode, attaches gas, signs with the admin
/// key and submits.
///
/// Returns the raw node response with effects and object changes.
pub async fn sign_and_execute<C>(
    client: &C,
    signer: &AdminKeypair,
    plan: TransactionPlan,
    gas_budget: u64,
) -> Result<Value, ChainError>
where
    C: ChainClient + ?Sized,
{
    let sender = signer.address();
    let object_ids = plan.object_ids();

    let mut resolved = ResolvedObjects::default();
    if !object_ids.is_empty() {
        resolved.objects = client
            .multi_get_objects(&object_ids)
            .await?
            .into_iter()
            .map(|info| (info.object_id, info))
            .collect();
        resolved.mutability = resolve_mutability(client, &plan).await?;
    }

    let programmable = plan.into_programmable(sender, &resolved)?;
    let gas_price = client.reference_gas_price().await?;
    let payment = select_gas_coins(client, &sender, gas_budget, &object_ids).await?;
    log::info!(
        "submitting {} command(s) from {sender} with budget {gas_budget} at price {gas_price}",
        programmable.commands.len()
    );

    let transaction = Transaction {
        kind: TransactionKind::ProgrammableTransaction(programmable),
        sender,
        gas_payment: GasPayment {
            objects: payment.iter().map(ObjectInfo::object_reference).collect(),
            owner: sender,
            price: gas_price,
            budget: gas_budget,
        },
        expiration: TransactionExpiration::None,
    };
    let signed = signer.sign_transaction(&transaction)?;

    client.execute_transaction(&signed).await
}
