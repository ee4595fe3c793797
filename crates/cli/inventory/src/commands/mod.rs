mod inventory;

pub use inventory::InventoryCmd;
